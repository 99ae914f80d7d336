//! Error taxonomy for service invocation.

use callable_core::{ArgumentError, Origin};

/// Errors surfaced by [`Invoker::call`](crate::Invoker::call) and by services.
///
/// Only two variants are produced by the invoker itself: `Construction`
/// (a generic argument failure while building the instance) and
/// `NotImplemented`. Everything else is raised by services and passes through
/// the invoker untouched.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Argument(#[from] ArgumentError),
    #[error(transparent)]
    Construction(#[from] ConstructionError),
    #[error("{service} must implement execute")]
    NotImplemented { service: &'static str },
    #[error("{0}")]
    Type(String),
    #[error("{0}")]
    Runtime(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    #[must_use]
    pub fn runtime(message: impl Into<String>) -> Self {
        Error::Runtime(message.into())
    }

    #[must_use]
    pub fn type_error(message: impl Into<String>) -> Self {
        Error::Type(message.into())
    }

    /// True for every malformed-argument failure, including
    /// `ConstructionError` and domain-tagged argument errors.
    #[must_use]
    pub fn is_argument_error(&self) -> bool {
        matches!(self, Error::Argument(_) | Error::Construction(_))
    }
}

// ---------------------------------------------------------------------------
// ConstructionError
// ---------------------------------------------------------------------------

/// A service could not be built from the arguments it was called with.
///
/// Wraps the generic [`ArgumentError`] raised by the constructor. The wrapped
/// error stays reachable through `source()` and keeps its original origin.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Cannot instantiate {service}: {source}")]
pub struct ConstructionError {
    service: &'static str,
    source: ArgumentError,
}

impl ConstructionError {
    pub(crate) fn new(service: &'static str, source: ArgumentError) -> Self {
        Self { service, source }
    }

    /// Name of the service that failed to construct.
    #[must_use]
    pub fn service(&self) -> &'static str {
        self.service
    }

    #[must_use]
    pub fn argument_error(&self) -> &ArgumentError {
        &self.source
    }

    /// Origin of the underlying constructor failure.
    #[must_use]
    pub fn origin(&self) -> &Origin {
        self.source.origin()
    }
}
