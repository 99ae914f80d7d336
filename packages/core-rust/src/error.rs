//! The malformed-argument error kind.
//!
//! [`ArgumentError`] is tagged with an [`ArgumentKind`]. The `Generic` tag is
//! the plain "this call was malformed" failure that signature binding raises;
//! `Domain` tags mark argument failures a service raises on purpose and
//! expects its callers to recognise by name. Invocation layers check the tag
//! exactly, so a domain tag is never mistaken for the generic kind.

use std::backtrace::Backtrace;
use std::fmt;
use std::sync::Arc;

/// Tag distinguishing the generic malformed-argument kind from domain subtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgumentKind {
    /// Plain malformed argument: wrong arity, missing or unknown keyword.
    Generic,
    /// Domain-specific argument failure, identified by its name.
    Domain(&'static str),
}

impl fmt::Display for ArgumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentKind::Generic => f.write_str("ArgumentError"),
            ArgumentKind::Domain(name) => f.write_str(name),
        }
    }
}

/// Where an error was first raised. Shared so that wrapping errors can carry
/// the same trace without recapturing it.
#[derive(Clone)]
pub struct Origin(Arc<Backtrace>);

impl Origin {
    /// Captures the current stack, honouring `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE`.
    #[must_use]
    pub fn capture() -> Self {
        Self(Arc::new(Backtrace::capture()))
    }

    #[must_use]
    pub fn backtrace(&self) -> &Backtrace {
        &self.0
    }

    /// True when both handles point at the same captured trace.
    #[must_use]
    pub fn same_as(&self, other: &Origin) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Origin({:?})", self.0.status())
    }
}

/// A malformed-argument failure.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ArgumentError {
    kind: ArgumentKind,
    message: String,
    origin: Origin,
}

impl ArgumentError {
    /// Creates an error of the generic kind.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::with_kind(ArgumentKind::Generic, message)
    }

    /// Creates an error tagged with a domain-specific kind.
    #[must_use]
    pub fn domain(name: &'static str, message: impl Into<String>) -> Self {
        Self::with_kind(ArgumentKind::Domain(name), message)
    }

    fn with_kind(kind: ArgumentKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            origin: Origin::capture(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ArgumentKind {
        self.kind
    }

    /// True only for the untagged generic kind.
    #[must_use]
    pub fn is_generic(&self) -> bool {
        self.kind == ArgumentKind::Generic
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn origin(&self) -> &Origin {
        &self.origin
    }
}
