//! Construct-then-execute invocation and its error classification.

use std::fmt;
use std::marker::PhantomData;

use callable_core::{Arguments, IntoArguments, Value};
use tracing::{debug, debug_span, trace, warn};

use crate::callback::Callback;
use crate::error::{ConstructionError, Error};
use crate::service::Service;

/// Builds one `S` from `args` and executes it with `callback`.
///
/// Only a constructor failure of the generic argument kind is translated, into
/// [`Error::Construction`]. Domain-tagged argument errors, nested construction
/// errors and every other constructor error are returned as raised. Errors
/// from `execute` are never touched.
///
/// # Errors
///
/// - [`Error::Construction`] when `S::construct` fails with a generic
///   [`ArgumentError`](callable_core::ArgumentError)
/// - [`Error::NotImplemented`] when `S` does not provide `execute`
/// - any other error raised by `S::construct` or `S::execute`, unchanged
pub fn invoke<S: Service>(args: Arguments, callback: Callback<'_>) -> Result<S::Output, Error> {
    let service = S::name();
    let span = debug_span!("callable", service, callback = callback.is_given());
    let _enter = span.enter();

    let instance = match S::construct(args) {
        Ok(instance) => instance,
        Err(Error::Argument(err)) if err.is_generic() => {
            debug!(error = %err, "construction failed");
            return Err(ConstructionError::new(service, err).into());
        }
        Err(err) => {
            trace!(error = %err, "construction error passed through");
            return Err(err);
        }
    };

    let result = instance.execute(callback);
    if let Err(Error::NotImplemented { .. }) = &result {
        warn!(service, "service does not implement execute");
    }
    let outcome = if result.is_ok() { "ok" } else { "error" };
    trace!(outcome, "execute returned");
    result
}

// ---------------------------------------------------------------------------
// Invoker
// ---------------------------------------------------------------------------

/// Entry point bound to one service type.
///
/// Zero-sized and `Copy`, whatever `S` is. Every call constructs a fresh
/// instance; nothing is cached between calls.
pub struct Invoker<S> {
    _service: PhantomData<fn() -> S>,
}

impl<S: Service> Invoker<S> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _service: PhantomData,
        }
    }

    /// Constructs and executes `S` without a callback.
    ///
    /// # Errors
    ///
    /// See [`invoke`].
    pub fn call(self, args: impl IntoArguments) -> Result<S::Output, Error> {
        invoke::<S>(args.into_arguments(), Callback::none())
    }

    /// Constructs `S` from `args` and executes it, handing `callback` to
    /// `execute` only.
    ///
    /// # Errors
    ///
    /// See [`invoke`].
    pub fn call_with<F>(self, args: impl IntoArguments, mut callback: F) -> Result<S::Output, Error>
    where
        F: FnMut(Value),
    {
        invoke::<S>(args.into_arguments(), Callback::new(&mut callback))
    }

    /// Returns a function value that forwards to [`Invoker::call`], for use
    /// wherever a closure is expected:
    ///
    /// ```
    /// use callable::{Arguments, Callback, Error, Service, Signature};
    ///
    /// struct Doubler(i64);
    ///
    /// impl Service for Doubler {
    ///     type Output = i64;
    ///
    ///     fn construct(args: Arguments) -> Result<Self, Error> {
    ///         let mut bound = Signature::new().required("n").bind(args)?;
    ///         let n = bound.take("n").as_i64().ok_or_else(|| Error::type_error("n must be an int"))?;
    ///         Ok(Doubler(n))
    ///     }
    ///
    ///     fn execute(self, _: Callback<'_>) -> Result<i64, Error> {
    ///         Ok(self.0 * 2)
    ///     }
    /// }
    ///
    /// let doubled: Result<Vec<i64>, Error> = [1, 2, 3]
    ///     .into_iter()
    ///     .map(callable::Invoker::<Doubler>::new().to_proc())
    ///     .collect();
    /// assert_eq!(doubled.unwrap(), vec![2, 4, 6]);
    /// ```
    #[must_use]
    pub fn to_proc<A: IntoArguments>(self) -> impl Fn(A) -> Result<S::Output, Error> + Copy {
        move |args: A| self.call(args)
    }
}

// Derives would require `S: Clone`.
#[allow(clippy::expl_impl_clone_on_copy)]
impl<S> Clone for Invoker<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for Invoker<S> {}

impl<S: Service> Default for Invoker<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Service> fmt::Debug for Invoker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Invoker").field(&S::name()).finish()
    }
}

// ---------------------------------------------------------------------------
// Callable
// ---------------------------------------------------------------------------

/// Type-level call syntax for every [`Service`]: `SendEmail::call(user)`.
pub trait Callable: Service {
    /// # Errors
    ///
    /// See [`invoke`].
    fn call(args: impl IntoArguments) -> Result<Self::Output, Error> {
        Invoker::<Self>::new().call(args)
    }

    /// # Errors
    ///
    /// See [`invoke`].
    fn call_with<F: FnMut(Value)>(
        args: impl IntoArguments,
        callback: F,
    ) -> Result<Self::Output, Error> {
        Invoker::<Self>::new().call_with(args, callback)
    }

    #[must_use]
    fn to_proc<A: IntoArguments>() -> impl Fn(A) -> Result<Self::Output, Error> + Copy {
        Invoker::<Self>::new().to_proc()
    }
}

impl<S: Service> Callable for S {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
