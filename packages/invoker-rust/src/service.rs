use callable_core::Arguments;

use crate::callback::Callback;
use crate::error::Error;

/// A unit of work that is built from arguments and then executed once.
///
/// `construct` is the only way the invoker builds an instance, so a type may
/// keep its inherent constructor private and still be callable. Argument
/// shapes are usually declared with a [`Signature`](callable_core::Signature)
/// and bound inside `construct`; binding failures surface as the generic
/// argument kind, which the invoker reports as a
/// [`ConstructionError`](crate::ConstructionError).
///
/// The instance is moved into `execute`, so it cannot be reused by a later
/// call.
pub trait Service: Sized {
    /// Whatever `execute` produces. Returned to the caller untouched.
    type Output;

    /// Name used in error messages. Defaults to the unqualified type name.
    fn name() -> &'static str {
        short_type_name::<Self>()
    }

    /// Builds an instance from the call's arguments.
    ///
    /// # Errors
    ///
    /// Any error. A generic [`ArgumentError`](callable_core::ArgumentError) is
    /// wrapped by the invoker; every other error reaches the caller as is.
    fn construct(args: Arguments) -> Result<Self, Error>;

    /// Runs the service. Services that do not override this report
    /// [`Error::NotImplemented`].
    ///
    /// # Errors
    ///
    /// Any error; the invoker never reinterprets it.
    fn execute(self, _callback: Callback<'_>) -> Result<Self::Output, Error> {
        Err(Error::NotImplemented {
            service: Self::name(),
        })
    }
}

/// `a::b::Foo<c::Bar>` -> `Foo<c::Bar>`.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head_end = full.find('<').unwrap_or(full.len());
    let start = full[..head_end].rfind("::").map_or(0, |i| i + 2);
    &full[start..]
}
