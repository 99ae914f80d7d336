//! Callable Core — dynamic values, argument lists, and constructor signature binding.

pub mod args;
pub mod error;
pub mod signature;
pub mod types;

pub use args::{Arguments, IntoArguments};
pub use error::{ArgumentError, ArgumentKind, Origin};
pub use signature::{Bound, Param, Signature};
pub use types::Value;

#[cfg(test)]
mod tests {
    #[test]
    fn crate_loads() {
        // Empty body: if this test runs, the crate compiles and loads.
    }
}
