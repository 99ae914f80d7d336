//! Callable — construct-then-invoke services.
//!
//! A [`Service`] pairs a constructor with a single `execute` operation.
//! [`Callable::call`] builds an instance from the given arguments and runs it
//! straight away:
//!
//! ```
//! use callable::{args, Arguments, Callable, Callback, Error, Service, Signature, Value};
//!
//! struct Greet {
//!     name: Value,
//!     greeting: Value,
//! }
//!
//! impl Service for Greet {
//!     type Output = String;
//!
//!     fn construct(args: Arguments) -> Result<Self, Error> {
//!         let mut bound = Signature::new()
//!             .required("name")
//!             .key_optional("greeting", "Hello")
//!             .bind(args)?;
//!         Ok(Greet { name: bound.take("name"), greeting: bound.take("greeting") })
//!     }
//!
//!     fn execute(self, mut callback: Callback<'_>) -> Result<String, Error> {
//!         callback.yield_value("greeted");
//!         Ok(format!("{} {}", self.greeting.as_str().unwrap_or_default(), self.name.as_str().unwrap_or_default()))
//!     }
//! }
//!
//! assert_eq!(Greet::call("Ada").unwrap(), "Hello Ada");
//! assert_eq!(Greet::call(args!["Ada"; greeting: "Hi"]).unwrap(), "Hi Ada");
//!
//! let err = Greet::call(()).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Cannot instantiate Greet: wrong number of arguments (given 0, expected 1)"
//! );
//! ```

pub mod callback;
pub mod error;
pub mod invoker;
pub mod service;

pub use callable_core::{
    args, ArgumentError, ArgumentKind, Arguments, Bound, IntoArguments, Origin, Param, Signature,
    Value,
};
pub use callback::Callback;
pub use error::{ConstructionError, Error};
pub use invoker::{invoke, Callable, Invoker};
pub use service::Service;
