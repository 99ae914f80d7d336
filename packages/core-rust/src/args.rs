//! Argument lists handed to service constructors.

use std::collections::BTreeMap;

use crate::types::Value;

/// Positional and keyword arguments for one call.
///
/// The two collections never mix: a `Value::Map` pushed as a positional
/// argument stays positional, and keyword arguments only ever come from
/// [`Arguments::kwarg`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    positional: Vec<Value>,
    keyword: BTreeMap<String, Value>,
}

impl Arguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Sets a keyword argument. A repeated key replaces the earlier value.
    #[must_use]
    pub fn kwarg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.insert(key.into(), value.into());
        self
    }

    pub fn push(&mut self, value: impl Into<Value>) {
        self.positional.push(value.into());
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.keyword.insert(key.into(), value.into());
    }

    #[must_use]
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    #[must_use]
    pub fn keyword(&self) -> &BTreeMap<String, Value> {
        &self.keyword
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }

    /// Splits into the positional list and the keyword map.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Value>, BTreeMap<String, Value>) {
        (self.positional, self.keyword)
    }
}

// ---------------------------------------------------------------------------
// IntoArguments
// ---------------------------------------------------------------------------

/// Conversion into an [`Arguments`] list.
///
/// Scalars, strings, values and mappings become a single positional argument.
/// Tuples spread into one positional argument per element. `()` is the empty
/// call.
pub trait IntoArguments {
    fn into_arguments(self) -> Arguments;
}

impl IntoArguments for Arguments {
    fn into_arguments(self) -> Arguments {
        self
    }
}

impl IntoArguments for () {
    fn into_arguments(self) -> Arguments {
        Arguments::new()
    }
}

/// Implements `IntoArguments` for types that become one positional value.
macro_rules! single_positional {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoArguments for $ty {
                fn into_arguments(self) -> Arguments {
                    Arguments::new().arg(self)
                }
            }
        )*
    };
}

single_positional!(
    Value,
    bool,
    i32,
    i64,
    u32,
    f64,
    &str,
    String,
    BTreeMap<String, Value>,
);

/// Implements `IntoArguments` for tuples, one positional value per element.
macro_rules! tuple_positional {
    ($($name:ident),+) => {
        impl<$($name: Into<Value>),+> IntoArguments for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_arguments(self) -> Arguments {
                let ($($name,)+) = self;
                Arguments::new()$(.arg($name))+
            }
        }
    };
}

tuple_positional!(A);
tuple_positional!(A, B);
tuple_positional!(A, B, C);
tuple_positional!(A, B, C, D);

/// Builds [`Arguments`]: positional values, then `;`, then `key: value` pairs.
///
/// ```
/// use callable_core::{args, Value};
///
/// let a = args![1, "two"; c: 3, e: 5];
/// assert_eq!(a.positional(), &[Value::Int(1), Value::from("two")]);
/// assert_eq!(a.keyword()["e"], Value::Int(5));
///
/// let only_keywords = args![; x: 10];
/// assert!(only_keywords.positional().is_empty());
/// ```
#[macro_export]
macro_rules! args {
    ($($pos:expr),* $(,)? $(; $($key:ident : $val:expr),* $(,)?)?) => {{
        #[allow(unused_mut)]
        let mut arguments = $crate::Arguments::new();
        $( arguments.push($pos); )*
        $($( arguments.insert(stringify!($key), $val); )*)?
        arguments
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_call_has_no_arguments() {
        assert!(().into_arguments().is_empty());
        assert!(args![].is_empty());
    }

    #[test]
    fn map_stays_positional() {
        let mut data = BTreeMap::new();
        data.insert("a".to_string(), Value::Int(1));
        let args = data.clone().into_arguments();
        assert_eq!(args.positional(), &[Value::Map(data)]);
        assert!(args.keyword().is_empty());
    }

    #[test]
    fn tuple_spreads_positionally() {
        let args = (1, "x", true).into_arguments();
        assert_eq!(
            args.positional(),
            &[Value::Int(1), Value::from("x"), Value::Bool(true)]
        );
    }

    #[test]
    fn macro_splits_positional_and_keyword() {
        let args = args![1, 2; foo: "bar", baz: 3];
        assert_eq!(args.positional(), &[Value::Int(1), Value::Int(2)]);
        assert_eq!(args.keyword().len(), 2);
        assert_eq!(args.keyword()["foo"], Value::from("bar"));
    }

    #[test]
    fn repeated_keyword_keeps_last() {
        let args = Arguments::new().kwarg("x", 1).kwarg("x", 2);
        assert_eq!(args.keyword()["x"], Value::Int(2));
    }
}
