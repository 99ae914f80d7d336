//! Constructor signatures and argument binding.
//!
//! A [`Signature`] lists the parameters a constructor accepts. Binding an
//! [`Arguments`] list against it either yields a [`Bound`] set of named
//! values or a generic [`ArgumentError`] describing the mismatch.
//!
//! Binding order:
//!
//! 1. Positional arity (`wrong number of arguments (given N, expected ..)`)
//! 2. Leading required positionals from the front, required positionals
//!    declared after an optional or rest parameter from the back, then
//!    optionals left to right, leftovers to rest
//! 3. Missing required keywords
//! 4. Unknown keywords, unless a keyword rest parameter collects them

use std::collections::BTreeMap;

use crate::args::Arguments;
use crate::error::ArgumentError;
use crate::types::Value;

/// One declared constructor parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Required(&'static str),
    Optional(&'static str, Value),
    Rest(&'static str),
    KeyRequired(&'static str),
    KeyOptional(&'static str, Value),
    KeyRest(&'static str),
}

/// Declared parameter list of a constructor.
///
/// Keyword arguments are never folded into a positional mapping: a keyword
/// given to a signature without a matching keyword parameter or keyword rest
/// is rejected as `unknown keyword`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signature {
    params: Vec<Param>,
}

impl Signature {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn required(self, name: &'static str) -> Self {
        self.with(Param::Required(name))
    }

    #[must_use]
    pub fn optional(self, name: &'static str, default: impl Into<Value>) -> Self {
        self.with(Param::Optional(name, default.into()))
    }

    #[must_use]
    pub fn rest(self, name: &'static str) -> Self {
        self.with(Param::Rest(name))
    }

    #[must_use]
    pub fn key_required(self, name: &'static str) -> Self {
        self.with(Param::KeyRequired(name))
    }

    #[must_use]
    pub fn key_optional(self, name: &'static str, default: impl Into<Value>) -> Self {
        self.with(Param::KeyOptional(name, default.into()))
    }

    #[must_use]
    pub fn key_rest(self, name: &'static str) -> Self {
        self.with(Param::KeyRest(name))
    }

    fn with(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Binds `args` to the declared parameters.
    ///
    /// # Errors
    ///
    /// Returns a generic [`ArgumentError`] when the positional count is out of
    /// range, a required keyword is missing, or an undeclared keyword is given
    /// without a keyword rest parameter.
    pub fn bind(&self, args: Arguments) -> Result<Bound, ArgumentError> {
        let (positional, mut keyword) = args.into_parts();

        // Required parameters declared after an optional or rest parameter
        // bind from the end of the positional list.
        let mut leading: Vec<&'static str> = Vec::new();
        let mut trailing: Vec<&'static str> = Vec::new();
        let mut past_variable = false;
        for param in &self.params {
            match param {
                Param::Required(name) if past_variable => trailing.push(*name),
                Param::Required(name) => leading.push(*name),
                Param::Optional(..) | Param::Rest(_) => past_variable = true,
                _ => {}
            }
        }
        let optional: Vec<(&'static str, &Value)> = self
            .params
            .iter()
            .filter_map(|p| match p {
                Param::Optional(name, default) => Some((*name, default)),
                _ => None,
            })
            .collect();
        let rest = self.params.iter().find_map(|p| match p {
            Param::Rest(name) => Some(*name),
            _ => None,
        });
        let key_rest = self.params.iter().find_map(|p| match p {
            Param::KeyRest(name) => Some(*name),
            _ => None,
        });

        let given = positional.len();
        let min = leading.len() + trailing.len();
        let max = min + optional.len();
        if given < min || (rest.is_none() && given > max) {
            return Err(ArgumentError::new(format!(
                "wrong number of arguments (given {given}, expected {})",
                expected_arity(min, max, rest.is_some())
            )));
        }

        let mut values = BTreeMap::new();
        let mut head = positional;
        let tail = head.split_off(given - trailing.len());
        let middle = head.split_off(leading.len());
        values.extend(leading.iter().copied().zip(head));
        values.extend(trailing.iter().copied().zip(tail));

        let mut remaining = middle.into_iter();
        for (name, default) in &optional {
            let value = remaining.next().unwrap_or_else(|| (*default).clone());
            values.insert(*name, value);
        }
        if let Some(name) = rest {
            values.insert(name, Value::Array(remaining.collect()));
        }

        let missing: Vec<&'static str> = self
            .params
            .iter()
            .filter_map(|p| match p {
                Param::KeyRequired(name) if !keyword.contains_key(*name) => Some(*name),
                _ => None,
            })
            .collect();
        if !missing.is_empty() {
            return Err(ArgumentError::new(keyword_message("missing", &missing)));
        }

        for param in &self.params {
            match param {
                Param::KeyRequired(name) => {
                    if let Some(value) = keyword.remove(*name) {
                        values.insert(*name, value);
                    }
                }
                Param::KeyOptional(name, default) => {
                    let value = keyword.remove(*name).unwrap_or_else(|| default.clone());
                    values.insert(*name, value);
                }
                _ => {}
            }
        }

        match key_rest {
            Some(name) => {
                values.insert(name, Value::Map(keyword));
            }
            None if !keyword.is_empty() => {
                let unknown: Vec<&str> = keyword.keys().map(String::as_str).collect();
                return Err(ArgumentError::new(keyword_message("unknown", &unknown)));
            }
            None => {}
        }

        Ok(Bound { values })
    }
}

fn expected_arity(min: usize, max: usize, has_rest: bool) -> String {
    if has_rest {
        format!("{min}+")
    } else if min == max {
        min.to_string()
    } else {
        format!("{min}..{max}")
    }
}

fn keyword_message(what: &str, names: &[&str]) -> String {
    let list = names
        .iter()
        .map(|n| format!(":{n}"))
        .collect::<Vec<_>>()
        .join(", ");
    if names.len() == 1 {
        format!("{what} keyword: {list}")
    } else {
        format!("{what} keywords: {list}")
    }
}

// ---------------------------------------------------------------------------
// Bound
// ---------------------------------------------------------------------------

/// Values bound to declared parameter names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bound {
    values: BTreeMap<&'static str, Value>,
}

impl Bound {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Removes and returns the value bound to `name`, or `Value::Null` when
    /// the signature declares no such parameter.
    pub fn take(&mut self, name: &str) -> Value {
        self.values.remove(name).unwrap_or(Value::Null)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::args;

    fn combo() -> Signature {
        Signature::new()
            .required("a")
            .optional("b", 2)
            .key_required("c")
            .key_optional("d", 4)
            .key_rest("rest")
    }

    #[test]
    fn empty_signature_accepts_empty_call() {
        let bound = Signature::new().bind(Arguments::new()).unwrap();
        assert!(bound.is_empty());
    }

    #[test]
    fn required_positional_missing() {
        let err = Signature::new().required("a").bind(args![]).unwrap_err();
        assert!(err.is_generic());
        assert_eq!(err.message(), "wrong number of arguments (given 0, expected 1)");
    }

    #[test]
    fn too_many_positionals_reports_range() {
        let sig = Signature::new().required("a").optional("b", 2);
        let err = sig.bind(args![1, 2, 3]).unwrap_err();
        assert_eq!(err.message(), "wrong number of arguments (given 3, expected 1..2)");
    }

    #[test]
    fn rest_reports_open_range() {
        let sig = Signature::new().required("a").rest("others");
        let err = sig.bind(args![]).unwrap_err();
        assert_eq!(err.message(), "wrong number of arguments (given 0, expected 1+)");
    }

    #[test]
    fn optional_defaults_fill_gaps() {
        let sig = Signature::new().optional("a", 5);
        assert_eq!(sig.bind(args![]).unwrap().get("a"), Some(&Value::Int(5)));
        assert_eq!(sig.bind(args![9]).unwrap().get("a"), Some(&Value::Int(9)));
    }

    #[test]
    fn rest_collects_leftovers() {
        let sig = Signature::new().required("first").rest("nums");
        let mut bound = sig.bind(args![1, 2, 3]).unwrap();
        assert_eq!(bound.take("first"), Value::Int(1));
        assert_eq!(bound.take("nums"), Value::from(vec![2, 3]));
    }

    #[test]
    fn mixed_signature_binds_every_kind() {
        let mut bound = combo().bind(args![1; c: 3, e: 5]).unwrap();
        assert_eq!(bound.take("a"), Value::Int(1));
        assert_eq!(bound.take("b"), Value::Int(2));
        assert_eq!(bound.take("c"), Value::Int(3));
        assert_eq!(bound.take("d"), Value::Int(4));
        assert_eq!(bound.take("rest"), Value::map([("e", 5)]));
    }

    #[test]
    fn empty_keyword_rest_is_empty_map() {
        let mut bound = combo().bind(args![1; c: 3]).unwrap();
        assert_eq!(bound.take("rest"), Value::Map(BTreeMap::new()));
    }

    #[test]
    fn missing_keyword_is_named() {
        let err = Signature::new().key_required("x").bind(args![]).unwrap_err();
        assert!(err.is_generic());
        assert_eq!(err.message(), "missing keyword: :x");
    }

    #[test]
    fn several_missing_keywords_are_listed() {
        let sig = Signature::new().key_required("x").key_required("y");
        let err = sig.bind(args![]).unwrap_err();
        assert_eq!(err.message(), "missing keywords: :x, :y");
    }

    #[test]
    fn unknown_keyword_without_rest() {
        let sig = Signature::new().key_optional("x", 7);
        let err = sig.bind(args![; x: 1, y: 2]).unwrap_err();
        assert_eq!(err.message(), "unknown keyword: :y");
    }

    #[test]
    fn arity_is_checked_before_keywords() {
        let err = combo().bind(args![]).unwrap_err();
        assert!(err.message().starts_with("wrong number of arguments"));
    }

    #[test]
    fn positional_map_is_not_keywords() {
        let sig = Signature::new().required("data");
        let data = Value::map([("a", 1), ("b", 2)]);
        let mut bound = sig.bind(Arguments::new().arg(data.clone())).unwrap();
        assert_eq!(bound.take("data"), data);
    }

    #[test]
    fn both_rest_kinds_are_independent() {
        let sig = Signature::new().rest("nums").key_rest("opts");
        let mut bound = sig.bind(args![1, 2; foo: "bar"]).unwrap();
        assert_eq!(bound.take("nums"), Value::from(vec![1, 2]));
        assert_eq!(bound.take("opts"), Value::map([("foo", "bar")]));
    }

    #[test]
    fn required_after_rest_binds_from_the_end() {
        let sig = Signature::new().rest("xs").required("last");
        let mut bound = sig.bind(args![1, 2, 3]).unwrap();
        assert_eq!(bound.take("last"), Value::Int(3));
        assert_eq!(bound.take("xs"), Value::from(vec![1, 2]));
    }

    #[test]
    fn required_after_optional_binds_from_the_end() {
        let sig = Signature::new().optional("a", 1).required("b");
        let mut bound = sig.bind(args![10, 20]).unwrap();
        assert_eq!(bound.take("a"), Value::Int(10));
        assert_eq!(bound.take("b"), Value::Int(20));

        let mut bound = sig.bind(args![20]).unwrap();
        assert_eq!(bound.take("a"), Value::Int(1));
        assert_eq!(bound.take("b"), Value::Int(20));
    }

    #[test]
    fn required_around_optional_and_rest() {
        let sig = Signature::new()
            .required("first")
            .optional("opt", 0)
            .rest("mid")
            .required("last");
        let mut bound = sig.bind(args![1, 2, 3, 4, 5]).unwrap();
        assert_eq!(bound.take("first"), Value::Int(1));
        assert_eq!(bound.take("opt"), Value::Int(2));
        assert_eq!(bound.take("mid"), Value::from(vec![3, 4]));
        assert_eq!(bound.take("last"), Value::Int(5));

        let err = sig.bind(args![1]).unwrap_err();
        assert_eq!(err.message(), "wrong number of arguments (given 1, expected 2+)");
    }

    #[test]
    fn keywords_are_not_folded_into_positional_map() {
        let sig = Signature::new().optional("data", Value::Null);
        let err = sig.bind(args![; x: 1]).unwrap_err();
        assert!(err.is_generic());
        assert_eq!(err.message(), "unknown keyword: :x");
    }

    #[test]
    fn take_undeclared_is_null() {
        let mut bound = Signature::new().bind(args![]).unwrap();
        assert!(bound.take("nope").is_null());
    }

    proptest! {
        #[test]
        fn rest_receives_every_positional(nums in proptest::collection::vec(any::<i64>(), 0..16)) {
            let mut args = Arguments::new();
            for n in &nums {
                args.push(*n);
            }
            let mut bound = Signature::new().rest("nums").bind(args).unwrap();
            prop_assert_eq!(bound.take("nums"), Value::from(nums));
        }

        #[test]
        fn fixed_arity_accepts_only_exact_count(given in 0usize..8, expected in 0usize..8) {
            const NAMES: [&str; 8] = ["p0", "p1", "p2", "p3", "p4", "p5", "p6", "p7"];
            let sig = NAMES[..expected]
                .iter()
                .fold(Signature::new(), |sig, name| sig.required(*name));
            let mut args = Arguments::new();
            for i in 0..given {
                args.push(i64::try_from(i).unwrap());
            }
            prop_assert_eq!(sig.bind(args).is_ok(), given == expected);
        }
    }
}
