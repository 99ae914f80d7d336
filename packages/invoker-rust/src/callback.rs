use std::fmt;

use callable_core::Value;

/// Optional trailing callback handed to [`Service::execute`](crate::Service::execute).
///
/// Constructors never see it. An `execute` that ignores its callback simply
/// never delivers anything to the caller.
pub struct Callback<'a> {
    inner: Option<&'a mut (dyn FnMut(Value) + 'a)>,
}

impl<'a> Callback<'a> {
    #[must_use]
    pub fn new(f: &'a mut (dyn FnMut(Value) + 'a)) -> Self {
        Self { inner: Some(f) }
    }

    /// A callback slot with nothing in it.
    #[must_use]
    pub fn none() -> Self {
        Self { inner: None }
    }

    #[must_use]
    pub fn is_given(&self) -> bool {
        self.inner.is_some()
    }

    /// Delivers `value` to the caller's callback. Returns `false` when no
    /// callback was supplied.
    pub fn yield_value(&mut self, value: impl Into<Value>) -> bool {
        match self.inner.as_mut() {
            Some(f) => {
                (*f)(value.into());
                true
            }
            None => false,
        }
    }
}

impl Default for Callback<'_> {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Debug for Callback<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("given", &self.is_given())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivers_to_given_callback() {
        let mut seen = Vec::new();
        let mut f = |v: Value| seen.push(v);
        let mut cb = Callback::new(&mut f);
        assert!(cb.is_given());
        assert!(cb.yield_value("call"));
        assert!(cb.yield_value(2));
        drop(cb);
        assert_eq!(seen, vec![Value::from("call"), Value::Int(2)]);
    }

    #[test]
    fn empty_callback_drops_values() {
        let mut cb = Callback::none();
        assert!(!cb.is_given());
        assert!(!cb.yield_value(1));
    }
}
