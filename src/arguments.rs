//! Argument bundle handed to pattern handlers.
//!
//! A handler never sees a variable-arity call. Every invocation receives one
//! [`Arguments`] value holding an ordered positional list and a name-to-value
//! map, built from the regex captures and (optionally) the primary value that
//! was routed.

use serde::Serialize;
use serde_json::{Map, Value};
use smallvec::SmallVec;

/// Maximum number of positional arguments before heap allocation.
/// Most patterns capture a handful of groups; the primary value expansion
/// rarely adds more than two or three elements.
pub const MAX_INLINE_ARGS: usize = 8;

/// Stack-allocated positional argument storage.
pub type ArgVec = SmallVec<[Value; MAX_INLINE_ARGS]>;

/// Positional and named arguments for a single handler call.
///
/// The same shape is used for the arguments bound from a match and for the
/// final call after the primary value has been prepended or expanded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Arguments {
    /// Ordered positional values. Captures that did not participate in the
    /// match are `Value::Null`.
    pub positional: ArgVec,
    /// Values of named capture groups, keyed by group name.
    pub named: Map<String, Value>,
}

impl Arguments {
    /// Create an argument bundle from its parts
    #[must_use]
    pub fn new(positional: ArgVec, named: Map<String, Value>) -> Self {
        Self { positional, named }
    }

    /// Positional argument at `index`
    #[inline]
    #[must_use]
    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    /// Positional argument at `index` as a string slice
    ///
    /// Returns `None` when the argument is missing or is not a string
    /// (for example an absent capture, which is `null`).
    #[inline]
    #[must_use]
    pub fn str_at(&self, index: usize) -> Option<&str> {
        self.positional.get(index).and_then(Value::as_str)
    }

    /// Named argument by capture group name
    #[inline]
    #[must_use]
    pub fn named(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }

    /// Named argument as a string slice
    #[inline]
    #[must_use]
    pub fn named_str(&self, name: &str) -> Option<&str> {
        self.named.get(name).and_then(Value::as_str)
    }

    /// Total number of arguments, positional and named
    #[must_use]
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// True when the call carries no arguments at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Split into the positional list and the named map
    #[must_use]
    pub fn into_parts(self) -> (ArgVec, Map<String, Value>) {
        (self.positional, self.named)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use smallvec::smallvec;

    #[test]
    fn accessors_read_through_to_values() {
        let mut named = Map::new();
        named.insert("after_w".to_string(), json!("after"));
        let args = Arguments::new(smallvec![json!("before"), Value::Null], named);

        assert_eq!(args.str_at(0), Some("before"));
        assert_eq!(args.positional(1), Some(&Value::Null));
        assert_eq!(args.str_at(1), None);
        assert_eq!(args.str_at(2), None);
        assert_eq!(args.named_str("after_w"), Some("after"));
        assert_eq!(args.named("missing"), None);
        assert_eq!(args.len(), 3);
        assert!(!args.is_empty());
    }

    #[test]
    fn serializes_as_positional_and_named() {
        let args = Arguments::new(smallvec![json!("woot")], Map::new());
        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value, json!({ "positional": ["woot"], "named": {} }));
    }
}
