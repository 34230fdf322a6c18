//! Capture-group interpretation.
//!
//! Turns a [`PatternMatch`] into the positional/named [`Arguments`] a handler
//! is called with:
//!
//! 1. No named groups: every capture is positional, in pattern order.
//! 2. Every group named: no positional args; named args are the group map.
//! 3. Mixed ("exclusive groups"): named args are the group map, and the
//!    positional args are the captures whose *value* does not occur among
//!    the named values.
//!
//! Case 3 compares values, not positions. An unnamed group that happens to
//! capture the same text as a named group is dropped from the positional
//! list, and an absent unnamed group is dropped when some named group is
//! also absent.

use crate::arguments::{ArgVec, Arguments};
use crate::store::PatternMatch;
use serde_json::Map;

/// Derive the bound arguments for a match
#[must_use]
pub fn bind(matched: &PatternMatch<'_>) -> Arguments {
    let captures = &matched.captures;
    let named = &matched.named;

    if named.is_empty() {
        return Arguments::new(captures.iter().cloned().collect(), Map::new());
    }

    if named.len() == captures.len() {
        return Arguments::new(ArgVec::new(), named.clone());
    }

    let exclusives: ArgVec = captures
        .iter()
        .filter(|value| !named.values().any(|n| n == *value))
        .cloned()
        .collect();
    Arguments::new(exclusives, named.clone())
}
