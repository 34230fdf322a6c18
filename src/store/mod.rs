//! # Pattern Store Module
//!
//! Ordered storage for `(pattern, handler, pass-primary)` registrations and
//! the first-match lookup over them.
//!
//! ## Ordering
//!
//! Patterns are tried strictly in registration order and the first pattern
//! that matches wins; later patterns are never consulted. The store is a
//! `Vec` of entries plus a source-string index, so the tie-break never
//! depends on hash iteration order.
//!
//! Registering a source string that is already present replaces the handler
//! **in place**: the entry keeps its original position in the scan order.
//!
//! ## Matching Semantics
//!
//! A pattern matches when it matches at the very beginning of the text. It
//! does not need to consume the whole text; add `$` to the pattern for that.
//!
//! ```rust
//! use roadmap::store::PatternStore;
//! use roadmap::{Arguments, SharedHandler};
//! use serde_json::{json, Value};
//! use std::sync::Arc;
//!
//! let mut store = PatternStore::new();
//! let handler: SharedHandler =
//!     Arc::new(|_: Arguments| -> anyhow::Result<Value> { Ok(json!("org")) });
//! store.register(r"(\w+)@\w+\.org", handler, false).unwrap();
//!
//! assert!(store.lookup("alice@example.org").is_some());
//! // The match must start at offset 0
//! assert!(store.lookup("to: alice@example.org").is_none());
//! ```

mod core;

pub use core::{PatternEntry, PatternMatch, PatternStore, PatternSyntaxError};
