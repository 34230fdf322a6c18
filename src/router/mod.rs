//! # Router Module
//!
//! The router turns a free-form input value into a structured handler call.
//!
//! ## Overview
//!
//! Each call to [`Router::route`] runs a fixed, linear pipeline:
//!
//! 1. **Match** - the input text (an explicit key, or the value itself) is
//!    tested against every registered pattern in registration order; the
//!    first pattern matching at the start of the text wins.
//! 2. **Bind** - capture groups become positional and named arguments (see
//!    [`binder`](crate::binder)).
//! 3. **Invoke** - when the pattern passes the primary value, it is prepended
//!    to the positional arguments (arrays are expanded element by element)
//!    and the handler is called.
//! 4. **Dispose** - the result is returned to the caller or forwarded to a
//!    sink, depending on the router's [`Disposition`](crate::disposition::Disposition).
//!
//! ## Example
//!
//! ```rust
//! use roadmap::{Arguments, Router};
//! use serde_json::json;
//!
//! let mut router = Router::with_default(|| Ok(json!("Sorry, regex not found")));
//! router
//!     .register_pattern(
//!         r"^(\w+)@\w+\.org$",
//!         |args: Arguments| {
//!             Ok(json!(format!("ORG ADDRESS: {}", args.str_at(0).unwrap_or_default())))
//!         },
//!         false,
//!     )
//!     .expect("valid pattern");
//!
//! assert_eq!(
//!     router.route("alice@example.org", None).unwrap(),
//!     json!("ORG ADDRESS: alice")
//! );
//! assert_eq!(
//!     router.route("nothing here", None).unwrap(),
//!     json!("Sorry, regex not found")
//! );
//! ```
//!
//! ## Sink-forward mode
//!
//! ```rust
//! use roadmap::{Arguments, Collector, Router};
//! use serde_json::json;
//!
//! let mut router = Router::with_sink(Collector::new());
//! router
//!     .destination(r"^[nN]", |args: Arguments| {
//!         Ok(json!(format!("NO: {}", args.str_at(0).unwrap_or_default())))
//!     })
//!     .expect("valid pattern");
//!
//! router.route("No way", None).unwrap();
//! router.route("maybe", None).unwrap(); // no match: nothing delivered
//! assert_eq!(router.sink().drain(), vec![json!("NO: No way")]);
//! ```

mod core;
mod error;

pub use core::Router;
pub use error::RouteError;
