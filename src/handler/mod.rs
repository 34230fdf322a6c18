//! # Handler Module
//!
//! Callable capabilities the router works with:
//!
//! - [`Handler`] - bound to a pattern, receives an [`Arguments`](crate::arguments::Arguments)
//!   bundle and returns a value
//! - [`Fallback`] - the no-argument default handler of a direct-return router
//! - [`Sink`] - single-argument receiver of results in sink-forward mode
//!
//! Closures implement all three traits, so most callers never name them:
//!
//! ```rust
//! use roadmap::{Arguments, Router};
//! use serde_json::json;
//!
//! let mut router = Router::direct();
//! router
//!     .register_pattern(r"^[yY]", |_args: Arguments| Ok(json!("YES")), false)
//!     .expect("valid pattern");
//! assert_eq!(router.route("yeah", None).unwrap(), json!("YES"));
//! ```
//!
//! [`TemplateHandler`] renders a reply string from the call arguments and is
//! what routing tables loaded from configuration files register.

mod core;
mod template;

pub use core::{Collector, Fallback, Handler, SharedHandler, Sink};
pub use template::TemplateHandler;
