//! # Roadmap
//!
//! **Roadmap** is a pattern-dispatch engine: it holds an ordered list of
//! `(regular expression, handler)` bindings and turns a free-form input
//! (a chat message, a command, an address) into a structured handler call
//! without hand-written conditional chains.
//!
//! ## Overview
//!
//! - **[`store`]** - ordered pattern registrations and first-match lookup
//! - **[`binder`]** - capture groups to positional/named arguments
//! - **[`invoker`]** - final call construction (primary value passing)
//! - **[`disposition`]** - direct return vs. forwarding results to a sink
//! - **[`router`]** - the orchestrating [`Router`]
//! - **[`handler`]** - handler, default handler and sink capabilities
//! - **[`table`]** - routing tables loaded from YAML/JSON/TOML files
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `roadmap` command-line front end
//!
//! ### Routing Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Router
//!     participant Store as PatternStore
//!     participant Binder
//!     participant Invoker
//!     participant Handler
//!     participant Disposition
//!
//!     Caller->>Router: route(value, key?)
//!     Router->>Store: find(key or value text)
//!     alt No pattern matches
//!         Router->>Disposition: no_match()
//!         Disposition-->>Caller: default handler result / nothing
//!     end
//!     Store-->>Router: PatternMatch (entry, captures, named)
//!     Router->>Binder: bind(match)
//!     Binder-->>Router: Arguments
//!     Router->>Invoker: invoke(handler, value, pass_primary, args)
//!     Invoker->>Handler: call(final Arguments)
//!     Handler-->>Invoker: Value
//!     Router->>Disposition: deliver(Value)
//!     Disposition-->>Caller: Value (direct) / () after sink delivery
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use roadmap::{Arguments, Router};
//! use serde_json::json;
//!
//! let mut router = Router::with_default(|| Ok(json!("Sorry, regex not found")));
//!
//! // The primary value is not passed: only captures reach the handler.
//! router
//!     .register_pattern(r"^[yY]", |_| Ok(json!("YES")), false)
//!     .unwrap();
//!
//! // The routed value is passed as the first argument.
//! router
//!     .destination(r"^[nN]", |args: Arguments| {
//!         Ok(json!(format!("NO: {}", args.str_at(0).unwrap_or_default())))
//!     })
//!     .unwrap();
//!
//! // Mixed unnamed and named groups, routed by a separate key.
//! router
//!     .destination(r"end(.*?)[wW]+(?P<after_w>.*)", |args: Arguments| {
//!         Ok(serde_json::to_value(&args)?)
//!     })
//!     .unwrap();
//!
//! assert_eq!(router.route("yeah", None).unwrap(), json!("YES"));
//! assert_eq!(router.route("No way", None).unwrap(), json!("NO: No way"));
//! assert_eq!(
//!     router
//!         .route(json!(["woot", "scoot"]), Some("endbeforewwwwafter"))
//!         .unwrap(),
//!     json!({
//!         "positional": ["woot", "scoot", "before"],
//!         "named": { "after_w": "after" }
//!     })
//! );
//! ```
//!
//! ## Threading
//!
//! Routing is synchronous and sequential: each `route` call finishes
//! matching, binding, invoking and disposing before it returns. Register all
//! patterns before routing starts. A direct-return [`Router`] is `Send + Sync`
//! and can be routed through from several threads once built; sink-forward
//! routers are as thread-safe as their sink.

pub mod arguments;
pub mod binder;
pub mod cli;
pub mod disposition;
pub mod handler;
pub mod invoker;
pub mod logging;
pub mod router;
pub mod store;
pub mod table;

pub use arguments::{ArgVec, Arguments};
pub use disposition::{DirectReturn, Disposition, SinkForward};
pub use handler::{Collector, Fallback, Handler, SharedHandler, Sink, TemplateHandler};
pub use router::{RouteError, Router};
pub use store::{PatternEntry, PatternMatch, PatternStore, PatternSyntaxError};
pub use table::{RouteSpec, RoutingTable};
