//! # CLI Module
//!
//! Command-line front end for trying out a routing table.
//!
//! ## Commands
//!
//! ### `repl`
//!
//! Read one input per line from stdin, route it, and print the result:
//!
//! ```bash
//! roadmap --table routes.yaml repl
//! Test me>	alice@example.org
//! Organization address: alice
//! ```
//!
//! ### `route`
//!
//! Route a single value. With `--json` the input is parsed as a JSON value
//! (arrays are expanded into the handler's positional arguments); `--key`
//! supplies the text to match separately:
//!
//! ```bash
//! roadmap --table routes.yaml route --json --key endbeforewwwwafter '["woot", "scoot"]'
//! ```
//!
//! ### `which`
//!
//! Print the name of the handler an input would hit, or `<none>`.
//!
//! ### `list`
//!
//! Print the registered patterns in match order.
//!
//! ## Output
//!
//! String results print without quotes, `null` prints nothing, and any
//! other value prints as JSON.

mod commands;

pub use commands::{run_cli, run_command, Cli, Commands, InputArgs};
