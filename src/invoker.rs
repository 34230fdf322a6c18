//! Final call construction and handler invocation.
//!
//! With the pass-primary flag off, the handler receives only the bound
//! arguments. With it on, the primary value leads the positional list:
//! an array is expanded element by element, anything else (strings and
//! objects included) is passed as a single value.

use crate::arguments::{ArgVec, Arguments};
use crate::handler::Handler;
use serde_json::Value;

/// Build the final argument bundle for a call
#[must_use]
pub fn call_arguments(primary: &Value, pass_primary: bool, bound: Arguments) -> Arguments {
    if !pass_primary {
        return bound;
    }

    let (positional, named) = bound.into_parts();
    let mut combined = ArgVec::new();
    match primary {
        Value::Array(items) => combined.extend(items.iter().cloned()),
        scalar => combined.push(scalar.clone()),
    }
    combined.extend(positional);
    Arguments::new(combined, named)
}

/// Construct the final call and invoke `handler`
///
/// # Errors
///
/// Whatever the handler returns; nothing is caught or retried here.
pub fn invoke(
    handler: &dyn Handler,
    primary: &Value,
    pass_primary: bool,
    bound: Arguments,
) -> anyhow::Result<Value> {
    handler.call(call_arguments(primary, pass_primary, bound))
}
