//! # Result Disposition
//!
//! A router is built with exactly one disposition, fixed for its lifetime:
//!
//! - [`DirectReturn`] - `route` returns the handler's value; unmatched input
//!   runs the default handler and returns its value.
//! - [`SinkForward`] - `route` returns `()`; each handler value is delivered
//!   to the sink in call order. Unmatched input is dropped without a delivery.

use crate::handler::{Fallback, Sink};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Where handler results go.
pub trait Disposition {
    /// What `Router::route` returns on success
    type Output;

    /// Deliver the result of a matched handler
    ///
    /// # Errors
    ///
    /// Returns the sink's error in sink-forward mode.
    fn deliver(&self, value: Value) -> anyhow::Result<Self::Output>;

    /// Outcome for input that matched no pattern
    ///
    /// # Errors
    ///
    /// Returns the default handler's error in direct-return mode.
    fn no_match(&self) -> anyhow::Result<Self::Output>;
}

/// Return handler results to the caller of `route`.
#[derive(Clone)]
pub struct DirectReturn {
    default: Arc<dyn Fallback>,
}

impl DirectReturn {
    /// Direct-return disposition with the given default handler
    #[must_use]
    pub fn new(default: Arc<dyn Fallback>) -> Self {
        Self { default }
    }

    /// The default handler invoked on no match
    #[must_use]
    pub fn default_handler(&self) -> &Arc<dyn Fallback> {
        &self.default
    }
}

impl Default for DirectReturn {
    /// Unmatched input returns `null`
    fn default() -> Self {
        Self::new(Arc::new(|| -> anyhow::Result<Value> { Ok(Value::Null) }))
    }
}

impl fmt::Debug for DirectReturn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectReturn").finish_non_exhaustive()
    }
}

impl Disposition for DirectReturn {
    type Output = Value;

    fn deliver(&self, value: Value) -> anyhow::Result<Value> {
        Ok(value)
    }

    fn no_match(&self) -> anyhow::Result<Value> {
        self.default.call()
    }
}

/// Forward handler results to a sink.
#[derive(Debug, Default)]
pub struct SinkForward<S> {
    sink: S,
}

impl<S: Sink> SinkForward<S> {
    /// Sink-forward disposition delivering into `sink`
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// The sink results are delivered to
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Take the sink back out of the disposition
    #[must_use]
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: Sink> Disposition for SinkForward<S> {
    type Output = ();

    fn deliver(&self, value: Value) -> anyhow::Result<()> {
        self.sink.accept(value)
    }

    fn no_match(&self) -> anyhow::Result<()> {
        debug!("No pattern matched; nothing delivered to sink");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::Collector;
    use serde_json::json;

    #[test]
    fn direct_return_hands_value_back() {
        let d = DirectReturn::default();
        assert_eq!(d.deliver(json!("x")).unwrap(), json!("x"));
        assert_eq!(d.no_match().unwrap(), Value::Null);
    }

    #[test]
    fn direct_return_runs_default_handler() {
        let d = DirectReturn::new(Arc::new(|| -> anyhow::Result<Value> {
            Ok(json!("Sorry, regex not found"))
        }));
        assert_eq!(d.no_match().unwrap(), json!("Sorry, regex not found"));
    }

    #[test]
    fn sink_forward_delivers_and_ignores_no_match() {
        let d = SinkForward::new(Collector::new());
        d.deliver(json!(1)).unwrap();
        d.no_match().unwrap();
        d.deliver(json!(2)).unwrap();
        assert_eq!(d.into_sink().drain(), vec![json!(1), json!(2)]);
    }
}
