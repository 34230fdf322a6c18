//! Router core module - the per-call routing pipeline.
//!
//! Match -> Bind -> Invoke -> Dispose, as plain sequential calls. The only
//! state consulted is the pattern store, which routing never mutates.

use super::error::RouteError;
use crate::arguments::Arguments;
use crate::binder::bind;
use crate::disposition::{DirectReturn, Disposition, SinkForward};
use crate::handler::{SharedHandler, Sink};
use crate::invoker::invoke;
use crate::store::{PatternEntry, PatternStore, PatternSyntaxError};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Matching slower than this is logged as a warning.
const SLOW_MATCH_THRESHOLD: Duration = Duration::from_millis(1);

/// Pattern-dispatch router.
///
/// Holds the ordered pattern registrations and one [`Disposition`] chosen at
/// construction. Register every pattern first, then route; `route` only
/// reads the store, so a fully built router can be shared across threads
/// when its disposition allows it.
#[derive(Debug, Clone)]
pub struct Router<D = DirectReturn> {
    store: PatternStore,
    disposition: D,
}

impl Router<DirectReturn> {
    /// Direct-return router whose default handler returns `null`
    #[must_use]
    pub fn direct() -> Self {
        Self::new(DirectReturn::default())
    }

    /// Direct-return router with a custom default handler
    #[must_use]
    pub fn with_default<F>(default: F) -> Self
    where
        F: Fn() -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self::new(DirectReturn::new(Arc::new(default)))
    }
}

impl Default for Router<DirectReturn> {
    fn default() -> Self {
        Self::direct()
    }
}

impl<S: Sink> Router<SinkForward<S>> {
    /// Sink-forward router delivering every handler result into `sink`
    #[must_use]
    pub fn with_sink(sink: S) -> Self {
        Self::new(SinkForward::new(sink))
    }

    /// The sink handler results are delivered to
    #[must_use]
    pub fn sink(&self) -> &S {
        self.disposition.sink()
    }
}

impl<D: Disposition> Router<D> {
    /// Create an empty router with the given disposition
    #[must_use]
    pub fn new(disposition: D) -> Self {
        Self {
            store: PatternStore::new(),
            disposition,
        }
    }

    /// Bind a closure to a pattern
    ///
    /// Returns the handler so the registration can be chained or the handle
    /// compared against later lookups.
    ///
    /// # Errors
    ///
    /// Returns [`PatternSyntaxError`] when `source` is not a valid regex; the
    /// router is left unchanged.
    pub fn register_pattern<F>(
        &mut self,
        source: &str,
        handler: F,
        pass_primary: bool,
    ) -> Result<SharedHandler, PatternSyntaxError>
    where
        F: Fn(Arguments) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.store.register(source, Arc::new(handler), pass_primary)
    }

    /// Bind a closure to a pattern, passing the primary value through
    ///
    /// # Errors
    ///
    /// Returns [`PatternSyntaxError`] when `source` is not a valid regex.
    pub fn destination<F>(
        &mut self,
        source: &str,
        handler: F,
    ) -> Result<SharedHandler, PatternSyntaxError>
    where
        F: Fn(Arguments) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.register_pattern(source, handler, true)
    }

    /// Bind an already shared handler to a pattern
    ///
    /// # Errors
    ///
    /// Returns [`PatternSyntaxError`] when `source` is not a valid regex.
    pub fn register_handler(
        &mut self,
        source: &str,
        handler: SharedHandler,
        pass_primary: bool,
    ) -> Result<SharedHandler, PatternSyntaxError> {
        self.store.register(source, handler, pass_primary)
    }

    /// Bind a handler to a pattern under an explicit handler name
    ///
    /// # Errors
    ///
    /// Returns [`PatternSyntaxError`] when `source` is not a valid regex.
    pub fn register_named(
        &mut self,
        name: &str,
        source: &str,
        handler: SharedHandler,
        pass_primary: bool,
    ) -> Result<SharedHandler, PatternSyntaxError> {
        self.store.register_named(name, source, handler, pass_primary)
    }

    /// Route one value through the first matching pattern
    ///
    /// `key`, when given and non-empty, is the text matched against the
    /// patterns; otherwise the primary value's own string form is used. Either way the primary
    /// value is what the handler receives when the pattern passes it.
    ///
    /// # Returns
    ///
    /// * Direct-return routers: the handler's value, or the default
    ///   handler's value when nothing matched
    /// * Sink-forward routers: `()`; the value went to the sink
    ///
    /// # Errors
    ///
    /// * [`RouteError::Unmatchable`] - no key and the value has no string form
    /// * [`RouteError::Handler`] - the matched handler failed
    /// * [`RouteError::Fallback`] - the default handler failed
    /// * [`RouteError::Sink`] - the sink rejected the result
    pub fn route(
        &self,
        obj: impl Into<Value>,
        key: Option<&str>,
    ) -> Result<D::Output, RouteError> {
        let primary: Value = obj.into();
        let text = match_text(&primary, key)?;

        let match_start = Instant::now();
        let matched = self.store.find(&text);
        let match_duration = match_start.elapsed();

        let Some(matched) = matched else {
            debug!(
                text = %text,
                patterns = self.store.len(),
                duration_us = match_duration.as_micros(),
                "No pattern matched"
            );
            return self.disposition.no_match().map_err(RouteError::Fallback);
        };

        let entry = matched.entry;
        if match_duration > SLOW_MATCH_THRESHOLD {
            warn!(
                text = %text,
                pattern = %entry.source(),
                handler_name = %entry.handler_name(),
                duration_us = match_duration.as_micros(),
                "Slow pattern matching detected"
            );
        }

        let bound = bind(&matched);
        debug!(
            handler_name = %entry.handler_name(),
            pass_primary = entry.pass_primary(),
            positional = bound.positional.len(),
            named = bound.named.len(),
            "Invoking handler"
        );

        let value = invoke(&**entry.handler(), &primary, entry.pass_primary(), bound)
            .map_err(|source| {
                error!(
                    handler_name = %entry.handler_name(),
                    pattern = %entry.source(),
                    error = %source,
                    "Handler failed"
                );
                RouteError::Handler {
                    handler: entry.handler_name().to_string(),
                    source,
                }
            })?;

        self.disposition
            .deliver(value)
            .map_err(|source| RouteError::Sink {
                handler: entry.handler_name().to_string(),
                source,
            })
    }

    /// Handler that `route` would invoke for the same arguments, without
    /// invoking it
    ///
    /// Returns `None` when nothing matches, including when there is no key
    /// and the value has no string form.
    #[must_use]
    pub fn lookup_handler(&self, obj: &Value, key: Option<&str>) -> Option<SharedHandler> {
        self.lookup_entry(obj, key)
            .map(|entry| Arc::clone(entry.handler()))
    }

    /// Entry that `route` would use for the same arguments
    #[must_use]
    pub fn lookup_entry(&self, obj: &Value, key: Option<&str>) -> Option<&PatternEntry> {
        let text = match_text(obj, key).ok()?;
        self.store.lookup(&text)
    }

    /// The registered patterns, in scan order
    #[must_use]
    pub fn patterns(&self) -> &PatternStore {
        &self.store
    }

    /// The disposition fixed at construction
    #[must_use]
    pub fn disposition(&self) -> &D {
        &self.disposition
    }

    /// Consume the router, returning its disposition
    #[must_use]
    pub fn into_disposition(self) -> D {
        self.disposition
    }
}

/// Text a value is matched by: the explicit key, or the value's string form
///
/// An empty key counts as no key.
fn match_text<'a>(primary: &'a Value, key: Option<&'a str>) -> Result<Cow<'a, str>, RouteError> {
    if let Some(key) = key.filter(|k| !k.is_empty()) {
        return Ok(Cow::Borrowed(key));
    }
    match primary {
        Value::String(s) => Ok(Cow::Borrowed(s)),
        Value::Number(n) => Ok(Cow::Owned(n.to_string())),
        Value::Bool(b) => Ok(Cow::Owned(b.to_string())),
        Value::Null => Err(RouteError::Unmatchable { kind: "null" }),
        Value::Array(_) => Err(RouteError::Unmatchable { kind: "array" }),
        Value::Object(_) => Err(RouteError::Unmatchable { kind: "object" }),
    }
}
