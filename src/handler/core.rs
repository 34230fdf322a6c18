use crate::arguments::Arguments;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::sync::Arc;

/// A handler bound to a pattern.
///
/// Handlers must be `Send + Sync` so a fully registered router can be shared
/// read-only across threads. A returned error is never swallowed by the
/// router; it propagates to the caller of `route`.
pub trait Handler: Send + Sync {
    /// Invoke the handler with the final call bundle
    fn call(&self, args: Arguments) -> anyhow::Result<Value>;
}

impl<F> Handler for F
where
    F: Fn(Arguments) -> anyhow::Result<Value> + Send + Sync,
{
    fn call(&self, args: Arguments) -> anyhow::Result<Value> {
        self(args)
    }
}

/// Shared handle to a registered handler.
///
/// Registration hands this back unchanged, and lookups return a clone of the
/// same `Arc`, so `Arc::ptr_eq` identifies which handler an input would hit.
pub type SharedHandler = Arc<dyn Handler>;

/// No-argument default handler, invoked when no pattern matches.
pub trait Fallback: Send + Sync {
    /// Produce the result for an unmatched input
    fn call(&self) -> anyhow::Result<Value>;
}

impl<F> Fallback for F
where
    F: Fn() -> anyhow::Result<Value> + Send + Sync,
{
    fn call(&self) -> anyhow::Result<Value> {
        self()
    }
}

/// Receiver for handler results in sink-forward mode.
///
/// No `Send` bound: sinks live on the routing thread.
pub trait Sink {
    /// Accept one handler result
    fn accept(&self, value: Value) -> anyhow::Result<()>;
}

impl<F> Sink for F
where
    F: Fn(Value) -> anyhow::Result<()>,
{
    fn accept(&self, value: Value) -> anyhow::Result<()> {
        self(value)
    }
}

/// Same-thread FIFO sink that keeps every delivered result.
///
/// Results are appended in delivery order and can be inspected or drained
/// once routing returns.
#[derive(Debug, Default)]
pub struct Collector {
    queue: RefCell<VecDeque<Value>>,
}

impl Collector {
    /// Create an empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recently delivered result
    #[must_use]
    pub fn last(&self) -> Option<Value> {
        self.queue.borrow().back().cloned()
    }

    /// Remove and return every result in delivery order
    #[must_use = "drained results are gone from the collector"]
    pub fn drain(&self) -> Vec<Value> {
        self.queue.borrow_mut().drain(..).collect()
    }

    /// Number of results waiting in the queue
    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    /// True when nothing has been delivered since the last drain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl Sink for Collector {
    fn accept(&self, value: Value) -> anyhow::Result<()> {
        self.queue.borrow_mut().push_back(value);
        Ok(())
    }
}
