use std::error::Error;
use std::fmt;

/// Failure of a single `route` call.
///
/// A missing match is not an error; it is handled by the router's
/// disposition. Handler, default-handler and sink failures are carried
/// through unchanged as the error source.
#[derive(Debug)]
pub enum RouteError {
    /// No key was given and the primary value has no string form to match
    Unmatchable {
        /// JSON kind of the primary value (`null`, `array`, `object`)
        kind: &'static str,
    },
    /// The matched handler returned an error
    Handler {
        /// Name of the handler that failed
        handler: String,
        /// The handler's error
        source: anyhow::Error,
    },
    /// The default handler returned an error
    Fallback(anyhow::Error),
    /// The sink refused a handler result
    Sink {
        /// Name of the handler whose result was being delivered
        handler: String,
        /// The sink's error
        source: anyhow::Error,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::Unmatchable { kind } => write!(
                f,
                "cannot match a {kind} value without a key; pass the text to match explicitly"
            ),
            RouteError::Handler { handler, source } => {
                write!(f, "handler '{handler}' failed: {source}")
            }
            RouteError::Fallback(source) => write!(f, "default handler failed: {source}"),
            RouteError::Sink { handler, source } => {
                write!(f, "sink rejected result of handler '{handler}': {source}")
            }
        }
    }
}

impl Error for RouteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RouteError::Unmatchable { .. } => None,
            RouteError::Handler { source, .. }
            | RouteError::Sink { source, .. }
            | RouteError::Fallback(source) => Some(&**source),
        }
    }
}
