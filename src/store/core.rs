use crate::handler::SharedHandler;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Pattern source that failed to compile.
///
/// Returned synchronously from registration. Nothing is stored when this
/// error is produced, so previously registered patterns are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSyntaxError {
    /// The pattern source as given to `register`
    pub pattern: String,
    /// Compiler diagnostic from the regex engine
    pub message: String,
}

impl fmt::Display for PatternSyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pattern '{}': {}", self.pattern, self.message)
    }
}

impl std::error::Error for PatternSyntaxError {}

/// A compiled pattern and the handler bound to it.
///
/// Immutable once created; re-registering the same source builds a new entry.
#[derive(Clone)]
pub struct PatternEntry {
    source: Arc<str>,
    /// `source` wrapped in `\A(?:...)` so a miss at offset 0 stops the scan
    regex: Regex,
    handler: SharedHandler,
    handler_name: Arc<str>,
    pass_primary: bool,
}

impl PatternEntry {
    /// The pattern source this entry was registered with
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The compiled pattern, anchored at the start of the text
    #[must_use]
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Shared handle to the bound handler
    #[must_use]
    pub fn handler(&self) -> &SharedHandler {
        &self.handler
    }

    /// Name of the bound handler (the pattern source when registered unnamed)
    #[must_use]
    pub fn handler_name(&self) -> &str {
        &self.handler_name
    }

    /// Whether the primary value is forwarded to the handler
    #[must_use]
    pub fn pass_primary(&self) -> bool {
        self.pass_primary
    }
}

impl fmt::Debug for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternEntry")
            .field("source", &self.source())
            .field("handler_name", &self.handler_name)
            .field("pass_primary", &self.pass_primary)
            .finish_non_exhaustive()
    }
}

/// Successful match of a text against a stored pattern.
#[derive(Debug, Clone)]
pub struct PatternMatch<'a> {
    /// The entry whose pattern matched
    pub entry: &'a PatternEntry,
    /// Every capture group in pattern order; groups that did not participate
    /// are `Value::Null`
    pub captures: Vec<Value>,
    /// Named capture groups only, by name
    pub named: Map<String, Value>,
}

/// Ordered collection of pattern registrations.
#[derive(Clone, Default)]
pub struct PatternStore {
    entries: Vec<PatternEntry>,
    /// Pattern source -> position in `entries`
    index: HashMap<String, usize>,
}

impl PatternStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile `source` and bind it to `handler`
    ///
    /// The handler name defaults to the pattern source. Returns the handler
    /// unchanged so registrations can be chained.
    ///
    /// # Errors
    ///
    /// Returns [`PatternSyntaxError`] when `source` is not a valid regex.
    pub fn register(
        &mut self,
        source: &str,
        handler: SharedHandler,
        pass_primary: bool,
    ) -> Result<SharedHandler, PatternSyntaxError> {
        self.register_named(source, source, handler, pass_primary)
    }

    /// Compile `source` and bind it to `handler` under an explicit name
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
        let reject = |e: regex::Error| {
            warn!(pattern = %source, error = %e, "Pattern rejected");
            PatternSyntaxError {
                pattern: source.to_string(),
                message: e.to_string(),
            }
        };
        // The bare source is checked first: a source like `a)(b` only
        // compiles once wrapped.
        Regex::new(source).map_err(reject)?;
        let regex = Regex::new(&format!(r"\A(?:{source})")).map_err(reject)?;

        let entry = PatternEntry {
            source: Arc::from(source),
            regex,
            handler: Arc::clone(&handler),
            handler_name: Arc::from(name),
            pass_primary,
        };

        if let Some(&position) = self.index.get(source) {
            warn!(
                pattern = %source,
                handler_name = %name,
                position = position,
                "Replaced existing pattern registration"
            );
            self.entries[position] = entry;
        } else {
            self.index.insert(source.to_string(), self.entries.len());
            self.entries.push(entry);
            info!(
                pattern = %source,
                handler_name = %name,
                pass_primary = pass_primary,
                total_patterns = self.entries.len(),
                "Pattern registered"
            );
        }

        Ok(handler)
    }

    /// Entry of the first pattern, in registration order, that matches the
    /// start of `text`
    #[must_use]
    pub fn lookup(&self, text: &str) -> Option<&PatternEntry> {
        self.entries.iter().find(|entry| entry.regex.is_match(text))
    }

    /// First match in registration order, with its captures extracted
    ///
    /// The anchoring group is non-capturing, so group numbering and names
    /// are those of the registered source.
    #[must_use]
    pub fn find(&self, text: &str) -> Option<PatternMatch<'_>> {
        for entry in &self.entries {
            let Some(caps) = entry.regex.captures(text) else {
                continue;
            };

            let captures: Vec<Value> = caps
                .iter()
                .skip(1)
                .map(|group| group.map_or(Value::Null, |m| Value::String(m.as_str().to_string())))
                .collect();

            let mut named = Map::new();
            for name in entry.regex.capture_names().flatten() {
                let value = caps
                    .name(name)
                    .map_or(Value::Null, |m| Value::String(m.as_str().to_string()));
                named.insert(name.to_string(), value);
            }

            debug!(
                pattern = %entry.source(),
                handler_name = %entry.handler_name,
                captures = captures.len(),
                named_captures = named.len(),
                "Pattern matched"
            );
            return Some(PatternMatch {
                entry,
                captures,
                named,
            });
        }
        None
    }

    /// Number of registered patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in scan order
    #[must_use]
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Registered pattern sources in scan order
    pub fn sources(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(PatternEntry::source)
    }
}

impl fmt::Debug for PatternStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter()).finish()
    }
}
