use super::core::Handler;
use crate::arguments::Arguments;
use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// `{{` / `}}` escapes, or `{head.path.to.field}` where head is a positional
// index or a named argument.
#[allow(clippy::expect_used)]
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{|\}\}|\{([A-Za-z0-9_]+)((?:\.[A-Za-z0-9_]+)*)\}")
        .expect("placeholder regex is valid")
});

/// Handler that renders a reply string from its call arguments.
///
/// Placeholders:
///
/// - `{0}`, `{1}`, ... - positional arguments of the final call
/// - `{name}` - named argument (named capture group)
/// - `{0.address}` - field path into an object argument
/// - `{{` and `}}` - literal braces
///
/// String values render without quotes and `null` (an absent capture)
/// renders as the empty string; other values render as JSON. A placeholder
/// that does not resolve fails the call.
#[derive(Debug, Clone)]
pub struct TemplateHandler {
    template: String,
}

impl TemplateHandler {
    /// Create a handler for the given reply template
    #[must_use]
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// The raw template text
    #[must_use]
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Render the template against an argument bundle
    ///
    /// # Errors
    ///
    /// Returns an error naming the first placeholder that has no matching
    /// argument or field.
    pub fn render(&self, args: &Arguments) -> Result<String> {
        let mut out = String::with_capacity(self.template.len());
        let mut last = 0;

        for caps in PLACEHOLDER.captures_iter(&self.template) {
            let Some(whole) = caps.get(0) else { continue };
            out.push_str(&self.template[last..whole.start()]);
            last = whole.end();

            match whole.as_str() {
                "{{" => out.push('{'),
                "}}" => out.push('}'),
                _ => {
                    let head = caps.get(1).map_or("", |m| m.as_str());
                    let path = caps.get(2).map_or("", |m| m.as_str());
                    let value = resolve(args, head, path).ok_or_else(|| {
                        anyhow!(
                            "template placeholder '{}' has no matching argument",
                            whole.as_str()
                        )
                    })?;
                    push_value(&mut out, value);
                }
            }
        }

        out.push_str(&self.template[last..]);
        Ok(out)
    }
}

impl Handler for TemplateHandler {
    fn call(&self, args: Arguments) -> Result<Value> {
        self.render(&args).map(Value::String)
    }
}

fn resolve<'a>(args: &'a Arguments, head: &str, path: &str) -> Option<&'a Value> {
    let mut value = match head.parse::<usize>() {
        Ok(index) => args.positional(index)?,
        Err(_) => args.named(head)?,
    };
    for segment in path.split('.').filter(|s| !s.is_empty()) {
        value = match value {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(value)
}

fn push_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => out.push_str(s),
        Value::Null => {}
        other => out.push_str(&other.to_string()),
    }
}
