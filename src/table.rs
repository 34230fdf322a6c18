//! # Routing Table Module
//!
//! Declarative pattern registrations loaded from a configuration file.
//!
//! ## Format
//!
//! The file format is chosen by extension: `.yaml`/`.yml`, `.json`, or
//! `.toml`. Routes are registered in file order, so the first route in the
//! file wins when several match.
//!
//! ```yaml
//! default_reply: "Sorry, regex not found"
//! routes:
//!   - name: com_address
//!     pattern: '^\w+@\w+\.com$'
//!     reply: "Commercial address: {0}"
//!   - name: org_address
//!     pattern: '^(\w+)@\w+\.org$'
//!     pass_primary: false
//!     reply: "Organization address: {0}"
//!   - name: yes
//!     pattern: '^[yY]'
//!     pass_primary: false
//!     reply: "yes"
//! ```
//!
//! Every route is served by a [`TemplateHandler`]; see its documentation
//! for the placeholder syntax.

use crate::disposition::{DirectReturn, Disposition};
use crate::handler::{SharedHandler, TemplateHandler};
use crate::router::Router;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A routing table: ordered routes plus an optional default reply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingTable {
    /// Reply for input that matches no route (direct-return routers only).
    /// Without it, unmatched input yields `null`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_reply: Option<String>,

    /// Routes in priority order
    #[serde(default)]
    pub routes: Vec<RouteSpec>,
}

/// One pattern registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSpec {
    /// Handler name reported by introspection
    pub name: String,
    /// Regular expression, matched at the start of the input
    pub pattern: String,
    /// Reply template rendered with the call arguments
    pub reply: String,
    /// Whether the routed value is passed to the handler
    #[serde(default = "default_pass_primary")]
    pub pass_primary: bool,
}

fn default_pass_primary() -> bool {
    true
}

impl RoutingTable {
    /// Load a table from a YAML, JSON or TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unknown
    /// extension, or does not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read routing table {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let table = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&content),
            "json" => Self::from_json_str(&content),
            "toml" => Self::from_toml_str(&content),
            other => bail!(
                "Unsupported routing table format '{}' for {} (expected yaml, yml, json or toml)",
                other,
                path.display()
            ),
        }
        .with_context(|| format!("Failed to parse routing table {}", path.display()))?;

        info!(
            path = %path.display(),
            routes = table.routes.len(),
            has_default_reply = table.default_reply.is_some(),
            "Routing table loaded"
        );
        Ok(table)
    }

    /// Parse a table from YAML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("Invalid YAML routing table")
    }

    /// Parse a table from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table.
    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Invalid JSON routing table")
    }

    /// Parse a table from TOML text (routes as `[[routes]]` array)
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid table.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid TOML routing table")
    }

    /// Register every route on `router`, in table order
    ///
    /// Returns the registered handlers in the same order.
    ///
    /// # Errors
    ///
    /// Fails on the first route whose pattern does not compile, naming the
    /// route. Routes before it stay registered.
    pub fn install<D: Disposition>(&self, router: &mut Router<D>) -> Result<Vec<SharedHandler>> {
        let mut handlers = Vec::with_capacity(self.routes.len());
        for route in &self.routes {
            let handler: SharedHandler = Arc::new(TemplateHandler::new(route.reply.clone()));
            let handler = router
                .register_named(&route.name, &route.pattern, handler, route.pass_primary)
                .with_context(|| format!("Invalid pattern for route '{}'", route.name))?;
            handlers.push(handler);
        }
        Ok(handlers)
    }

    /// Build a direct-return router serving this table
    ///
    /// The default handler renders `default_reply` (placeholders are not
    /// expanded; there are no arguments on a miss).
    ///
    /// # Errors
    ///
    /// Fails when a route's pattern does not compile.
    pub fn into_router(self) -> Result<Router<DirectReturn>> {
        let mut router = match self.default_reply.clone() {
            Some(reply) => Router::with_default(move || Ok(Value::String(reply.clone()))),
            None => Router::direct(),
        };
        self.install(&mut router)?;
        Ok(router)
    }
}
