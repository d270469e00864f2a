//! Connection and shared option types
//!
//! Every task receives a [`Connection`] (who to talk to) and an options
//! struct that embeds [`FailureOptions`] (what to do when the remote call
//! fails). Connections can be built in code or loaded from a YAML/JSON file.

use crate::error::{Error, Result, ResultExt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use url::Url;

/// Default HubSpot API host
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

// ============================================================================
// Connection
// ============================================================================

/// Connection parameters shared by all tasks
#[derive(Clone, Serialize, Deserialize)]
pub struct Connection {
    /// HubSpot private app access token
    pub api_key: String,

    /// Base URL for the API, e.g. `https://api.hubapi.com`
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Connection {
    /// Create a connection from an access token and base URL
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Load a connection from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read connection file '{}': {e}",
                path.display()
            ))
        })?;
        content
            .parse::<Self>()
            .with_context(|| format!("Invalid connection file '{}'", path.display()))
    }

    /// Check the required fields.
    ///
    /// The base URL must be non-empty and parse as an absolute URL.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::missing_field("API Key"));
        }
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("Base URL"));
        }
        Url::parse(self.base_url.trim())?;
        Ok(())
    }

    /// Join a path onto the base URL, trimming any trailing slashes from the base
    pub fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

/// Parses YAML; JSON is accepted too since it is a YAML subset
impl FromStr for Connection {
    type Err = Error;

    fn from_str(content: &str) -> Result<Self> {
        let connection: Connection = serde_yaml::from_str(content)?;
        Ok(connection)
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .finish()
    }
}

// ============================================================================
// Failure Options
// ============================================================================

/// How a task reports a failed remote call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FailureOptions {
    /// Raise the fault instead of returning a failed result. True by default.
    pub throw_error_on_failure: bool,

    /// Prefix prepended to the fault's message
    pub error_message_on_failure: Option<String>,
}

impl Default for FailureOptions {
    fn default() -> Self {
        Self {
            throw_error_on_failure: true,
            error_message_on_failure: None,
        }
    }
}

impl FailureOptions {
    /// Options that return failed results instead of raising
    pub fn no_throw() -> Self {
        Self {
            throw_error_on_failure: false,
            error_message_on_failure: None,
        }
    }

    /// Set the override message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.error_message_on_failure = Some(message.into());
        self
    }
}
