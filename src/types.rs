//! Common types used throughout the HubSpot tasks
//!
//! This module contains shared type definitions, type aliases,
//! and the CRM object paths used across multiple tasks.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Ordered property bag sent as `properties` on create/update requests.
///
/// Keys keep their input order (serde_json `preserve_order`).
pub type PropertyBag = JsonObject;

// ============================================================================
// CRM Objects
// ============================================================================

/// Prefix for every CRM v3 object endpoint
pub const CRM_OBJECTS_PATH: &str = "crm/v3/objects";

/// CRM object types addressed by the tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    Contacts,
    Deals,
}

impl ObjectType {
    /// Path segment used by the CRM API
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Contacts => "contacts",
            ObjectType::Deals => "deals",
        }
    }

    /// Collection path, e.g. `crm/v3/objects/contacts`
    pub fn collection_path(self) -> String {
        format!("{CRM_OBJECTS_PATH}/{}", self.as_str())
    }

    /// Single object path, e.g. `crm/v3/objects/contacts/123`
    pub fn object_path(self, id: &str) -> String {
        format!("{}/{id}", self.collection_path())
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// JSON helpers
// ============================================================================

/// Render a scalar JSON value as a string.
///
/// HubSpot returns ids and cursors as strings, but numbers are accepted too.
/// `null`, arrays and objects yield `None`.
pub fn value_as_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
