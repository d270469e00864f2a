//! Filter types
//!
//! [`ParsedFilter`] is the parser's output. [`SearchRequest`] and friends are
//! the wire shapes of HubSpot's `contacts/search` body.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Operators
// ============================================================================

/// Number of values an operator takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// `HAS_PROPERTY`, `NOT_HAS_PROPERTY`
    None,
    /// Comparison and token operators
    Single,
    /// `BETWEEN`
    Range,
    /// `IN`, `NOT_IN`
    List,
}

/// Canonical HubSpot search operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Lt,
    Gte,
    Lte,
    Between,
    In,
    NotIn,
    HasProperty,
    NotHasProperty,
    ContainsToken,
    NotContainsToken,
}

impl FilterOperator {
    /// Name used by the HubSpot API
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Eq => "EQ",
            FilterOperator::Neq => "NEQ",
            FilterOperator::Gt => "GT",
            FilterOperator::Lt => "LT",
            FilterOperator::Gte => "GTE",
            FilterOperator::Lte => "LTE",
            FilterOperator::Between => "BETWEEN",
            FilterOperator::In => "IN",
            FilterOperator::NotIn => "NOT_IN",
            FilterOperator::HasProperty => "HAS_PROPERTY",
            FilterOperator::NotHasProperty => "NOT_HAS_PROPERTY",
            FilterOperator::ContainsToken => "CONTAINS_TOKEN",
            FilterOperator::NotContainsToken => "NOT_CONTAINS_TOKEN",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            FilterOperator::HasProperty | FilterOperator::NotHasProperty => Arity::None,
            FilterOperator::Between => Arity::Range,
            FilterOperator::In | FilterOperator::NotIn => Arity::List,
            FilterOperator::Eq
            | FilterOperator::Neq
            | FilterOperator::Gt
            | FilterOperator::Lt
            | FilterOperator::Gte
            | FilterOperator::Lte
            | FilterOperator::ContainsToken
            | FilterOperator::NotContainsToken => Arity::Single,
        }
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Parsed Filter
// ============================================================================

/// Value part of a filter, shaped by the operator's arity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    None,
    Single(String),
    Range { low: String, high: String },
    List(Vec<String>),
}

/// A single parsed filter clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilter {
    pub property_name: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl ParsedFilter {
    /// Single value, or the low bound of a `BETWEEN`
    pub fn value(&self) -> Option<&str> {
        match &self.value {
            FilterValue::Single(v) | FilterValue::Range { low: v, .. } => Some(v),
            _ => None,
        }
    }

    /// High bound of a `BETWEEN`
    pub fn high_value(&self) -> Option<&str> {
        match &self.value {
            FilterValue::Range { high, .. } => Some(high),
            _ => None,
        }
    }

    /// Values of an `IN` / `NOT_IN`
    pub fn values(&self) -> Option<&[String]> {
        match &self.value {
            FilterValue::List(values) => Some(values),
            _ => None,
        }
    }
}

// ============================================================================
// Search Request (wire format)
// ============================================================================

/// One filter inside a filter group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub property_name: String,
    pub operator: FilterOperator,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

impl From<ParsedFilter> for SearchFilter {
    fn from(parsed: ParsedFilter) -> Self {
        let (value, high_value, values) = match parsed.value {
            FilterValue::None => (None, None, None),
            FilterValue::Single(v) => (Some(v), None, None),
            FilterValue::Range { low, high } => (Some(low), Some(high), None),
            FilterValue::List(vs) => (None, None, Some(vs)),
        };
        Self {
            property_name: parsed.property_name,
            operator: parsed.operator,
            value,
            high_value,
            values,
        }
    }
}

/// Filters combined with AND
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub filters: Vec<SearchFilter>,
}

/// Body of `POST crm/v3/objects/contacts/search`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub filter_groups: Vec<FilterGroup>,
    pub properties: Vec<String>,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

impl SearchRequest {
    /// Request with one filter in one group
    pub fn single(
        filter: ParsedFilter,
        properties: Vec<String>,
        limit: u32,
        after: Option<String>,
    ) -> Self {
        Self {
            filter_groups: vec![FilterGroup {
                filters: vec![filter.into()],
            }],
            properties,
            limit,
            after: after.filter(|a| !a.trim().is_empty()),
        }
    }
}
