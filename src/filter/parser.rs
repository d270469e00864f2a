//! Filter query parser
//!
//! Parses `property operator value` into a [`ParsedFilter`].

use super::types::{Arity, FilterOperator, FilterValue, ParsedFilter};
use crate::error::{Error, Result};
use tracing::debug;

/// User-facing operator keywords and the operator each one maps to
pub const OPERATOR_KEYWORDS: &[(&str, FilterOperator)] = &[
    ("eq", FilterOperator::Eq),
    ("ne", FilterOperator::Neq),
    ("neq", FilterOperator::Neq),
    ("gt", FilterOperator::Gt),
    ("lt", FilterOperator::Lt),
    ("gte", FilterOperator::Gte),
    ("lte", FilterOperator::Lte),
    ("between", FilterOperator::Between),
    ("in", FilterOperator::In),
    ("not_in", FilterOperator::NotIn),
    ("has_property", FilterOperator::HasProperty),
    ("not_has_property", FilterOperator::NotHasProperty),
    ("contains", FilterOperator::ContainsToken),
    ("contains_token", FilterOperator::ContainsToken),
    ("not_contains_token", FilterOperator::NotContainsToken),
];

const QUOTES: &[char] = &['\'', '"'];

/// Look up an operator keyword, ignoring case
fn lookup_operator(keyword: &str) -> Option<FilterOperator> {
    let keyword = keyword.to_lowercase();
    OPERATOR_KEYWORDS
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, op)| *op)
}

/// Remove at most one quote character from each end
fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix(QUOTES).unwrap_or(value);
    value.strip_suffix(QUOTES).unwrap_or(value)
}

/// Split on commas, trimming each element
fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value.split(',').map(str::trim)
}

/// Parse a filter query into a structured filter
///
/// # Examples
///
/// ```
/// use hubspot_tasks::filter::{parse_filter_query, FilterOperator};
///
/// let filter = parse_filter_query("price between 100,500").unwrap();
/// assert_eq!(filter.operator, FilterOperator::Between);
/// assert_eq!(filter.value(), Some("100"));
/// assert_eq!(filter.high_value(), Some("500"));
/// ```
pub fn parse_filter_query(filter_query: &str) -> Result<ParsedFilter> {
    if filter_query.trim().is_empty() {
        return Err(Error::invalid_filter(
            "Filter query cannot be null or whitespace.",
        ));
    }

    let parts: Vec<&str> = filter_query.split_whitespace().collect();
    if parts.len() < 2 {
        return Err(Error::invalid_filter(
            "Invalid filter format. Use: 'property operator \"value\"' for value-based operators, or 'property has_property'.",
        ));
    }

    let property_name = parts[0].to_string();
    let operator = lookup_operator(parts[1])
        .ok_or_else(|| Error::invalid_filter(format!("Unsupported operator: {}", parts[1])))?;

    let joined = parts[2..].join(" ");
    let value_part = strip_outer_quotes(&joined);

    let value = match operator.arity() {
        Arity::None => {
            if !value_part.trim().is_empty() {
                return Err(Error::invalid_filter(format!(
                    "{operator} does not accept a value."
                )));
            }
            FilterValue::None
        }
        Arity::Single => {
            if value_part.trim().is_empty() {
                return Err(Error::invalid_filter(format!(
                    "{operator} operator requires a value."
                )));
            }
            FilterValue::Single(value_part.to_string())
        }
        Arity::Range => {
            let bounds: Vec<&str> = split_list(value_part).collect();
            match bounds.as_slice() {
                [low, high] if !low.is_empty() && !high.is_empty() => FilterValue::Range {
                    low: (*low).to_string(),
                    high: (*high).to_string(),
                },
                _ => {
                    return Err(Error::invalid_filter(
                        "BETWEEN operator requires two non-empty comma-separated values.",
                    ))
                }
            }
        }
        Arity::List => {
            let values: Vec<String> = split_list(value_part)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            if values.is_empty() {
                return Err(Error::invalid_filter(
                    "IN/NOT_IN operators require at least one non-empty comma-separated value.",
                ));
            }
            FilterValue::List(values)
        }
    };

    debug!(property = %property_name, %operator, "parsed filter query");

    Ok(ParsedFilter {
        property_name,
        operator,
        value,
    })
}
