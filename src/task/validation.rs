//! Input validation helpers

use crate::error::{Error, Result};
use crate::types::PropertyBag;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[^@\s<>()\[\],;:"]+@[^@\s<>()\[\],;:"]+$"#).unwrap()
});

/// Require a non-blank field, returning it unchanged
pub fn require<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::missing_field(field));
    }
    Ok(value)
}

/// Parse an embedded JSON document that must be an object
pub fn parse_property_bag(field: &str, raw: &str) -> Result<PropertyBag> {
    serde_json::from_str(raw).map_err(|e| Error::invalid_json(field, e))
}

/// Contact ids are digits only and must fit in an `i64`
pub fn validate_contact_id(id: &str) -> Result<()> {
    let numeric = !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit());
    if numeric && id.parse::<i64>().is_ok() {
        Ok(())
    } else {
        Err(Error::InvalidContactId { id: id.to_string() })
    }
}

/// Check an email address.
///
/// The address must be a single `local@domain` with no whitespace or
/// reserved characters, and the domain part must contain a dot.
pub fn is_valid_email(email: &str) -> bool {
    if !EMAIL_REGEX.is_match(email) {
        return false;
    }
    match (email.find('@'), email.rfind('.')) {
        (Some(at), Some(dot)) => at > 0 && at < dot,
        _ => false,
    }
}
