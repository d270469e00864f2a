//! Filter query module
//!
//! Translates a compact single-clause filter expression into HubSpot's
//! structured search filter.
//!
//! # Grammar
//!
//! ```text
//! property operator [value[,value...]]
//! ```
//!
//! - `email eq 'test@example.com'`
//! - `price between 100,500`
//! - `lifecyclestage in lead,customer`
//! - `phone has_property`
//!
//! Operator keywords are case-insensitive. The value part may contain spaces
//! and one pair of surrounding quotes.

mod parser;
mod types;

pub use parser::{parse_filter_query, OPERATOR_KEYWORDS};
pub use types::{Arity, FilterGroup, FilterOperator, FilterValue, ParsedFilter, SearchFilter, SearchRequest};

#[cfg(test)]
mod tests;
