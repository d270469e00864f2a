//! Tests for the filter query parser

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

// ============================================================================
// Parser
// ============================================================================

#[test]
fn test_parse_single_value() {
    let filter = parse_filter_query("age gt 25").unwrap();
    assert_eq!(filter.property_name, "age");
    assert_eq!(filter.operator, FilterOperator::Gt);
    assert_eq!(filter.value(), Some("25"));
    assert_eq!(filter.high_value(), None);
    assert_eq!(filter.values(), None);
}

#[test]
fn test_parse_between() {
    let filter = parse_filter_query("price between 100,500").unwrap();
    assert_eq!(
        filter,
        ParsedFilter {
            property_name: "price".to_string(),
            operator: FilterOperator::Between,
            value: FilterValue::Range {
                low: "100".to_string(),
                high: "500".to_string(),
            },
        }
    );
    assert_eq!(filter.value(), Some("100"));
    assert_eq!(filter.high_value(), Some("500"));
}

#[test]
fn test_parse_between_trims_bounds() {
    let filter = parse_filter_query("price between '100 , 500'").unwrap();
    assert_eq!(filter.value(), Some("100"));
    assert_eq!(filter.high_value(), Some("500"));
}

#[test]
fn test_parse_in_list() {
    let filter = parse_filter_query("p in a,b,c").unwrap();
    assert_eq!(filter.operator, FilterOperator::In);
    assert_eq!(
        filter.values().unwrap(),
        &["a".to_string(), "b".to_string(), "c".to_string()]
    );
    assert_eq!(filter.value(), None);
}

#[test]
fn test_parse_not_in_skips_empty_entries() {
    let filter = parse_filter_query("stage not_in lead, ,customer,").unwrap();
    assert_eq!(filter.operator, FilterOperator::NotIn);
    assert_eq!(
        filter.values().unwrap(),
        &["lead".to_string(), "customer".to_string()]
    );
}

#[test]
fn test_parse_has_property() {
    let filter = parse_filter_query("email has_property").unwrap();
    assert_eq!(filter.property_name, "email");
    assert_eq!(filter.operator, FilterOperator::HasProperty);
    assert_eq!(filter.value, FilterValue::None);
    assert_eq!(filter.value(), None);
    assert_eq!(filter.high_value(), None);
    assert_eq!(filter.values(), None);
}

#[test]
fn test_parse_quoted_value_with_spaces() {
    let filter = parse_filter_query("company eq \"Acme   Corp\"").unwrap();
    // Whitespace runs collapse to a single space when tokens are rejoined
    assert_eq!(filter.value(), Some("Acme Corp"));

    let filter = parse_filter_query("email eq 'test@example.com'").unwrap();
    assert_eq!(filter.value(), Some("test@example.com"));
}

#[test]
fn test_parse_strips_only_one_quote_per_side() {
    let filter = parse_filter_query("name eq ''quoted''").unwrap();
    assert_eq!(filter.value(), Some("'quoted'"));

    let filter = parse_filter_query("name eq 'half").unwrap();
    assert_eq!(filter.value(), Some("half"));
}

#[test]
fn test_parse_extra_whitespace() {
    let filter = parse_filter_query("   firstname \t  contains   John  ").unwrap();
    assert_eq!(filter.property_name, "firstname");
    assert_eq!(filter.operator, FilterOperator::ContainsToken);
    assert_eq!(filter.value(), Some("John"));
}

#[test_case("eq", FilterOperator::Eq ; "eq")]
#[test_case("EQ", FilterOperator::Eq ; "upper eq")]
#[test_case("ne", FilterOperator::Neq ; "ne")]
#[test_case("neq", FilterOperator::Neq ; "neq")]
#[test_case("gt", FilterOperator::Gt ; "gt")]
#[test_case("lt", FilterOperator::Lt ; "lt")]
#[test_case("Gte", FilterOperator::Gte ; "mixed gte")]
#[test_case("lte", FilterOperator::Lte ; "lte")]
#[test_case("contains", FilterOperator::ContainsToken ; "contains")]
#[test_case("contains_token", FilterOperator::ContainsToken ; "contains token")]
#[test_case("not_contains_token", FilterOperator::NotContainsToken ; "not contains token")]
fn test_single_value_keywords(keyword: &str, expected: FilterOperator) {
    let filter = parse_filter_query(&format!("prop {keyword} x")).unwrap();
    assert_eq!(filter.operator, expected);
    assert_eq!(filter.value(), Some("x"));
}

#[test_case("has_property", FilterOperator::HasProperty ; "has property")]
#[test_case("NOT_HAS_PROPERTY", FilterOperator::NotHasProperty ; "not has property")]
fn test_no_value_keywords(keyword: &str, expected: FilterOperator) {
    let filter = parse_filter_query(&format!("prop {keyword}")).unwrap();
    assert_eq!(filter.operator, expected);
    assert_eq!(filter.value, FilterValue::None);
}

#[test]
fn test_every_keyword_matches_its_arity() {
    for (keyword, operator) in OPERATOR_KEYWORDS {
        let query = match operator.arity() {
            Arity::None => format!("prop {keyword}"),
            Arity::Single => format!("prop {keyword} v"),
            Arity::Range => format!("prop {keyword} 1,2"),
            Arity::List => format!("prop {keyword} a,b"),
        };
        let filter = parse_filter_query(&query).unwrap();
        assert_eq!(filter.operator, *operator, "keyword {keyword}");
    }
}

// ============================================================================
// Parser Errors
// ============================================================================

#[test_case("" ; "empty")]
#[test_case("   \t " ; "whitespace")]
#[test_case("onlyonetoken" ; "one token")]
#[test_case("age like 5" ; "unknown operator")]
#[test_case("email has_property yes" ; "value on no value operator")]
#[test_case("age gt" ; "missing single value")]
#[test_case("age gt ''" ; "quoted empty value")]
#[test_case("price between 100" ; "one bound")]
#[test_case("price between 1,2,3" ; "three bounds")]
#[test_case("price between ,5" ; "empty low bound")]
#[test_case("stage in" ; "missing list")]
#[test_case("stage in , ," ; "only empty list entries")]
fn test_parse_rejects(query: &str) {
    let err = parse_filter_query(query).unwrap_err();
    assert!(matches!(err, Error::InvalidFilter { .. }), "{err}");
    assert!(err.is_validation());
}

#[test]
fn test_error_messages() {
    let err = parse_filter_query("price between 100").unwrap_err();
    assert!(err.to_string().contains("two"));

    let err = parse_filter_query("age like 5").unwrap_err();
    assert!(err.to_string().contains("Unsupported operator: like"));

    let err = parse_filter_query("email has_property yes").unwrap_err();
    assert!(err.to_string().contains("HAS_PROPERTY does not accept a value"));

    let err = parse_filter_query("age gt").unwrap_err();
    assert!(err.to_string().contains("GT operator requires a value"));
}

// ============================================================================
// Search Request
// ============================================================================

#[test]
fn test_search_filter_json_shapes() {
    let eq: SearchFilter = parse_filter_query("email eq a@b.co").unwrap().into();
    assert_eq!(
        serde_json::to_value(&eq).unwrap(),
        json!({"propertyName": "email", "operator": "EQ", "value": "a@b.co"})
    );

    let between: SearchFilter = parse_filter_query("price between 1,9").unwrap().into();
    assert_eq!(
        serde_json::to_value(&between).unwrap(),
        json!({"propertyName": "price", "operator": "BETWEEN", "value": "1", "highValue": "9"})
    );

    let list: SearchFilter = parse_filter_query("stage not_in a,b").unwrap().into();
    assert_eq!(
        serde_json::to_value(&list).unwrap(),
        json!({"propertyName": "stage", "operator": "NOT_IN", "values": ["a", "b"]})
    );

    let has: SearchFilter = parse_filter_query("phone has_property").unwrap().into();
    assert_eq!(
        serde_json::to_value(&has).unwrap(),
        json!({"propertyName": "phone", "operator": "HAS_PROPERTY"})
    );
}

#[test]
fn test_search_request_body() {
    let filter = parse_filter_query("email eq x@y.com").unwrap();
    let request = SearchRequest::single(
        filter,
        vec!["email".to_string(), "firstname".to_string()],
        10,
        Some("cursor-1".to_string()),
    );

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "filterGroups": [{
                "filters": [{"propertyName": "email", "operator": "EQ", "value": "x@y.com"}]
            }],
            "properties": ["email", "firstname"],
            "limit": 10,
            "after": "cursor-1"
        })
    );
}

#[test]
fn test_search_request_omits_blank_after() {
    let filter = parse_filter_query("email has_property").unwrap();
    let request = SearchRequest::single(filter, Vec::new(), 100, Some("  ".to_string()));
    let body = serde_json::to_value(&request).unwrap();
    assert!(body.get("after").is_none());
    assert_eq!(body["properties"], json!([]));
    assert_eq!(body["limit"], 100);
}
