//! Tests for the task execution contract

use super::*;
use crate::config::{Connection, FailureOptions};
use crate::error::{Error, Result};
use crate::http::HubSpotClient;
use async_trait::async_trait;
use pretty_assertions::assert_eq as assert_json_eq;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::json;
use test_case::test_case;
use tokio_util::sync::CancellationToken;

fn api_fault() -> Error {
    Error::api(StatusCode::BAD_REQUEST, "Property values were not valid")
}

// ============================================================================
// Failure handler
// ============================================================================

#[test]
fn test_effective_message() {
    let fault = api_fault();
    assert_eq!(
        effective_message(&fault, Some("ctx")),
        format!("ctx {fault}")
    );
    assert_eq!(effective_message(&fault, Some("")), fault.to_string());
    assert_eq!(effective_message(&fault, None), fault.to_string());
}

#[test]
fn test_handle_failure_throws_with_cause() {
    let options = FailureOptions::default().with_message("ctx");
    let expected = format!("ctx {}", api_fault());

    let err = handle_failure::<()>(api_fault(), &options).unwrap_err();
    assert_eq!(err.to_string(), expected);

    match err {
        Error::Failure { source, .. } => {
            assert!(matches!(*source, Error::Api { .. }));
            assert_eq!(source.to_string(), api_fault().to_string());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_handle_failure_returns_error_result() {
    let options = FailureOptions::no_throw().with_message("ctx");
    let result = handle_failure::<String>(api_fault(), &options).unwrap();

    assert!(!result.success);
    assert!(result.data.is_none());
    let error = result.error.unwrap();
    assert_eq!(error.message, format!("ctx {}", api_fault()));
    assert!(matches!(*error.additional_info, Error::Api { .. }));
}

#[test]
fn test_handle_failure_without_override() {
    let result = handle_failure::<()>(api_fault(), &FailureOptions::no_throw()).unwrap();
    assert_eq!(result.error().unwrap().message, api_fault().to_string());
}

// ============================================================================
// Task result
// ============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct Created {
    contact_id: Option<String>,
}

#[test]
fn test_success_result_json() {
    let result = TaskResult::success(Created {
        contact_id: Some("123".to_string()),
    });
    assert!(result.is_success());
    assert!(result.error().is_none());
    assert_json_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": true, "contactId": "123", "error": null})
    );
}

#[test]
fn test_failure_result_json() {
    let result: TaskResult<Created> = TaskResult::failure("ctx boom", api_fault());
    assert_json_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "success": false,
            "error": {
                "message": "ctx boom",
                "additionalInfo": "HubSpot API error: 400 Bad Request - Property values were not valid"
            }
        })
    );
}

#[test]
fn test_unit_payload_json() {
    let result = TaskResult::success(());
    assert_json_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({"success": true, "error": null})
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_require() {
    assert_eq!(require("ContactId", "42").unwrap(), "42");
    let err = require("ContactId", "  ").unwrap_err();
    assert_eq!(err.to_string(), "ContactId is required");
}

#[test]
fn test_parse_property_bag() {
    let bag = parse_property_bag("ContactData", r#"{"email": "a@b.co", "age": 3}"#).unwrap();
    assert_eq!(bag["email"], "a@b.co");

    let err = parse_property_bag("ContactData", "{not json").unwrap_err();
    assert_eq!(err.to_string(), "Invalid JSON format in ContactData");

    // Must be an object
    let err = parse_property_bag("DealData", "[1, 2]").unwrap_err();
    assert_eq!(err.to_string(), "Invalid JSON format in DealData");
}

#[test_case("123" => true ; "digits")]
#[test_case("9223372036854775807" => true ; "i64 max")]
#[test_case("9223372036854775808" => false ; "overflow")]
#[test_case("" => false ; "empty")]
#[test_case("-5" => false ; "negative")]
#[test_case("12a" => false ; "letters")]
#[test_case(" 12" => false ; "leading space")]
fn test_validate_contact_id(id: &str) -> bool {
    validate_contact_id(id).is_ok()
}

#[test_case("john@example.com" => true ; "plain")]
#[test_case("first.last+tag@sub.example.co" => true ; "dotted local")]
#[test_case("john@localhost" => false ; "no dot")]
#[test_case("john.doe@localhost" => false ; "dot only before at")]
#[test_case("@example.com" => false ; "empty local")]
#[test_case("john@@example.com" => false ; "double at")]
#[test_case("john doe@example.com" => false ; "space")]
#[test_case("invalid-email" => false ; "no at")]
#[test_case("" => false ; "empty")]
fn test_is_valid_email(email: &str) -> bool {
    is_valid_email(email)
}

// ============================================================================
// Executor
// ============================================================================

struct StubTask {
    outcome: fn() -> Result<u32>,
    validation: fn() -> Result<()>,
    failure: FailureOptions,
}

#[async_trait]
impl Task for StubTask {
    type Prepared = ();
    type Output = u32;
    const NAME: &'static str = "stub";

    fn failure_options(&self) -> &FailureOptions {
        &self.failure
    }

    fn validate(&self) -> Result<()> {
        (self.validation)()
    }

    async fn execute(&self, _client: &HubSpotClient, _prepared: ()) -> Result<u32> {
        (self.outcome)()
    }
}

fn connection() -> Connection {
    Connection::new("token", "http://localhost:9")
}

#[tokio::test]
async fn test_run_success() {
    let task = StubTask {
        outcome: || Ok(7),
        validation: || Ok(()),
        failure: FailureOptions::default(),
    };
    let result = run(&task, &connection(), CancellationToken::new())
        .await
        .unwrap();
    assert!(result.success);
    assert_eq!(result.data, Some(7));
}

#[tokio::test]
async fn test_run_maps_remote_fault() {
    let task = StubTask {
        outcome: || Err(api_fault()),
        validation: || Ok(()),
        failure: FailureOptions::no_throw(),
    };
    let result = run(&task, &connection(), CancellationToken::new())
        .await
        .unwrap();
    assert!(!result.success);
    assert!(result.error.unwrap().message.contains("HubSpot API error"));
}

#[tokio::test]
async fn test_run_raises_validation_regardless_of_options() {
    let task = StubTask {
        outcome: || Ok(1),
        validation: || Err(Error::missing_field("ContactData")),
        failure: FailureOptions::no_throw(),
    };
    let err = run(&task, &connection(), CancellationToken::new())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "ContactData is required");
}

#[tokio::test]
async fn test_run_validates_connection_first() {
    let task = StubTask {
        outcome: || Ok(1),
        validation: || Err(Error::missing_field("ContactData")),
        failure: FailureOptions::no_throw(),
    };
    let err = run(
        &task,
        &Connection::new("", "http://localhost:9"),
        CancellationToken::new(),
    )
    .await
    .unwrap_err();
    assert_eq!(err.to_string(), "API Key is required");
}

#[tokio::test]
async fn test_run_propagates_cancellation() {
    let task = StubTask {
        outcome: || Err(Error::Cancelled),
        validation: || Ok(()),
        failure: FailureOptions::no_throw(),
    };
    let err = run(&task, &connection(), CancellationToken::new())
        .await
        .unwrap_err();
    assert!(err.is_cancelled());
}
