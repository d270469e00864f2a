//! Failure handling shared by all tasks

use super::result::TaskResult;
use crate::config::FailureOptions;
use crate::error::{Error, Result};
use tracing::warn;

/// Message reported for a fault: `"<override> <fault>"`, or just the fault's
/// message when the override is absent or empty.
pub fn effective_message(fault: &Error, override_message: Option<&str>) -> String {
    match override_message {
        Some(prefix) if !prefix.is_empty() => format!("{prefix} {fault}"),
        _ => fault.to_string(),
    }
}

/// Raise a remote fault or turn it into a failed result.
///
/// With `throw_error_on_failure` set, returns [`Error::Failure`] carrying the
/// effective message and the original fault as its source. Otherwise returns
/// `Ok` with a failed [`TaskResult`].
pub fn handle_failure<T>(fault: Error, options: &FailureOptions) -> Result<TaskResult<T>> {
    let message = effective_message(&fault, options.error_message_on_failure.as_deref());

    if options.throw_error_on_failure {
        return Err(Error::Failure {
            message,
            source: Box::new(fault),
        });
    }

    warn!(error = %message, "task failed");
    Ok(TaskResult::failure(message, fault))
}
