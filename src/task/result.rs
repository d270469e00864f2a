//! Task result types

use crate::error::Error;
use serde::{Serialize, Serializer};
use std::sync::Arc;

/// Failure details of a task that did not raise
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskError {
    /// Summary of the error, including any override prefix
    pub message: String,

    /// The original fault, kept for diagnostics
    #[serde(serialize_with = "serialize_fault")]
    pub additional_info: Arc<Error>,
}

fn serialize_fault<S: Serializer>(
    fault: &Arc<Error>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(fault.as_ref())
}

/// Uniform result returned by every task.
///
/// `data` is set only on success, `error` only on a non-raising failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult<T> {
    pub success: bool,

    #[serde(flatten)]
    pub data: Option<T>,

    pub error: Option<TaskError>,
}

impl<T> TaskResult<T> {
    /// Successful result carrying the task's payload
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Failed result with the given message and original fault
    pub fn failure(message: impl Into<String>, fault: Error) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(TaskError {
                message: message.into(),
                additional_info: Arc::new(fault),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&TaskError> {
        self.error.as_ref()
    }
}
