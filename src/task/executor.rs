//! Generic task executor

use super::handler::handle_failure;
use super::result::TaskResult;
use crate::config::{Connection, FailureOptions};
use crate::error::Result;
use crate::http::HubSpotClient;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// A single HubSpot operation
#[async_trait]
pub trait Task: Send + Sync {
    /// Validated input handed from [`Task::validate`] to [`Task::execute`]
    type Prepared: Send;

    /// Payload of a successful result
    type Output: Send;

    /// Task name used in logs
    const NAME: &'static str;

    /// Failure options for remote faults
    fn failure_options(&self) -> &FailureOptions;

    /// Check the task input. Errors here are always raised.
    fn validate(&self) -> Result<Self::Prepared>;

    /// Perform the HTTP call(s). Errors here go through the failure options.
    async fn execute(&self, client: &HubSpotClient, prepared: Self::Prepared)
        -> Result<Self::Output>;
}

/// Run a task end to end.
///
/// Connection and input validation faults, as well as cancellation, are
/// returned as `Err` regardless of the task's failure options.
pub async fn run<T: Task>(
    task: &T,
    connection: &Connection,
    cancel: CancellationToken,
) -> Result<TaskResult<T::Output>> {
    connection.validate()?;
    let prepared = task.validate()?;
    debug!(task = T::NAME, "input validated");

    let client = HubSpotClient::new(connection)?.with_cancellation(cancel);

    match task.execute(&client, prepared).await {
        Ok(output) => {
            info!(task = T::NAME, "task completed");
            Ok(TaskResult::success(output))
        }
        Err(e) if e.is_cancelled() || e.is_validation() => Err(e),
        Err(fault) => handle_failure(fault, task.failure_options()),
    }
}
