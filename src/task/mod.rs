//! Task execution contract
//!
//! Every task follows the same protocol:
//!
//! 1. Validate the connection and the task input. Validation faults are
//!    always raised.
//! 2. Perform the HTTP call(s) against HubSpot.
//! 3. On success, wrap the payload in a successful [`TaskResult`].
//! 4. On a remote fault, let [`handle_failure`] either raise it or return a
//!    failed [`TaskResult`], depending on [`FailureOptions`].
//!
//! [`run`] implements this once for any type implementing [`Task`].
//!
//! [`FailureOptions`]: crate::config::FailureOptions

mod executor;
mod handler;
mod result;
mod validation;

pub use executor::{run, Task};
pub use handler::{effective_message, handle_failure};
pub use result::{TaskError, TaskResult};
pub use validation::{is_valid_email, parse_property_bag, require, validate_contact_id};

#[cfg(test)]
mod tests;
