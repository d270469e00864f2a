//! HTTP client module
//!
//! Provides the authenticated HubSpot client used by every task.
//!
//! # Features
//!
//! - **Bearer Authentication**: Every request carries the connection's access token
//! - **Base URL Joining**: Paths are joined onto the connection's base URL
//! - **Cancellation**: In-flight requests abort when the task's token is cancelled
//! - **Response Interpretation**: Non-success statuses become API errors with
//!   the remote error detail

mod client;

pub use client::{ApiResponse, HubSpotClient, RequestConfig, DEFAULT_TIMEOUT, USER_AGENT};
