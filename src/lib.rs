// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::too_many_lines)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # HubSpot Tasks
//!
//! Single-shot HubSpot CRM operations with a uniform result contract.
//!
//! ## Features
//!
//! - **Contacts**: Create, update, delete (soft or GDPR erase) and retrieve
//! - **Deals**: Create, optionally associated with a contact
//! - **Filter Queries**: `property operator 'value'` strings parsed into CRM search filters
//! - **Failure Handling**: Remote faults either raise or become a failed [`TaskResult`]
//! - **Cancellation**: Every task takes a `CancellationToken`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use hubspot_tasks::{create_contact, Connection, CreateContactInput, CreateContactOptions};
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> hubspot_tasks::Result<()> {
//!     let connection = Connection::new("pat-...", hubspot_tasks::config::DEFAULT_BASE_URL);
//!     let input = CreateContactInput {
//!         contact_data: r#"{ "email": "john@example.com" }"#.to_string(),
//!     };
//!
//!     let result = create_contact(
//!         input,
//!         &connection,
//!         CreateContactOptions::default(),
//!         CancellationToken::new(),
//!     )
//!     .await?;
//!
//!     println!("{}", serde_json::to_string(&result)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                     Task Interface                          │
//! │   validate() → Prepared      execute(client) → Output       │
//! │   run(task, connection, cancel) → TaskResult<Output>        │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴─────┬──────────────┬──────────┐
//! │    Tasks     │       HTTP         │    Filter    │  Failure │
//! ├──────────────┼────────────────────┼──────────────┼──────────┤
//! │ Contacts     │ Bearer auth        │ Tokenize     │ Throw    │
//! │ Deals        │ Cancellation       │ Operators    │ Result   │
//! │ Association  │ Error detail       │ Arity        │ Message  │
//! └──────────────┴────────────────────┴──────────────┴──────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Connection and failure options
pub mod config;

/// Authenticated HubSpot HTTP client
pub mod http;

/// Filter query parsing
pub mod filter;

/// Task contract, result type and failure handling
pub mod task;

/// The HubSpot tasks
pub mod tasks;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{Connection, FailureOptions};
pub use error::{Error, Result};
pub use task::{TaskError, TaskResult};
pub use tasks::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
