//! CLI module
//!
//! Command-line interface for running HubSpot tasks.
//!
//! # Commands
//!
//! - `create-contact` - Create a contact from a JSON property object
//! - `create-deal` - Create a deal, optionally associated with a contact
//! - `delete-contact` - Archive or permanently erase a contact
//! - `get-contacts` - List or search contacts
//! - `update-contact` - Update a contact's properties
//! - `parse-filter` - Show the search filter a filter query translates to

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
