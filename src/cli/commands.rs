//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Run HubSpot CRM tasks from the command line
#[derive(Parser, Debug)]
#[command(name = "hubspot-tasks")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// HubSpot private app access token
    #[arg(long, global = true, env = "HUBSPOT_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL for the API
    #[arg(long, global = true, env = "HUBSPOT_BASE_URL")]
    pub base_url: Option<String>,

    /// Connection file (YAML or JSON) with `api_key` and `base_url`
    #[arg(short = 'C', long, global = true)]
    pub connection: Option<PathBuf>,

    /// Return a failed result instead of exiting with an error
    #[arg(long, global = true)]
    pub no_throw: bool,

    /// Prefix for error messages on failure
    #[arg(long, global = true)]
    pub error_message: Option<String>,

    /// Pretty-print the JSON result
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a contact
    CreateContact {
        /// Contact properties as a JSON object
        #[arg(long)]
        data: String,

        /// Validate the email property before sending
        #[arg(long)]
        validate_email: bool,
    },

    /// Create a deal
    CreateDeal {
        /// Deal properties as a JSON object
        #[arg(long)]
        data: String,

        /// Contact id to associate the deal with
        #[arg(long)]
        associate_with: Option<String>,

        /// Association type id
        #[arg(long, default_value = "3")]
        association_type: u32,
    },

    /// Delete a contact
    DeleteContact {
        /// Contact id
        #[arg(long)]
        id: String,

        /// Permanently erase the contact (GDPR delete)
        #[arg(long)]
        hard_delete: bool,
    },

    /// List or search contacts
    GetContacts {
        /// Filter query, e.g. "email eq 'test@example.com'"
        #[arg(short, long)]
        filter: Option<String>,

        /// Properties to return (comma-separated)
        #[arg(long, value_delimiter = ',')]
        properties: Vec<String>,

        /// Maximum number of contacts
        #[arg(long, default_value = "100")]
        limit: u32,

        /// Paging cursor
        #[arg(long)]
        after: Option<String>,

        /// Include archived contacts
        #[arg(long)]
        include_archived: bool,
    },

    /// Update a contact
    UpdateContact {
        /// Contact id
        #[arg(long)]
        id: String,

        /// Properties to update as a JSON object
        #[arg(long)]
        data: String,

        /// Check that the contact exists first
        #[arg(long)]
        check_if_exists: bool,
    },

    /// Print the search filter for a filter query
    ParseFilter {
        /// Filter query
        query: String,
    },
}
