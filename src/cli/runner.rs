//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::{Connection, FailureOptions, DEFAULT_BASE_URL};
use crate::error::Result;
use crate::filter::{parse_filter_query, SearchFilter};
use crate::tasks::{
    create_contact, create_deal, delete_contact, get_contacts, update_contact,
    CreateContactInput, CreateContactOptions, CreateDealInput, CreateDealOptions,
    DeleteContactInput, DeleteContactOptions, GetContactsInput, GetContactsOptions,
    UpdateContactInput, UpdateContactOptions,
};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// CLI runner
pub struct Runner {
    cli: Cli,
    cancel: CancellationToken,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self {
            cli,
            cancel: CancellationToken::new(),
        }
    }

    /// Token that aborts the running task when cancelled
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Run the CLI command and print the result
    pub async fn run(&self) -> Result<()> {
        let output = self.execute().await?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return the result as JSON text
    pub async fn execute(&self) -> Result<String> {
        let cancel = self.cancel.clone();

        match &self.cli.command {
            Commands::CreateContact {
                data,
                validate_email,
            } => {
                let input = CreateContactInput {
                    contact_data: data.clone(),
                };
                let options = CreateContactOptions {
                    validate_email: *validate_email,
                    failure: self.failure_options(),
                };
                let result = create_contact(input, &self.connection()?, options, cancel).await?;
                self.render(&result)
            }
            Commands::CreateDeal {
                data,
                associate_with,
                association_type,
            } => {
                let input = CreateDealInput {
                    deal_data: data.clone(),
                };
                let options = CreateDealOptions {
                    associate_with_contact_id: associate_with.clone(),
                    association_type_id: *association_type,
                    failure: self.failure_options(),
                };
                let result = create_deal(input, &self.connection()?, options, cancel).await?;
                self.render(&result)
            }
            Commands::DeleteContact { id, hard_delete } => {
                let input = DeleteContactInput {
                    contact_id: id.clone(),
                };
                let options = DeleteContactOptions {
                    hard_delete: *hard_delete,
                    failure: self.failure_options(),
                };
                let result = delete_contact(input, &self.connection()?, options, cancel).await?;
                self.render(&result)
            }
            Commands::GetContacts {
                filter,
                properties,
                limit,
                after,
                include_archived,
            } => {
                let input = GetContactsInput {
                    filter_query: filter.clone(),
                    properties: properties.clone(),
                    limit: *limit,
                    after: after.clone(),
                };
                let options = GetContactsOptions {
                    include_archived: *include_archived,
                    failure: self.failure_options(),
                };
                let result = get_contacts(input, &self.connection()?, options, cancel).await?;
                self.render(&result)
            }
            Commands::UpdateContact {
                id,
                data,
                check_if_exists,
            } => {
                let input = UpdateContactInput {
                    contact_id: id.clone(),
                    update_data: data.clone(),
                };
                let options = UpdateContactOptions {
                    check_if_exists: *check_if_exists,
                    failure: self.failure_options(),
                };
                let result = update_contact(input, &self.connection()?, options, cancel).await?;
                self.render(&result)
            }
            Commands::ParseFilter { query } => {
                let filter: SearchFilter = parse_filter_query(query)?.into();
                self.render(&filter)
            }
        }
    }

    /// Build the connection: file first, then flags/env on top
    fn connection(&self) -> Result<Connection> {
        let mut connection = match &self.cli.connection {
            Some(path) => Connection::from_file(path)?,
            None => Connection::new("", DEFAULT_BASE_URL),
        };

        if let Some(api_key) = &self.cli.api_key {
            connection.api_key.clone_from(api_key);
        }
        if let Some(base_url) = &self.cli.base_url {
            connection.base_url.clone_from(base_url);
        }
        Ok(connection)
    }

    fn failure_options(&self) -> FailureOptions {
        FailureOptions {
            throw_error_on_failure: !self.cli.no_throw,
            error_message_on_failure: self.cli.error_message.clone(),
        }
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        let text = if self.cli.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(text)
    }
}
