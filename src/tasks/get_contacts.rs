//! Retrieve contacts, optionally narrowed by a filter query

use crate::config::{Connection, FailureOptions};
use crate::error::Result;
use crate::filter::{parse_filter_query, SearchRequest};
use crate::http::{HubSpotClient, RequestConfig};
use crate::task::{self, Task, TaskResult};
use crate::types::{value_as_string, JsonValue, ObjectType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Input for retrieving contacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GetContactsInput {
    /// Filter in `property operator 'value'` form, e.g. `email eq 'test@example.com'`
    pub filter_query: Option<String>,

    /// Contact properties to return
    pub properties: Vec<String>,

    /// Maximum number of contacts to return
    pub limit: u32,

    /// Paging cursor from a previous call
    pub after: Option<String>,
}

impl Default for GetContactsInput {
    fn default() -> Self {
        Self {
            filter_query: None,
            properties: Vec::new(),
            limit: 100,
            after: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetContactsOptions {
    /// Include archived contacts (listing only)
    pub include_archived: bool,

    #[serde(flatten)]
    pub failure: FailureOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContactsOutput {
    /// Contact objects as returned by HubSpot
    pub contacts: JsonValue,

    /// Whether another page is available
    pub has_more: bool,

    /// Cursor for the next page
    pub next_page_cursor: Option<String>,
}

/// How the contacts are fetched
#[derive(Debug, Clone)]
pub enum ContactQuery {
    /// `POST crm/v3/objects/contacts/search`
    Search(SearchRequest),
    /// `GET crm/v3/objects/contacts` with query parameters
    List(RequestConfig),
}

pub struct GetContacts {
    pub input: GetContactsInput,
    pub options: GetContactsOptions,
}

impl GetContacts {
    fn after(&self) -> Option<&str> {
        self.input
            .after
            .as_deref()
            .filter(|after| !after.trim().is_empty())
    }

    fn list_request(&self) -> RequestConfig {
        let mut config =
            RequestConfig::new().query("archived", self.options.include_archived.to_string());

        if !self.input.properties.is_empty() {
            config = config.query("properties", self.input.properties.join(","));
        }
        if self.input.limit > 0 {
            config = config.query("limit", self.input.limit.to_string());
        }
        if let Some(after) = self.after() {
            config = config.query("after", after);
        }
        config
    }
}

#[async_trait]
impl Task for GetContacts {
    type Prepared = ContactQuery;
    type Output = GetContactsOutput;
    const NAME: &'static str = "get_contacts";

    fn failure_options(&self) -> &FailureOptions {
        &self.options.failure
    }

    fn validate(&self) -> Result<ContactQuery> {
        match self
            .input
            .filter_query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
        {
            Some(query) => {
                let filter = parse_filter_query(query)?;
                Ok(ContactQuery::Search(SearchRequest::single(
                    filter,
                    self.input.properties.clone(),
                    self.input.limit,
                    self.after().map(str::to_string),
                )))
            }
            None => Ok(ContactQuery::List(self.list_request())),
        }
    }

    async fn execute(
        &self,
        client: &HubSpotClient,
        query: ContactQuery,
    ) -> Result<GetContactsOutput> {
        let response = match query {
            ContactQuery::Search(search) => {
                debug!("searching contacts");
                let path = format!("{}/search", ObjectType::Contacts.collection_path());
                client.post(&path, serde_json::to_value(&search)?).await?
            }
            ContactQuery::List(config) => {
                debug!("listing contacts");
                client
                    .get(&ObjectType::Contacts.collection_path(), config)
                    .await?
            }
        }
        .error_for_status()?;

        let body = response.json()?;
        let next_page_cursor = body
            .pointer("/paging/next/after")
            .and_then(value_as_string)
            .filter(|cursor| !cursor.is_empty());

        Ok(GetContactsOutput {
            contacts: body
                .get("results")
                .cloned()
                .unwrap_or_else(|| JsonValue::Array(Vec::new())),
            has_more: next_page_cursor.is_some(),
            next_page_cursor,
        })
    }
}

/// Retrieve contacts from HubSpot
pub async fn get_contacts(
    input: GetContactsInput,
    connection: &Connection,
    options: GetContactsOptions,
    cancel: CancellationToken,
) -> Result<TaskResult<GetContactsOutput>> {
    task::run(&GetContacts { input, options }, connection, cancel).await
}
