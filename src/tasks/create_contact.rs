//! Create a contact

use crate::config::{Connection, FailureOptions};
use crate::error::{Error, Result};
use crate::http::HubSpotClient;
use crate::task::{self, is_valid_email, parse_property_bag, require, Task, TaskResult};
use crate::types::{value_as_string, ObjectType, PropertyBag};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// Input for creating a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateContactInput {
    /// Contact properties as a JSON object string,
    /// e.g. `{ "email": "john@example.com", "firstname": "John" }`
    pub contact_data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateContactOptions {
    /// Validate the `email` property before sending
    pub validate_email: bool,

    #[serde(flatten)]
    pub failure: FailureOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactOutput {
    /// Id of the created contact
    pub contact_id: Option<String>,
}

pub struct CreateContact {
    pub input: CreateContactInput,
    pub options: CreateContactOptions,
}

#[async_trait]
impl Task for CreateContact {
    type Prepared = PropertyBag;
    type Output = CreateContactOutput;
    const NAME: &'static str = "create_contact";

    fn failure_options(&self) -> &FailureOptions {
        &self.options.failure
    }

    fn validate(&self) -> Result<PropertyBag> {
        let raw = require("ContactData", &self.input.contact_data)?;
        let properties = parse_property_bag("ContactData", raw)?;

        if self.options.validate_email {
            if let Some(value) = properties.get("email") {
                let email = value_as_string(value).unwrap_or_default();
                if !is_valid_email(&email) {
                    return Err(Error::InvalidEmail { email });
                }
            }
        }

        Ok(properties)
    }

    async fn execute(
        &self,
        client: &HubSpotClient,
        properties: PropertyBag,
    ) -> Result<CreateContactOutput> {
        let response = client
            .post(
                &ObjectType::Contacts.collection_path(),
                json!({ "properties": properties }),
            )
            .await?
            .error_for_status()?;

        let body = response.json()?;
        Ok(CreateContactOutput {
            contact_id: body.get("id").and_then(value_as_string),
        })
    }
}

/// Create a contact in HubSpot
pub async fn create_contact(
    input: CreateContactInput,
    connection: &Connection,
    options: CreateContactOptions,
    cancel: CancellationToken,
) -> Result<TaskResult<CreateContactOutput>> {
    task::run(&CreateContact { input, options }, connection, cancel).await
}
