//! Update a contact

use crate::config::{Connection, FailureOptions};
use crate::error::{Error, Result};
use crate::http::HubSpotClient;
use crate::task::{self, parse_property_bag, require, validate_contact_id, Task, TaskResult};
use crate::types::{ObjectType, PropertyBag};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio_util::sync::CancellationToken;

/// Input for updating a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContactInput {
    /// Id of the contact
    pub contact_id: String,

    /// Properties to update as a JSON object string, e.g. `{ "lastname": "Doe" }`
    pub update_data: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateContactOptions {
    /// Check that the contact exists before updating
    pub check_if_exists: bool,

    #[serde(flatten)]
    pub failure: FailureOptions,
}

pub struct UpdateContact {
    pub input: UpdateContactInput,
    pub options: UpdateContactOptions,
}

#[async_trait]
impl Task for UpdateContact {
    type Prepared = PropertyBag;
    type Output = ();
    const NAME: &'static str = "update_contact";

    fn failure_options(&self) -> &FailureOptions {
        &self.options.failure
    }

    fn validate(&self) -> Result<PropertyBag> {
        let id = require("ContactId", &self.input.contact_id)?;
        let raw = require("UpdateData", &self.input.update_data)?;
        validate_contact_id(id)?;
        parse_property_bag("UpdateData", raw)
    }

    async fn execute(&self, client: &HubSpotClient, properties: PropertyBag) -> Result<()> {
        let id = self.input.contact_id.as_str();

        if self.options.check_if_exists && !client.contact_exists(id).await? {
            return Err(Error::ContactNotFound { id: id.to_string() });
        }

        client
            .patch(
                &ObjectType::Contacts.object_path(id),
                json!({ "properties": properties }),
            )
            .await?
            .error_for_status()?;

        Ok(())
    }
}

/// Update a contact in HubSpot
pub async fn update_contact(
    input: UpdateContactInput,
    connection: &Connection,
    options: UpdateContactOptions,
    cancel: CancellationToken,
) -> Result<TaskResult<()>> {
    task::run(&UpdateContact { input, options }, connection, cancel).await
}
