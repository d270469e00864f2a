//! Delete a contact
//!
//! A soft delete archives the contact. A hard delete uses the GDPR erase
//! endpoint, first by id and then, if that fails, by the contact's email.
//! A contact that is already gone counts as deleted.

use crate::config::{Connection, FailureOptions};
use crate::error::Result;
use crate::http::{ApiResponse, HubSpotClient, RequestConfig};
use crate::task::{self, require, validate_contact_id, Task, TaskResult};
use crate::types::{value_as_string, ObjectType};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Input for deleting a contact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteContactInput {
    /// Id of the contact to delete
    pub contact_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteContactOptions {
    /// Permanently erase the contact (GDPR delete)
    pub hard_delete: bool,

    #[serde(flatten)]
    pub failure: FailureOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GdprDeleteRequest<'a> {
    id_property: &'a str,
    object_id: &'a str,
}

pub struct DeleteContact {
    pub input: DeleteContactInput,
    pub options: DeleteContactOptions,
}

/// Erase by id, falling back to erase by email.
///
/// Returns `None` when the by-id erase failed and no email could be
/// found, meaning there is nothing left to erase.
async fn gdpr_delete(client: &HubSpotClient, id: &str) -> Result<Option<ApiResponse>> {
    let path = format!("{}/gdpr-delete", ObjectType::Contacts.collection_path());

    let response = send_gdpr_delete(client, &path, "id", id).await?;
    if response.is_success() {
        return Ok(Some(response));
    }

    warn!(
        contact_id = id,
        status = %response.status,
        "erase by id failed, retrying by email"
    );

    match contact_email(client, id).await? {
        Some(email) => Ok(Some(send_gdpr_delete(client, &path, "email", &email).await?)),
        None => Ok(None),
    }
}

async fn send_gdpr_delete(
    client: &HubSpotClient,
    path: &str,
    id_property: &str,
    object_id: &str,
) -> Result<ApiResponse> {
    let body = serde_json::to_value(GdprDeleteRequest {
        id_property,
        object_id,
    })?;
    client.post(path, body).await
}

/// Email of a contact, or `None` if the lookup fails or the contact has none
async fn contact_email(client: &HubSpotClient, id: &str) -> Result<Option<String>> {
    let response = client
        .get(
            &ObjectType::Contacts.object_path(id),
            RequestConfig::new().query("properties", "email"),
        )
        .await?;

    if !response.is_success() {
        return Ok(None);
    }

    let body = response.json()?;
    Ok(body
        .pointer("/properties/email")
        .and_then(value_as_string)
        .filter(|email| !email.trim().is_empty()))
}

#[async_trait]
impl Task for DeleteContact {
    type Prepared = ();
    type Output = ();
    const NAME: &'static str = "delete_contact";

    fn failure_options(&self) -> &FailureOptions {
        &self.options.failure
    }

    fn validate(&self) -> Result<()> {
        let id = require("ContactId", &self.input.contact_id)?;
        validate_contact_id(id)
    }

    async fn execute(&self, client: &HubSpotClient, _prepared: ()) -> Result<()> {
        let id = self.input.contact_id.as_str();

        let response = if self.options.hard_delete {
            match gdpr_delete(client, id).await? {
                Some(response) => response,
                None => {
                    info!(contact_id = id, "contact has no email, treating as deleted");
                    return Ok(());
                }
            }
        } else {
            client.delete_object(ObjectType::Contacts, id).await?
        };

        if response.is_not_found() {
            info!(contact_id = id, "contact not found, treating as deleted");
            return Ok(());
        }

        response.error_for_status()?;
        Ok(())
    }
}

/// Delete a contact in HubSpot
pub async fn delete_contact(
    input: DeleteContactInput,
    connection: &Connection,
    options: DeleteContactOptions,
    cancel: CancellationToken,
) -> Result<TaskResult<()>> {
    task::run(&DeleteContact { input, options }, connection, cancel).await
}
