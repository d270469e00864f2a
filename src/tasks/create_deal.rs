//! Create a deal, optionally associated with a contact

use super::association::{associate_deal_with_contact, DEAL_TO_CONTACT_ASSOCIATION};
use crate::config::{Connection, FailureOptions};
use crate::error::{Error, Result};
use crate::http::HubSpotClient;
use crate::task::{self, parse_property_bag, require, Task, TaskResult};
use crate::types::{value_as_string, ObjectType, PropertyBag};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Input for creating a deal
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDealInput {
    /// Deal properties as a JSON object string, e.g.
    /// `{ "amount": "5000", "dealname": "Enterprise Deal", "pipeline": "default" }`
    pub deal_data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateDealOptions {
    /// Contact to associate the new deal with
    pub associate_with_contact_id: Option<String>,

    /// Association type used for the link
    pub association_type_id: u32,

    #[serde(flatten)]
    pub failure: FailureOptions,
}

impl Default for CreateDealOptions {
    fn default() -> Self {
        Self {
            associate_with_contact_id: None,
            association_type_id: DEAL_TO_CONTACT_ASSOCIATION,
            failure: FailureOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDealOutput {
    /// Id of the created deal
    pub id: Option<String>,
}

pub struct CreateDeal {
    pub input: CreateDealInput,
    pub options: CreateDealOptions,
}

impl CreateDeal {
    fn association_target(&self) -> Option<&str> {
        self.options
            .associate_with_contact_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[async_trait]
impl Task for CreateDeal {
    type Prepared = PropertyBag;
    type Output = CreateDealOutput;
    const NAME: &'static str = "create_deal";

    fn failure_options(&self) -> &FailureOptions {
        &self.options.failure
    }

    fn validate(&self) -> Result<PropertyBag> {
        let raw = require("DealData", &self.input.deal_data)?;
        parse_property_bag("DealData", raw)
    }

    async fn execute(
        &self,
        client: &HubSpotClient,
        properties: PropertyBag,
    ) -> Result<CreateDealOutput> {
        let response = client
            .post(
                &ObjectType::Deals.collection_path(),
                json!({ "properties": properties }),
            )
            .await?
            .error_for_status()?;

        let body = response.json()?;
        let id = body.get("id").and_then(value_as_string);

        // A created deal is not rolled back if the association fails
        if let Some(contact_id) = self.association_target() {
            let deal_id = id.as_deref().ok_or_else(|| {
                Error::Other("HubSpot did not return an id for the created deal".to_string())
            })?;
            debug!(deal_id, contact_id, "associating deal");
            associate_deal_with_contact(
                client,
                deal_id,
                contact_id,
                self.options.association_type_id,
            )
            .await?;
        }

        Ok(CreateDealOutput { id })
    }
}

/// Create a deal in HubSpot
pub async fn create_deal(
    input: CreateDealInput,
    connection: &Connection,
    options: CreateDealOptions,
    cancel: CancellationToken,
) -> Result<TaskResult<CreateDealOutput>> {
    task::run(&CreateDeal { input, options }, connection, cancel).await
}
