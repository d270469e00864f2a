//! Deal to contact association

use crate::error::{Error, Result};
use crate::http::{HubSpotClient, RequestConfig};
use crate::types::ObjectType;
use tracing::debug;

/// HubSpot-defined association type id for deal → contact
pub const DEAL_TO_CONTACT_ASSOCIATION: u32 = 3;

/// Link an existing deal to a contact.
///
/// Sends `PUT crm/v3/objects/deals/{deal}/associations/contacts/{contact}/{type}`.
pub async fn associate_deal_with_contact(
    client: &HubSpotClient,
    deal_id: &str,
    contact_id: &str,
    association_type_id: u32,
) -> Result<()> {
    let path = format!(
        "{}/associations/{}/{contact_id}/{association_type_id}",
        ObjectType::Deals.object_path(deal_id),
        ObjectType::Contacts
    );

    let response = client.put(&path, RequestConfig::new()).await?;
    if !response.is_success() {
        return Err(Error::Association {
            status: response.status,
            detail: response.error_detail(),
        });
    }

    debug!(deal_id, contact_id, "associated deal with contact");
    Ok(())
}
