//! HubSpot tasks
//!
//! Each task has an input struct, an options struct embedding
//! [`FailureOptions`](crate::config::FailureOptions), an output payload and a
//! convenience function that runs it:
//!
//! | Task | Function | Endpoint |
//! |------|----------|----------|
//! | Create contact | [`create_contact`] | `POST crm/v3/objects/contacts` |
//! | Create deal | [`create_deal`] | `POST crm/v3/objects/deals` |
//! | Delete contact | [`delete_contact`] | `DELETE crm/v3/objects/contacts/{id}` or `POST .../gdpr-delete` |
//! | Get contacts | [`get_contacts`] | `GET crm/v3/objects/contacts` or `POST .../search` |
//! | Update contact | [`update_contact`] | `PATCH crm/v3/objects/contacts/{id}` |

mod association;
mod create_contact;
mod create_deal;
mod delete_contact;
mod get_contacts;
mod update_contact;

pub use association::{associate_deal_with_contact, DEAL_TO_CONTACT_ASSOCIATION};
pub use create_contact::{
    create_contact, CreateContact, CreateContactInput, CreateContactOptions, CreateContactOutput,
};
pub use create_deal::{create_deal, CreateDeal, CreateDealInput, CreateDealOptions, CreateDealOutput};
pub use delete_contact::{delete_contact, DeleteContact, DeleteContactInput, DeleteContactOptions};
pub use get_contacts::{
    get_contacts, ContactQuery, GetContacts, GetContactsInput, GetContactsOptions,
    GetContactsOutput,
};
pub use update_contact::{update_contact, UpdateContact, UpdateContactInput, UpdateContactOptions};
