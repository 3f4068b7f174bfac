//! Contacts Module
//!
//! Contact management with a REST API and relational storage. A contact is
//! an aggregate: the contact row itself plus its owned phone numbers and
//! addresses, and a reference to a document-type lookup row.
//!
//! ## Layering
//!
//! - `api::rest` - axum handlers, DTOs and the response envelope
//! - `domain` - models, the `ContactsRepository` port and the service
//! - `infra::storage` - SeaORM entities, repository and migrations

pub mod api;
pub mod domain;
pub mod infra;

pub use domain::model::{
    Address, Contact, ContactAggregate, DocumentType, NewAddress, NewContact, NewPhone, Phone,
};
pub use domain::service::{Service, ServiceConfig};
