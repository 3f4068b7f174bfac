//! Domain models for the contact aggregate.
//!
//! Plain data structs with explicit foreign-key fields. Relations are loaded
//! with explicit queries in the repository; there is no lazy loading.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A stored contact row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub document_number: String,
    pub document_type_id: i32,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A phone number owned by exactly one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub phone_number: String,
    pub phone_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An address owned by exactly one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Document-type lookup row. Referenced by contacts, never cascaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentType {
    pub id: i32,
    pub name: String,
}

/// A contact together with its owned phones and addresses and the joined
/// document-type row when it was loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAggregate {
    pub contact: Contact,
    pub document_type: Option<DocumentType>,
    pub phones: Vec<Phone>,
    pub addresses: Vec<Address>,
}

/// Input for creating a contact. The same shape is accepted for edits:
/// scalar fields overwrite the stored row, child lists are merged
/// positionally onto the existing rows.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub document_number: String,
    pub document_type_id: i32,
    pub email: String,
    pub phones: Vec<NewPhone>,
    pub addresses: Vec<NewAddress>,
}

#[derive(Debug, Clone)]
pub struct NewPhone {
    pub phone_number: String,
    pub phone_type: String,
}

#[derive(Debug, Clone)]
pub struct NewAddress {
    pub address: String,
    pub city: String,
}
