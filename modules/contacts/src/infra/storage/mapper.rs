//! Conversions between database entities and domain models.

use crate::domain::model::{Address, Contact, DocumentType, Phone};
use crate::infra::storage::entity;

impl From<entity::contact::Model> for Contact {
    fn from(e: entity::contact::Model) -> Self {
        Self {
            id: e.id,
            first_name: e.first_name,
            last_name: e.last_name,
            birth_date: e.birth_date,
            document_number: e.document_number,
            document_type_id: e.document_type_id,
            email: e.email,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<entity::phone::Model> for Phone {
    fn from(e: entity::phone::Model) -> Self {
        Self {
            id: e.id,
            contact_id: e.contact_id,
            phone_number: e.phone_number,
            phone_type: e.phone_type,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<entity::address::Model> for Address {
    fn from(e: entity::address::Model) -> Self {
        Self {
            id: e.id,
            contact_id: e.contact_id,
            address: e.address,
            city: e.city,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

impl From<entity::document_type::Model> for DocumentType {
    fn from(e: entity::document_type::Model) -> Self {
        Self {
            id: e.id,
            name: e.name,
        }
    }
}
