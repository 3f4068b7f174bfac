//! REST DTOs and the `{data | error | message}` response envelope.
//!
//! The wire format is camelCase JSON. The same request shape is accepted for
//! create and edit.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::model::{
    Address, ContactAggregate, DocumentType, NewAddress, NewContact, NewPhone, Phone,
};

/// REST DTO for creating or editing a contact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactReq {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub document_number: String,
    /// Identifier of the document-type lookup row
    pub document_type: i32,
    pub email: String,
    pub addresses: Vec<AddressReq>,
    pub phones: Vec<PhoneReq>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneReq {
    pub phone_number: String,
    pub phone_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressReq {
    pub address: String,
    pub city: String,
}

/// Query parameters for the personal-data search
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Substring matched against first name, last name or document number
    pub search_term: String,
}

/// REST DTO for the contact aggregate
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: NaiveDate,
    pub document_number: String,
    pub document_type_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentTypeDto>,
    pub email: String,
    pub phones: Vec<PhoneDto>,
    pub addresses: Vec<AddressDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhoneDto {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub phone_number: String,
    pub phone_type: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    pub id: Uuid,
    pub contact_id: Uuid,
    pub address: String,
    pub city: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DocumentTypeDto {
    pub id: i32,
    pub name: String,
}

// ==================== Response envelopes ====================

/// Success envelope wrapping a single contact
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactEnvelope {
    pub data: ContactDto,
}

/// Success envelope wrapping a list of contacts
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactListEnvelope {
    pub data: Vec<ContactDto>,
}

/// Success envelope carrying a plain message
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageEnvelope {
    pub message: String,
}

/// Failure envelope
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorEnvelope {
    pub error: String,
}

// Conversion implementations between REST DTOs and domain models

impl From<CreateContactReq> for NewContact {
    fn from(req: CreateContactReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            birth_date: req.birth_date,
            document_number: req.document_number,
            document_type_id: req.document_type,
            email: req.email,
            phones: req.phones.into_iter().map(Into::into).collect(),
            addresses: req.addresses.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<PhoneReq> for NewPhone {
    fn from(req: PhoneReq) -> Self {
        Self {
            phone_number: req.phone_number,
            phone_type: req.phone_type,
        }
    }
}

impl From<AddressReq> for NewAddress {
    fn from(req: AddressReq) -> Self {
        Self {
            address: req.address,
            city: req.city,
        }
    }
}

impl From<ContactAggregate> for ContactDto {
    fn from(aggregate: ContactAggregate) -> Self {
        let contact = aggregate.contact;
        Self {
            id: contact.id,
            first_name: contact.first_name,
            last_name: contact.last_name,
            birth_date: contact.birth_date,
            document_number: contact.document_number,
            document_type_id: contact.document_type_id,
            document_type: aggregate.document_type.map(Into::into),
            email: contact.email,
            phones: aggregate.phones.into_iter().map(Into::into).collect(),
            addresses: aggregate.addresses.into_iter().map(Into::into).collect(),
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

impl From<Phone> for PhoneDto {
    fn from(phone: Phone) -> Self {
        Self {
            id: phone.id,
            contact_id: phone.contact_id,
            phone_number: phone.phone_number,
            phone_type: phone.phone_type,
            created_at: phone.created_at,
            updated_at: phone.updated_at,
        }
    }
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            contact_id: address.contact_id,
            address: address.address,
            city: address.city,
            created_at: address.created_at,
            updated_at: address.updated_at,
        }
    }
}

impl From<DocumentType> for DocumentTypeDto {
    fn from(document_type: DocumentType) -> Self {
        Self {
            id: document_type.id,
            name: document_type.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactDto, CreateContactReq};
    use crate::domain::model::NewContact;

    #[test]
    fn create_request_uses_camel_case_wire_names() {
        let input = serde_json::json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "birthDate": "1815-12-10",
            "documentNumber": "AL-1815",
            "documentType": 1,
            "email": "ada@example.com",
            "addresses": [{"address": "12 St James Square", "city": "London"}],
            "phones": [{"phoneNumber": "+44 20 7946 0001", "phoneType": "home"}]
        });

        let req: CreateContactReq = serde_json::from_value(input).unwrap();
        assert_eq!(req.first_name, "Ada");
        assert_eq!(req.document_type, 1);
        assert_eq!(req.addresses.len(), 1);
        assert_eq!(req.phones[0].phone_number, "+44 20 7946 0001");
    }

    #[test]
    fn create_request_maps_to_domain_input() {
        let req = CreateContactReq {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            birth_date: "1815-12-10".parse().unwrap(),
            document_number: "AL-1815".into(),
            document_type: 2,
            email: "ada@example.com".into(),
            addresses: vec![],
            phones: vec![],
        };

        let new_contact = NewContact::from(req);
        assert_eq!(new_contact.document_type_id, 2);
        assert!(new_contact.phones.is_empty());
        assert!(new_contact.addresses.is_empty());
    }

    #[test]
    fn contact_dto_omits_missing_document_type() {
        let input = serde_json::json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "birthDate": "1815-12-10",
            "documentNumber": "AL-1815",
            "documentTypeId": 1,
            "email": "ada@example.com",
            "phones": [],
            "addresses": [],
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        });

        let dto: ContactDto = serde_json::from_value(input).unwrap();
        let out = serde_json::to_value(&dto).unwrap();
        assert!(out.get("documentType").is_none());
        assert_eq!(out["firstName"], "Ada");
    }
}
