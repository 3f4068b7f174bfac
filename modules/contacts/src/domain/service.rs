use std::sync::Arc;

use chrono::Utc;
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::error::DomainError;
use super::model::{Address, Contact, ContactAggregate, NewContact, Phone};
use super::repo::ContactsRepository;

/// Configuration for the domain service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub max_field_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_field_length: 255,
        }
    }
}

/// Domain service with business rules for contact management.
/// Depends only on the repository port.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ContactsRepository>,
    config: ServiceConfig,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(repo: Arc<dyn ContactsRepository>, config: ServiceConfig) -> Self {
        Self { repo, config }
    }

    /// Create a contact with its phones and addresses.
    ///
    /// The identifier is generated here, not by the database. The parent row
    /// is persisted first, then all child rows concurrently. There is no
    /// transaction around the writes; a failure partway leaves the rows
    /// written so far in place.
    #[instrument(skip(self, new_contact), fields(email = %new_contact.email))]
    pub async fn create_contact(
        &self,
        new_contact: NewContact,
    ) -> Result<ContactAggregate, DomainError> {
        info!("Creating new contact");

        self.validate_contact_input(&new_contact)?;

        let now = Utc::now();
        let id = Uuid::new_v4();

        let contact = Contact {
            id,
            first_name: new_contact.first_name,
            last_name: new_contact.last_name,
            birth_date: new_contact.birth_date,
            document_number: new_contact.document_number,
            document_type_id: new_contact.document_type_id,
            email: new_contact.email,
            created_at: now,
            updated_at: now,
        };

        let phones: Vec<Phone> = new_contact
            .phones
            .into_iter()
            .map(|p| Phone {
                id: Uuid::new_v4(),
                contact_id: id,
                phone_number: p.phone_number,
                phone_type: p.phone_type,
                created_at: now,
                updated_at: now,
            })
            .collect();

        let addresses: Vec<Address> = new_contact
            .addresses
            .into_iter()
            .map(|a| Address {
                id: Uuid::new_v4(),
                contact_id: id,
                address: a.address,
                city: a.city,
                created_at: now,
                updated_at: now,
            })
            .collect();

        self.repo
            .insert_contact(contact.clone())
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        futures::try_join!(
            try_join_all(phones.iter().cloned().map(|p| self.repo.insert_phone(p))),
            try_join_all(
                addresses
                    .iter()
                    .cloned()
                    .map(|a| self.repo.insert_address(a))
            ),
        )
        .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully created contact with id={}", contact.id);
        Ok(ContactAggregate {
            contact,
            document_type: None,
            phones,
            addresses,
        })
    }

    /// Exact-match lookup by email, with document type, phones and addresses.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn get_contact_by_email(&self, email: &str) -> Result<ContactAggregate, DomainError> {
        debug!("Getting contact by email");

        let contact = self
            .repo
            .find_by_email(email)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(DomainError::contact_not_found)?;

        self.load_aggregate(contact).await
    }

    /// Substring search against first name, last name or document number.
    /// Returns an empty list, never an error, when nothing matches.
    #[instrument(skip(self), fields(term = %term))]
    pub async fn search_by_personal_data(
        &self,
        term: &str,
    ) -> Result<Vec<ContactAggregate>, DomainError> {
        debug!("Searching contacts by personal data");

        let contacts = self
            .repo
            .search_personal_data(term)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let aggregates =
            try_join_all(contacts.into_iter().map(|c| self.load_aggregate(c))).await?;

        debug!("Found {} contacts", aggregates.len());
        Ok(aggregates)
    }

    /// Exact phone-number match via the phones join. Several contacts may
    /// share a number; all of them are returned.
    #[instrument(skip(self), fields(phone = %phone_number))]
    pub async fn search_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<Vec<ContactAggregate>, DomainError> {
        debug!("Searching contacts by phone number");

        let contacts = self
            .repo
            .find_by_phone_number(phone_number)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        try_join_all(contacts.into_iter().map(|c| self.load_aggregate(c))).await
    }

    /// Substring match against address text via the addresses join.
    #[instrument(skip(self), fields(address = %address))]
    pub async fn search_by_address(
        &self,
        address: &str,
    ) -> Result<Vec<ContactAggregate>, DomainError> {
        debug!("Searching contacts by address");

        let contacts = self
            .repo
            .find_by_address(address)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        try_join_all(contacts.into_iter().map(|c| self.load_aggregate(c))).await
    }

    /// Overwrite a contact from the given input.
    ///
    /// Scalar fields are overwritten unconditionally. Child rows are merged
    /// POSITIONALLY: the existing row at index i takes the incoming values at
    /// index i when present. A shorter incoming list leaves the trailing
    /// existing rows untouched; a longer one drops the extra entries, since
    /// only existing-row slots are written to. Parent and children are then
    /// persisted concurrently.
    #[instrument(skip(self, updated), fields(contact_id = %id))]
    pub async fn edit_contact(
        &self,
        id: Uuid,
        updated: NewContact,
    ) -> Result<ContactAggregate, DomainError> {
        info!("Editing contact");

        self.validate_contact_input(&updated)?;

        let contact = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(DomainError::contact_not_found)?;

        let mut aggregate = self.load_aggregate(contact).await?;

        let now = Utc::now();
        let contact = &mut aggregate.contact;
        contact.first_name = updated.first_name;
        contact.last_name = updated.last_name;
        contact.birth_date = updated.birth_date;
        contact.document_number = updated.document_number;
        contact.document_type_id = updated.document_type_id;
        contact.email = updated.email;
        contact.updated_at = now;

        for (phone, incoming) in aggregate.phones.iter_mut().zip(updated.phones) {
            phone.phone_number = incoming.phone_number;
            phone.phone_type = incoming.phone_type;
            phone.updated_at = now;
        }

        for (address, incoming) in aggregate.addresses.iter_mut().zip(updated.addresses) {
            address.address = incoming.address;
            address.city = incoming.city;
            address.updated_at = now;
        }

        futures::try_join!(
            self.repo.update_contact(aggregate.contact.clone()),
            try_join_all(
                aggregate
                    .phones
                    .iter()
                    .cloned()
                    .map(|p| self.repo.update_phone(p))
            ),
            try_join_all(
                aggregate
                    .addresses
                    .iter()
                    .cloned()
                    .map(|a| self.repo.update_address(a))
            ),
        )
        .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully edited contact");
        Ok(aggregate)
    }

    /// Delete a contact and everything it owns: phones and addresses are
    /// removed concurrently, then the parent row.
    #[instrument(skip(self), fields(contact_id = %id))]
    pub async fn delete_contact(&self, id: Uuid) -> Result<(), DomainError> {
        info!("Deleting contact");

        let contact = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?
            .ok_or_else(DomainError::contact_not_found)?;

        futures::try_join!(
            self.repo.delete_phones_by_contact(contact.id),
            self.repo.delete_addresses_by_contact(contact.id),
        )
        .map_err(|e| DomainError::database(e.to_string()))?;

        self.repo
            .delete_contact(contact.id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        info!("Successfully deleted contact");
        Ok(())
    }

    /// Load the owned children and the document-type lookup row for a
    /// contact, concurrently.
    async fn load_aggregate(&self, contact: Contact) -> Result<ContactAggregate, DomainError> {
        let (phones, addresses, document_type) = futures::try_join!(
            self.repo.phones_by_contact(contact.id),
            self.repo.addresses_by_contact(contact.id),
            self.repo.find_document_type(contact.document_type_id),
        )
        .map_err(|e| DomainError::database(e.to_string()))?;

        Ok(ContactAggregate {
            contact,
            document_type,
            phones,
            addresses,
        })
    }

    fn validate_contact_input(&self, input: &NewContact) -> Result<(), DomainError> {
        self.validate_email(&input.email)?;
        self.validate_field("firstName", &input.first_name)?;
        self.validate_field("lastName", &input.last_name)?;
        self.validate_field("documentNumber", &input.document_number)?;
        Ok(())
    }

    fn validate_email(&self, email: &str) -> Result<(), DomainError> {
        if email.is_empty() || !email.contains('@') {
            return Err(DomainError::validation("email", "invalid email format"));
        }
        if email.len() > self.config.max_field_length {
            return Err(DomainError::validation(
                "email",
                format!("exceeds maximum length of {}", self.config.max_field_length),
            ));
        }
        Ok(())
    }

    fn validate_field(&self, field: &str, value: &str) -> Result<(), DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field, "must not be empty"));
        }
        if value.len() > self.config.max_field_length {
            return Err(DomainError::validation(
                field,
                format!("exceeds maximum length of {}", self.config.max_field_length),
            ));
        }
        Ok(())
    }
}
