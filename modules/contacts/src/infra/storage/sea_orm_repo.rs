//! SeaORM-backed repository implementation for the domain port.
//!
//! All relations are loaded and filtered with explicit queries; nothing is
//! lazy-loaded. Child rows are returned in insertion order (creation
//! timestamp, then id) so positional edits see a stable ordering.

use anyhow::Context;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::model::{Address, Contact, DocumentType, Phone};
use crate::domain::repo::ContactsRepository;
use crate::infra::storage::entity::address::{
    ActiveModel as AddressAM, Column as AddressColumn, Entity as AddressEntity,
};
use crate::infra::storage::entity::contact::{
    ActiveModel as ContactAM, Column as ContactColumn, Entity as ContactEntity,
    Relation as ContactRelation,
};
use crate::infra::storage::entity::document_type::Entity as DocumentTypeEntity;
use crate::infra::storage::entity::phone::{
    ActiveModel as PhoneAM, Column as PhoneColumn, Entity as PhoneEntity,
};

/// SeaORM repository over a shared connection pool.
#[derive(Clone)]
pub struct SeaOrmContactsRepository {
    db: DatabaseConnection,
}

impl SeaOrmContactsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn contact_active_model(c: Contact) -> ContactAM {
        ContactAM {
            id: Set(c.id),
            first_name: Set(c.first_name),
            last_name: Set(c.last_name),
            birth_date: Set(c.birth_date),
            document_number: Set(c.document_number),
            document_type_id: Set(c.document_type_id),
            email: Set(c.email),
            created_at: Set(c.created_at),
            updated_at: Set(c.updated_at),
        }
    }

    fn phone_active_model(p: Phone) -> PhoneAM {
        PhoneAM {
            id: Set(p.id),
            contact_id: Set(p.contact_id),
            phone_number: Set(p.phone_number),
            phone_type: Set(p.phone_type),
            created_at: Set(p.created_at),
            updated_at: Set(p.updated_at),
        }
    }

    fn address_active_model(a: Address) -> AddressAM {
        AddressAM {
            id: Set(a.id),
            contact_id: Set(a.contact_id),
            address: Set(a.address),
            city: Set(a.city),
            created_at: Set(a.created_at),
            updated_at: Set(a.updated_at),
        }
    }
}

#[async_trait]
impl ContactsRepository for SeaOrmContactsRepository {
    #[instrument(
        name = "contacts.repo.insert_contact",
        skip(self, contact),
        fields(db.operation = "INSERT", contact.id = %contact.id)
    )]
    async fn insert_contact(&self, contact: Contact) -> anyhow::Result<()> {
        debug!("Inserting contact row");

        let _ = Self::contact_active_model(contact)
            .insert(&self.db)
            .await
            .context("insert contact failed")?;
        Ok(())
    }

    #[instrument(
        name = "contacts.repo.insert_phone",
        skip(self, phone),
        fields(db.operation = "INSERT", phone.id = %phone.id)
    )]
    async fn insert_phone(&self, phone: Phone) -> anyhow::Result<()> {
        let _ = Self::phone_active_model(phone)
            .insert(&self.db)
            .await
            .context("insert phone failed")?;
        Ok(())
    }

    #[instrument(
        name = "contacts.repo.insert_address",
        skip(self, address),
        fields(db.operation = "INSERT", address.id = %address.id)
    )]
    async fn insert_address(&self, address: Address) -> anyhow::Result<()> {
        let _ = Self::address_active_model(address)
            .insert(&self.db)
            .await
            .context("insert address failed")?;
        Ok(())
    }

    #[instrument(
        name = "contacts.repo.find_by_id",
        skip(self),
        fields(db.operation = "SELECT", contact.id = %id)
    )]
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Contact>> {
        let found = ContactEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find_by_id query failed")?;
        Ok(found.map(Into::into))
    }

    #[instrument(
        name = "contacts.repo.find_by_email",
        skip(self),
        fields(db.operation = "SELECT", contact.email = %email)
    )]
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Contact>> {
        let found = ContactEntity::find()
            .filter(ContactColumn::Email.eq(email))
            .one(&self.db)
            .await
            .context("find_by_email query failed")?;
        Ok(found.map(Into::into))
    }

    #[instrument(
        name = "contacts.repo.search_personal_data",
        skip(self),
        fields(db.operation = "SELECT")
    )]
    async fn search_personal_data(&self, term: &str) -> anyhow::Result<Vec<Contact>> {
        debug!("Searching contacts by personal data substring");

        let pattern = format!("%{term}%");
        let found = ContactEntity::find()
            .filter(
                Condition::any()
                    .add(ContactColumn::FirstName.like(pattern.as_str()))
                    .add(ContactColumn::LastName.like(pattern.as_str()))
                    .add(ContactColumn::DocumentNumber.like(pattern.as_str())),
            )
            .all(&self.db)
            .await
            .context("search_personal_data query failed")?;
        Ok(found.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "contacts.repo.find_by_phone_number",
        skip(self),
        fields(db.operation = "SELECT")
    )]
    async fn find_by_phone_number(&self, phone_number: &str) -> anyhow::Result<Vec<Contact>> {
        let found = ContactEntity::find()
            .join(JoinType::InnerJoin, ContactRelation::Phones.def())
            .filter(PhoneColumn::PhoneNumber.eq(phone_number))
            .distinct()
            .all(&self.db)
            .await
            .context("find_by_phone_number query failed")?;
        Ok(found.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "contacts.repo.find_by_address",
        skip(self),
        fields(db.operation = "SELECT")
    )]
    async fn find_by_address(&self, address: &str) -> anyhow::Result<Vec<Contact>> {
        let pattern = format!("%{address}%");
        let found = ContactEntity::find()
            .join(JoinType::InnerJoin, ContactRelation::Addresses.def())
            .filter(AddressColumn::Address.like(pattern.as_str()))
            .distinct()
            .all(&self.db)
            .await
            .context("find_by_address query failed")?;
        Ok(found.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "contacts.repo.phones_by_contact",
        skip(self),
        fields(db.operation = "SELECT", contact.id = %contact_id)
    )]
    async fn phones_by_contact(&self, contact_id: Uuid) -> anyhow::Result<Vec<Phone>> {
        let found = PhoneEntity::find()
            .filter(PhoneColumn::ContactId.eq(contact_id))
            .order_by_asc(PhoneColumn::CreatedAt)
            .order_by_asc(PhoneColumn::Id)
            .all(&self.db)
            .await
            .context("phones_by_contact query failed")?;
        Ok(found.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "contacts.repo.addresses_by_contact",
        skip(self),
        fields(db.operation = "SELECT", contact.id = %contact_id)
    )]
    async fn addresses_by_contact(&self, contact_id: Uuid) -> anyhow::Result<Vec<Address>> {
        let found = AddressEntity::find()
            .filter(AddressColumn::ContactId.eq(contact_id))
            .order_by_asc(AddressColumn::CreatedAt)
            .order_by_asc(AddressColumn::Id)
            .all(&self.db)
            .await
            .context("addresses_by_contact query failed")?;
        Ok(found.into_iter().map(Into::into).collect())
    }

    #[instrument(
        name = "contacts.repo.find_document_type",
        skip(self),
        fields(db.operation = "SELECT", document_type.id = id)
    )]
    async fn find_document_type(&self, id: i32) -> anyhow::Result<Option<DocumentType>> {
        let found = DocumentTypeEntity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find_document_type query failed")?;
        Ok(found.map(Into::into))
    }

    #[instrument(
        name = "contacts.repo.update_contact",
        skip(self, contact),
        fields(db.operation = "UPDATE", contact.id = %contact.id)
    )]
    async fn update_contact(&self, contact: Contact) -> anyhow::Result<()> {
        let _ = Self::contact_active_model(contact)
            .update(&self.db)
            .await
            .context("update contact failed")?;
        Ok(())
    }

    #[instrument(
        name = "contacts.repo.update_phone",
        skip(self, phone),
        fields(db.operation = "UPDATE", phone.id = %phone.id)
    )]
    async fn update_phone(&self, phone: Phone) -> anyhow::Result<()> {
        let _ = Self::phone_active_model(phone)
            .update(&self.db)
            .await
            .context("update phone failed")?;
        Ok(())
    }

    #[instrument(
        name = "contacts.repo.update_address",
        skip(self, address),
        fields(db.operation = "UPDATE", address.id = %address.id)
    )]
    async fn update_address(&self, address: Address) -> anyhow::Result<()> {
        let _ = Self::address_active_model(address)
            .update(&self.db)
            .await
            .context("update address failed")?;
        Ok(())
    }

    #[instrument(
        name = "contacts.repo.delete_phones_by_contact",
        skip(self),
        fields(db.operation = "DELETE", contact.id = %contact_id)
    )]
    async fn delete_phones_by_contact(&self, contact_id: Uuid) -> anyhow::Result<u64> {
        let result = PhoneEntity::delete_many()
            .filter(PhoneColumn::ContactId.eq(contact_id))
            .exec(&self.db)
            .await
            .context("delete_phones_by_contact failed")?;
        Ok(result.rows_affected)
    }

    #[instrument(
        name = "contacts.repo.delete_addresses_by_contact",
        skip(self),
        fields(db.operation = "DELETE", contact.id = %contact_id)
    )]
    async fn delete_addresses_by_contact(&self, contact_id: Uuid) -> anyhow::Result<u64> {
        let result = AddressEntity::delete_many()
            .filter(AddressColumn::ContactId.eq(contact_id))
            .exec(&self.db)
            .await
            .context("delete_addresses_by_contact failed")?;
        Ok(result.rows_affected)
    }

    #[instrument(
        name = "contacts.repo.delete_contact",
        skip(self),
        fields(db.operation = "DELETE", contact.id = %id)
    )]
    async fn delete_contact(&self, id: Uuid) -> anyhow::Result<bool> {
        let result = ContactEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete_contact failed")?;
        Ok(result.rows_affected > 0)
    }
}
