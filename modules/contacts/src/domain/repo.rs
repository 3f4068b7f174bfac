//! Repository port for contact storage.
//!
//! The service depends only on this trait; the SeaORM implementation lives
//! in `infra::storage`. Child rows are written one by one so callers can
//! issue sibling writes concurrently, matching the aggregate's lifecycle
//! (parent first, children after, no transaction).

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Address, Contact, DocumentType, Phone};

#[async_trait]
pub trait ContactsRepository: Send + Sync {
    async fn insert_contact(&self, contact: Contact) -> anyhow::Result<()>;

    async fn insert_phone(&self, phone: Phone) -> anyhow::Result<()>;

    async fn insert_address(&self, address: Address) -> anyhow::Result<()>;

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Contact>>;

    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<Contact>>;

    /// Substring match against first name, last name or document number.
    async fn search_personal_data(&self, term: &str) -> anyhow::Result<Vec<Contact>>;

    /// Contacts owning a phone row with exactly this number.
    async fn find_by_phone_number(&self, phone_number: &str) -> anyhow::Result<Vec<Contact>>;

    /// Contacts owning an address row whose text contains the given substring.
    async fn find_by_address(&self, address: &str) -> anyhow::Result<Vec<Contact>>;

    async fn phones_by_contact(&self, contact_id: Uuid) -> anyhow::Result<Vec<Phone>>;

    async fn addresses_by_contact(&self, contact_id: Uuid) -> anyhow::Result<Vec<Address>>;

    async fn find_document_type(&self, id: i32) -> anyhow::Result<Option<DocumentType>>;

    async fn update_contact(&self, contact: Contact) -> anyhow::Result<()>;

    async fn update_phone(&self, phone: Phone) -> anyhow::Result<()>;

    async fn update_address(&self, address: Address) -> anyhow::Result<()>;

    /// Returns the number of deleted rows.
    async fn delete_phones_by_contact(&self, contact_id: Uuid) -> anyhow::Result<u64>;

    /// Returns the number of deleted rows.
    async fn delete_addresses_by_contact(&self, contact_id: Uuid) -> anyhow::Result<u64>;

    /// Returns true when a row was deleted.
    async fn delete_contact(&self, id: Uuid) -> anyhow::Result<bool>;
}
