use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let backend = manager.get_database_backend();
        let conn = manager.get_connection();

        let sql = match backend {
            sea_orm::DatabaseBackend::Postgres => {
                r#"
CREATE TABLE IF NOT EXISTS document_types (
    id INTEGER PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS contacts (
    id UUID PRIMARY KEY NOT NULL,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    birth_date DATE NOT NULL,
    document_number VARCHAR(255) NOT NULL,
    document_type_id INTEGER NOT NULL REFERENCES document_types(id),
    email VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS phones (
    id UUID PRIMARY KEY NOT NULL,
    contact_id UUID NOT NULL REFERENCES contacts(id),
    phone_number VARCHAR(64) NOT NULL,
    phone_type VARCHAR(64) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS addresses (
    id UUID PRIMARY KEY NOT NULL,
    contact_id UUID NOT NULL REFERENCES contacts(id),
    address VARCHAR(512) NOT NULL,
    city VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contacts_email ON contacts(email);
CREATE INDEX IF NOT EXISTS idx_phones_contact_id ON phones(contact_id);
CREATE INDEX IF NOT EXISTS idx_phones_phone_number ON phones(phone_number);
CREATE INDEX IF NOT EXISTS idx_addresses_contact_id ON addresses(contact_id);
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
CREATE TABLE IF NOT EXISTS document_types (
    id INT PRIMARY KEY NOT NULL,
    name VARCHAR(255) NOT NULL
);

CREATE TABLE IF NOT EXISTS contacts (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    first_name VARCHAR(255) NOT NULL,
    last_name VARCHAR(255) NOT NULL,
    birth_date DATE NOT NULL,
    document_number VARCHAR(255) NOT NULL,
    document_type_id INT NOT NULL,
    email VARCHAR(255) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    KEY idx_contacts_email (email),
    CONSTRAINT fk_contacts_document_type FOREIGN KEY (document_type_id) REFERENCES document_types(id)
);

CREATE TABLE IF NOT EXISTS phones (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    contact_id VARCHAR(36) NOT NULL,
    phone_number VARCHAR(64) NOT NULL,
    phone_type VARCHAR(64) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    KEY idx_phones_contact_id (contact_id),
    KEY idx_phones_phone_number (phone_number),
    CONSTRAINT fk_phones_contact FOREIGN KEY (contact_id) REFERENCES contacts(id)
);

CREATE TABLE IF NOT EXISTS addresses (
    id VARCHAR(36) PRIMARY KEY NOT NULL,
    contact_id VARCHAR(36) NOT NULL,
    address VARCHAR(512) NOT NULL,
    city VARCHAR(255) NOT NULL,
    created_at TIMESTAMP NOT NULL,
    updated_at TIMESTAMP NOT NULL,
    KEY idx_addresses_contact_id (contact_id),
    CONSTRAINT fk_addresses_contact FOREIGN KEY (contact_id) REFERENCES contacts(id)
);
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
CREATE TABLE IF NOT EXISTS document_types (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS contacts (
    id TEXT PRIMARY KEY NOT NULL,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    birth_date TEXT NOT NULL,
    document_number TEXT NOT NULL,
    document_type_id INTEGER NOT NULL REFERENCES document_types(id),
    email TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS phones (
    id TEXT PRIMARY KEY NOT NULL,
    contact_id TEXT NOT NULL REFERENCES contacts(id),
    phone_number TEXT NOT NULL,
    phone_type TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS addresses (
    id TEXT PRIMARY KEY NOT NULL,
    contact_id TEXT NOT NULL REFERENCES contacts(id),
    address TEXT NOT NULL,
    city TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contacts_email ON contacts(email);
CREATE INDEX IF NOT EXISTS idx_phones_contact_id ON phones(contact_id);
CREATE INDEX IF NOT EXISTS idx_phones_phone_number ON phones(phone_number);
CREATE INDEX IF NOT EXISTS idx_addresses_contact_id ON addresses(contact_id);
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = r#"
DROP TABLE IF EXISTS addresses;
DROP TABLE IF EXISTS phones;
DROP TABLE IF EXISTS contacts;
DROP TABLE IF EXISTS document_types;
        "#;
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
