#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Support module provides utilities that may not all be used

//! Test support utilities for `contacts` integration tests.
//!
//! Provides helpers for creating in-memory test databases, the service under
//! test, and request inputs.

use std::sync::Arc;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use contacts::domain::model::{NewAddress, NewContact, NewPhone};
use contacts::infra::storage::SeaOrmContactsRepository;
use contacts::infra::storage::migrations::Migrator;
use contacts::{Service, ServiceConfig};

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// Each call creates a new isolated database. The pool is pinned to a single
/// connection: an in-memory SQLite database exists per connection.
pub async fn inmem_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to in-memory database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Create the service under test backed by a fresh in-memory database.
pub async fn test_service() -> Arc<Service> {
    let db = inmem_db().await;
    let repo = Arc::new(SeaOrmContactsRepository::new(db));
    Arc::new(Service::new(repo, ServiceConfig::default()))
}

pub fn phone(number: &str, kind: &str) -> NewPhone {
    NewPhone {
        phone_number: number.to_owned(),
        phone_type: kind.to_owned(),
    }
}

pub fn address(text: &str, city: &str) -> NewAddress {
    NewAddress {
        address: text.to_owned(),
        city: city.to_owned(),
    }
}

/// A valid contact input with one phone and one address.
pub fn sample_contact(email: &str) -> NewContact {
    NewContact {
        first_name: "ada".to_owned(),
        last_name: "lovelace".to_owned(),
        birth_date: "1815-12-10".parse().unwrap(),
        document_number: "AL-1815".to_owned(),
        document_type_id: 1,
        email: email.to_owned(),
        phones: vec![phone("+44 20 7946 0001", "home")],
        addresses: vec![address("12 st james square", "london")],
    }
}
