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
INSERT INTO document_types (id, name) VALUES
    (1, 'passport'),
    (2, 'national_id'),
    (3, 'driver_license'),
    (4, 'other')
ON CONFLICT (id) DO NOTHING;
                "#
            }
            sea_orm::DatabaseBackend::MySql => {
                r#"
INSERT IGNORE INTO document_types (id, name) VALUES
    (1, 'passport'),
    (2, 'national_id'),
    (3, 'driver_license'),
    (4, 'other');
                "#
            }
            sea_orm::DatabaseBackend::Sqlite => {
                r#"
INSERT OR IGNORE INTO document_types (id, name) VALUES
    (1, 'passport'),
    (2, 'national_id'),
    (3, 'driver_license'),
    (4, 'other');
                "#
            }
        };

        conn.execute_unprepared(sql).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();
        let sql = "DELETE FROM document_types WHERE id IN (1, 2, 3, 4);";
        conn.execute_unprepared(sql).await?;
        Ok(())
    }
}
