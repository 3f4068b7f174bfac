use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::phone::Entity")]
    Phones,
    #[sea_orm(has_many = "super::address::Entity")]
    Addresses,
    #[sea_orm(
        belongs_to = "super::document_type::Entity",
        from = "Column::DocumentTypeId",
        to = "super::document_type::Column::Id"
    )]
    DocumentType,
}

impl ActiveModelBehavior for ActiveModel {}

impl Related<super::phone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phones.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl Related<super::document_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocumentType.def()
    }
}
