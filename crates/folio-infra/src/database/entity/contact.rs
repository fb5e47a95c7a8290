//! Contact entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub created_at: DateTimeWithTimeZone,
    pub is_read: bool,
    pub ip_address: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for folio_core::domain::Contact {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            subject: model.subject,
            message: model.message,
            created_at: model.created_at.into(),
            is_read: model.is_read,
            ip_address: model.ip_address,
        }
    }
}

impl From<folio_core::domain::Contact> for ActiveModel {
    fn from(contact: folio_core::domain::Contact) -> Self {
        Self {
            id: Set(contact.id),
            name: Set(contact.name),
            email: Set(contact.email),
            subject: Set(contact.subject),
            message: Set(contact.message),
            created_at: Set(contact.created_at.into()),
            is_read: Set(contact.is_read),
            ip_address: Set(contact.ip_address),
        }
    }
}
