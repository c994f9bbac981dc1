//! `SeaORM` entity for tracked appliances.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "appliances")]
pub struct Model {
    /// Opaque UUID assigned by the repository at creation
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub purchase_date: DateTimeUtc,
    pub warranty_duration_months: i32,
    pub serial_number: Option<String>,
    pub purchase_location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

/// Child collections, all cascade-deleted with the appliance.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::support_contact::Entity")]
    SupportContact,
    #[sea_orm(has_many = "super::maintenance_task::Entity")]
    MaintenanceTask,
    #[sea_orm(has_many = "super::linked_document::Entity")]
    LinkedDocument,
}

impl Related<super::support_contact::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SupportContact.def()
    }
}

impl Related<super::maintenance_task::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceTask.def()
    }
}

impl Related<super::linked_document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LinkedDocument.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
