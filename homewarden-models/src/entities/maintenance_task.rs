//! `SeaORM` entity for maintenance tasks.
//!
//! The optional service-provider contact is flattened into four nullable
//! columns here and reassembled into a sub-object by the domain layer.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::enums::{Frequency, TaskStatus};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_tasks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub appliance_id: String,
    pub task_name: String,
    pub scheduled_date: DateTimeUtc,
    pub frequency: Frequency,
    pub service_provider_name: Option<String>,
    pub service_provider_phone: Option<String>,
    pub service_provider_email: Option<String>,
    pub service_provider_notes: Option<String>,
    pub notes: Option<String>,
    pub status: TaskStatus,
    pub completed_date: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::appliance::Entity",
        from = "Column::ApplianceId",
        to = "super::appliance::Column::Id"
    )]
    Appliance,
}

impl Related<super::appliance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Appliance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
