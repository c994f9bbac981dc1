//! `SeaORM` entity for documents linked to an appliance.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "linked_documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub appliance_id: String,
    pub title: String,
    pub url: String,
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
