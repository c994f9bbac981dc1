use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};

/// Derived warranty classification. Computed on read from purchase date and
/// warranty duration, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarrantyStatus {
    Active,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Expired,
}

/// Persisted task state. Client-authoritative: the server stores whatever the
/// caller supplied and only `complete` transitions it itself.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum TaskStatus {
    #[sea_orm(string_value = "Upcoming")]
    Upcoming,
    #[sea_orm(string_value = "Completed")]
    Completed,
    #[sea_orm(string_value = "Overdue")]
    Overdue,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Upcoming
    }
}

/// Recurrence of a maintenance task.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum Frequency {
    #[sea_orm(string_value = "One-time")]
    #[serde(rename = "One-time")]
    OneTime,
    #[sea_orm(string_value = "Monthly")]
    Monthly,
    #[sea_orm(string_value = "Yearly")]
    Yearly,
    #[sea_orm(string_value = "Custom")]
    Custom,
}
