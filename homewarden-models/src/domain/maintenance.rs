use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::PageParams;
use crate::entities::prelude::MaintenanceTaskModel;
use crate::enums::{Frequency, TaskStatus};

/// Service-provider contact embedded in a task. Flattened to four columns on
/// write and reassembled on read; a row without a provider name has no
/// provider at all.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceProvider {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 20))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(email)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Task fields shared by the embedded (appliance children) and standalone
/// create payloads. `status` defaults to Upcoming when omitted.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTaskPayload {
    #[validate(length(min = 1, max = 255))]
    pub task_name: String,
    pub scheduled_date: DateTime<Utc>,
    pub frequency: Frequency,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<ServiceProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

/// Payload to create a task directly under an appliance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMaintenanceTask {
    #[validate(length(min = 1, message = "applianceId is required"))]
    pub appliance_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub task: MaintenanceTaskPayload,
}

/// Partial update; omitted fields are left untouched. Supplying a
/// `serviceProvider` replaces all four provider columns. A task cannot be
/// moved to another appliance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMaintenanceTask {
    #[validate(length(min = 1, max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<ServiceProvider>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date: Option<DateTime<Utc>>,
}

/// Page query parameters for task listing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MaintenancePageParams {
    /// Optional filter by owning appliance
    pub appliance_id: Option<String>,
    /// Optional filter by persisted status
    pub status: Option<TaskStatus>,
    /// "true" restricts to tasks scheduled within the next seven days
    pub due_soon: Option<String>,
    /// Pagination parameters
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

impl MaintenancePageParams {
    pub fn due_soon(&self) -> bool {
        self.due_soon.as_deref() == Some("true")
    }
}

/// Read model for a maintenance task, provider sub-object reassembled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTaskInfo {
    pub id: String,
    pub appliance_id: String,
    pub task_name: String,
    pub scheduled_date: DateTime<Utc>,
    pub frequency: Frequency,
    pub status: TaskStatus,
    pub completed_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_provider: Option<ServiceProvider>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<MaintenanceTaskModel> for MaintenanceTaskInfo {
    fn from(m: MaintenanceTaskModel) -> Self {
        let service_provider = m.service_provider_name.map(|name| ServiceProvider {
            name,
            phone: m.service_provider_phone,
            email: m.service_provider_email,
            notes: m.service_provider_notes,
        });
        Self {
            id: m.id,
            appliance_id: m.appliance_id,
            task_name: m.task_name,
            scheduled_date: m.scheduled_date,
            frequency: m.frequency,
            status: m.status,
            completed_date: m.completed_date,
            service_provider,
            notes: m.notes,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
