//! Maintenance task endpoints.

use homewarden_models::domain::prelude::{
    MaintenanceTaskInfo, NewMaintenanceTask, Paginated, UpdateMaintenanceTask,
};
use homewarden_models::enums::TaskStatus;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Query parameters for listing maintenance tasks.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appliance_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_soon: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ApiClient {
    /// List tasks with filters and pagination.
    pub async fn list_maintenance(
        &self,
        query: &MaintenanceQuery,
    ) -> ClientResult<Paginated<MaintenanceTaskInfo>> {
        self.get_json_with_query("/maintenance", query).await
    }

    /// Fetch one task.
    pub async fn get_maintenance_task(&self, id: &str) -> ClientResult<MaintenanceTaskInfo> {
        self.get_json(&format!("/maintenance/{id}")).await
    }

    /// All tasks of one appliance, latest schedule first.
    pub async fn appliance_tasks(
        &self,
        appliance_id: &str,
    ) -> ClientResult<Vec<MaintenanceTaskInfo>> {
        self.get_json(&format!("/maintenance/appliances/{appliance_id}"))
            .await
    }

    /// Create a task under an appliance.
    pub async fn create_maintenance_task(
        &self,
        payload: &NewMaintenanceTask,
    ) -> ClientResult<MaintenanceTaskInfo> {
        self.post_json("/maintenance", payload).await
    }

    /// Partially update a task.
    pub async fn update_maintenance_task(
        &self,
        id: &str,
        payload: &UpdateMaintenanceTask,
    ) -> ClientResult<MaintenanceTaskInfo> {
        self.put_json(&format!("/maintenance/{id}"), payload).await
    }

    /// Delete a task.
    pub async fn delete_maintenance_task(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/maintenance/{id}")).await
    }

    /// Mark a task completed now.
    pub async fn complete_maintenance_task(&self, id: &str) -> ClientResult<MaintenanceTaskInfo> {
        self.patch_json(&format!("/maintenance/{id}/complete")).await
    }
}
