//! Appliance endpoints.

use homewarden_models::domain::prelude::{
    ApplianceInfo, NewAppliance, Paginated, UpdateAppliance,
};
use homewarden_models::warranty::WarrantyInfo;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ClientResult;

/// Query parameters for listing appliances.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl ApiClient {
    /// List appliances with filters and pagination.
    pub async fn list_appliances(
        &self,
        query: &ApplianceQuery,
    ) -> ClientResult<Paginated<ApplianceInfo>> {
        self.get_json_with_query("/appliances", query).await
    }

    /// Fetch one appliance with its child collections.
    pub async fn get_appliance(&self, id: &str) -> ClientResult<ApplianceInfo> {
        self.get_json(&format!("/appliances/{id}")).await
    }

    /// Create an appliance, optionally with child collections.
    pub async fn create_appliance(&self, payload: &NewAppliance) -> ClientResult<ApplianceInfo> {
        self.post_json("/appliances", payload).await
    }

    /// Partially update an appliance. Omitted child collections stay
    /// untouched; empty lists clear them.
    pub async fn update_appliance(
        &self,
        id: &str,
        payload: &UpdateAppliance,
    ) -> ClientResult<ApplianceInfo> {
        self.put_json(&format!("/appliances/{id}"), payload).await
    }

    /// Delete an appliance and, via cascade, its children.
    pub async fn delete_appliance(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/appliances/{id}")).await
    }

    /// Derived warranty view of one appliance.
    pub async fn appliance_warranty(&self, id: &str) -> ClientResult<WarrantyInfo> {
        self.get_json(&format!("/appliances/{id}/warranty-status"))
            .await
    }
}
