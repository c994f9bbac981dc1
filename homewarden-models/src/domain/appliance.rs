use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::common::PageParams;
use super::contact::{SupportContactInfo, SupportContactPayload};
use super::document::{LinkedDocumentInfo, LinkedDocumentPayload};
use super::maintenance::{MaintenanceTaskInfo, MaintenanceTaskPayload};
use crate::entities::prelude::{
    ApplianceModel, LinkedDocumentModel, MaintenanceTaskModel, SupportContactModel,
};
use crate::enums::WarrantyStatus;

/// Page query parameters for appliance listing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AppliancePageParams {
    /// Case-insensitive substring match over name, brand and model
    pub search: Option<String>,
    /// Exact brand filter
    pub brand: Option<String>,
    /// Accepted for wire compatibility; warranty state is derived on read
    /// and never filtered on
    pub warranty_status: Option<WarrantyStatus>,
    /// Pagination parameters
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Payload to create a new appliance, optionally with child collections.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAppliance {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub brand: String,
    #[validate(length(min = 1, max = 100))]
    pub model: String,
    pub purchase_date: DateTime<Utc>,
    #[validate(range(min = 1, message = "warrantyDurationMonths must be at least 1"))]
    pub warranty_duration_months: i32,
    #[validate(length(max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[validate(length(max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_contacts: Option<Vec<SupportContactPayload>>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_tasks: Option<Vec<MaintenanceTaskPayload>>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_documents: Option<Vec<LinkedDocumentPayload>>,
}

/// Partial update of an appliance.
///
/// Omitted scalar fields keep their stored values. For the child
/// collections, omission leaves the existing children untouched while an
/// explicit list (empty included) replaces them wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppliance {
    #[validate(length(min = 1, max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[validate(length(min = 1, max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_date: Option<DateTime<Utc>>,
    #[validate(range(min = 1, message = "warrantyDurationMonths must be at least 1"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty_duration_months: Option<i32>,
    #[validate(length(max = 100))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[validate(length(max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purchase_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_contacts: Option<Vec<SupportContactPayload>>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_tasks: Option<Vec<MaintenanceTaskPayload>>,
    #[validate(nested)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_documents: Option<Vec<LinkedDocumentPayload>>,
}

/// Read model for an appliance with its child collections attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplianceInfo {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub model: String,
    pub purchase_date: DateTime<Utc>,
    pub warranty_duration_months: i32,
    pub serial_number: Option<String>,
    pub purchase_location: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub support_contacts: Vec<SupportContactInfo>,
    pub maintenance_tasks: Vec<MaintenanceTaskInfo>,
    pub linked_documents: Vec<LinkedDocumentInfo>,
}

impl ApplianceInfo {
    /// Attach child rows to an appliance row.
    pub fn assemble(
        appliance: ApplianceModel,
        contacts: Vec<SupportContactModel>,
        tasks: Vec<MaintenanceTaskModel>,
        documents: Vec<LinkedDocumentModel>,
    ) -> Self {
        Self {
            id: appliance.id,
            name: appliance.name,
            brand: appliance.brand,
            model: appliance.model,
            purchase_date: appliance.purchase_date,
            warranty_duration_months: appliance.warranty_duration_months,
            serial_number: appliance.serial_number,
            purchase_location: appliance.purchase_location,
            notes: appliance.notes,
            created_at: appliance.created_at,
            updated_at: appliance.updated_at,
            support_contacts: contacts.into_iter().map(Into::into).collect(),
            maintenance_tasks: tasks.into_iter().map(Into::into).collect(),
            linked_documents: documents.into_iter().map(Into::into).collect(),
        }
    }
}
