use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::prelude::LinkedDocumentModel;

/// Linked document fields shared by the embedded and standalone payloads.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LinkedDocumentPayload {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[validate(url, length(max = 1000))]
    pub url: String,
}

/// Payload to attach a document directly to an appliance.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLinkedDocument {
    #[validate(length(min = 1, message = "applianceId is required"))]
    pub appliance_id: String,
    #[serde(flatten)]
    #[validate(nested)]
    pub document: LinkedDocumentPayload,
}

/// Partial update; omitted fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLinkedDocument {
    #[validate(length(min = 1, max = 255))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[validate(url, length(max = 1000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Read model for a linked document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkedDocumentInfo {
    pub id: String,
    pub appliance_id: String,
    pub title: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<LinkedDocumentModel> for LinkedDocumentInfo {
    fn from(m: LinkedDocumentModel) -> Self {
        Self {
            id: m.id,
            appliance_id: m.appliance_id,
            title: m.title,
            url: m.url,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
