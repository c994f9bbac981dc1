//! Support contact endpoints.

use homewarden_models::domain::prelude::{
    NewSupportContact, SupportContactInfo, UpdateSupportContact,
};

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Fetch one support contact.
    pub async fn get_contact(&self, id: &str) -> ClientResult<SupportContactInfo> {
        self.get_json(&format!("/contacts/{id}")).await
    }

    /// Create a contact under an appliance.
    pub async fn create_contact(
        &self,
        payload: &NewSupportContact,
    ) -> ClientResult<SupportContactInfo> {
        self.post_json("/contacts", payload).await
    }

    /// Partially update a contact.
    pub async fn update_contact(
        &self,
        id: &str,
        payload: &UpdateSupportContact,
    ) -> ClientResult<SupportContactInfo> {
        self.put_json(&format!("/contacts/{id}"), payload).await
    }

    /// Delete a contact.
    pub async fn delete_contact(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/contacts/{id}")).await
    }
}
