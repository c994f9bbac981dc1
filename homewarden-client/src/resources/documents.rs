//! Linked document endpoints.

use homewarden_models::domain::prelude::{
    LinkedDocumentInfo, NewLinkedDocument, UpdateLinkedDocument,
};

use crate::client::ApiClient;
use crate::error::ClientResult;

impl ApiClient {
    /// Fetch one linked document.
    pub async fn get_document(&self, id: &str) -> ClientResult<LinkedDocumentInfo> {
        self.get_json(&format!("/documents/{id}")).await
    }

    /// Attach a document to an appliance.
    pub async fn create_document(
        &self,
        payload: &NewLinkedDocument,
    ) -> ClientResult<LinkedDocumentInfo> {
        self.post_json("/documents", payload).await
    }

    /// Partially update a document.
    pub async fn update_document(
        &self,
        id: &str,
        payload: &UpdateLinkedDocument,
    ) -> ClientResult<LinkedDocumentInfo> {
        self.put_json(&format!("/documents/{id}"), payload).await
    }

    /// Delete a document.
    pub async fn delete_document(&self, id: &str) -> ClientResult<()> {
        self.delete(&format!("/documents/{id}")).await
    }
}
