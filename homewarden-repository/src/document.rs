use chrono::{DateTime, Utc};
use homewarden_error::{storage::StorageError, StorageResult};
use homewarden_models::{
    domain::prelude::{
        LinkedDocumentInfo, LinkedDocumentPayload, NewLinkedDocument, UpdateLinkedDocument,
    },
    entities::prelude::{
        Appliance, LinkedDocument, LinkedDocumentActiveModel, LinkedDocumentColumn,
    },
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Build an insertable document row owned by `appliance_id`.
pub(crate) fn document_active_model(
    appliance_id: &str,
    payload: LinkedDocumentPayload,
    now: DateTime<Utc>,
) -> LinkedDocumentActiveModel {
    LinkedDocumentActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        appliance_id: Set(appliance_id.to_string()),
        title: Set(payload.title),
        url: Set(payload.url),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Replace every linked document of an appliance with the supplied list.
pub(crate) async fn replace_for_appliance<C>(
    db: &C,
    appliance_id: &str,
    documents: Vec<LinkedDocumentPayload>,
    now: DateTime<Utc>,
) -> StorageResult<()>
where
    C: ConnectionTrait,
{
    LinkedDocument::delete_many()
        .filter(LinkedDocumentColumn::ApplianceId.eq(appliance_id))
        .exec(db)
        .await?;

    if !documents.is_empty() {
        let rows: Vec<LinkedDocumentActiveModel> = documents
            .into_iter()
            .map(|d| document_active_model(appliance_id, d, now))
            .collect();
        LinkedDocument::insert_many(rows).exec(db).await?;
    }

    Ok(())
}

/// Repository for linked document operations
pub struct DocumentRepository;

impl DocumentRepository {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: &str,
    ) -> StorageResult<Option<LinkedDocumentInfo>> {
        Ok(LinkedDocument::find_by_id(id).one(db).await?.map(Into::into))
    }

    /// Attach a document to an existing appliance.
    pub async fn create(
        db: &DatabaseConnection,
        payload: NewLinkedDocument,
    ) -> StorageResult<LinkedDocumentInfo> {
        if Appliance::find_by_id(&payload.appliance_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(StorageError::EntityNotFound("appliance".to_string()));
        }

        let model = document_active_model(&payload.appliance_id, payload.document, Utc::now())
            .insert(db)
            .await?;
        Ok(model.into())
    }

    /// Partial update; omitted fields keep their stored values.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        payload: UpdateLinkedDocument,
    ) -> StorageResult<Option<LinkedDocumentInfo>> {
        if LinkedDocument::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let mut document = LinkedDocumentActiveModel {
            id: Unchanged(id.to_string()),
            ..Default::default()
        };
        if let Some(title) = payload.title {
            document.title = Set(title);
        }
        if let Some(url) = payload.url {
            document.url = Set(url);
        }
        document.updated_at = Set(Utc::now());

        let model = document.update(db).await?;
        Ok(Some(model.into()))
    }

    pub async fn delete(db: &DatabaseConnection, id: &str) -> StorageResult<bool> {
        let res = LinkedDocument::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
