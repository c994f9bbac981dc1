use chrono::{DateTime, Utc};
use homewarden_error::{storage::StorageError, StorageResult};
use homewarden_models::{
    domain::prelude::{
        NewSupportContact, SupportContactInfo, SupportContactPayload, UpdateSupportContact,
    },
    entities::prelude::{
        Appliance, SupportContact, SupportContactActiveModel, SupportContactColumn,
    },
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
};
use uuid::Uuid;

/// Build an insertable contact row owned by `appliance_id`.
pub(crate) fn contact_active_model(
    appliance_id: &str,
    payload: SupportContactPayload,
    now: DateTime<Utc>,
) -> SupportContactActiveModel {
    SupportContactActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        appliance_id: Set(appliance_id.to_string()),
        name: Set(payload.name),
        company: Set(payload.company),
        phone: Set(payload.phone),
        email: Set(payload.email),
        website: Set(payload.website),
        notes: Set(payload.notes),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Replace every contact of an appliance with the supplied list.
pub(crate) async fn replace_for_appliance<C>(
    db: &C,
    appliance_id: &str,
    contacts: Vec<SupportContactPayload>,
    now: DateTime<Utc>,
) -> StorageResult<()>
where
    C: ConnectionTrait,
{
    SupportContact::delete_many()
        .filter(SupportContactColumn::ApplianceId.eq(appliance_id))
        .exec(db)
        .await?;

    if !contacts.is_empty() {
        let rows: Vec<SupportContactActiveModel> = contacts
            .into_iter()
            .map(|c| contact_active_model(appliance_id, c, now))
            .collect();
        SupportContact::insert_many(rows).exec(db).await?;
    }

    Ok(())
}

/// Repository for support contact operations
pub struct ContactRepository;

impl ContactRepository {
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: &str,
    ) -> StorageResult<Option<SupportContactInfo>> {
        Ok(SupportContact::find_by_id(id)
            .one(db)
            .await?
            .map(Into::into))
    }

    /// Create a contact under an existing appliance.
    pub async fn create(
        db: &DatabaseConnection,
        payload: NewSupportContact,
    ) -> StorageResult<SupportContactInfo> {
        if Appliance::find_by_id(&payload.appliance_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(StorageError::EntityNotFound("appliance".to_string()));
        }

        let model = contact_active_model(&payload.appliance_id, payload.contact, Utc::now())
            .insert(db)
            .await?;
        Ok(model.into())
    }

    /// Partial update; omitted fields keep their stored values.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        payload: UpdateSupportContact,
    ) -> StorageResult<Option<SupportContactInfo>> {
        if SupportContact::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let mut contact = SupportContactActiveModel {
            id: Unchanged(id.to_string()),
            ..Default::default()
        };
        if let Some(name) = payload.name {
            contact.name = Set(name);
        }
        if let Some(company) = payload.company {
            contact.company = Set(Some(company));
        }
        if let Some(phone) = payload.phone {
            contact.phone = Set(Some(phone));
        }
        if let Some(email) = payload.email {
            contact.email = Set(Some(email));
        }
        if let Some(website) = payload.website {
            contact.website = Set(Some(website));
        }
        if let Some(notes) = payload.notes {
            contact.notes = Set(Some(notes));
        }
        contact.updated_at = Set(Utc::now());

        let model = contact.update(db).await?;
        Ok(Some(model.into()))
    }

    pub async fn delete(db: &DatabaseConnection, id: &str) -> StorageResult<bool> {
        let res = SupportContact::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
