use chrono::{DateTime, Utc};
use homewarden_error::{storage::StorageError, StorageResult};
use homewarden_models::{
    domain::prelude::{
        ApplianceInfo, AppliancePageParams, NewAppliance, Paginated, UpdateAppliance,
    },
    entities::prelude::{
        Appliance, ApplianceActiveModel, ApplianceColumn, ApplianceModel, LinkedDocument,
        MaintenanceTask, SupportContact,
    },
    warranty::{warranty_status, WarrantyInfo},
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait, LoaderTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait, TransactionTrait,
};
use uuid::Uuid;

use crate::{contact, document, maintenance};

/// Repository for appliance operations
pub struct ApplianceRepository;

impl ApplianceRepository {
    /// Paginated listing, newest first. Free-text search matches name, brand
    /// and model as a case-insensitive substring.
    pub async fn page(
        db: &DatabaseConnection,
        params: AppliancePageParams,
    ) -> StorageResult<Paginated<ApplianceInfo>> {
        let query = Appliance::find()
            .apply_if(params.search.as_ref(), |q, term| {
                let pattern = format!("%{term}%");
                q.filter(
                    Condition::any()
                        .add(ApplianceColumn::Name.like(&pattern))
                        .add(ApplianceColumn::Brand.like(&pattern))
                        .add(ApplianceColumn::Model.like(&pattern)),
                )
            })
            .apply_if(params.brand.as_deref(), |q, brand| {
                q.filter(ApplianceColumn::Brand.eq(brand))
            })
            .order_by(ApplianceColumn::CreatedAt, Order::Desc);

        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let appliances = query
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        let data = Self::attach_children(db, appliances).await?;
        Ok(Paginated::new(data, page, limit, total))
    }

    pub async fn find_by_id<C>(db: &C, id: &str) -> StorageResult<Option<ApplianceInfo>>
    where
        C: ConnectionTrait,
    {
        let Some(appliance) = Appliance::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let mut infos = Self::attach_children(db, vec![appliance]).await?;
        Ok(infos.pop())
    }

    /// Create an appliance together with any supplied child collections in a
    /// single transaction.
    pub async fn create(
        db: &DatabaseConnection,
        payload: NewAppliance,
    ) -> StorageResult<ApplianceInfo> {
        let now = Utc::now();
        let id = Uuid::new_v4().to_string();
        let appliance_id = id.clone();

        db.transaction::<_, (), StorageError>(|txn| {
            Box::pin(async move {
                let appliance = ApplianceActiveModel {
                    id: Set(appliance_id.clone()),
                    name: Set(payload.name),
                    brand: Set(payload.brand),
                    model: Set(payload.model),
                    purchase_date: Set(payload.purchase_date),
                    warranty_duration_months: Set(payload.warranty_duration_months),
                    serial_number: Set(payload.serial_number),
                    purchase_location: Set(payload.purchase_location),
                    notes: Set(payload.notes),
                    created_at: Set(now),
                    updated_at: Set(now),
                };
                appliance.insert(txn).await?;

                if let Some(contacts) = payload.support_contacts {
                    contact::replace_for_appliance(txn, &appliance_id, contacts, now).await?;
                }
                if let Some(tasks) = payload.maintenance_tasks {
                    maintenance::replace_for_appliance(txn, &appliance_id, tasks, now).await?;
                }
                if let Some(documents) = payload.linked_documents {
                    document::replace_for_appliance(txn, &appliance_id, documents, now).await?;
                }

                Ok(())
            })
        })
        .await
        .map_err(StorageError::from)?;

        Self::find_by_id(db, &id)
            .await?
            .ok_or_else(|| StorageError::EntityNotFound("appliance".to_string()))
    }

    /// Partial update in a single transaction. Omitted scalar fields keep
    /// their stored values; a supplied child collection (empty included)
    /// replaces the existing children of that type wholesale.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        payload: UpdateAppliance,
    ) -> StorageResult<Option<ApplianceInfo>> {
        let now = Utc::now();
        let appliance_id = id.to_string();

        let updated = db
            .transaction::<_, bool, StorageError>(|txn| {
                Box::pin(async move {
                    if Appliance::find_by_id(&appliance_id)
                        .one(txn)
                        .await?
                        .is_none()
                    {
                        return Ok(false);
                    }

                    let mut appliance = ApplianceActiveModel {
                        id: Unchanged(appliance_id.clone()),
                        ..Default::default()
                    };
                    if let Some(name) = payload.name {
                        appliance.name = Set(name);
                    }
                    if let Some(brand) = payload.brand {
                        appliance.brand = Set(brand);
                    }
                    if let Some(model) = payload.model {
                        appliance.model = Set(model);
                    }
                    if let Some(purchase_date) = payload.purchase_date {
                        appliance.purchase_date = Set(purchase_date);
                    }
                    if let Some(months) = payload.warranty_duration_months {
                        appliance.warranty_duration_months = Set(months);
                    }
                    if let Some(serial_number) = payload.serial_number {
                        appliance.serial_number = Set(Some(serial_number));
                    }
                    if let Some(purchase_location) = payload.purchase_location {
                        appliance.purchase_location = Set(Some(purchase_location));
                    }
                    if let Some(notes) = payload.notes {
                        appliance.notes = Set(Some(notes));
                    }
                    appliance.updated_at = Set(now);
                    appliance.update(txn).await?;

                    if let Some(contacts) = payload.support_contacts {
                        contact::replace_for_appliance(txn, &appliance_id, contacts, now).await?;
                    }
                    if let Some(tasks) = payload.maintenance_tasks {
                        maintenance::replace_for_appliance(txn, &appliance_id, tasks, now).await?;
                    }
                    if let Some(documents) = payload.linked_documents {
                        document::replace_for_appliance(txn, &appliance_id, documents, now)
                            .await?;
                    }

                    Ok(true)
                })
            })
            .await
            .map_err(StorageError::from)?;

        if !updated {
            return Ok(None);
        }
        Self::find_by_id(db, id).await
    }

    /// Delete an appliance; the store cascades its children.
    pub async fn delete(db: &DatabaseConnection, id: &str) -> StorageResult<bool> {
        let res = Appliance::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Derived warranty view of one appliance relative to `today`.
    pub async fn warranty(
        db: &DatabaseConnection,
        id: &str,
        today: DateTime<Utc>,
    ) -> StorageResult<Option<WarrantyInfo>> {
        let Some(appliance) = Appliance::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        Ok(Some(warranty_status(
            appliance.purchase_date,
            appliance.warranty_duration_months.max(0) as u32,
            today,
        )))
    }

    /// Load the three child collections for a batch of appliances.
    async fn attach_children<C>(
        db: &C,
        appliances: Vec<ApplianceModel>,
    ) -> StorageResult<Vec<ApplianceInfo>>
    where
        C: ConnectionTrait,
    {
        let contacts = appliances.load_many(SupportContact, db).await?;
        let tasks = appliances.load_many(MaintenanceTask, db).await?;
        let documents = appliances.load_many(LinkedDocument, db).await?;

        Ok(appliances
            .into_iter()
            .zip(contacts)
            .zip(tasks)
            .zip(documents)
            .map(|(((appliance, contacts), tasks), documents)| {
                ApplianceInfo::assemble(appliance, contacts, tasks, documents)
            })
            .collect())
    }
}
