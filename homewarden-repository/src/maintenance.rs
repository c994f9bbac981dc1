use chrono::{DateTime, Duration, Utc};
use homewarden_error::{storage::StorageError, StorageResult};
use homewarden_models::{
    domain::prelude::{
        MaintenancePageParams, MaintenanceTaskInfo, MaintenanceTaskPayload, NewMaintenanceTask,
        Paginated, UpdateMaintenanceTask,
    },
    entities::prelude::{
        Appliance, MaintenanceTask, MaintenanceTaskActiveModel, MaintenanceTaskColumn,
    },
    enums::TaskStatus,
};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{Set, Unchanged},
    ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait,
};
use uuid::Uuid;

/// Window used by the due-soon filter.
const DUE_SOON_DAYS: i64 = 7;

/// Build an insertable task row owned by `appliance_id`, flattening the
/// embedded service provider into its four columns.
pub(crate) fn task_active_model(
    appliance_id: &str,
    payload: MaintenanceTaskPayload,
    now: DateTime<Utc>,
) -> MaintenanceTaskActiveModel {
    let (provider_name, provider_phone, provider_email, provider_notes) =
        match payload.service_provider {
            Some(provider) => (
                Some(provider.name),
                provider.phone,
                provider.email,
                provider.notes,
            ),
            None => (None, None, None, None),
        };

    MaintenanceTaskActiveModel {
        id: Set(Uuid::new_v4().to_string()),
        appliance_id: Set(appliance_id.to_string()),
        task_name: Set(payload.task_name),
        scheduled_date: Set(payload.scheduled_date),
        frequency: Set(payload.frequency),
        service_provider_name: Set(provider_name),
        service_provider_phone: Set(provider_phone),
        service_provider_email: Set(provider_email),
        service_provider_notes: Set(provider_notes),
        notes: Set(payload.notes),
        status: Set(payload.status),
        completed_date: Set(payload.completed_date),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Replace every task of an appliance with the supplied list.
pub(crate) async fn replace_for_appliance<C>(
    db: &C,
    appliance_id: &str,
    tasks: Vec<MaintenanceTaskPayload>,
    now: DateTime<Utc>,
) -> StorageResult<()>
where
    C: ConnectionTrait,
{
    MaintenanceTask::delete_many()
        .filter(MaintenanceTaskColumn::ApplianceId.eq(appliance_id))
        .exec(db)
        .await?;

    if !tasks.is_empty() {
        let rows: Vec<MaintenanceTaskActiveModel> = tasks
            .into_iter()
            .map(|t| task_active_model(appliance_id, t, now))
            .collect();
        MaintenanceTask::insert_many(rows).exec(db).await?;
    }

    Ok(())
}

/// Repository for maintenance task operations
pub struct MaintenanceRepository;

impl MaintenanceRepository {
    pub async fn page(
        db: &DatabaseConnection,
        params: MaintenancePageParams,
    ) -> StorageResult<Paginated<MaintenanceTaskInfo>> {
        let now = Utc::now();
        let due_soon = params.due_soon();

        let query = MaintenanceTask::find()
            .apply_if(params.appliance_id.as_deref(), |q, appliance_id| {
                q.filter(MaintenanceTaskColumn::ApplianceId.eq(appliance_id))
            })
            .apply_if(params.status, |q, status| {
                q.filter(MaintenanceTaskColumn::Status.eq(status))
            })
            .apply_if(due_soon.then_some(()), |q, ()| {
                q.filter(
                    MaintenanceTaskColumn::ScheduledDate
                        .between(now, now + Duration::days(DUE_SOON_DAYS)),
                )
            })
            .order_by(MaintenanceTaskColumn::ScheduledDate, Order::Desc);

        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let tasks = query
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(Paginated::new(
            tasks.into_iter().map(Into::into).collect(),
            page,
            limit,
            total,
        ))
    }

    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: &str,
    ) -> StorageResult<Option<MaintenanceTaskInfo>> {
        Ok(MaintenanceTask::find_by_id(id)
            .one(db)
            .await?
            .map(Into::into))
    }

    /// All tasks of one appliance, latest schedule first.
    pub async fn find_by_appliance(
        db: &DatabaseConnection,
        appliance_id: &str,
    ) -> StorageResult<Vec<MaintenanceTaskInfo>> {
        let tasks = MaintenanceTask::find()
            .filter(MaintenanceTaskColumn::ApplianceId.eq(appliance_id))
            .order_by(MaintenanceTaskColumn::ScheduledDate, Order::Desc)
            .all(db)
            .await?;
        Ok(tasks.into_iter().map(Into::into).collect())
    }

    /// Create a task under an existing appliance.
    pub async fn create(
        db: &DatabaseConnection,
        payload: NewMaintenanceTask,
    ) -> StorageResult<MaintenanceTaskInfo> {
        if Appliance::find_by_id(&payload.appliance_id)
            .one(db)
            .await?
            .is_none()
        {
            return Err(StorageError::EntityNotFound("appliance".to_string()));
        }

        let model = task_active_model(&payload.appliance_id, payload.task, Utc::now())
            .insert(db)
            .await?;
        Ok(model.into())
    }

    /// Partial update; omitted fields keep their stored values. A supplied
    /// service provider replaces all four provider columns.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        payload: UpdateMaintenanceTask,
    ) -> StorageResult<Option<MaintenanceTaskInfo>> {
        if MaintenanceTask::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let mut task = MaintenanceTaskActiveModel {
            id: Unchanged(id.to_string()),
            ..Default::default()
        };
        if let Some(task_name) = payload.task_name {
            task.task_name = Set(task_name);
        }
        if let Some(scheduled_date) = payload.scheduled_date {
            task.scheduled_date = Set(scheduled_date);
        }
        if let Some(frequency) = payload.frequency {
            task.frequency = Set(frequency);
        }
        if let Some(provider) = payload.service_provider {
            task.service_provider_name = Set(Some(provider.name));
            task.service_provider_phone = Set(provider.phone);
            task.service_provider_email = Set(provider.email);
            task.service_provider_notes = Set(provider.notes);
        }
        if let Some(notes) = payload.notes {
            task.notes = Set(Some(notes));
        }
        if let Some(status) = payload.status {
            task.status = Set(status);
        }
        if let Some(completed_date) = payload.completed_date {
            task.completed_date = Set(Some(completed_date));
        }
        task.updated_at = Set(Utc::now());

        let model = task.update(db).await?;
        Ok(Some(model.into()))
    }

    pub async fn delete(db: &DatabaseConnection, id: &str) -> StorageResult<bool> {
        let res = MaintenanceTask::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }

    /// Mark a task completed now, in a single update.
    pub async fn complete(
        db: &DatabaseConnection,
        id: &str,
    ) -> StorageResult<Option<MaintenanceTaskInfo>> {
        if MaintenanceTask::find_by_id(id).one(db).await?.is_none() {
            return Ok(None);
        }

        let now = Utc::now();
        let task = MaintenanceTaskActiveModel {
            id: Unchanged(id.to_string()),
            status: Set(TaskStatus::Completed),
            completed_date: Set(Some(now)),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = task.update(db).await?;
        Ok(Some(model.into()))
    }
}
