mod common;

use common::{appliance_payload, setup_db, task_payload, task_payload_with_provider};
use homewarden_error::storage::StorageError;
use homewarden_models::domain::prelude::{
    MaintenancePageParams, NewMaintenanceTask, ServiceProvider, UpdateMaintenanceTask,
};
use homewarden_models::enums::TaskStatus;
use homewarden_repository::{ApplianceRepository, MaintenanceRepository};

async fn create_appliance(db: &sea_orm::DatabaseConnection) -> String {
    ApplianceRepository::create(db, appliance_payload("Boiler", "Vaillant", "B-1"))
        .await
        .unwrap()
        .id
}

#[tokio::test]
async fn create_and_read_back_reconstructs_provider() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    let created = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id: appliance_id.clone(),
            task: task_payload_with_provider("Annual service", 30),
        },
    )
    .await
    .unwrap();

    let fetched = MaintenanceRepository::find_by_id(&db, &created.id)
        .await
        .unwrap()
        .expect("task exists");

    assert_eq!(fetched.appliance_id, appliance_id);
    let provider = fetched.service_provider.expect("provider present");
    assert_eq!(provider.name, "Acme Repairs");
    assert_eq!(provider.email.as_deref(), Some("service@acme.example"));
}

#[tokio::test]
async fn create_for_missing_appliance_is_not_found() {
    let db = setup_db().await;

    let result = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id: "nope".to_string(),
            task: task_payload("Orphan", 1),
        },
    )
    .await;

    assert!(matches!(result, Err(StorageError::EntityNotFound(_))));
}

#[tokio::test]
async fn complete_sets_status_and_completed_date() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    let created = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id,
            task: task_payload("Flush system", 10),
        },
    )
    .await
    .unwrap();
    assert_eq!(created.status, TaskStatus::Upcoming);
    assert!(created.completed_date.is_none());

    let completed = MaintenanceRepository::complete(&db, &created.id)
        .await
        .unwrap()
        .expect("task exists");

    assert_eq!(completed.status, TaskStatus::Completed);
    assert!(completed.completed_date.is_some());
}

#[tokio::test]
async fn complete_missing_task_returns_none() {
    let db = setup_db().await;
    let result = MaintenanceRepository::complete(&db, "nope").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn due_soon_restricts_to_the_next_seven_days() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    for (name, days) in [("tomorrow", 1), ("next month", 30), ("last week", -7)] {
        MaintenanceRepository::create(
            &db,
            NewMaintenanceTask {
                appliance_id: appliance_id.clone(),
                task: task_payload(name, days),
            },
        )
        .await
        .unwrap();
    }

    let result = MaintenanceRepository::page(
        &db,
        MaintenancePageParams {
            due_soon: Some("true".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].task_name, "tomorrow");
    assert_eq!(result.pagination.total, 1);
}

#[tokio::test]
async fn status_and_appliance_filters_compose() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;
    let other_id = ApplianceRepository::create(&db, appliance_payload("Heater", "Bosch", "H-9"))
        .await
        .unwrap()
        .id;

    let mine = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id: appliance_id.clone(),
            task: task_payload("Mine", 3),
        },
    )
    .await
    .unwrap();
    MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id: other_id,
            task: task_payload("Other", 3),
        },
    )
    .await
    .unwrap();
    MaintenanceRepository::complete(&db, &mine.id).await.unwrap();

    let result = MaintenanceRepository::page(
        &db,
        MaintenancePageParams {
            appliance_id: Some(appliance_id),
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].task_name, "Mine");
}

#[tokio::test]
async fn tasks_for_appliance_come_back_latest_first() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    for (name, days) in [("soon", 2), ("later", 20), ("middle", 10)] {
        MaintenanceRepository::create(
            &db,
            NewMaintenanceTask {
                appliance_id: appliance_id.clone(),
                task: task_payload(name, days),
            },
        )
        .await
        .unwrap();
    }

    let tasks = MaintenanceRepository::find_by_appliance(&db, &appliance_id)
        .await
        .unwrap();

    let names: Vec<_> = tasks.iter().map(|t| t.task_name.as_str()).collect();
    assert_eq!(names, vec!["later", "middle", "soon"]);
}

#[tokio::test]
async fn partial_update_keeps_unmentioned_fields() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    let created = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id,
            task: task_payload("Inspect anode", 45),
        },
    )
    .await
    .unwrap();

    let updated = MaintenanceRepository::update(
        &db,
        &created.id,
        UpdateMaintenanceTask {
            status: Some(TaskStatus::Overdue),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("task exists");

    assert_eq!(updated.status, TaskStatus::Overdue);
    assert_eq!(updated.task_name, "Inspect anode");
    assert_eq!(updated.scheduled_date, created.scheduled_date);
}

#[tokio::test]
async fn supplying_a_provider_replaces_all_provider_columns() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    let created = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id,
            task: task_payload_with_provider("Gas check", 5),
        },
    )
    .await
    .unwrap();

    let updated = MaintenanceRepository::update(
        &db,
        &created.id,
        UpdateMaintenanceTask {
            service_provider: Some(ServiceProvider {
                name: "New Provider".to_string(),
                phone: None,
                email: None,
                notes: None,
            }),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("task exists");

    let provider = updated.service_provider.expect("provider present");
    assert_eq!(provider.name, "New Provider");
    // The old provider's phone must not linger
    assert!(provider.phone.is_none());
}

#[tokio::test]
async fn delete_task_reports_outcome() {
    let db = setup_db().await;
    let appliance_id = create_appliance(&db).await;

    let created = MaintenanceRepository::create(
        &db,
        NewMaintenanceTask {
            appliance_id,
            task: task_payload("Short lived", 1),
        },
    )
    .await
    .unwrap();

    assert!(MaintenanceRepository::delete(&db, &created.id).await.unwrap());
    assert!(!MaintenanceRepository::delete(&db, &created.id).await.unwrap());
}
