use chrono::{DateTime, Duration, TimeZone, Utc};
use homewarden_models::domain::prelude::{MaintenanceTaskPayload, NewAppliance, ServiceProvider};
use homewarden_models::enums::{Frequency, TaskStatus};
use homewarden_storage::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fresh in-memory database with the schema applied. A single pooled
/// connection keeps the memory store shared across queries.
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts)
        .await
        .expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("apply migrations");
    db
}

pub fn purchase_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 10, 15, 0, 0, 0).unwrap()
}

pub fn appliance_payload(name: &str, brand: &str, model: &str) -> NewAppliance {
    NewAppliance {
        name: name.to_string(),
        brand: brand.to_string(),
        model: model.to_string(),
        purchase_date: purchase_date(),
        warranty_duration_months: 24,
        serial_number: None,
        purchase_location: None,
        notes: None,
        support_contacts: None,
        maintenance_tasks: None,
        linked_documents: None,
    }
}

pub fn task_payload(name: &str, days_from_now: i64) -> MaintenanceTaskPayload {
    MaintenanceTaskPayload {
        task_name: name.to_string(),
        scheduled_date: Utc::now() + Duration::days(days_from_now),
        frequency: Frequency::Monthly,
        service_provider: None,
        notes: None,
        status: TaskStatus::Upcoming,
        completed_date: None,
    }
}

pub fn task_payload_with_provider(name: &str, days_from_now: i64) -> MaintenanceTaskPayload {
    MaintenanceTaskPayload {
        service_provider: Some(ServiceProvider {
            name: "Acme Repairs".to_string(),
            phone: Some("555-0100".to_string()),
            email: Some("service@acme.example".to_string()),
            notes: None,
        }),
        ..task_payload(name, days_from_now)
    }
}
