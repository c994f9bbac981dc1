mod common;

use chrono::{TimeZone, Utc};
use common::{appliance_payload, setup_db, task_payload, task_payload_with_provider};
use homewarden_models::domain::prelude::{
    AppliancePageParams, LinkedDocumentPayload, PageParams, SupportContactPayload,
    UpdateAppliance,
};
use homewarden_models::entities::prelude::{LinkedDocument, MaintenanceTask, SupportContact};
use homewarden_models::enums::WarrantyStatus;
use homewarden_repository::ApplianceRepository;
use sea_orm::{EntityTrait, PaginatorTrait};

fn page_params(page: u32, limit: u32) -> PageParams {
    PageParams {
        page: Some(page),
        limit: Some(limit),
    }
}

#[tokio::test]
async fn create_with_children_round_trips() {
    let db = setup_db().await;

    let mut payload = appliance_payload("Dryer", "Whirlpool", "X");
    payload.support_contacts = Some(vec![SupportContactPayload {
        name: "Whirlpool Support".to_string(),
        company: Some("Whirlpool".to_string()),
        phone: Some("555-0199".to_string()),
        email: Some("support@whirlpool.example".to_string()),
        website: None,
        notes: None,
    }]);
    payload.maintenance_tasks = Some(vec![
        task_payload_with_provider("Clean lint duct", 30),
        task_payload("Check drum belt", 60),
    ]);
    payload.linked_documents = Some(vec![LinkedDocumentPayload {
        title: "Manual".to_string(),
        url: "https://example.com/manual.pdf".to_string(),
    }]);

    let created = ApplianceRepository::create(&db, payload).await.unwrap();

    let fetched = ApplianceRepository::find_by_id(&db, &created.id)
        .await
        .unwrap()
        .expect("appliance exists");

    assert_eq!(fetched.name, "Dryer");
    assert_eq!(fetched.support_contacts.len(), 1);
    assert_eq!(fetched.maintenance_tasks.len(), 2);
    assert_eq!(fetched.linked_documents.len(), 1);

    let with_provider = fetched
        .maintenance_tasks
        .iter()
        .find(|t| t.task_name == "Clean lint duct")
        .unwrap();
    let provider = with_provider.service_provider.as_ref().unwrap();
    assert_eq!(provider.name, "Acme Repairs");
    assert_eq!(provider.phone.as_deref(), Some("555-0100"));

    let without_provider = fetched
        .maintenance_tasks
        .iter()
        .find(|t| t.task_name == "Check drum belt")
        .unwrap();
    assert!(without_provider.service_provider.is_none());
}

#[tokio::test]
async fn update_omitting_children_keeps_them() {
    let db = setup_db().await;

    let mut payload = appliance_payload("Fridge", "LG", "F-1");
    payload.maintenance_tasks = Some(vec![task_payload("Replace filter", 10)]);
    let created = ApplianceRepository::create(&db, payload).await.unwrap();

    let updated = ApplianceRepository::update(
        &db,
        &created.id,
        UpdateAppliance {
            name: Some("Garage fridge".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("appliance exists");

    assert_eq!(updated.name, "Garage fridge");
    assert_eq!(updated.brand, "LG");
    assert_eq!(updated.maintenance_tasks.len(), 1);
}

#[tokio::test]
async fn update_with_empty_list_clears_children() {
    let db = setup_db().await;

    let mut payload = appliance_payload("Oven", "Bosch", "O-2");
    payload.maintenance_tasks = Some(vec![
        task_payload("Descale", 5),
        task_payload("Check seal", 15),
    ]);
    payload.support_contacts = Some(vec![SupportContactPayload {
        name: "Bosch Service".to_string(),
        company: None,
        phone: None,
        email: None,
        website: None,
        notes: None,
    }]);
    let created = ApplianceRepository::create(&db, payload).await.unwrap();

    let updated = ApplianceRepository::update(
        &db,
        &created.id,
        UpdateAppliance {
            maintenance_tasks: Some(vec![]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("appliance exists");

    assert!(updated.maintenance_tasks.is_empty());
    // Contacts were omitted from the update and must survive
    assert_eq!(updated.support_contacts.len(), 1);
}

#[tokio::test]
async fn replacing_children_swaps_the_collection() {
    let db = setup_db().await;

    let mut payload = appliance_payload("Washer", "Miele", "W-3");
    payload.maintenance_tasks = Some(vec![task_payload("Old task", 5)]);
    let created = ApplianceRepository::create(&db, payload).await.unwrap();

    let updated = ApplianceRepository::update(
        &db,
        &created.id,
        UpdateAppliance {
            maintenance_tasks: Some(vec![
                task_payload("New task A", 7),
                task_payload("New task B", 14),
            ]),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("appliance exists");

    let names: Vec<_> = updated
        .maintenance_tasks
        .iter()
        .map(|t| t.task_name.as_str())
        .collect();
    assert_eq!(updated.maintenance_tasks.len(), 2);
    assert!(names.contains(&"New task A"));
    assert!(!names.contains(&"Old task"));
}

#[tokio::test]
async fn delete_cascades_all_children() {
    let db = setup_db().await;

    let mut payload = appliance_payload("Dishwasher", "Neff", "D-4");
    payload.support_contacts = Some(vec![SupportContactPayload {
        name: "Neff Care".to_string(),
        company: None,
        phone: None,
        email: None,
        website: None,
        notes: None,
    }]);
    payload.maintenance_tasks = Some(vec![task_payload("Clean filter", 3)]);
    payload.linked_documents = Some(vec![LinkedDocumentPayload {
        title: "Warranty card".to_string(),
        url: "https://example.com/warranty".to_string(),
    }]);
    let created = ApplianceRepository::create(&db, payload).await.unwrap();

    assert!(ApplianceRepository::delete(&db, &created.id).await.unwrap());

    assert_eq!(SupportContact::find().count(&db).await.unwrap(), 0);
    assert_eq!(MaintenanceTask::find().count(&db).await.unwrap(), 0);
    assert_eq!(LinkedDocument::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn delete_missing_returns_false() {
    let db = setup_db().await;
    assert!(!ApplianceRepository::delete(&db, "nope").await.unwrap());
}

#[tokio::test]
async fn update_missing_returns_none() {
    let db = setup_db().await;
    let result = ApplianceRepository::update(&db, "nope", UpdateAppliance::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn pagination_reports_totals_and_caps_page_size() {
    let db = setup_db().await;

    for i in 0..5 {
        ApplianceRepository::create(&db, appliance_payload(&format!("A{i}"), "Brand", "M"))
            .await
            .unwrap();
    }

    let result = ApplianceRepository::page(
        &db,
        AppliancePageParams {
            page: page_params(1, 2),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(result.data.len(), 2);
    assert_eq!(result.pagination.total, 5);
    assert_eq!(result.pagination.total_pages, 3);
    assert_eq!(result.pagination.page, 1);
    assert_eq!(result.pagination.limit, 2);

    let last = ApplianceRepository::page(
        &db,
        AppliancePageParams {
            page: page_params(3, 2),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(last.data.len(), 1);
}

#[tokio::test]
async fn search_matches_substring_case_insensitively() {
    let db = setup_db().await;

    ApplianceRepository::create(&db, appliance_payload("Dryer", "Whirlpool", "X"))
        .await
        .unwrap();
    ApplianceRepository::create(&db, appliance_payload("Washer", "Samsung", "Y"))
        .await
        .unwrap();

    let result = ApplianceRepository::page(
        &db,
        AppliancePageParams {
            search: Some("dry".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].name, "Dryer");

    // Search also covers the model column
    let by_model = ApplianceRepository::page(
        &db,
        AppliancePageParams {
            search: Some("y".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(by_model.pagination.total, 2);
}

#[tokio::test]
async fn brand_filter_is_exact() {
    let db = setup_db().await;

    ApplianceRepository::create(&db, appliance_payload("Dryer", "Whirlpool", "X"))
        .await
        .unwrap();
    ApplianceRepository::create(&db, appliance_payload("Washer", "Whirl", "Y"))
        .await
        .unwrap();

    let result = ApplianceRepository::page(
        &db,
        AppliancePageParams {
            brand: Some("Whirl".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(result.data.len(), 1);
    assert_eq!(result.data[0].name, "Washer");
}

#[tokio::test]
async fn warranty_is_expired_for_the_dryer_scenario() {
    let db = setup_db().await;

    // 2022-10-15 purchase with 24 months, checked on 2025-01-01
    let created = ApplianceRepository::create(&db, appliance_payload("Dryer", "Whirlpool", "X"))
        .await
        .unwrap();

    let today = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    let info = ApplianceRepository::warranty(&db, &created.id, today)
        .await
        .unwrap()
        .expect("appliance exists");

    assert_eq!(info.status, WarrantyStatus::Expired);
    assert_eq!(info.days_remaining, 0);
}

#[tokio::test]
async fn warranty_for_missing_appliance_is_none() {
    let db = setup_db().await;
    let info = ApplianceRepository::warranty(&db, "nope", Utc::now())
        .await
        .unwrap();
    assert!(info.is_none());
}
