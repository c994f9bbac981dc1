use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        create_tables(manager).await?;
        create_indexes(manager).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first, FKs point at appliances
        manager
            .drop_table(Table::drop().table(LinkedDocuments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MaintenanceTasks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SupportContacts::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Appliances::Table).to_owned())
            .await?;
        Ok(())
    }
}

async fn create_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Appliances::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Appliances::Id)
                        .string()
                        .not_null()
                        .primary_key(),
                )
                .col(ColumnDef::new(Appliances::Name).string().not_null())
                .col(ColumnDef::new(Appliances::Brand).string().not_null())
                .col(ColumnDef::new(Appliances::Model).string().not_null())
                .col(
                    ColumnDef::new(Appliances::PurchaseDate)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Appliances::WarrantyDurationMonths)
                        .integer()
                        .not_null(),
                )
                .col(ColumnDef::new(Appliances::SerialNumber).string())
                .col(ColumnDef::new(Appliances::PurchaseLocation).string())
                .col(ColumnDef::new(Appliances::Notes).text())
                .col(
                    ColumnDef::new(Appliances::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(Appliances::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(SupportContacts::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(SupportContacts::Id)
                        .string()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(SupportContacts::ApplianceId)
                        .string()
                        .not_null(),
                )
                .col(ColumnDef::new(SupportContacts::Name).string().not_null())
                .col(ColumnDef::new(SupportContacts::Company).string())
                .col(ColumnDef::new(SupportContacts::Phone).string())
                .col(ColumnDef::new(SupportContacts::Email).string())
                .col(ColumnDef::new(SupportContacts::Website).string())
                .col(ColumnDef::new(SupportContacts::Notes).text())
                .col(
                    ColumnDef::new(SupportContacts::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(SupportContacts::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_support_contacts_appliance")
                        .from(SupportContacts::Table, SupportContacts::ApplianceId)
                        .to(Appliances::Table, Appliances::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(MaintenanceTasks::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(MaintenanceTasks::Id)
                        .string()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(MaintenanceTasks::ApplianceId)
                        .string()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(MaintenanceTasks::TaskName)
                        .string()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(MaintenanceTasks::ScheduledDate)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(MaintenanceTasks::Frequency)
                        .string_len(20)
                        .not_null(),
                )
                .col(ColumnDef::new(MaintenanceTasks::ServiceProviderName).string())
                .col(ColumnDef::new(MaintenanceTasks::ServiceProviderPhone).string())
                .col(ColumnDef::new(MaintenanceTasks::ServiceProviderEmail).string())
                .col(ColumnDef::new(MaintenanceTasks::ServiceProviderNotes).text())
                .col(ColumnDef::new(MaintenanceTasks::Notes).text())
                .col(
                    ColumnDef::new(MaintenanceTasks::Status)
                        .string_len(20)
                        .not_null(),
                )
                .col(ColumnDef::new(MaintenanceTasks::CompletedDate).timestamp_with_time_zone())
                .col(
                    ColumnDef::new(MaintenanceTasks::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(MaintenanceTasks::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_maintenance_tasks_appliance")
                        .from(MaintenanceTasks::Table, MaintenanceTasks::ApplianceId)
                        .to(Appliances::Table, Appliances::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(LinkedDocuments::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(LinkedDocuments::Id)
                        .string()
                        .not_null()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(LinkedDocuments::ApplianceId)
                        .string()
                        .not_null(),
                )
                .col(ColumnDef::new(LinkedDocuments::Title).string().not_null())
                .col(ColumnDef::new(LinkedDocuments::Url).string().not_null())
                .col(
                    ColumnDef::new(LinkedDocuments::CreatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .col(
                    ColumnDef::new(LinkedDocuments::UpdatedAt)
                        .timestamp_with_time_zone()
                        .not_null(),
                )
                .foreign_key(
                    ForeignKey::create()
                        .name("fk_linked_documents_appliance")
                        .from(LinkedDocuments::Table, LinkedDocuments::ApplianceId)
                        .to(Appliances::Table, Appliances::Id)
                        .on_delete(ForeignKeyAction::Cascade),
                )
                .to_owned(),
        )
        .await?;

    Ok(())
}

async fn create_indexes(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_index(
            Index::create()
                .name("idx_appliances_brand")
                .table(Appliances::Table)
                .col(Appliances::Brand)
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_appliances_name")
                .table(Appliances::Table)
                .col(Appliances::Name)
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_support_contacts_appliance")
                .table(SupportContacts::Table)
                .col(SupportContacts::ApplianceId)
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_maintenance_tasks_appliance")
                .table(MaintenanceTasks::Table)
                .col(MaintenanceTasks::ApplianceId)
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_maintenance_tasks_scheduled_date")
                .table(MaintenanceTasks::Table)
                .col(MaintenanceTasks::ScheduledDate)
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_maintenance_tasks_status")
                .table(MaintenanceTasks::Table)
                .col(MaintenanceTasks::Status)
                .to_owned(),
        )
        .await?;

    manager
        .create_index(
            Index::create()
                .name("idx_linked_documents_appliance")
                .table(LinkedDocuments::Table)
                .col(LinkedDocuments::ApplianceId)
                .to_owned(),
        )
        .await?;

    Ok(())
}

#[derive(DeriveIden)]
enum Appliances {
    Table,
    Id,
    Name,
    Brand,
    Model,
    PurchaseDate,
    WarrantyDurationMonths,
    SerialNumber,
    PurchaseLocation,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum SupportContacts {
    Table,
    Id,
    ApplianceId,
    Name,
    Company,
    Phone,
    Email,
    Website,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum MaintenanceTasks {
    Table,
    Id,
    ApplianceId,
    TaskName,
    ScheduledDate,
    Frequency,
    ServiceProviderName,
    ServiceProviderPhone,
    ServiceProviderEmail,
    ServiceProviderNotes,
    Notes,
    Status,
    CompletedDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum LinkedDocuments {
    Table,
    Id,
    ApplianceId,
    Title,
    Url,
    CreatedAt,
    UpdatedAt,
}
