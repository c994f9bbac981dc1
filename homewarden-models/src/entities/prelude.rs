pub use super::appliance::{
    ActiveModel as ApplianceActiveModel, Column as ApplianceColumn, Entity as Appliance,
    Model as ApplianceModel,
};
pub use super::linked_document::{
    ActiveModel as LinkedDocumentActiveModel, Column as LinkedDocumentColumn,
    Entity as LinkedDocument, Model as LinkedDocumentModel,
};
pub use super::maintenance_task::{
    ActiveModel as MaintenanceTaskActiveModel, Column as MaintenanceTaskColumn,
    Entity as MaintenanceTask, Model as MaintenanceTaskModel,
};
pub use super::support_contact::{
    ActiveModel as SupportContactActiveModel, Column as SupportContactColumn,
    Entity as SupportContact, Model as SupportContactModel,
};
