pub mod appliance;
pub mod linked_document;
pub mod maintenance_task;
pub mod support_contact;

pub mod prelude;
