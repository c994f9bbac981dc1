pub mod appliance;
pub mod contact;
pub mod document;
pub mod maintenance;

pub use appliance::ApplianceRepository;
pub use contact::ContactRepository;
pub use document::DocumentRepository;
pub use maintenance::MaintenanceRepository;
