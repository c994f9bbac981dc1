//! Typed HTTP client mirroring the homewarden REST API.
//!
//! Reuses the server's domain models, so date-valued fields serialize to
//! ISO-8601 timestamps on the wire and parse back into `DateTime<Utc>`.

mod client;
mod error;
mod resources;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use resources::appliances::ApplianceQuery;
pub use resources::maintenance::MaintenanceQuery;
