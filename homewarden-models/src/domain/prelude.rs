pub use crate::domain::{
    appliance::{ApplianceInfo, AppliancePageParams, NewAppliance, UpdateAppliance},
    common::{PageMeta, PageParams, Paginated, PathId, DEFAULT_LIMIT, DEFAULT_PAGE},
    contact::{NewSupportContact, SupportContactInfo, SupportContactPayload, UpdateSupportContact},
    document::{
        LinkedDocumentInfo, LinkedDocumentPayload, NewLinkedDocument, UpdateLinkedDocument,
    },
    maintenance::{
        MaintenancePageParams, MaintenanceTaskInfo, MaintenanceTaskPayload, NewMaintenanceTask,
        ServiceProvider, UpdateMaintenanceTask,
    },
};
