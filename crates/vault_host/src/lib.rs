//! Typed host-domain contracts shared between the dashboard UI and browser
//! adapters.
//!
//! This crate is the API boundary toward the backend collaborator: it owns
//! the server-rendered listing payload models, the backend route table, and
//! the service traits for file actions and confirmation dialogs. Concrete
//! browser wiring lives in `vault_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod confirm;
pub mod listing;
pub mod routes;
pub mod services;

pub use actions::{FileActionFuture, FileActionService, NoopFileActionService};
pub use confirm::{
    delete_file_prompt, delete_version_prompt, restore_version_prompt, ConfirmService,
    NoopConfirmService,
};
pub use listing::{
    DashboardPayload, HistoryPayload, ListingSource, NoopListingSource,
    DASHBOARD_PAYLOAD_ELEMENT_ID, HISTORY_PAYLOAD_ELEMENT_ID, UPLOAD_FORM_ELEMENT_ID,
};
pub use services::HostServices;
