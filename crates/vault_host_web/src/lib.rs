//! Browser (`wasm32`) implementations of [`vault_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer: it reads the
//! server-embedded listing payloads out of the live document, wraps
//! `window.confirm` for blocking confirmations, and dispatches file actions
//! as native form submissions and navigations. Every entry point carries a
//! non-wasm fallback so the workspace builds on native targets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod actions;
pub mod confirm;
pub mod listing;

pub use actions::WebFileActionService;
pub use confirm::WebConfirmService;
pub use listing::DomListingSource;
