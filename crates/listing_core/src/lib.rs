//! Headless file-listing logic shared by the dashboard UI and host adapters.
//!
//! The crate owns the immutable entry model, the pure
//! `(entries, query, sort key) -> projection` pipeline that drives the
//! listing display, human-readable size formatting, and filename helpers.
//! Rendering is a separate, idempotent side effect applied from a
//! [`ListProjection`]; nothing in this crate touches the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod entry;
mod format;
mod names;
mod projection;

pub use entry::{FileEntry, FileId, FileVersion, VersionStatus};
pub use format::{format_bytes, format_bytes_with};
pub use names::{ensure_extension, file_extension, is_allowed_upload, is_previewable};
pub use projection::{FileListView, ListProjection, SortKey};
