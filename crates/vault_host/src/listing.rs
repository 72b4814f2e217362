//! Server-rendered listing payload models and the source contract that
//! reads them.
//!
//! The backend embeds one JSON document per page (dashboard or history)
//! which the browser adapter locates by element id. Well-formed values are
//! guaranteed by the server; a missing or malformed document surfaces as a
//! single `Err` rather than per-field recovery.

use listing_core::{FileEntry, FileVersion};
use serde::{Deserialize, Serialize};

/// Element id of the dashboard listing payload script tag.
pub const DASHBOARD_PAYLOAD_ELEMENT_ID: &str = "vault-dashboard-payload";
/// Element id of the history-page payload script tag.
pub const HISTORY_PAYLOAD_ELEMENT_ID: &str = "vault-history-payload";
/// Element id of the native multipart upload form.
pub const UPLOAD_FORM_ELEMENT_ID: &str = "vault-upload-form";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Dashboard page payload: the user's live file listing.
pub struct DashboardPayload {
    /// File entries in the server's render order.
    pub files: Vec<FileEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// History page payload: one file plus its version trail.
pub struct HistoryPayload {
    /// The file whose history is displayed.
    pub file: FileEntry,
    /// Versions, newest first as rendered by the server.
    pub versions: Vec<FileVersion>,
}

/// Host source for the page's embedded listing payloads.
pub trait ListingSource {
    /// Reads and deserializes the dashboard payload.
    fn dashboard_payload(&self) -> Result<DashboardPayload, String>;

    /// Reads and deserializes the history payload.
    fn history_payload(&self) -> Result<HistoryPayload, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Listing source for unsupported targets; serves an empty dashboard and no
/// history.
pub struct NoopListingSource;

impl ListingSource for NoopListingSource {
    fn dashboard_payload(&self) -> Result<DashboardPayload, String> {
        Ok(DashboardPayload::default())
    }

    fn history_payload(&self) -> Result<HistoryPayload, String> {
        Err("history payload unavailable outside a browser document".to_string())
    }
}

#[cfg(test)]
mod tests {
    use listing_core::FileId;
    use serde_json::json;

    use super::*;

    #[test]
    fn dashboard_payload_round_trips_with_server_field_spelling() {
        let raw = json!({
            "files": [
                {
                    "id": "12",
                    "name": "notes.txt",
                    "size_bytes": 512,
                    "modified_at_unix_ms": 1700000000000u64,
                    "content_type": "text/plain"
                }
            ]
        });

        let payload: DashboardPayload = serde_json::from_value(raw).expect("deserialize");
        assert_eq!(payload.files.len(), 1);
        assert_eq!(payload.files[0].id, FileId::new("12"));
        assert_eq!(payload.files[0].content_type.as_deref(), Some("text/plain"));

        let round_trip: DashboardPayload =
            serde_json::from_value(serde_json::to_value(&payload).expect("serialize"))
                .expect("round trip");
        assert_eq!(round_trip, payload);
    }

    #[test]
    fn history_payload_carries_file_and_versions() {
        let raw = json!({
            "file": {
                "id": "3",
                "name": "draft.doc",
                "size_bytes": 1024,
                "modified_at_unix_ms": 5u64
            },
            "versions": [
                {
                    "id": "31",
                    "version_number": 2,
                    "size_bytes": 1024,
                    "created_at_unix_ms": 5u64,
                    "is_current": true
                },
                {
                    "id": "30",
                    "version_number": 1,
                    "size_bytes": 900,
                    "created_at_unix_ms": 1u64,
                    "is_current": false
                }
            ]
        });

        let payload: HistoryPayload = serde_json::from_value(raw).expect("deserialize");
        assert_eq!(payload.versions.len(), 2);
        assert!(payload.versions[0].is_current);
        assert_eq!(payload.versions[1].version_number, 1);
    }

    #[test]
    fn noop_source_serves_an_empty_dashboard() {
        let source = NoopListingSource;
        assert_eq!(source.dashboard_payload(), Ok(DashboardPayload::default()));
        assert!(source.history_payload().is_err());
    }
}
