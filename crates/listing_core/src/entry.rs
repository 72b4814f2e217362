//! Listing entry types shared across host contracts and the dashboard UI.
//!
//! Entries are read-only from the client's point of view: the server renders
//! them into the page and this component only derives visibility, order, and
//! presentation status from them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque identifier for a file or file version.
///
/// The client never interprets the contents; ids are only echoed back to the
/// backend in action routes and used as render keys.
pub struct FileId(String);

impl FileId {
    /// Wraps a raw identifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One file's metadata as displayed in the listing.
pub struct FileEntry {
    /// Opaque identifier assigned by the backend.
    pub id: FileId,
    /// Display name. Uniqueness within a listing is not guaranteed.
    pub name: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Last-modified time in unix milliseconds.
    pub modified_at_unix_ms: u64,
    /// MIME type reported by the backend, when known.
    #[serde(default)]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One historical version of a file, as shown on the history page.
pub struct FileVersion {
    /// Opaque identifier assigned by the backend.
    pub id: FileId,
    /// Version number, unique per file and increasing over time.
    pub version_number: u32,
    /// Size of this version in bytes.
    pub size_bytes: u64,
    /// Creation time in unix milliseconds.
    pub created_at_unix_ms: u64,
    /// Whether the backend considers this the current version.
    pub is_current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Presentation status badge for a version row.
///
/// `Current` comes from the server payload; `Restored` and `Deleted` are
/// optimistic client-side marks applied before the backend confirms them.
pub enum VersionStatus {
    /// The backend's current version.
    Current,
    /// Marked restored by the user this session.
    Restored,
    /// Marked deleted by the user this session.
    Deleted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_id_round_trips_as_transparent_string() {
        let id = FileId::new("42");
        assert_eq!(serde_json::to_string(&id).expect("serialize"), "\"42\"");
        let back: FileId = serde_json::from_str("\"42\"").expect("deserialize");
        assert_eq!(back, id);
        assert_eq!(back.as_str(), "42");
    }

    #[test]
    fn version_status_serde_values_match_badge_tokens() {
        assert_eq!(
            serde_json::to_string(&VersionStatus::Current).expect("serialize"),
            "\"current\""
        );
        assert_eq!(
            serde_json::to_string(&VersionStatus::Restored).expect("serialize"),
            "\"restored\""
        );
        assert_eq!(
            serde_json::to_string(&VersionStatus::Deleted).expect("serialize"),
            "\"deleted\""
        );
    }

    #[test]
    fn file_entry_tolerates_missing_content_type() {
        let raw = r#"{
            "id": "7",
            "name": "report.pdf",
            "size_bytes": 2048,
            "modified_at_unix_ms": 1700000000000
        }"#;
        let entry: FileEntry = serde_json::from_str(raw).expect("deserialize");
        assert_eq!(entry.name, "report.pdf");
        assert_eq!(entry.content_type, None);
    }
}
