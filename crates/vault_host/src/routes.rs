//! Backend route table for file actions.
//!
//! The backend collaborator serves these endpoints; the client only builds
//! the URLs and submits native forms or navigations against them.

use listing_core::FileId;

/// Multipart upload endpoint (POST).
pub const UPLOAD: &str = "/upload";

/// Rename endpoint for a file (POST with a `filename` field).
pub fn rename_file(id: &FileId) -> String {
    format!("/rename/{id}")
}

/// Soft-delete endpoint for a file (POST).
pub fn delete_file(id: &FileId) -> String {
    format!("/delete/{id}")
}

/// Restore endpoint for a soft-deleted file (POST).
pub fn restore_file(id: &FileId) -> String {
    format!("/restore/{id}")
}

/// Restore endpoint for a historical version (POST).
pub fn restore_version(id: &FileId) -> String {
    format!("/restore-version/{id}")
}

/// Download navigation target for a file's current version.
pub fn download_file(id: &FileId) -> String {
    format!("/download/{id}")
}

/// Download navigation target for a specific version.
pub fn download_version(id: &FileId) -> String {
    format!("/download-version/{id}")
}

/// Version-history page for a file.
pub fn file_history(id: &FileId) -> String {
    format!("/history/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_match_backend_url_shapes() {
        let id = FileId::new("17");
        assert_eq!(rename_file(&id), "/rename/17");
        assert_eq!(delete_file(&id), "/delete/17");
        assert_eq!(restore_file(&id), "/restore/17");
        assert_eq!(restore_version(&id), "/restore-version/17");
        assert_eq!(download_file(&id), "/download/17");
        assert_eq!(download_version(&id), "/download-version/17");
        assert_eq!(file_history(&id), "/history/17");
    }
}
