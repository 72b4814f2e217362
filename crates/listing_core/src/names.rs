//! Filename helpers mirroring the backend's upload and rename rules.
//!
//! The backend owns real validation; these helpers exist so the client can
//! block obviously-rejected submissions before a round trip and preview the
//! rename normalization the backend will apply.

const ALLOWED_UPLOAD_EXTENSIONS: [&str; 10] = [
    "txt", "pdf", "png", "jpg", "jpeg", "gif", "doc", "docx", "xls", "xlsx",
];

const PREVIEWABLE_EXTENSIONS: [&str; 6] = ["txt", "pdf", "jpg", "jpeg", "png", "gif"];

/// Returns the lowercased extension of `name` including the leading dot, or
/// `None` when the name contains no dot.
pub fn file_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    Some(format!(".{}", ext.to_lowercase()))
}

/// Returns `true` when the filename carries an extension the backend accepts
/// for upload.
pub fn is_allowed_upload(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_UPLOAD_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Returns `true` when the in-page preview modal can display this file type.
pub fn is_previewable(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => PREVIEWABLE_EXTENSIONS.contains(&ext.to_lowercase().as_str()),
        None => false,
    }
}

/// Normalizes a rename target the way the backend will: trims whitespace and,
/// when the new name has no extension but the original does, appends the
/// original's extension.
///
/// Returns `None` for a name that trims to empty, which the backend rejects.
pub fn ensure_extension(new_name: &str, original_name: &str) -> Option<String> {
    let trimmed = new_name.trim();
    if trimmed.is_empty() {
        return None;
    }

    if file_extension(trimmed).is_none() {
        if let Some(ext) = file_extension(original_name) {
            return Some(format!("{trimmed}{ext}"));
        }
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_extension_is_lowercased_and_keeps_the_dot() {
        assert_eq!(file_extension("report.PDF"), Some(".pdf".to_string()));
        assert_eq!(file_extension("archive.tar.gz"), Some(".gz".to_string()));
        assert_eq!(file_extension("README"), None);
        assert_eq!(file_extension(".gitignore"), Some(".gitignore".to_string()));
    }

    #[test]
    fn upload_allow_list_matches_backend_extensions() {
        assert!(is_allowed_upload("notes.txt"));
        assert!(is_allowed_upload("photo.JPEG"));
        assert!(is_allowed_upload("sheet.xlsx"));
        assert!(!is_allowed_upload("tool.exe"));
        assert!(!is_allowed_upload("no-extension"));
    }

    #[test]
    fn previewable_set_is_narrower_than_upload_set() {
        assert!(is_previewable("photo.png"));
        assert!(is_previewable("notes.TXT"));
        assert!(!is_previewable("sheet.xlsx"));
        assert!(!is_previewable("document"));
    }

    #[test]
    fn rename_keeps_or_inherits_the_original_extension() {
        assert_eq!(
            ensure_extension("quarterly", "report.pdf"),
            Some("quarterly.pdf".to_string())
        );
        assert_eq!(
            ensure_extension("quarterly.txt", "report.pdf"),
            Some("quarterly.txt".to_string())
        );
        assert_eq!(
            ensure_extension("  padded  ", "notes"),
            Some("padded".to_string())
        );
        assert_eq!(ensure_extension("   ", "report.pdf"), None);
    }
}
