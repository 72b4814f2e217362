//! Blocking confirmation-dialog contract.

/// Host service for blocking user confirmations ahead of destructive
/// actions.
pub trait ConfirmService {
    /// Presents `message` and returns whether the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
/// Confirmation service that accepts everything; used on targets without a
/// dialog surface and in tests.
pub struct NoopConfirmService;

impl ConfirmService for NoopConfirmService {
    fn confirm(&self, _message: &str) -> bool {
        true
    }
}

/// Builds the confirmation prompt for deleting a file.
pub fn delete_file_prompt(name: &str) -> String {
    format!("Are you sure you want to delete \"{name}\"?")
}

/// Builds the confirmation prompt for restoring a version as current.
pub fn restore_version_prompt(version_number: u32) -> String {
    format!("Are you sure you want to restore version {version_number} as the current version?")
}

/// Builds the confirmation prompt for marking a version deleted.
pub fn delete_version_prompt(version_number: u32) -> String {
    format!("Are you sure you want to mark Version {version_number} as deleted?")
}
