//! File-action host-service contracts.
//!
//! Actions are native form submissions or navigations handled entirely by
//! the backend collaborator; the client performs confirmation and optimistic
//! UI updates only and never issues its own network calls.

use std::{future::Future, pin::Pin};

use listing_core::FileId;

/// Object-safe boxed future used by [`FileActionService`].
pub type FileActionFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that dispatches file actions to the backend.
pub trait FileActionService {
    /// Submits the page's upload form.
    fn upload<'a>(&'a self) -> FileActionFuture<'a, Result<(), String>>;

    /// Submits a rename for `id` with the normalized `new_name`.
    fn rename<'a>(
        &'a self,
        id: &'a FileId,
        new_name: &'a str,
    ) -> FileActionFuture<'a, Result<(), String>>;

    /// Submits a soft delete for `id`.
    fn delete<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>>;

    /// Submits a restore for the soft-deleted file `id`.
    fn restore<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>>;

    /// Submits a restore for the historical version `id`.
    fn restore_version<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>>;

    /// Navigates to the download target for the file `id`.
    fn download<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>>;

    /// Navigates to the download target for the version `id`.
    fn download_version<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op action service for unsupported targets and tests.
pub struct NoopFileActionService;

impl FileActionService for NoopFileActionService {
    fn upload<'a>(&'a self) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn rename<'a>(
        &'a self,
        _id: &'a FileId,
        _new_name: &'a str,
    ) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn delete<'a>(&'a self, _id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn restore<'a>(&'a self, _id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn restore_version<'a>(&'a self, _id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn download<'a>(&'a self, _id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn download_version<'a>(&'a self, _id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_service_accepts_every_action() {
        let service = NoopFileActionService;
        let id = FileId::new("1");
        assert_eq!(futures::executor::block_on(service.upload()), Ok(()));
        assert_eq!(
            futures::executor::block_on(service.rename(&id, "new.txt")),
            Ok(())
        );
        assert_eq!(futures::executor::block_on(service.delete(&id)), Ok(()));
        assert_eq!(
            futures::executor::block_on(service.restore_version(&id)),
            Ok(())
        );
    }
}
