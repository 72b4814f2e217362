//! Bundled host services injected into page components.

use std::rc::Rc;

use crate::{ConfirmService, FileActionService, NoopConfirmService, NoopFileActionService};

#[derive(Clone)]
/// Capability bundle handed to page components at mount time.
///
/// Pages hold the bundle by value; services are shared `Rc` trait objects so
/// event handlers can clone them freely.
pub struct HostServices {
    /// File-action dispatch toward the backend.
    pub actions: Rc<dyn FileActionService>,
    /// Blocking confirmation dialogs.
    pub confirm: Rc<dyn ConfirmService>,
}

impl HostServices {
    /// Bundles concrete service implementations.
    pub fn new(actions: Rc<dyn FileActionService>, confirm: Rc<dyn ConfirmService>) -> Self {
        Self { actions, confirm }
    }

    /// No-op bundle for unsupported targets and tests.
    pub fn noop() -> Self {
        Self {
            actions: Rc::new(NoopFileActionService),
            confirm: Rc::new(NoopConfirmService),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_bundle_confirms_and_dispatches() {
        let services = HostServices::noop();
        assert!(services.confirm.confirm("proceed?"));
        assert_eq!(
            futures::executor::block_on(services.actions.upload()),
            Ok(())
        );
    }
}
