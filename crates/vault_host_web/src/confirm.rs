//! `window.confirm`-backed confirmation adapter.

use vault_host::ConfirmService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser confirmation adapter backed by the native blocking dialog.
pub struct WebConfirmService;

impl ConfirmService for WebConfirmService {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.confirm_with_message(message).ok())
                .unwrap_or(false);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            true
        }
    }
}
