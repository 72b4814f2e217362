//! File-action adapter backed by native form submissions and navigations.
//!
//! POST actions build a hidden form, attach it to the body, and submit it so
//! the backend handles the request and the resulting redirect exactly as it
//! would for a server-rendered page. Downloads are plain navigations.

use listing_core::FileId;
use vault_host::{routes, FileActionFuture, FileActionService, UPLOAD_FORM_ELEMENT_ID};

#[derive(Debug, Clone, Copy, Default)]
/// Browser file-action adapter.
pub struct WebFileActionService;

impl FileActionService for WebFileActionService {
    fn upload<'a>(&'a self) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move { submit_upload_form() })
    }

    fn rename<'a>(
        &'a self,
        id: &'a FileId,
        new_name: &'a str,
    ) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move {
            submit_post_form(&routes::rename_file(id), &[("filename", new_name)])
        })
    }

    fn delete<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move { submit_post_form(&routes::delete_file(id), &[]) })
    }

    fn restore<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move { submit_post_form(&routes::restore_file(id), &[]) })
    }

    fn restore_version<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move { submit_post_form(&routes::restore_version(id), &[]) })
    }

    fn download<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move { navigate(&routes::download_file(id)) })
    }

    fn download_version<'a>(&'a self, id: &'a FileId) -> FileActionFuture<'a, Result<(), String>> {
        Box::pin(async move { navigate(&routes::download_version(id)) })
    }
}

#[cfg(target_arch = "wasm32")]
fn submit_upload_form() -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no browser document available".to_string())?;
    let form = document
        .get_element_by_id(UPLOAD_FORM_ELEMENT_ID)
        .ok_or_else(|| format!("upload form `#{UPLOAD_FORM_ELEMENT_ID}` not found"))?
        .dyn_into::<web_sys::HtmlFormElement>()
        .map_err(|_| format!("`#{UPLOAD_FORM_ELEMENT_ID}` is not a form element"))?;
    form.submit()
        .map_err(|err| format!("upload form submit failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn submit_upload_form() -> Result<(), String> {
    Err(format!(
        "upload form `#{UPLOAD_FORM_ELEMENT_ID}` requires a browser document"
    ))
}

#[cfg(target_arch = "wasm32")]
fn submit_post_form(action: &str, fields: &[(&str, &str)]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no browser document available".to_string())?;

    let form = document
        .create_element("form")
        .map_err(|err| format!("form create failed: {err:?}"))?
        .dyn_into::<web_sys::HtmlFormElement>()
        .map_err(|_| "created element is not a form".to_string())?;
    form.set_method("post");
    form.set_action(action);

    for (name, value) in fields {
        let input = document
            .create_element("input")
            .map_err(|err| format!("form field create failed: {err:?}"))?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| "created element is not an input".to_string())?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)
            .map_err(|err| format!("form field attach failed: {err:?}"))?;
    }

    let body = document
        .body()
        .ok_or_else(|| "no document body available".to_string())?;
    body.append_child(&form)
        .map_err(|err| format!("form attach failed: {err:?}"))?;
    form.submit()
        .map_err(|err| format!("form submit to `{action}` failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn submit_post_form(action: &str, fields: &[(&str, &str)]) -> Result<(), String> {
    let _ = fields;
    Err(format!("form submit to `{action}` requires a browser document"))
}

#[cfg(target_arch = "wasm32")]
fn navigate(target: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no browser window available".to_string())?;
    window
        .location()
        .assign(target)
        .map_err(|err| format!("navigation to `{target}` failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn navigate(target: &str) -> Result<(), String> {
    Err(format!("navigation to `{target}` requires a browser window"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_target_reports_missing_browser_context() {
        let service = WebFileActionService;
        let id = FileId::new("9");
        let err = futures::executor::block_on(service.delete(&id)).expect_err("no document");
        assert!(err.contains("/delete/9"), "err={err}");
        let err = futures::executor::block_on(service.download(&id)).expect_err("no window");
        assert!(err.contains("/download/9"), "err={err}");
    }
}
