//! DOM-embedded listing payload source.

use vault_host::{
    DashboardPayload, HistoryPayload, ListingSource, DASHBOARD_PAYLOAD_ELEMENT_ID,
    HISTORY_PAYLOAD_ELEMENT_ID,
};

#[derive(Debug, Clone, Copy, Default)]
/// Listing source that reads the server-rendered JSON documents embedded in
/// the page by element id.
pub struct DomListingSource;

impl ListingSource for DomListingSource {
    fn dashboard_payload(&self) -> Result<DashboardPayload, String> {
        let raw = embedded_document_text(DASHBOARD_PAYLOAD_ELEMENT_ID)?;
        serde_json::from_str(&raw)
            .map_err(|err| format!("dashboard payload deserialize failed: {err}"))
    }

    fn history_payload(&self) -> Result<HistoryPayload, String> {
        let raw = embedded_document_text(HISTORY_PAYLOAD_ELEMENT_ID)?;
        serde_json::from_str(&raw).map_err(|err| format!("history payload deserialize failed: {err}"))
    }
}

#[cfg(target_arch = "wasm32")]
fn embedded_document_text(element_id: &str) -> Result<String, String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "no browser document available".to_string())?;
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| format!("listing payload element `#{element_id}` not found"))?;
    element
        .text_content()
        .filter(|text| !text.trim().is_empty())
        .ok_or_else(|| format!("listing payload element `#{element_id}` is empty"))
}

#[cfg(not(target_arch = "wasm32"))]
fn embedded_document_text(element_id: &str) -> Result<String, String> {
    Err(format!(
        "listing payload element `#{element_id}` requires a browser document"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_target_reports_the_missing_document() {
        let source = DomListingSource;
        let err = source.dashboard_payload().expect_err("no document");
        assert!(err.contains(DASHBOARD_PAYLOAD_ELEMENT_ID), "err={err}");
    }
}
