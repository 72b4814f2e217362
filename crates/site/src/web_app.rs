use std::rc::Rc;

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use vault_app_dashboard::{DashboardApp, HistoryApp};
use vault_host::{HostServices, ListingSource};
use vault_host_web::{DomListingSource, WebConfirmService, WebFileActionService};
use vault_ui::prelude::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="FileVault" />
        <Meta name="description" content="Personal file vault with versioned uploads." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DashboardRoute />
                    <Route path="/history/:id" view=HistoryRoute />
                </Routes>
            </main>
        </Router>
    }
}

fn host_services() -> HostServices {
    HostServices::new(Rc::new(WebFileActionService), Rc::new(WebConfirmService))
}

#[component]
fn DashboardRoute() -> impl IntoView {
    match DomListingSource.dashboard_payload() {
        Ok(payload) => {
            view! { <DashboardApp payload=payload services=host_services() /> }.into_view()
        }
        Err(err) => {
            logging::warn!("dashboard payload load failed: {err}");
            view! { <PayloadError message=err /> }.into_view()
        }
    }
}

#[component]
fn HistoryRoute() -> impl IntoView {
    // The embedded payload already identifies the file; the `:id` segment
    // only exists so client routing matches the server's history URLs.
    match DomListingSource.history_payload() {
        Ok(payload) => view! { <HistoryApp payload=payload services=host_services() /> }.into_view(),
        Err(err) => {
            logging::warn!("history payload load failed: {err}");
            view! { <PayloadError message=err /> }.into_view()
        }
    }
}

#[component]
fn PayloadError(message: String) -> impl IntoView {
    view! {
        <Panel layout_class="payload-error" aria_label="Load error">
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Title>"Something went wrong"</Heading>
                <Text tone=TextTone::Danger>{message}</Text>
                <a class="ui-link" href="/">"Back to dashboard"</a>
            </Stack>
        </Panel>
    }
}
