use super::*;

#[component]
/// Shared modal dialog surface with a dimmed backdrop.
pub fn Modal(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-modal-backdrop"
            data-ui-primitive="true"
            data-ui-kind="modal-backdrop"
        >
            <section
                class=merge_layout_class("ui-modal", layout_class)
                id=id
                role="dialog"
                aria-modal="true"
                aria-label=aria_label
                data-ui-primitive="true"
                data-ui-kind="modal"
            >
                {children()}
            </section>
        </div>
    }
}

#[component]
/// Fixed region hosting transient toast notifications.
pub fn ToastRegion(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast-region", layout_class)
            role="region"
            aria-label="Notifications"
            data-ui-primitive="true"
            data-ui-kind="toast-region"
        >
            {children()}
        </div>
    }
}

#[component]
/// One transient toast notification with a dismiss affordance.
pub fn ToastCard(
    #[prop(default = TextTone::Info)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_dismiss: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toast", layout_class)
            role="alert"
            aria-live="assertive"
            aria-atomic="true"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-tone=tone.token()
        >
            <span data-ui-slot="body">{children()}</span>
            <button
                type="button"
                data-ui-slot="dismiss"
                aria-label="Close notification"
                on:click=move |ev| {
                    if let Some(on_dismiss) = on_dismiss.as_ref() {
                        on_dismiss.call(ev);
                    }
                }
            >
                "×"
            </button>
        </div>
    }
}
