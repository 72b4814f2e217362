//! Dashboard and version-history page components for the file vault.
//!
//! Both pages are thin projections over the headless state in [`state`]:
//! events mutate the state signal, the view re-renders from its projection,
//! and backend-bound actions dispatch through the injected host services.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use leptos::*;
use listing_core::{format_bytes, FileEntry, SortKey, VersionStatus};
use vault_host::{
    delete_file_prompt, delete_version_prompt, restore_version_prompt, routes, DashboardPayload,
    HistoryPayload, HostServices, UPLOAD_FORM_ELEMENT_ID,
};
use vault_ui::prelude::*;

mod state;

pub use state::{
    DashboardState, HistoryState, PreviewDialog, RenameDialog, Toast, ToastQueue, ToastTone,
    UploadDecision, UploadState, VersionMark, VersionRow,
};

const TOAST_SWEEP_INTERVAL: Duration = Duration::from_secs(1);
const UPLOAD_TICK_INTERVAL: Duration = Duration::from_millis(300);

fn toast_tone(tone: ToastTone) -> TextTone {
    match tone {
        ToastTone::Success => TextTone::Success,
        ToastTone::Warning => TextTone::Warning,
        ToastTone::Danger => TextTone::Danger,
        ToastTone::Info => TextTone::Info,
    }
}

fn badge_display(status: VersionStatus) -> (TextTone, &'static str) {
    match status {
        VersionStatus::Current => (TextTone::Success, "Current Version"),
        VersionStatus::Restored => (TextTone::Warning, "Restored"),
        VersionStatus::Deleted => (TextTone::Danger, "Deleted"),
    }
}

fn format_modified(unix_ms: u64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(unix_ms as f64));
        String::from(date.to_locale_string("en-US", &wasm_bindgen::JsValue::UNDEFINED))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        format!("{unix_ms} ms")
    }
}

#[component]
/// The file dashboard: searchable, sortable listing plus upload, rename,
/// preview, and delete affordances.
pub fn DashboardApp(
    /// Server-rendered listing payload.
    payload: DashboardPayload,
    /// Host service bundle for actions and confirmations.
    services: HostServices,
) -> impl IntoView {
    let state = create_rw_signal(DashboardState::new(payload.files));

    if let Ok(interval) = set_interval_with_handle(
        move || state.update(|s| s.sweep_toasts()),
        TOAST_SWEEP_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }
    if let Ok(interval) = set_interval_with_handle(
        move || state.update(|s| s.tick_upload()),
        UPLOAD_TICK_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    let toasts = Signal::derive(move || state.with(|s| s.toasts().to_vec()));
    let rename_dialog = Signal::derive(move || state.with(|s| s.rename_dialog().cloned()));
    let preview_dialog = Signal::derive(move || state.with(|s| s.preview_dialog().cloned()));
    let sort_value = Signal::derive(move || {
        state.with(|s| {
            s.sort_key()
                .map(|key| key.token().to_string())
                .unwrap_or_default()
        })
    });

    let on_search = Callback::new(move |ev: web_sys::Event| {
        let query = event_target_value(&ev);
        state.update(|s| s.set_query(query));
    });
    let on_sort = Callback::new(move |ev: web_sys::Event| {
        let token = event_target_value(&ev);
        state.update(|s| s.set_sort_token(&token));
    });
    let on_file_selected = Callback::new(move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        state.update(|s| s.select_upload_file(&value));
    });

    let upload_services = services.clone();
    let on_upload = Callback::new(move |_| {
        let mut decision = UploadDecision::MissingFile;
        state.update(|s| decision = s.request_upload());
        if decision == UploadDecision::Submitted {
            let services = upload_services.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.upload().await {
                    logging::warn!("upload submit failed: {err}");
                }
            });
        }
    });

    let rename_services = services.clone();
    let card_services = services.clone();
    let preview_services = services;

    view! {
        <div class="vault-dashboard">
            <ToastOverlay
                toasts=toasts
                on_dismiss=Callback::new(move |id| state.update(|s| s.dismiss_toast(id)))
            />

            <Panel layout_class="vault-upload-panel" aria_label="Upload a file">
                <Stack gap=LayoutGap::Sm>
                    <Heading role=TextRole::Title>"Upload"</Heading>
                    <form
                        id=UPLOAD_FORM_ELEMENT_ID
                        method="post"
                        action=routes::UPLOAD
                        enctype="multipart/form-data"
                    >
                        <Cluster gap=LayoutGap::Sm>
                            <FileField
                                name="file"
                                aria_label="File to upload"
                                on_change=on_file_selected
                            />
                            <Text tone=TextTone::Secondary>
                                {move || {
                                    state
                                        .with(|s| s.upload().selected_name().map(str::to_string))
                                        .unwrap_or_else(|| "No file selected".to_string())
                                }}
                            </Text>
                            <Button variant=ButtonVariant::Primary on_click=on_upload>
                                "Upload"
                            </Button>
                        </Cluster>
                    </form>
                    <Show when=move || state.with(|s| s.upload().in_flight()) fallback=|| ()>
                        {move || {
                            let percent = state.with(|s| s.upload().percent());
                            view! { <ProgressBar max=100 value=percent ui_slot="upload-progress" /> }
                        }}
                    </Show>
                </Stack>
            </Panel>

            <Panel layout_class="vault-files-panel" aria_label="Your files">
                <Stack gap=LayoutGap::Md>
                    <Cluster gap=LayoutGap::Md justify=LayoutJustify::Between>
                        <TextField
                            id="file-search"
                            placeholder="Search files..."
                            aria_label="Search files by name"
                            autocomplete="off"
                            value=Signal::derive(move || state.with(|s| s.view().query().to_string()))
                            on_input=on_search
                        />
                        <SelectField
                            id="sort-files"
                            aria_label="Sort files"
                            value=sort_value
                            on_change=on_sort
                        >
                            <option value="">"Sort by"</option>
                            {SortKey::ALL
                                .iter()
                                .copied()
                                .map(|key| view! { <option value=key.token()>{key.label()}</option> })
                                .collect_view()}
                        </SelectField>
                    </Cluster>

                    <ListSurface role="list" aria_label="File listing">
                        <For
                            each=move || {
                                state.with(|s| {
                                    let projection = s.projection();
                                    projection
                                        .order
                                        .iter()
                                        .map(|&idx| {
                                            (s.view().entries()[idx].clone(), !projection.visible[idx])
                                        })
                                        .collect::<Vec<_>>()
                                })
                            }
                            key=|(entry, hidden)| (entry.id.clone(), *hidden)
                            children=move |(entry, hidden): (FileEntry, bool)| {
                                let services = card_services.clone();
                                view! { <FileCard entry=entry hidden=hidden state=state services=services /> }
                            }
                        />
                    </ListSurface>

                    <Show when=move || state.with(|s| s.projection().show_empty_state) fallback=|| ()>
                        <EmptyState layout_class="empty-search-state">
                            <Text tone=TextTone::Secondary>
                                "No files match your search."
                            </Text>
                        </EmptyState>
                    </Show>
                </Stack>
            </Panel>

            <Cluster layout_class="vault-statusbar" justify=LayoutJustify::Between>
                <StatusBarItem>
                    {move || state.with(|s| format!("{} file(s)", s.view().entries().len()))}
                </StatusBarItem>
                <StatusBarItem>
                    {move || state.with(|s| format!("Showing {}", s.projection().visible_count))}
                </StatusBarItem>
            </Cluster>

            <Show when=move || rename_dialog.get().is_some() fallback=|| ()>
                {
                    let rename_services = rename_services.clone();
                    move || {
                        let services = rename_services.clone();
                        rename_dialog
                            .get()
                            .map(move |dialog| {
                                view! { <RenameModal dialog=dialog state=state services=services /> }
                            })
                    }
                }
            </Show>

            <Show when=move || preview_dialog.get().is_some() fallback=|| ()>
                {
                    let preview_services = preview_services.clone();
                    move || {
                        let services = preview_services.clone();
                        preview_dialog
                            .get()
                            .map(move |dialog| {
                                view! { <PreviewModal dialog=dialog state=state services=services /> }
                            })
                    }
                }
            </Show>
        </div>
    }
}

#[component]
fn FileCard(
    entry: FileEntry,
    hidden: bool,
    state: RwSignal<DashboardState>,
    services: HostServices,
) -> impl IntoView {
    let id = entry.id.clone();
    let history_href = routes::file_history(&id);
    let size_text = format_bytes(entry.size_bytes);
    let modified_text = format!("Updated {}", format_modified(entry.modified_at_unix_ms));

    let download = {
        let services = services.clone();
        let id = id.clone();
        Callback::new(move |_| {
            let services = services.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.download(&id).await {
                    logging::warn!("download dispatch failed: {err}");
                }
            });
        })
    };
    let preview = {
        let id = id.clone();
        Callback::new(move |_| state.update(|s| s.request_preview(&id)))
    };
    let rename = {
        let id = id.clone();
        Callback::new(move |_| state.update(|s| s.open_rename(&id)))
    };
    let delete = {
        let name = entry.name.clone();
        Callback::new(move |_| {
            if !services.confirm.confirm(&delete_file_prompt(&name)) {
                return;
            }
            let services = services.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.delete(&id).await {
                    logging::warn!("delete dispatch failed: {err}");
                }
            });
        })
    };

    view! {
        <Card layout_class="file-card" hidden=hidden>
            <Stack gap=LayoutGap::Sm>
                <Heading role=TextRole::Title layout_class="file-name">
                    {entry.name.clone()}
                </Heading>
                <Cluster gap=LayoutGap::Sm>
                    <Text tone=TextTone::Secondary layout_class="file-size">{size_text}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{modified_text}</Text>
                </Cluster>
                <Cluster gap=LayoutGap::Sm>
                    <Button size=ButtonSize::Sm on_click=download>"Download"</Button>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Quiet on_click=preview>
                        "Preview"
                    </Button>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Quiet on_click=rename>
                        "Rename"
                    </Button>
                    <a class="ui-link" href=history_href>"History"</a>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Danger on_click=delete>
                        "Delete"
                    </Button>
                </Cluster>
            </Stack>
        </Card>
    }
}

#[component]
fn RenameModal(
    dialog: RenameDialog,
    state: RwSignal<DashboardState>,
    services: HostServices,
) -> impl IntoView {
    let original_name = dialog.original_name.clone();

    let confirm = Callback::new(move |_| {
        let mut outcome = None;
        state.update(|s| outcome = s.confirm_rename());
        if let Some((id, new_name)) = outcome {
            let services = services.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.rename(&id, &new_name).await {
                    logging::warn!("rename dispatch failed: {err}");
                }
            });
        }
    });

    view! {
        <Modal id="rename-form" aria_label="Rename file">
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>{format!("Rename {original_name}")}</Heading>
                <FieldGroup title="New filename">
                    <TextField
                        id="filename"
                        aria_label="New filename"
                        value=Signal::derive(move || {
                            state.with(|s| {
                                s.rename_dialog()
                                    .map(|dialog| dialog.input.clone())
                                    .unwrap_or_default()
                            })
                        })
                        on_input=Callback::new(move |ev: web_sys::Event| {
                            let text = event_target_value(&ev);
                            state.update(|s| s.set_rename_input(text));
                        })
                    />
                </FieldGroup>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || {
                        state
                            .with(|s| s.rename_dialog().and_then(RenameDialog::normalized))
                            .map(|name| format!("Will be saved as {name}"))
                            .unwrap_or_else(|| "Enter a filename".to_string())
                    }}
                </Text>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                    <Button on_click=Callback::new(move |_| state.update(|s| s.cancel_rename()))>
                        "Cancel"
                    </Button>
                    <Button variant=ButtonVariant::Primary on_click=confirm>"Rename"</Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}

#[component]
fn PreviewModal(
    dialog: PreviewDialog,
    state: RwSignal<DashboardState>,
    services: HostServices,
) -> impl IntoView {
    let name = dialog.name.clone();
    let content_type = dialog
        .content_type
        .clone()
        .unwrap_or_else(|| "unknown type".to_string());

    let download = {
        let id = dialog.file_id.clone();
        Callback::new(move |_| {
            let services = services.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.download(&id).await {
                    logging::warn!("download dispatch failed: {err}");
                }
            });
        })
    };

    view! {
        <Modal id="preview-modal" aria_label="File preview">
            <Stack gap=LayoutGap::Md>
                <Heading role=TextRole::Title>{format!("Preview: {name}")}</Heading>
                <Text tone=TextTone::Secondary>{content_type}</Text>
                <Text tone=TextTone::Info>
                    "This is a preview placeholder. Download the file to view its full content."
                </Text>
                <Cluster gap=LayoutGap::Sm justify=LayoutJustify::End>
                    <Button on_click=Callback::new(move |_| state.update(|s| s.close_preview()))>
                        "Close"
                    </Button>
                    <Button variant=ButtonVariant::Primary on_click=download>"Download"</Button>
                </Cluster>
            </Stack>
        </Modal>
    }
}

#[component]
/// The per-file version-history page.
pub fn HistoryApp(
    /// Server-rendered history payload.
    payload: HistoryPayload,
    /// Host service bundle for actions and confirmations.
    services: HostServices,
) -> impl IntoView {
    let state = create_rw_signal(HistoryState::new(payload.file, payload.versions));

    if let Ok(interval) = set_interval_with_handle(
        move || state.update(|s| s.sweep_toasts()),
        TOAST_SWEEP_INTERVAL,
    ) {
        on_cleanup(move || interval.clear());
    }

    let toasts = Signal::derive(move || state.with(|s| s.toasts().to_vec()));
    let row_services = services;

    view! {
        <div class="vault-history">
            <ToastOverlay
                toasts=toasts
                on_dismiss=Callback::new(move |id| state.update(|s| s.dismiss_toast(id)))
            />

            <Panel layout_class="vault-history-panel" aria_label="Version history">
                <Stack gap=LayoutGap::Md>
                    <Heading role=TextRole::Title>
                        {move || state.with(|s| format!("Version history: {}", s.file().name))}
                    </Heading>
                    <Text tone=TextTone::Secondary>
                        {move || {
                            state.with(|s| {
                                format!(
                                    "{} version(s), current size {}",
                                    s.rows().len(),
                                    format_bytes(s.file().size_bytes)
                                )
                            })
                        }}
                    </Text>
                    <a class="ui-link" href="/">"Back to dashboard"</a>

                    <ListSurface role="list" aria_label="Version listing">
                        <For
                            each=move || state.with(|s| s.rows().to_vec())
                            key=|row| (row.version.id.clone(), row.badges())
                            children=move |row: VersionRow| {
                                let services = row_services.clone();
                                view! { <VersionCard row=row state=state services=services /> }
                            }
                        />
                    </ListSurface>
                </Stack>
            </Panel>
        </div>
    }
}

#[component]
fn VersionCard(
    row: VersionRow,
    state: RwSignal<HistoryState>,
    services: HostServices,
) -> impl IntoView {
    let id = row.version.id.clone();
    let number = row.version.version_number;
    let size_text = format_bytes(row.version.size_bytes);
    let created_text = format!("Created {}", format_modified(row.version.created_at_unix_ms));
    let dom_id = format!("version-{id}");

    let badges = row
        .badges()
        .into_iter()
        .map(|status| {
            let (tone, label) = badge_display(status);
            view! { <Badge tone=tone layout_class="version-status">{label}</Badge> }
        })
        .collect_view();

    let download = {
        let services = services.clone();
        let id = id.clone();
        Callback::new(move |_| {
            let services = services.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.download_version(&id).await {
                    logging::warn!("version download dispatch failed: {err}");
                }
            });
        })
    };
    let restore = {
        let services = services.clone();
        let id = id.clone();
        Callback::new(move |_| {
            if !services.confirm.confirm(&restore_version_prompt(number)) {
                return;
            }
            let restore_id = id.clone();
            state.update(|s| s.mark_restored(&restore_id));
            let services = services.clone();
            let id = id.clone();
            spawn_local(async move {
                if let Err(err) = services.actions.restore_version(&id).await {
                    logging::warn!("version restore dispatch failed: {err}");
                }
            });
        })
    };
    let delete = {
        let id = id.clone();
        Callback::new(move |_| {
            if !services.confirm.confirm(&delete_version_prompt(number)) {
                return;
            }
            // Client-side status update only; the backend has no
            // version-delete endpoint.
            state.update(|s| s.mark_deleted(&id));
        })
    };

    view! {
        <Card layout_class="version-row" id=dom_id>
            <Cluster gap=LayoutGap::Md justify=LayoutJustify::Between>
                <Stack gap=LayoutGap::Sm>
                    <Cluster gap=LayoutGap::Sm>
                        <Heading role=TextRole::Title>{format!("Version {number}")}</Heading>
                        {badges}
                    </Cluster>
                    <Text tone=TextTone::Secondary>{size_text}</Text>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>{created_text}</Text>
                </Stack>
                <Cluster gap=LayoutGap::Sm>
                    <Button size=ButtonSize::Sm on_click=download>"Download"</Button>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Quiet on_click=restore>
                        "Restore"
                    </Button>
                    <Button size=ButtonSize::Sm variant=ButtonVariant::Danger on_click=delete>
                        "Delete"
                    </Button>
                </Cluster>
            </Cluster>
        </Card>
    }
}

#[component]
fn ToastOverlay(toasts: Signal<Vec<Toast>>, on_dismiss: Callback<u64>) -> impl IntoView {
    view! {
        <ToastRegion>
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let tone = toast_tone(toast.tone);
                    let id = toast.id;
                    view! {
                        <ToastCard
                            tone=tone
                            on_dismiss=Callback::new(move |_| on_dismiss.call(id))
                        >
                            {toast.message}
                        </ToastCard>
                    }
                }
            />
        </ToastRegion>
    }
}
