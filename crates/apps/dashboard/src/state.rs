//! Headless dashboard and history state, kept free of DOM types so every
//! interaction rule is unit-testable.

use listing_core::{
    ensure_extension, is_allowed_upload, is_previewable, FileEntry, FileId, FileListView,
    FileVersion, ListProjection, SortKey, VersionStatus,
};

pub(crate) const MAX_TOASTS: usize = 6;
pub(crate) const TOAST_LIFETIME_TICKS: u32 = 3;
pub(crate) const UPLOAD_PROGRESS_CEILING: f64 = 90.0;
pub(crate) const UPLOAD_TICK_STEP: f64 = 6.0;

const ALLOWED_TYPES_NOTICE: &str =
    "Invalid file type. Allowed types are: txt, pdf, doc, docx, xls, xlsx, jpg, jpeg, png, gif";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual tone of a toast notification.
pub enum ToastTone {
    /// Positive confirmation.
    Success,
    /// Cautionary notice.
    Warning,
    /// Failure or destructive outcome.
    Danger,
    /// Neutral information.
    Info,
}

#[derive(Debug, Clone, PartialEq)]
/// One queued toast notification.
pub struct Toast {
    /// Monotonically increasing id, used as render key and dismiss handle.
    pub id: u64,
    /// User-facing message.
    pub message: String,
    /// Visual tone.
    pub tone: ToastTone,
    age_ticks: u32,
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Bounded queue of transient toasts with sweep-based expiry.
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Appends a toast, dropping the oldest when the queue is full.
    pub fn push(&mut self, message: impl Into<String>, tone: ToastTone) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.toasts.push(Toast {
            id,
            message: message.into(),
            tone,
            age_ticks: 0,
        });
        if self.toasts.len() > MAX_TOASTS {
            let overflow = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(0..overflow);
        }
        id
    }

    /// Removes the toast with the given id, if still queued.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    /// Ages every toast by one sweep tick and expires the stale ones.
    pub fn tick(&mut self) {
        for toast in &mut self.toasts {
            toast.age_ticks = toast.age_ticks.saturating_add(1);
        }
        self.toasts
            .retain(|toast| toast.age_ticks < TOAST_LIFETIME_TICKS);
    }

    /// Currently queued toasts, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
/// Cosmetic upload progress: a file selection plus a bar that advances on a
/// fixed tick and freezes at the ceiling until navigation takes over.
pub struct UploadState {
    selected_name: Option<String>,
    progress: Option<f64>,
}

impl UploadState {
    /// Name of the currently selected file, if any.
    pub fn selected_name(&self) -> Option<&str> {
        self.selected_name.as_deref()
    }

    /// Whether the progress bar is showing.
    pub fn in_flight(&self) -> bool {
        self.progress.is_some()
    }

    /// Progress percent for the bar, `0` when idle.
    pub fn percent(&self) -> u16 {
        self.progress.map(|value| value as u16).unwrap_or(0)
    }

    fn begin(&mut self) {
        self.progress = Some(0.0);
    }

    fn advance(&mut self, step: f64) {
        if let Some(progress) = self.progress {
            self.progress = Some((progress + step).min(UPLOAD_PROGRESS_CEILING));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of an upload submission request.
pub enum UploadDecision {
    /// Validation passed; the native form submission should proceed.
    Submitted,
    /// Blocked: no file selected.
    MissingFile,
    /// Blocked: the selected extension is not in the upload allow list.
    DisallowedType,
}

#[derive(Debug, Clone, PartialEq)]
/// Open rename dialog targeting one listing entry.
pub struct RenameDialog {
    /// Entry being renamed.
    pub file_id: FileId,
    /// Name at the time the dialog opened.
    pub original_name: String,
    /// Current input text.
    pub input: String,
}

impl RenameDialog {
    /// The name the backend will store if confirmed now, or `None` when the
    /// input trims to empty.
    pub fn normalized(&self) -> Option<String> {
        ensure_extension(&self.input, &self.original_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Open preview dialog for one previewable entry.
pub struct PreviewDialog {
    /// Entry being previewed.
    pub file_id: FileId,
    /// Display name.
    pub name: String,
    /// MIME type reported by the backend, when known.
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
/// Complete dashboard page state.
pub struct DashboardState {
    view: FileListView,
    toasts: ToastQueue,
    upload: UploadState,
    rename: Option<RenameDialog>,
    preview: Option<PreviewDialog>,
}

impl DashboardState {
    /// Builds the state over the server-rendered listing.
    pub fn new(files: Vec<FileEntry>) -> Self {
        Self {
            view: FileListView::new(files),
            toasts: ToastQueue::default(),
            upload: UploadState::default(),
            rename: None,
            preview: None,
        }
    }

    /// The underlying listing view.
    pub fn view(&self) -> &FileListView {
        &self.view
    }

    /// Current display projection.
    pub fn projection(&self) -> ListProjection {
        self.view.projection()
    }

    /// Replaces the filter query.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.view.set_query(query);
    }

    /// Applies a sort select token; unknown tokens are a no-op.
    pub fn set_sort_token(&mut self, token: &str) {
        self.view.set_sort_token(token);
    }

    /// The active sort key, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        self.view.sort_key()
    }

    /// Queued toasts.
    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    /// Dismisses one toast.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.dismiss(id);
    }

    /// Ages and expires toasts; driven by the page's sweep interval.
    pub fn sweep_toasts(&mut self) {
        self.toasts.tick();
    }

    /// Upload progress and selection.
    pub fn upload(&self) -> &UploadState {
        &self.upload
    }

    /// Records the file-input value; browsers report a fake path, so only
    /// the trailing component is kept.
    pub fn select_upload_file(&mut self, raw_value: &str) {
        let name = raw_value
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(raw_value)
            .trim();
        self.upload.selected_name = if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        };
    }

    /// Validates the pending upload, surfacing a blocking notice on failure
    /// and starting the cosmetic progress bar on success.
    pub fn request_upload(&mut self) -> UploadDecision {
        let Some(name) = self.upload.selected_name.clone() else {
            self.toasts
                .push("Please select a file to upload", ToastTone::Warning);
            return UploadDecision::MissingFile;
        };

        if !is_allowed_upload(&name) {
            self.toasts.push(ALLOWED_TYPES_NOTICE, ToastTone::Danger);
            return UploadDecision::DisallowedType;
        }

        self.upload.begin();
        UploadDecision::Submitted
    }

    /// Advances the cosmetic progress bar by one tick. No-op while idle.
    pub fn tick_upload(&mut self) {
        self.upload.advance(UPLOAD_TICK_STEP);
    }

    /// Opens the rename dialog for an entry, pre-filled with its name.
    pub fn open_rename(&mut self, id: &FileId) {
        if let Some(entry) = self.find_entry(id) {
            self.rename = Some(RenameDialog {
                file_id: entry.id.clone(),
                original_name: entry.name.clone(),
                input: entry.name.clone(),
            });
        }
    }

    /// The open rename dialog, if any.
    pub fn rename_dialog(&self) -> Option<&RenameDialog> {
        self.rename.as_ref()
    }

    /// Updates the rename input text.
    pub fn set_rename_input(&mut self, text: impl Into<String>) {
        if let Some(dialog) = self.rename.as_mut() {
            dialog.input = text.into();
        }
    }

    /// Closes the rename dialog without renaming.
    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    /// Confirms the rename: returns the target and normalized name, or
    /// surfaces a notice and keeps the dialog open when the name is invalid.
    pub fn confirm_rename(&mut self) -> Option<(FileId, String)> {
        let dialog = self.rename.as_ref()?;
        match dialog.normalized() {
            Some(name) => {
                let id = dialog.file_id.clone();
                self.rename = None;
                Some((id, name))
            }
            None => {
                self.toasts.push("Invalid filename.", ToastTone::Danger);
                None
            }
        }
    }

    /// Opens the preview dialog when the entry's type supports it, otherwise
    /// surfaces a notice naming the extension.
    pub fn request_preview(&mut self, id: &FileId) {
        let Some(entry) = self.find_entry(id).cloned() else {
            return;
        };

        if is_previewable(&entry.name) {
            self.preview = Some(PreviewDialog {
                file_id: entry.id,
                name: entry.name,
                content_type: entry.content_type,
            });
        } else {
            let extension = listing_core::file_extension(&entry.name)
                .unwrap_or_else(|| "this type of".to_string());
            self.toasts.push(
                format!(
                    "Preview not available for {extension} files. Please download the file to view it."
                ),
                ToastTone::Info,
            );
        }
    }

    /// The open preview dialog, if any.
    pub fn preview_dialog(&self) -> Option<&PreviewDialog> {
        self.preview.as_ref()
    }

    /// Closes the preview dialog.
    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    fn find_entry(&self, id: &FileId) -> Option<&FileEntry> {
        self.view.entries().iter().find(|entry| &entry.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Optimistic client-side mark applied to a version row.
pub enum VersionMark {
    /// Marked restored this session.
    Restored,
    /// Marked deleted this session.
    Deleted,
}

#[derive(Debug, Clone, PartialEq)]
/// One version row on the history page.
pub struct VersionRow {
    /// Server-rendered version record.
    pub version: FileVersion,
    mark: Option<VersionMark>,
}

impl VersionRow {
    /// Status badges in render order. The `current` badge comes from the
    /// server and is never displaced by an optimistic mark.
    pub fn badges(&self) -> Vec<VersionStatus> {
        let mut badges = Vec::new();
        if self.version.is_current {
            badges.push(VersionStatus::Current);
        }
        match self.mark {
            Some(VersionMark::Restored) => badges.push(VersionStatus::Restored),
            Some(VersionMark::Deleted) => badges.push(VersionStatus::Deleted),
            None => {}
        }
        badges
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Complete history page state for one file.
pub struct HistoryState {
    file: FileEntry,
    rows: Vec<VersionRow>,
    toasts: ToastQueue,
}

impl HistoryState {
    /// Builds the state over the server-rendered version trail.
    pub fn new(file: FileEntry, versions: Vec<FileVersion>) -> Self {
        let rows = versions
            .into_iter()
            .map(|version| VersionRow {
                version,
                mark: None,
            })
            .collect();
        Self {
            file,
            rows,
            toasts: ToastQueue::default(),
        }
    }

    /// The file whose history is shown.
    pub fn file(&self) -> &FileEntry {
        &self.file
    }

    /// Version rows, server order.
    pub fn rows(&self) -> &[VersionRow] {
        &self.rows
    }

    /// Queued toasts.
    pub fn toasts(&self) -> &[Toast] {
        self.toasts.toasts()
    }

    /// Dismisses one toast.
    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.dismiss(id);
    }

    /// Ages and expires toasts.
    pub fn sweep_toasts(&mut self) {
        self.toasts.tick();
    }

    /// Optimistically marks a version deleted and announces it. Repeating
    /// the mark re-announces without changing state.
    pub fn mark_deleted(&mut self, id: &FileId) {
        if let Some(row) = self.rows.iter_mut().find(|row| &row.version.id == id) {
            row.mark = Some(VersionMark::Deleted);
            let number = row.version.version_number;
            self.toasts.push(
                format!("Version {number} marked as deleted"),
                ToastTone::Danger,
            );
        }
    }

    /// Optimistically marks a version restored and announces it.
    pub fn mark_restored(&mut self, id: &FileId) {
        if let Some(row) = self.rows.iter_mut().find(|row| &row.version.id == id) {
            row.mark = Some(VersionMark::Restored);
            let number = row.version.version_number;
            self.toasts.push(
                format!("Version {number} marked as restored"),
                ToastTone::Warning,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, name: &str) -> FileEntry {
        FileEntry {
            id: FileId::new(id),
            name: name.to_string(),
            size_bytes: 100,
            modified_at_unix_ms: 1,
            content_type: None,
        }
    }

    fn version(id: &str, number: u32, is_current: bool) -> FileVersion {
        FileVersion {
            id: FileId::new(id),
            version_number: number,
            size_bytes: 100,
            created_at_unix_ms: 1,
            is_current,
        }
    }

    fn dashboard() -> DashboardState {
        DashboardState::new(vec![entry("1", "report.pdf"), entry("2", "photo.png")])
    }

    #[test]
    fn toast_queue_caps_and_keeps_monotonic_ids() {
        let mut queue = ToastQueue::default();
        for index in 0..(MAX_TOASTS + 3) {
            queue.push(format!("toast {index}"), ToastTone::Info);
        }
        assert_eq!(queue.toasts().len(), MAX_TOASTS);
        assert_eq!(queue.toasts()[0].message, "toast 3");

        let last_id = queue.toasts().last().expect("non-empty").id;
        let next_id = queue.push("one more", ToastTone::Info);
        assert!(next_id > last_id);

        queue.dismiss(next_id);
        assert!(queue.toasts().iter().all(|toast| toast.id != next_id));
    }

    #[test]
    fn toast_sweep_expires_stale_toasts() {
        let mut queue = ToastQueue::default();
        queue.push("old", ToastTone::Info);
        queue.tick();
        queue.tick();
        queue.push("fresh", ToastTone::Info);
        queue.tick();
        let remaining: Vec<&str> = queue
            .toasts()
            .iter()
            .map(|toast| toast.message.as_str())
            .collect();
        assert_eq!(remaining, ["fresh"]);
    }

    #[test]
    fn upload_with_no_selection_blocks_with_a_warning() {
        let mut state = dashboard();
        assert_eq!(state.request_upload(), UploadDecision::MissingFile);
        assert_eq!(state.toasts().len(), 1);
        assert_eq!(state.toasts()[0].tone, ToastTone::Warning);
        assert!(!state.upload().in_flight());
    }

    #[test]
    fn upload_with_disallowed_extension_blocks_with_a_danger_notice() {
        let mut state = dashboard();
        state.select_upload_file("C:\\fakepath\\tool.exe");
        assert_eq!(state.request_upload(), UploadDecision::DisallowedType);
        assert_eq!(state.toasts()[0].tone, ToastTone::Danger);
        assert!(!state.upload().in_flight());
    }

    #[test]
    fn upload_selection_strips_the_fake_path() {
        let mut state = dashboard();
        state.select_upload_file("C:\\fakepath\\notes.txt");
        assert_eq!(state.upload().selected_name(), Some("notes.txt"));
        state.select_upload_file("");
        assert_eq!(state.upload().selected_name(), None);
    }

    #[test]
    fn upload_progress_advances_and_freezes_at_the_ceiling() {
        let mut state = dashboard();
        state.select_upload_file("notes.txt");
        assert_eq!(state.request_upload(), UploadDecision::Submitted);
        assert!(state.upload().in_flight());
        assert_eq!(state.upload().percent(), 0);

        for _ in 0..100 {
            state.tick_upload();
        }
        assert_eq!(state.upload().percent(), UPLOAD_PROGRESS_CEILING as u16);
    }

    #[test]
    fn upload_tick_is_a_no_op_while_idle() {
        let mut state = dashboard();
        state.tick_upload();
        assert!(!state.upload().in_flight());
        assert_eq!(state.upload().percent(), 0);
    }

    #[test]
    fn rename_dialog_prefills_and_normalizes() {
        let mut state = dashboard();
        let id = FileId::new("1");
        state.open_rename(&id);
        let dialog = state.rename_dialog().expect("dialog open");
        assert_eq!(dialog.input, "report.pdf");

        state.set_rename_input("quarterly");
        let (target, name) = state.confirm_rename().expect("valid rename");
        assert_eq!(target, id);
        assert_eq!(name, "quarterly.pdf");
        assert!(state.rename_dialog().is_none());
    }

    #[test]
    fn rename_to_whitespace_blocks_and_keeps_the_dialog_open() {
        let mut state = dashboard();
        state.open_rename(&FileId::new("1"));
        state.set_rename_input("   ");
        assert_eq!(state.confirm_rename(), None);
        assert!(state.rename_dialog().is_some());
        assert_eq!(state.toasts()[0].tone, ToastTone::Danger);

        state.cancel_rename();
        assert!(state.rename_dialog().is_none());
    }

    #[test]
    fn rename_for_unknown_entry_is_ignored() {
        let mut state = dashboard();
        state.open_rename(&FileId::new("missing"));
        assert!(state.rename_dialog().is_none());
    }

    #[test]
    fn preview_opens_for_previewable_types_only() {
        let mut state = dashboard();
        state.request_preview(&FileId::new("2"));
        assert_eq!(
            state.preview_dialog().map(|dialog| dialog.name.as_str()),
            Some("photo.png")
        );
        state.close_preview();
        assert!(state.preview_dialog().is_none());
    }

    #[test]
    fn preview_of_unsupported_type_surfaces_a_notice() {
        let mut state = DashboardState::new(vec![entry("1", "sheet.xlsx")]);
        state.request_preview(&FileId::new("1"));
        assert!(state.preview_dialog().is_none());
        assert_eq!(state.toasts().len(), 1);
        assert!(state.toasts()[0].message.contains(".xlsx"));
    }

    #[test]
    fn dashboard_projection_tracks_query_and_sort() {
        let mut state = dashboard();
        state.set_query("photo");
        let projection = state.projection();
        assert_eq!(projection.visible_count, 1);

        state.set_query("");
        state.set_sort_token("name-desc");
        let projection = state.projection();
        let first = projection.order[0];
        assert_eq!(state.view().entries()[first].name, "report.pdf");
    }

    #[test]
    fn current_badge_is_never_displaced_by_marks() {
        let mut history = HistoryState::new(
            entry("1", "report.pdf"),
            vec![version("11", 2, true), version("10", 1, false)],
        );

        let current = FileId::new("11");
        history.mark_deleted(&current);
        assert_eq!(
            history.rows()[0].badges(),
            vec![VersionStatus::Current, VersionStatus::Deleted]
        );
    }

    #[test]
    fn marks_replace_each_other_and_reannounce_on_repeat() {
        let mut history = HistoryState::new(
            entry("1", "report.pdf"),
            vec![version("11", 2, true), version("10", 1, false)],
        );
        let old = FileId::new("10");

        history.mark_restored(&old);
        assert_eq!(history.rows()[1].badges(), vec![VersionStatus::Restored]);
        assert_eq!(history.toasts().len(), 1);
        assert_eq!(history.toasts()[0].tone, ToastTone::Warning);

        history.mark_deleted(&old);
        assert_eq!(history.rows()[1].badges(), vec![VersionStatus::Deleted]);

        let before = history.rows()[1].clone();
        history.mark_deleted(&old);
        assert_eq!(history.rows()[1], before);
        assert_eq!(history.toasts().len(), 3);
    }

    #[test]
    fn marks_for_unknown_versions_are_ignored() {
        let mut history = HistoryState::new(entry("1", "report.pdf"), vec![version("10", 1, true)]);
        history.mark_deleted(&FileId::new("missing"));
        assert!(history.toasts().is_empty());
        assert_eq!(history.rows()[0].badges(), vec![VersionStatus::Current]);
    }
}
