//! Shared UI primitive library for the file-vault pages.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the page CSS layers. Pages compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, FieldGroup, FieldVariant,
    FileField, Heading, LayoutGap, LayoutJustify, ListSurface, Modal, Panel, ProgressBar,
    SelectField, Stack, StatusBarItem, SurfaceVariant, Text, TextField, TextRole, TextTone,
    ToastCard, ToastRegion,
};

/// Convenience imports for page crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, FieldGroup,
        FieldVariant, FileField, Heading, LayoutGap, LayoutJustify, ListSurface, Modal, Panel,
        ProgressBar, SelectField, Stack, StatusBarItem, SurfaceVariant, Text, TextField, TextRole,
        TextTone, ToastCard, ToastRegion,
    };
}
