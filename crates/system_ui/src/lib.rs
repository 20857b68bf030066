//! Shared UI primitive library for the Ember web client.
//!
//! The crate owns reusable Leptos primitives for page chrome, inspector
//! surfaces, and overlay docks, together with the stable `data-ui-*` DOM
//! contract the site stylesheet targets. Route views should compose these
//! primitives instead of emitting ad hoc chrome markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, DataTable, EmptyState, Heading, InspectorGrid, InspectorRow, LayoutGap, OverlayAnchor,
    OverlayDock, PageContent, PageFooter, PageHeader, PageShell, Panel, Stack, Text, TextRole,
    TextTone, Tree, TreeItem,
};

