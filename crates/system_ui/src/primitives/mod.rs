//! Shared page chrome, overlay, data-display, and layout primitives.

use leptos::*;

mod data_display;
mod layout;
mod overlays;
mod page;

pub use data_display::*;
pub use layout::*;
pub use overlays::*;
pub use page::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SurfaceVariant {
    Standard,
    Muted,
}

impl SurfaceVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Muted => "muted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Elevation {
    Raised,
    Overlay,
}

impl Elevation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Raised => "raised",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Typographic role of inspector text.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Section label, such as a plugin name.
    Label,
    /// Secondary annotation, such as a resolved path.
    Caption,
    /// Heading text.
    Title,
    /// Monospace text for keys, ids, and locations.
    Code,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Code => "code",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Colour tone for text and status badges.
pub enum TextTone {
    /// Default foreground.
    #[default]
    Primary,
    /// De-emphasized text; also pending status.
    Secondary,
    /// Successful status.
    Success,
    /// Failed status.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Spacing between the children of a [`Stack`].
pub enum LayoutGap {
    /// Compact spacing for dense inspector panes.
    Sm,
    /// Default spacing.
    #[default]
    Md,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Viewport corner an overlay dock is pinned to.
pub enum OverlayAnchor {
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    #[default]
    BottomRight,
}

impl OverlayAnchor {
    /// Stable DOM token for the anchor.
    pub fn token(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
