//! Horizontally scrolling wide-canvas widget for egui.
//!
//! The crate centers named sections of an oversized canvas in the
//! viewport, keeps edge-hint arrows and responsive button widths in
//! sync with the current scroll and viewport state, and manages a
//! single modal overlay. The [`PanoramaView`] widget implements
//! [`egui::Widget`] and reads all layout metrics freshly on every
//! pass, so late-loading background images and window resizes are
//! picked up without any cached geometry going stale.

mod elements;
mod helpers;
mod metadata;
mod metrics;
mod overlay;
mod panorama_view;
mod settings;

#[cfg(feature = "events")]
pub mod events;

pub use self::elements::{ButtonAction, CanvasButton, Section, SectionTable};
pub use self::helpers::{
    compute_button_width_percent, compute_edge_hints, resolve_anchor_offset, resolve_offset,
    EDGE_HINT_TOLERANCE,
};
pub use self::metadata::{reset_metadata, Metadata, ScrollMode};
pub use self::metrics::{EdgeHints, LayoutMetrics, ScrollState};
pub use self::overlay::{title_from_id, OverlayContent, OverlayRegistry, OverlaySession};
pub use self::panorama_view::{nudge, reset, scroll_to_section, PanoramaView};
pub use self::settings::{SettingsInteraction, SettingsNavigation, SettingsStyle};
