use serde::{Deserialize, Serialize};

/// Layout measurements taken at the moment of use.
///
/// Every consumer recomputes these from the live [`egui::Ui`] inside the
/// current pass; values captured on an earlier frame may predate the
/// background image reporting its real size and must not be reused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Full width of the scrollable canvas.
    pub scrollable_width: f32,
    /// Width of the visible viewport.
    pub viewport_width: f32,
    /// Height of the visible viewport.
    pub viewport_height: f32,
    /// Rendered width of the background visual, 0 while it is loading.
    pub background_rendered_width: f32,
    /// Rendered height of the background visual, 0 while it is loading.
    pub background_rendered_height: f32,
}

impl LayoutMetrics {
    /// Largest valid scroll offset for these measurements.
    pub fn max_offset(&self) -> f32 {
        (self.scrollable_width - self.viewport_width).max(0.)
    }

    /// Whether the background has a usable rendered size.
    pub fn background_ready(&self) -> bool {
        self.background_rendered_width > 0.
    }
}

/// Snapshot of the scroll position within its valid range.
///
/// The range invariant `0 <= current_offset <= max_offset` is enforced
/// by the scrolling substrate ([`egui::ScrollArea`]), not here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    pub current_offset: f32,
    pub max_offset: f32,
}

impl ScrollState {
    pub fn new(current_offset: f32, max_offset: f32) -> Self {
        Self {
            current_offset,
            max_offset,
        }
    }
}

/// Visibility of the two directional scroll affordances.
///
/// Derived from [`ScrollState`] by [`crate::compute_edge_hints`]; never
/// authoritative state on its own.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeHints {
    pub left_visible: bool,
    pub right_visible: bool,
}
