use serde::{Deserialize, Serialize};

/// What activating a navigation control does.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonAction {
    /// Smooth-scroll the canvas so the named section is centered.
    GoToSection(String),
    /// Open the overlay registered under this identifier.
    OpenOverlay(String),
}

/// A navigation control placed on the canvas.
///
/// Buttons are declared statically by the embedding application. The
/// widget reads the declaration on every pass; the optional virtual
/// width is resolved against the background's rendered width at that
/// moment and never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasButton {
    label: String,
    action: ButtonAction,
    anchor_percent: f32,
    vertical_percent: f32,
    virtual_width: Option<f32>,
    overlay_title: Option<String>,
}

impl CanvasButton {
    /// Creates a button centered at `anchor_percent` of the scrollable
    /// width and `vertical_percent` of the viewport height.
    pub fn new(label: impl Into<String>, action: ButtonAction, anchor_percent: f32) -> Self {
        Self {
            label: label.into(),
            action,
            anchor_percent: anchor_percent.clamp(0., 100.),
            vertical_percent: 50.,
            virtual_width: None,
            overlay_title: None,
        }
    }

    /// Vertical placement as a percentage of viewport height.
    pub fn with_vertical_percent(mut self, percent: f32) -> Self {
        self.vertical_percent = percent.clamp(0., 100.);
        self
    }

    /// Device-independent width hint, resolved against the background's
    /// rendered width on each pass.
    pub fn with_virtual_width(mut self, units: f32) -> Self {
        self.virtual_width = Some(units);
        self
    }

    /// Explicit overlay title; without it the overlay identifier is
    /// prettified into a title.
    pub fn with_overlay_title(mut self, title: impl Into<String>) -> Self {
        self.overlay_title = Some(title.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> &ButtonAction {
        &self.action
    }

    pub fn anchor_percent(&self) -> f32 {
        self.anchor_percent
    }

    pub fn vertical_percent(&self) -> f32 {
        self.vertical_percent
    }

    pub fn virtual_width(&self) -> Option<f32> {
        self.virtual_width
    }

    pub fn overlay_title(&self) -> Option<&str> {
        self.overlay_title.as_deref()
    }
}
