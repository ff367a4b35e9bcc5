/// Navigation settings of the [`crate::PanoramaView`] widget.
#[derive(Debug, Clone)]
pub struct SettingsNavigation {
    /// Section centered on the first pass and re-centered once the
    /// background reports its real size. Acts as the deep-link target.
    pub start_section: Option<String>,

    /// Duration of a smooth scroll in seconds.
    pub scroll_duration: f32,

    /// Arrow nudge distance as a fraction of viewport width.
    pub nudge_fraction: f32,

    /// Quiet period after the last viewport size change before the
    /// resize synchronization pass runs, in seconds.
    pub resize_debounce: f32,
}

impl Default for SettingsNavigation {
    fn default() -> Self {
        Self {
            start_section: None,
            scroll_duration: 0.25,
            nudge_fraction: 0.2,
            resize_debounce: 0.2,
        }
    }
}

impl SettingsNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_section(mut self, name: impl Into<String>) -> Self {
        self.start_section = Some(name.into());
        self
    }

    pub fn with_scroll_duration(mut self, seconds: f32) -> Self {
        self.scroll_duration = seconds.max(0.);
        self
    }

    pub fn with_nudge_fraction(mut self, fraction: f32) -> Self {
        self.nudge_fraction = fraction;
        self
    }

    pub fn with_resize_debounce(mut self, seconds: f32) -> Self {
        self.resize_debounce = seconds.max(0.);
        self
    }
}

/// Interaction settings of the [`crate::PanoramaView`] widget.
#[derive(Debug, Clone)]
pub struct SettingsInteraction {
    /// Canvas buttons react to clicks.
    pub buttons_enabled: bool,

    /// Edge-hint arrows are shown and clickable.
    pub edge_hints_enabled: bool,

    /// Wheel and drag scrolling by the user.
    pub user_scroll_enabled: bool,
}

impl Default for SettingsInteraction {
    fn default() -> Self {
        Self {
            buttons_enabled: true,
            edge_hints_enabled: true,
            user_scroll_enabled: true,
        }
    }
}

impl SettingsInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_buttons_enabled(mut self, enabled: bool) -> Self {
        self.buttons_enabled = enabled;
        self
    }

    pub fn with_edge_hints_enabled(mut self, enabled: bool) -> Self {
        self.edge_hints_enabled = enabled;
        self
    }

    pub fn with_user_scroll_enabled(mut self, enabled: bool) -> Self {
        self.user_scroll_enabled = enabled;
        self
    }
}

/// Style settings of the [`crate::PanoramaView`] widget.
#[derive(Debug, Clone)]
pub struct SettingsStyle {
    /// Render section names at their anchor positions.
    pub section_labels: bool,

    /// Edge length of an edge-hint arrow button.
    pub hint_size: f32,

    /// Gap between an edge-hint arrow and the viewport edge.
    pub hint_margin: f32,

    /// Height of canvas buttons.
    pub button_height: f32,
}

impl Default for SettingsStyle {
    fn default() -> Self {
        Self {
            section_labels: false,
            hint_size: 28.,
            hint_margin: 10.,
            button_height: 36.,
        }
    }
}

impl SettingsStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section_labels(mut self, enabled: bool) -> Self {
        self.section_labels = enabled;
        self
    }

    pub fn with_hint_size(mut self, size: f32) -> Self {
        self.hint_size = size;
        self
    }

    pub fn with_hint_margin(mut self, margin: f32) -> Self {
        self.hint_margin = margin;
        self
    }

    pub fn with_button_height(mut self, height: f32) -> Self {
        self.button_height = height;
        self
    }
}
