use crate::{
    helpers::{compute_button_width_percent, compute_edge_hints, resolve_offset},
    metadata::{Metadata, PendingScroll, ScrollAnimation, ScrollMode},
    metrics::{LayoutMetrics, ScrollState},
    overlay::{OverlayRegistry, OverlaySession, PLACEHOLDER_BODY},
    reset_metadata,
    settings::{SettingsInteraction, SettingsNavigation, SettingsStyle},
    ButtonAction, CanvasButton, SectionTable,
};

use egui::{
    load::TexturePoll, pos2, scroll_area::ScrollBarVisibility, vec2, Align, Area, Button, Id,
    Image, ImageSource, Layout, Modal, Order, Rect, Response, RichText, ScrollArea, Sense, Ui,
    Vec2, Widget,
};

#[cfg(feature = "events")]
use crate::events::{
    Event, EventSink, PayloadEdgeHints, PayloadNudge, PayloadOverlayOpen, PayloadScroll,
    PayloadSectionCenter,
};

/// Button width applied while the background has no rendered width and
/// the virtual-width resolution is skipped for the pass.
const FALLBACK_BUTTON_WIDTH: f32 = 120.;

/// Widget for a horizontally scrolling wide canvas with named sections.
///
/// It implements [`egui::Widget`] and can be used like any other widget.
///
/// The widget reads the declared [`SectionTable`], the button
/// declarations and the overlay registry on every pass, and recomputes
/// all layout metrics at that moment, so a background image that
/// finishes loading after the first paint is picked up without stale
/// geometry. Scroll offset, pending scroll requests and the overlay
/// session are persisted in egui memory under an optional custom id,
/// which keeps multiple instances independent.
///
/// Programmatic scrolling is available from outside the widget pass via
/// [`scroll_to_section`] and [`nudge`]; both enqueue a request that the
/// next pass resolves against freshly read metrics.
pub struct PanoramaView<'a> {
    sections: &'a SectionTable,
    buttons: &'a [CanvasButton],
    overlays: &'a OverlayRegistry,
    background: ImageSource<'a>,

    settings_interaction: SettingsInteraction,
    settings_navigation: SettingsNavigation,
    settings_style: SettingsStyle,

    custom_id: Option<String>,

    #[cfg(feature = "events")]
    events_sink: Option<&'a dyn EventSink>,
}

impl Widget for &mut PanoramaView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let outer_rect = ui.available_rect_before_wrap();
        let time = ui.input(|i| i.time);

        let mut meta = Metadata::new(self.custom_id.clone()).load(ui);
        let metrics = self.fresh_metrics(ui, outer_rect.size());

        let was_first = meta.first_frame;
        self.handle_first_center(&mut meta);
        self.handle_background_ready(&mut meta, &metrics, was_first);
        let resize_synced = self.handle_resize(&mut meta, &metrics, time);
        self.handle_user_interrupt(ui, outer_rect, &mut meta);

        let mut forced = self.resolve_pending(&mut meta, &metrics, time);
        if let Some(offset) = self.step_animation(&mut meta, time) {
            forced = Some(offset);
        }

        let (response, scroll) = self.show_canvas(ui, &mut meta, &metrics, forced);
        meta.offset = scroll.current_offset;

        self.sync_edge_hints(ui, outer_rect, &mut meta, scroll, &metrics, resize_synced);
        self.show_overlay(ui);

        if meta.animation.is_some() || meta.pending.is_some() || meta.resize_deadline.is_some() {
            ui.ctx().request_repaint();
        }

        meta.save(ui);

        response
    }
}

impl<'a> PanoramaView<'a> {
    /// Creates a new `PanoramaView` widget with default navigation,
    /// interaction and style settings. To customize them use the
    /// `with_navigations`, `with_interactions` and `with_styles`
    /// methods.
    pub fn new(
        sections: &'a SectionTable,
        buttons: &'a [CanvasButton],
        overlays: &'a OverlayRegistry,
        background: impl Into<ImageSource<'a>>,
    ) -> Self {
        Self {
            sections,
            buttons,
            overlays,
            background: background.into(),

            settings_interaction: SettingsInteraction::default(),
            settings_navigation: SettingsNavigation::default(),
            settings_style: SettingsStyle::default(),

            custom_id: None,

            #[cfg(feature = "events")]
            events_sink: Option::default(),
        }
    }

    /// Modifies default behaviour of navigation settings.
    pub fn with_navigations(mut self, settings_navigation: &SettingsNavigation) -> Self {
        self.settings_navigation = settings_navigation.clone();
        self
    }

    /// Makes widget interactive according to the provided settings.
    pub fn with_interactions(mut self, settings_interaction: &SettingsInteraction) -> Self {
        self.settings_interaction = settings_interaction.clone();
        self
    }

    /// Modifies default style settings.
    pub fn with_styles(mut self, settings_style: &SettingsStyle) -> Self {
        self.settings_style = settings_style.clone();
        self
    }

    /// Sets a custom unique ID for this widget instance. Useful when you
    /// have multiple panorama views in the same UI and want to keep
    /// their state separate.
    pub fn with_id(mut self, custom_id: Option<String>) -> Self {
        self.custom_id = custom_id;
        self
    }

    #[cfg(feature = "events")]
    /// Supply a generic sink that will receive widget events.
    /// Works with `crossbeam::channel::Sender<Event>`, closures wrapped
    /// in [`crate::events::FnSink`], or custom implementations.
    pub fn with_event_sink(mut self, sink: &'a dyn EventSink) -> Self {
        self.events_sink = Some(sink);
        self
    }
}

impl PanoramaView<'_> {
    /// Reads the layout metrics for this pass.
    ///
    /// The background is scaled to the viewport height; while it has not
    /// reported an intrinsic size yet both background dimensions stay 0
    /// and the canvas falls back to exactly the viewport width.
    fn fresh_metrics(&self, ui: &Ui, viewport: Vec2) -> LayoutMetrics {
        let image = Image::new(self.background.clone());
        let (bg_width, bg_height) = match image.load_for_size(ui.ctx(), viewport) {
            Ok(TexturePoll::Ready { texture }) if texture.size.y > 0. => {
                let height = viewport.y;
                (texture.size.x * height / texture.size.y, height)
            }
            // Pending or failed loads leave the metrics unrendered;
            // the next load or resize event retriggers this read.
            _ => (0., 0.),
        };

        LayoutMetrics {
            scrollable_width: bg_width.max(viewport.x),
            viewport_width: viewport.x,
            viewport_height: viewport.y,
            background_rendered_width: bg_width,
            background_rendered_height: bg_height,
        }
    }

    /// Centers the start section on the very first pass, before the
    /// background may have loaded.
    fn handle_first_center(&self, meta: &mut Metadata) {
        if !meta.first_frame {
            return;
        }
        meta.first_frame = false;

        if let Some(name) = &self.settings_navigation.start_section {
            meta.request(PendingScroll::Section {
                name: name.clone(),
                mode: ScrollMode::Instant,
            });
        }
    }

    /// Re-centers the start section once the background reports its real
    /// dimensions, since the first-paint metrics may have diverged.
    fn handle_background_ready(&self, meta: &mut Metadata, metrics: &LayoutMetrics, was_first: bool) {
        if meta.background_seen || !metrics.background_ready() {
            return;
        }
        meta.background_seen = true;

        if was_first {
            return;
        }
        if let Some(name) = &self.settings_navigation.start_section {
            meta.request(PendingScroll::Section {
                name: name.clone(),
                mode: ScrollMode::Smooth,
            });
        }
    }

    /// Coalesces viewport size changes into a single synchronization
    /// pass once the size has been stable for the configured quiet
    /// period. Returns whether that pass fires on this frame.
    fn handle_resize(&self, meta: &mut Metadata, metrics: &LayoutMetrics, time: f64) -> bool {
        let viewport = vec2(metrics.viewport_width, metrics.viewport_height);
        if meta.last_viewport != viewport {
            if meta.last_viewport != Vec2::ZERO {
                meta.resize_deadline =
                    Some(time + f64::from(self.settings_navigation.resize_debounce));
            }
            meta.last_viewport = viewport;
            return false;
        }

        match meta.resize_deadline {
            Some(deadline) if time >= deadline => {
                meta.resize_deadline = None;
                true
            }
            _ => false,
        }
    }

    /// A wheel gesture over the widget supersedes any programmatic
    /// scroll, mirroring how user scrolling interrupts a smooth scroll
    /// in the browser.
    fn handle_user_interrupt(&self, ui: &Ui, outer_rect: Rect, meta: &mut Metadata) {
        if !self.settings_interaction.user_scroll_enabled {
            return;
        }
        if meta.animation.is_none() && meta.pending.is_none() {
            return;
        }

        let wheel = ui.input(|i| i.raw_scroll_delta);
        if wheel != Vec2::ZERO && ui.rect_contains_pointer(outer_rect) {
            meta.cancel_scroll();
        }
    }

    /// Resolves the queued scroll request against this pass's metrics.
    /// Returns the offset to force on the substrate for an instant jump.
    fn resolve_pending(
        &self,
        meta: &mut Metadata,
        metrics: &LayoutMetrics,
        time: f64,
    ) -> Option<f32> {
        let pending = meta.pending.take()?;

        match pending {
            PendingScroll::Section { name, mode } => {
                let target = resolve_offset(&name, self.sections, metrics);

                #[cfg(feature = "events")]
                self.publish_event(Event::SectionCenter(PayloadSectionCenter {
                    name,
                    offset: target,
                }));

                match mode {
                    ScrollMode::Instant => {
                        meta.animation = None;
                        meta.offset = target;
                        Some(target)
                    }
                    ScrollMode::Smooth => {
                        self.animate_to(meta, target, time);
                        None
                    }
                }
            }
            PendingScroll::Nudge { amount } => {
                let target = (meta.offset + amount).clamp(0., metrics.max_offset());

                #[cfg(feature = "events")]
                self.publish_event(Event::Nudge(PayloadNudge { amount, target }));

                self.animate_to(meta, target, time);
                None
            }
        }
    }

    fn animate_to(&self, meta: &mut Metadata, target: f32, time: f64) {
        if self.settings_navigation.scroll_duration <= 0. {
            meta.animation = None;
            meta.offset = target;
            return;
        }

        meta.animation = Some(ScrollAnimation {
            from: meta.offset,
            to: target,
            start_time: time,
            duration: self.settings_navigation.scroll_duration,
        });
    }

    /// Advances the smooth scroll animation. The settling frame snaps to
    /// the target, which also re-runs the edge-hint synchronization with
    /// the final offset later in the same pass.
    fn step_animation(&self, meta: &mut Metadata, time: f64) -> Option<f32> {
        let animation = meta.animation?;

        if animation.settled_at(time) {
            meta.animation = None;
            meta.offset = animation.to;

            #[cfg(feature = "events")]
            self.publish_event(Event::ScrollSettled(PayloadScroll {
                offset: animation.to,
            }));

            return Some(animation.to);
        }

        meta.offset = animation.offset_at(time);
        Some(meta.offset)
    }

    /// Lays out the scrollable canvas: background image, optional
    /// section labels and the declared buttons.
    fn show_canvas(
        &self,
        ui: &mut Ui,
        meta: &mut Metadata,
        metrics: &LayoutMetrics,
        forced_offset: Option<f32>,
    ) -> (Response, ScrollState) {
        let mut scroll_area = ScrollArea::horizontal()
            .id_salt(("egui_panorama_canvas", self.custom_id.clone()))
            .auto_shrink([false, false])
            .scroll_bar_visibility(ScrollBarVisibility::AlwaysHidden)
            .enable_scrolling(self.settings_interaction.user_scroll_enabled);
        if let Some(offset) = forced_offset {
            scroll_area = scroll_area.horizontal_scroll_offset(offset);
        }

        let output = scroll_area.show(ui, |ui| {
            let size = vec2(metrics.scrollable_width, metrics.viewport_height);
            let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

            self.draw_background(ui, rect, metrics);
            if self.settings_style.section_labels {
                self.draw_section_labels(ui, rect, metrics);
            }
            self.place_buttons(ui, rect, meta, metrics);

            response
        });

        let max_offset = (output.content_size.x - output.inner_rect.width()).max(0.);
        let scroll = ScrollState::new(output.state.offset.x, max_offset);

        (output.inner, scroll)
    }

    fn draw_background(&self, ui: &mut Ui, rect: Rect, metrics: &LayoutMetrics) {
        if !metrics.background_ready() {
            return;
        }

        let bg_rect = Rect::from_min_size(
            rect.min,
            vec2(
                metrics.background_rendered_width,
                metrics.background_rendered_height,
            ),
        );
        Image::new(self.background.clone()).paint_at(ui, bg_rect);
    }

    fn draw_section_labels(&self, ui: &Ui, rect: Rect, metrics: &LayoutMetrics) {
        let painter = ui.painter_at(rect);
        let color = ui.style().visuals.strong_text_color();
        for section in self.sections.iter() {
            let pos = pos2(
                rect.min.x + section.anchor_percent() / 100. * metrics.scrollable_width,
                rect.min.y + 8.,
            );
            painter.text(
                pos,
                egui::Align2::CENTER_TOP,
                section.name(),
                egui::FontId::proportional(12.),
                color,
            );
        }
    }

    fn place_buttons(&self, ui: &mut Ui, rect: Rect, meta: &mut Metadata, metrics: &LayoutMetrics) {
        for button in self.buttons {
            let center = pos2(
                rect.min.x + button.anchor_percent() / 100. * metrics.scrollable_width,
                rect.min.y + button.vertical_percent() / 100. * metrics.viewport_height,
            );

            // A background that has not rendered yet skips the virtual
            // width resolution for this pass.
            let width = button
                .virtual_width()
                .and_then(|units| compute_button_width_percent(units, metrics))
                .map_or(FALLBACK_BUTTON_WIDTH, |percent| {
                    percent / 100. * metrics.background_rendered_width
                });

            let button_rect = Rect::from_center_size(
                center,
                vec2(width, self.settings_style.button_height),
            );

            let response = ui.put(button_rect, Button::new(button.label()));
            if response.clicked() && self.settings_interaction.buttons_enabled {
                self.activate_button(ui, meta, button);
            }
        }
    }

    fn activate_button(&self, ui: &mut Ui, meta: &mut Metadata, button: &CanvasButton) {
        match button.action() {
            ButtonAction::GoToSection(name) => {
                meta.request(PendingScroll::Section {
                    name: name.clone(),
                    mode: ScrollMode::Smooth,
                });
            }
            ButtonAction::OpenOverlay(id) => {
                let content = self.overlays.resolve(id, button.overlay_title());

                #[cfg(feature = "events")]
                self.publish_event(Event::OverlayOpen(PayloadOverlayOpen {
                    id: id.clone(),
                    title: content.title.clone(),
                }));

                let mut session = OverlaySession::new(self.custom_id.clone()).load(ui);
                session.open(content.title, content.body);
                session.save(ui);
            }
        }
    }

    /// Recomputes edge-hint visibility from the fresh scroll state,
    /// emits an update only when the pair changed (or a resize sync
    /// forces one), and draws the clickable arrows.
    fn sync_edge_hints(
        &self,
        ui: &mut Ui,
        outer_rect: Rect,
        meta: &mut Metadata,
        scroll: ScrollState,
        metrics: &LayoutMetrics,
        force_emit: bool,
    ) {
        let hints = compute_edge_hints(&scroll);
        if hints != meta.hints || force_emit {
            meta.hints = hints;

            #[cfg(feature = "events")]
            self.publish_event(Event::EdgeHints(PayloadEdgeHints {
                left_visible: hints.left_visible,
                right_visible: hints.right_visible,
            }));
        }

        if !self.settings_interaction.edge_hints_enabled {
            return;
        }

        let size = self.settings_style.hint_size;
        let margin = self.settings_style.hint_margin;
        let nudge_amount = metrics.viewport_width * self.settings_navigation.nudge_fraction;

        if hints.left_visible {
            let pos = pos2(
                outer_rect.left() + margin,
                outer_rect.center().y - size / 2.,
            );
            if self.edge_hint_button(ui, "egui_panorama_hint_left", pos, outer_rect, "◀") {
                meta.request(PendingScroll::Nudge {
                    amount: -nudge_amount,
                });
            }
        }

        if hints.right_visible {
            let pos = pos2(
                outer_rect.right() - margin - size,
                outer_rect.center().y - size / 2.,
            );
            if self.edge_hint_button(ui, "egui_panorama_hint_right", pos, outer_rect, "▶") {
                meta.request(PendingScroll::Nudge {
                    amount: nudge_amount,
                });
            }
        }
    }

    fn edge_hint_button(
        &self,
        ui: &Ui,
        id_salt: &'static str,
        pos: egui::Pos2,
        clip: Rect,
        arrow: &str,
    ) -> bool {
        let btn_size = vec2(self.settings_style.hint_size, self.settings_style.hint_size);
        let mut clicked = false;

        Area::new(Id::new((id_salt, self.custom_id.clone())))
            .order(Order::Middle)
            .fixed_pos(pos)
            .movable(false)
            .show(ui.ctx(), |ui_area| {
                ui_area.set_clip_rect(clip);
                let arrow_text = RichText::new(arrow).size(btn_size.y * 0.55);
                let response = ui_area.add_sized(btn_size, Button::new(arrow_text));
                if response.clicked() {
                    clicked = true;
                }
            });

        clicked
    }

    /// Renders the overlay modal when a session is open. The close
    /// control, a click on the backdrop and the Escape key all route
    /// through the same close transition.
    fn show_overlay(&self, ui: &mut Ui) {
        let mut session = OverlaySession::new(self.custom_id.clone()).load(ui);
        if !session.is_open() {
            return;
        }

        let modal = Modal::new(Id::new(("egui_panorama_overlay", self.custom_id.clone())));
        let mut close_requested = false;

        let response = modal.show(ui.ctx(), |ui| {
            ui.set_min_width(260.);

            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                if ui.button("✕").clicked() {
                    close_requested = true;
                }
            });

            ui.heading(session.title());
            ui.add_space(6.);
            if session.body().is_empty() {
                ui.label(PLACEHOLDER_BODY);
            } else {
                ui.label(session.body());
            }

            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                close_requested = true;
            }
        });

        if response.should_close() {
            close_requested = true;
        }

        if close_requested {
            session.close();

            #[cfg(feature = "events")]
            self.publish_event(Event::OverlayClose);
        }

        session.save(ui);
    }

    #[cfg(feature = "events")]
    fn publish_event(&self, event: Event) {
        if let Some(sink) = self.events_sink {
            sink.send(event);
        }
    }
}

/// Queues a smooth or instant scroll that centers the named section on
/// the next widget pass, resolved against metrics read at that moment.
pub fn scroll_to_section(ui: &mut Ui, name: impl Into<String>, mode: ScrollMode, id: Option<String>) {
    let mut meta = Metadata::new(id).load(ui);
    meta.request(PendingScroll::Section {
        name: name.into(),
        mode,
    });
    meta.save(ui);
    ui.ctx().request_repaint();
}

/// Queues a relative scroll by a signed pixel amount, always smooth.
pub fn nudge(ui: &mut Ui, amount: f32, id: Option<String>) {
    let mut meta = Metadata::new(id).load(ui);
    meta.request(PendingScroll::Nudge { amount });
    meta.save(ui);
    ui.ctx().request_repaint();
}

/// Helper to reset both [`Metadata`] and the overlay session. Can be
/// useful when the embedding application swaps its section table in
/// runtime.
pub fn reset(ui: &mut Ui, id: Option<String>) {
    reset_metadata(ui, id.clone());
    OverlaySession::new(id).save(ui);
}
