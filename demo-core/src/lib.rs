use eframe::{App, CreationContext};
use egui::{self, CollapsingHeader, ScrollArea, TextureHandle, TextureOptions, Ui};
use egui_panorama::{
    ButtonAction, CanvasButton, OverlayContent, OverlayRegistry, PanoramaView, ScrollMode,
    Section, SectionTable,
};
use instant::Instant;
use rand::Rng;

pub const BG_WIDTH: usize = 2048;
pub const BG_HEIGHT: usize = 512;
#[cfg(feature = "events")]
pub const EVENTS_LIMIT: usize = 200;

#[cfg(feature = "events")]
pub use crossbeam::channel::{unbounded, Receiver, Sender};
#[cfg(feature = "events")]
pub use egui_panorama::events::Event;

pub mod settings_local {
    pub struct SettingsNavigation {
        pub start_section: String,
        pub scroll_duration: f32,
        pub nudge_fraction: f32,
        pub resize_debounce: f32,
    }
    impl Default for SettingsNavigation {
        fn default() -> Self {
            Self {
                start_section: "home".to_string(),
                scroll_duration: 0.25,
                nudge_fraction: 0.2,
                resize_debounce: 0.2,
            }
        }
    }

    pub struct SettingsInteraction {
        pub buttons_enabled: bool,
        pub edge_hints_enabled: bool,
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

    pub struct SettingsStyle {
        pub section_labels: bool,
        pub hint_size: f32,
        pub button_height: f32,
    }
    impl Default for SettingsStyle {
        fn default() -> Self {
            Self {
                section_labels: false,
                hint_size: 28.0,
                button_height: 36.0,
            }
        }
    }
}
pub use settings_local as settings;

fn info_icon(ui: &mut egui::Ui, tip: &str) {
    ui.add_space(4.0);
    ui.small_button("ℹ").on_hover_text(tip);
}

fn site_sections() -> SectionTable {
    SectionTable::from_iter([
        Section::new("writing", 10.0),
        Section::new("code", 30.0),
        Section::new("home", 50.0),
        Section::new("music", 70.0),
        Section::new("contact", 90.0),
    ])
}

fn site_buttons() -> Vec<CanvasButton> {
    let nav = |label: &str, name: &str, anchor: f32| {
        CanvasButton::new(label, ButtonAction::GoToSection(name.to_string()), anchor)
            .with_vertical_percent(78.0)
            .with_virtual_width(10.0)
    };

    vec![
        nav("Writing", "writing", 10.0),
        nav("Code", "code", 30.0),
        nav("Home", "home", 50.0).with_virtual_width(12.0),
        nav("Music", "music", 70.0),
        nav("Contact", "contact", 90.0),
        CanvasButton::new(
            "CV",
            ButtonAction::OpenOverlay("professional-experience".to_string()),
            45.0,
        )
        .with_vertical_percent(90.0)
        .with_virtual_width(8.0),
        // Unregistered id: exercises the derived title + placeholder body
        CanvasButton::new(
            "Gallery",
            ButtonAction::OpenOverlay("coming-soon".to_string()),
            55.0,
        )
        .with_vertical_percent(90.0)
        .with_virtual_width(8.0),
    ]
}

fn site_overlays() -> OverlayRegistry {
    let mut registry = OverlayRegistry::new();
    registry.insert(
        "professional-experience",
        OverlayContent::new(
            "Professional Experience",
            "Ten years of building things for the web, the terminal and everything in between.",
        ),
    );
    registry.insert(
        "music",
        OverlayContent::new("Music", "Selected recordings and live sets."),
    );
    registry
}

/// Paints the wide dusk-gradient artwork with a starfield, used as the
/// background the canvas scrolls over.
fn generate_background() -> egui::ColorImage {
    let mut rng = rand::rng();
    let mut rgb = vec![0u8; BG_WIDTH * BG_HEIGHT * 3];

    for y in 0..BG_HEIGHT {
        let vertical = y as f32 / BG_HEIGHT as f32;
        for x in 0..BG_WIDTH {
            let horizontal = x as f32 / BG_WIDTH as f32;
            let glow = 1.0 - (horizontal - 0.5).abs() * 2.0;

            let r = 18.0 + 70.0 * glow * (1.0 - vertical);
            let g = 22.0 + 36.0 * glow * (1.0 - vertical);
            let b = 46.0 + 90.0 * (1.0 - vertical);

            let i = (y * BG_WIDTH + x) * 3;
            rgb[i] = r as u8;
            rgb[i + 1] = g as u8;
            rgb[i + 2] = b as u8;
        }
    }

    for _ in 0..600 {
        let x = rng.random_range(0..BG_WIDTH);
        let y = rng.random_range(0..BG_HEIGHT / 2);
        let v = rng.random_range(140..=255);
        let i = (y * BG_WIDTH + x) * 3;
        rgb[i] = v;
        rgb[i + 1] = v;
        rgb[i + 2] = v;
    }

    egui::ColorImage::from_rgb([BG_WIDTH, BG_HEIGHT], &rgb)
}

pub struct PanoramaDemo {
    pub sections: SectionTable,
    pub buttons: Vec<CanvasButton>,
    pub overlays: OverlayRegistry,
    pub background: TextureHandle,
    pub settings_navigation: settings::SettingsNavigation,
    pub settings_interaction: settings::SettingsInteraction,
    pub settings_style: settings::SettingsStyle,
    pub fps: f32,
    pub last_update_time: Instant,
    pub frames_last_time_span: usize,
    pub show_sidebar: bool,
    pub dark_mode: bool,
    pub reset_requested: bool,
    pub pending_jump: Option<String>,
    #[cfg(feature = "events")]
    pub last_events: Vec<String>,
    #[cfg(feature = "events")]
    pub event_publisher: Sender<Event>,
    #[cfg(feature = "events")]
    pub event_consumer: Receiver<Event>,
}

impl PanoramaDemo {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let background =
            cc.egui_ctx
                .load_texture("panorama_demo_bg", generate_background(), TextureOptions::LINEAR);

        #[cfg(feature = "events")]
        let (event_publisher, event_consumer) = unbounded();

        Self {
            sections: site_sections(),
            buttons: site_buttons(),
            overlays: site_overlays(),
            background,
            settings_navigation: settings::SettingsNavigation::default(),
            settings_interaction: settings::SettingsInteraction::default(),
            settings_style: settings::SettingsStyle::default(),
            fps: 0.0,
            last_update_time: Instant::now(),
            frames_last_time_span: 0,
            show_sidebar: true,
            dark_mode: cc.egui_ctx.style().visuals.dark_mode,
            reset_requested: false,
            pending_jump: None,
            #[cfg(feature = "events")]
            last_events: Vec::new(),
            #[cfg(feature = "events")]
            event_publisher,
            #[cfg(feature = "events")]
            event_consumer,
        }
    }

    pub fn update_fps(&mut self) {
        self.frames_last_time_span += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_update_time);
        if elapsed.as_secs() >= 1 {
            self.last_update_time = now;
            self.fps = self.frames_last_time_span as f32 / elapsed.as_secs_f32();
            self.frames_last_time_span = 0;
        }
    }

    pub fn ui_navigation(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Navigation").default_open(true).show(ui, |ui| {
            ui.horizontal(|ui| {
                egui::ComboBox::from_label("start_section")
                    .selected_text(self.settings_navigation.start_section.clone())
                    .show_ui(ui, |ui| {
                        for section in self.sections.iter() {
                            ui.selectable_value(
                                &mut self.settings_navigation.start_section,
                                section.name().to_string(),
                                section.name(),
                            );
                        }
                    });
                info_icon(ui, "Section centered on load and re-centered once the background is ready.");
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings_navigation.scroll_duration, 0.0..=1.0)
                        .text("scroll_duration"),
                );
                info_icon(ui, "Seconds a smooth scroll takes to settle. 0 jumps immediately.");
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings_navigation.nudge_fraction, 0.05..=0.5)
                        .text("nudge_fraction"),
                );
                info_icon(ui, "Arrow click distance as a fraction of viewport width.");
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings_navigation.resize_debounce, 0.0..=1.0)
                        .text("resize_debounce"),
                );
                info_icon(ui, "Quiet period before a window resize triggers one re-sync pass.");
            });

            ui.add_space(6.0);
            ui.label("Center a section:");
            ui.horizontal_wrapped(|ui| {
                let mut jump = None;
                for section in self.sections.iter() {
                    if ui.small_button(section.name()).clicked() {
                        jump = Some(section.name().to_string());
                    }
                }
                if jump.is_some() {
                    self.pending_jump = jump;
                }
            });
        });
    }

    pub fn ui_interaction(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Interaction").show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.settings_interaction.buttons_enabled, "buttons_enabled");
                info_icon(ui, "Canvas buttons react to clicks.");
            });
            ui.horizontal(|ui| {
                ui.checkbox(
                    &mut self.settings_interaction.edge_hints_enabled,
                    "edge_hints_enabled",
                );
                info_icon(ui, "Show and enable the directional arrows at the viewport edges.");
            });
            ui.horizontal(|ui| {
                ui.checkbox(
                    &mut self.settings_interaction.user_scroll_enabled,
                    "user_scroll_enabled",
                );
                info_icon(ui, "Wheel and drag scrolling. A wheel gesture interrupts a smooth scroll.");
            });
        });
    }

    pub fn ui_style(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Style").show(ui, |ui| {
            ui.horizontal(|ui| {
                let mut dark = ui.ctx().style().visuals.dark_mode;
                if ui
                    .checkbox(&mut dark, "dark mode")
                    .on_hover_text("Toggle dark or light visuals")
                    .changed()
                {
                    if dark {
                        ui.ctx().set_visuals(egui::Visuals::dark());
                    } else {
                        ui.ctx().set_visuals(egui::Visuals::light());
                    }
                }
                self.dark_mode = dark;
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.settings_style.section_labels, "section_labels");
                info_icon(ui, "Render section names at their anchors, useful while authoring.");
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings_style.hint_size, 16.0..=48.0)
                        .text("hint_size"),
                );
                info_icon(ui, "Edge length of an edge-hint arrow button.");
            });
            ui.horizontal(|ui| {
                ui.add(
                    egui::Slider::new(&mut self.settings_style.button_height, 24.0..=64.0)
                        .text("button_height"),
                );
                info_icon(ui, "Height of canvas buttons.");
            });
        });
    }

    #[cfg(feature = "events")]
    pub fn ui_events(&mut self, ui: &mut Ui) {
        CollapsingHeader::new("Events").default_open(true).show(ui, |ui| {
            if ui.button("clear").clicked() {
                self.last_events.clear();
            }
            ScrollArea::vertical().max_height(200.0).show(ui, |ui| {
                for event in self.last_events.iter().rev() {
                    ui.monospace(event);
                }
            });
        });
    }

    #[cfg(not(feature = "events"))]
    pub fn show_events_feature_tip(&mut self, ui: &mut Ui) {
        ui.group(|ui| {
            ui.colored_label(
                egui::Color32::from_rgb(200, 180, 40),
                "Tip: enable the 'events' feature to see centering, nudge, edge-hint and overlay events.",
            );
            ui.code("cargo r --release -p demo-core --features events");
        });
    }
    #[cfg(feature = "events")]
    pub fn show_events_feature_tip(&mut self, _ui: &mut Ui) {}

    #[cfg(feature = "events")]
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.event_consumer.try_recv() {
            self.last_events.push(format!("{event:?}"));
        }
        let len = self.last_events.len();
        if len > EVENTS_LIMIT {
            self.last_events.drain(0..len - EVENTS_LIMIT);
        }
    }

    fn process_keybindings(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::Tab) && !i.modifiers.any() {
                self.show_sidebar = !self.show_sidebar;
            }
            if i.key_pressed(egui::Key::Space) && !i.modifiers.any() {
                self.reset_requested = true;
            }

            let jumps = [
                (egui::Key::Num1, "writing"),
                (egui::Key::Num2, "code"),
                (egui::Key::Num3, "home"),
                (egui::Key::Num4, "music"),
                (egui::Key::Num5, "contact"),
            ];
            for (key, name) in jumps {
                if i.key_pressed(key) && !i.modifiers.any() {
                    self.pending_jump = Some(name.to_string());
                }
            }
        });
    }
}

impl App for PanoramaDemo {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_keybindings(ctx);

        if self.show_sidebar {
            egui::SidePanel::right("right")
                .default_width(300.0)
                .min_width(300.0)
                .show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        #[cfg(not(feature = "events"))]
                        self.show_events_feature_tip(ui);
                        ui.label(format!("FPS: {:.1}", self.fps));
                        if ui
                            .button("Reset view")
                            .on_hover_text("Reset scroll state and overlay session (Space)")
                            .clicked()
                        {
                            self.reset_requested = true;
                        }
                        self.ui_navigation(ui);
                        self.ui_interaction(ui);
                        self.ui_style(ui);
                        #[cfg(feature = "events")]
                        self.ui_events(ui);
                    });
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.reset_requested {
                egui_panorama::reset(ui, None);
                self.reset_requested = false;
            }
            if let Some(name) = self.pending_jump.take() {
                egui_panorama::scroll_to_section(ui, name, ScrollMode::Smooth, None);
            }

            let settings_navigation = egui_panorama::SettingsNavigation::new()
                .with_start_section(self.settings_navigation.start_section.clone())
                .with_scroll_duration(self.settings_navigation.scroll_duration)
                .with_nudge_fraction(self.settings_navigation.nudge_fraction)
                .with_resize_debounce(self.settings_navigation.resize_debounce);
            let settings_interaction = egui_panorama::SettingsInteraction::new()
                .with_buttons_enabled(self.settings_interaction.buttons_enabled)
                .with_edge_hints_enabled(self.settings_interaction.edge_hints_enabled)
                .with_user_scroll_enabled(self.settings_interaction.user_scroll_enabled);
            let settings_style = egui_panorama::SettingsStyle::new()
                .with_section_labels(self.settings_style.section_labels)
                .with_hint_size(self.settings_style.hint_size)
                .with_button_height(self.settings_style.button_height);

            let mut view =
                PanoramaView::new(&self.sections, &self.buttons, &self.overlays, &self.background)
                    .with_navigations(&settings_navigation)
                    .with_interactions(&settings_interaction)
                    .with_styles(&settings_style);
            #[cfg(feature = "events")]
            {
                view = view.with_event_sink(&self.event_publisher);
            }
            ui.add(&mut view);
        });

        self.update_fps();
        #[cfg(feature = "events")]
        self.drain_events();
    }
}
