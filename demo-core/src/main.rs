use demo_core::PanoramaDemo;

fn main() -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 640.0]),
        ..Default::default()
    };
    eframe::run_native(
        "egui_panorama demo",
        native_options,
        Box::new(|cc| Ok(Box::new(PanoramaDemo::new(cc)))),
    )
}
