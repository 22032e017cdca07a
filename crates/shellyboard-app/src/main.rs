//! Main application entry point (native).

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Shellyboard");

    let viewport = egui::ViewportBuilder::default()
        .with_inner_size([960.0, 680.0])
        .with_min_inner_size([640.0, 480.0])
        .with_title("Shelly Beach");

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Shellyboard",
        options,
        Box::new(|cc| Ok(Box::new(shellyboard_app::ShellyApp::new(cc)))),
    )
}
