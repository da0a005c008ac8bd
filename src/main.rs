use assessment_portal::PortalApp;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let app = match PortalApp::embedded() {
        Ok(app) => app,
        Err(err) => {
            log::error!("could not load the embedded exam data: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([960.0, 600.0]),
        ..Default::default()
    };
    let title = app.config.window_title.clone();
    eframe::run_native(&title, options, Box::new(|_cc| Ok(Box::new(app))))
}
