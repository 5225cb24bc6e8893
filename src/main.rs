mod app;
mod clock;
mod energy;
mod input;
mod pendulum;
mod scene;
mod types;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("starting pendulum lab");

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([900.0, 620.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Pendulum Lab",
        options,
        Box::new(|cc| Ok(Box::new(app::PendulumApp::new(cc)))),
    )
}
