mod ops;
mod renderer;
mod types;
mod ui;

use eframe::egui;
use tracing::info;

use crate::ui::app::{AppState, CountdownApp};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ringdown=info")),
        )
        .init();

    info!("starting ringdown");

    let app = CountdownApp::new(AppState::new());

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 460.0])
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "Ringdown",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )?;
    Ok(())
}
