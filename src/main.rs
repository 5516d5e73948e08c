// src/main.rs
use eframe::egui;
use anyhow::Result;

use chemvis::app::ChemVisApp;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chemvis=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_title("ChemVis"),
        ..Default::default()
    };

    eframe::run_native(
        "ChemVis",
        options,
        Box::new(|cc| Box::new(ChemVisApp::new(cc))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
