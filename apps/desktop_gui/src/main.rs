use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::{load_settings_from, settings::DEFAULT_SETTINGS_FILE};
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::CatalogBrowserApp;

#[derive(Parser, Debug)]
#[command(name = "catalog-desktop", about = "Desktop browser for a remote product catalog")]
struct Args {
    #[arg(long)]
    endpoint: Option<String>,
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.config, |name| std::env::var(name).ok())
        .with_context(|| format!("failed to load settings from {}", args.config.display()))?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint = endpoint;
        settings.endpoint_url()?;
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Product Catalog")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Product Catalog",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(CatalogBrowserApp::bootstrap(
                cmd_tx, ui_rx, &settings,
            )))
        }),
    )
    .map_err(|err| anyhow!("desktop ui exited with error: {err}"))
}
