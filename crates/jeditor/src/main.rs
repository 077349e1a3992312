#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use jeditor_config::AppConfig;

/// A simple desktop text editor built with Rust and egui.
#[derive(Parser, Debug)]
#[command(name = "jeditor", version, about)]
struct Cli {
    /// File to open on startup.
    file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting JEditor");

    let config_path = AppConfig::config_path();
    let config = AppConfig::load_or_create(&config_path);
    let startup_args = jeditor_ui::StartupArgs { file: cli.file };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(jeditor_core::APP_NAME)
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        jeditor_core::APP_NAME,
        native_options,
        Box::new(move |_cc| {
            Ok(Box::new(jeditor_ui::App::with_config(
                config,
                config_path,
                startup_args,
            )))
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
