//! Reflect Ball Preview
//!
//! A tap-driven looping 2D animation: a line rotates and reflects while a
//! ball shrinks and grows, stepping through a fixed palette of colors.
//! Each click advances the sweep by one unit step.

mod animation;
mod app;
mod config;
mod render;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use animation::RenderCoordinator;
use app::PreviewApp;
use config::SceneConfig;
use render::SceneRenderer;

/// Reflect Ball Preview
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a scene configuration JSON file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Reflect ball preview starting...");

    // Load configuration if provided
    let config = if let Some(config_path) = &args.config {
        info!("Loading config from: {:?}", config_path);
        match SceneConfig::load_from_file(config_path) {
            Ok(config) => {
                info!("Config loaded: {} palette colors", config.palette.len());
                config
            }
            Err(e) => {
                tracing::error!("Failed to load config, using defaults: {:?}", e);
                SceneConfig::default()
            }
        }
    } else {
        SceneConfig::default()
    };

    // Fail fast on an invalid scene before any window opens
    let coordinator = RenderCoordinator::new(&config)?;
    let scene = SceneRenderer::new(config.clone());

    info!(
        "Scene initialized: {} nodes, {}ms tick",
        config.palette.len(),
        config.tick_ms
    );

    // Create native options for eframe
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(false)
            .with_title("Reflect Ball Preview"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Reflect Ball Preview",
        native_options,
        Box::new(move |cc| Ok(Box::new(PreviewApp::new(cc, scene, coordinator)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {}", e))?;

    Ok(())
}
