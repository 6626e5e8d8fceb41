#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use std::path::PathBuf;

use sketchpad::{SketchConfig, SketchpadApp};

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand drawing pad with stickers and undo/redo")]
struct Cli {
    /// JSON file with canvas size, background and initial brush settings
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    fn load_config(&self) -> SketchConfig {
        let Some(path) = &self.config else {
            return SketchConfig::default();
        };
        SketchConfig::load(path).unwrap_or_else(|err| {
            log::error!("Could not load config from {}: {err}; using defaults", path.display());
            SketchConfig::default()
        })
    }
}

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let cli = Cli::parse();
    let config = cli.load_config();
    log::info!("Starting sketchpad with {config:?}");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_min_inner_size([320.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Sketchpad",
        native_options,
        Box::new(move |cc| Ok(Box::new(SketchpadApp::new(cc, &config)?))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
