#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::egui;
use lights_simulator::{Args, LightsSimulator, INITIAL_HEIGHT, INITIAL_WIDTH, PROGRAM_TITLE};

// Application Entry Point
fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    // --- Command Line Argument Parsing ---
    let args = Args::parse();
    // --- End Argument Parsing ---

    log::info!("Starting {}", PROGRAM_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE), // Set window title here
        ..Default::default()
    };

    eframe::run_native(
        PROGRAM_TITLE, // Used for window title if not set in viewport
        options,
        Box::new(move |_cc| Ok(Box::new(LightsSimulator::new(&args)))), // Create the app instance
    )
}
