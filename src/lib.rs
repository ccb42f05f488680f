// Export modules for testing
pub mod about;
pub mod config;
pub mod light;
pub mod mqtt_worker;
pub mod state;
pub mod ui;

// Re-export main types
pub use crate::config::{ConfigData, DaytimeRange};
pub use crate::light::{classify, LightMode};
pub use crate::state::State;

use std::process::exit;
// External Crate Imports
use clap::Parser;
use eframe::{egui, glow};
use fast_config::Config;
use std::sync::{Arc, Condvar, Mutex};
use std::time::Duration;

// Constants
pub const PROGRAM_TITLE: &str = "Lights Simulator";
pub const INITIAL_WIDTH: f32 = 420.0;
pub const INITIAL_HEIGHT: f32 = 360.0;

// Type aliases for shared state can make signatures cleaner
pub type SharedStateFlag = Arc<(Mutex<bool>, Condvar)>;
pub type SharedLightState = Arc<Mutex<Option<LightMode>>>;
pub type SharedConnectionFlag = Arc<Mutex<bool>>;
pub type SharedLastCommand = Arc<Mutex<Option<String>>>;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Override the broker host from the config file
    #[arg(long)]
    pub broker_host: Option<String>,

    /// Override the broker port from the config file
    #[arg(long)]
    pub broker_port: Option<u16>,

    /// Override the subscription topic from the config file
    #[arg(long)]
    pub topic: Option<String>,
}

// The main application struct
pub struct LightsSimulator {
    // State
    pub state: State,
    pub thread_state: SharedStateFlag, // Is the worker thread running?

    // Shared state between UI and Worker Thread
    pub light_state: SharedLightState, // Lamp mode selected by the last classified command
    pub connected: SharedConnectionFlag, // Has the worker seen a ConnAck recently?
    pub last_command: SharedLastCommand, // Most recent payload, classified or not

    // Configuration
    pub config: Config<ConfigData>,
}

impl Default for LightsSimulator {
    fn default() -> Self {
        // Determine config path safely
        let config_dir = dirs::config_dir()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string()); // Fallback to current dir
        let config_path = format!("{}/lights_simulator.json", config_dir);

        // Handle potential config creation error
        let config = match Config::new(&config_path, ConfigData::default()) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error creating config file at {}: {}", config_path, e);
                exit(1)
            }
        };

        Self {
            state: State::Initialising,
            thread_state: Arc::new((Mutex::new(false), Condvar::new())),
            light_state: Arc::new(Mutex::new(None)),
            connected: Arc::new(Mutex::new(false)),
            last_command: Arc::new(Mutex::new(None)),
            config,
        }
    }
}

// Implementations specific to App lifecycle and top-level control
impl LightsSimulator {
    /// Creates the app and applies any command line overrides on top of the
    /// loaded configuration. Overrides are not written back to the file unless
    /// the user starts the worker, which saves the config.
    pub fn new(args: &Args) -> Self {
        let mut app = Self::default();
        if let Some(host) = &args.broker_host {
            app.config.data.broker_host = host.clone();
        }
        if let Some(port) = args.broker_port {
            app.config.data.broker_port = port;
        }
        if let Some(topic) = &args.topic {
            app.config.data.topic = topic.clone();
        }
        app
    }

    // Initialization logic called once at the start
    fn init(&mut self) {
        log::info!(
            "Using broker {}:{}, topic '{}'",
            self.config.data.broker_host,
            self.config.data.broker_port,
            self.config.data.topic
        );
        self.state = State::Running;
        log::info!("Initialization complete. State set to Running.");
    }

    // Helper to get thread status
    pub fn get_thread_status(&self) -> bool {
        match self.thread_state.0.lock() {
            Ok(guard) => *guard,
            Err(poisoned) => {
                log::error!("Thread state mutex poisoned!");
                **poisoned.get_ref() // Still try to get the value
            }
        }
    }

    // Helper to get the connection status reported by the worker
    pub fn get_connection_status(&self) -> bool {
        match self.connected.lock() {
            Ok(guard) => *guard,
            Err(_) => false, // Report offline if the mutex is poisoned
        }
    }

    // Graceful shutdown logic
    fn shutdown_app(&mut self) {
        log::info!("Shutdown requested.");
        // Signal the worker thread to stop
        {
            let &(ref lock, ref cvar) = &*self.thread_state;
            match lock.lock() {
                Ok(mut started) => {
                    *started = false;
                    log::info!("Signaling worker thread to stop.");
                }
                Err(_) => {
                    log::error!("Thread state mutex poisoned during shutdown!");
                }
            }
            cvar.notify_all(); // Wake up thread if it's waiting
        }

        // Save configuration
        if let Err(e) = self.config.save() {
            log::error!("Failed to save configuration on exit: {}", e);
        } else {
            log::info!("Configuration saved.");
        }

        // Give the thread a moment to process the stop signal
        std::thread::sleep(Duration::from_millis(250));
        log::info!("Shutdown complete.");
    }
}

// Main eframe application loop
impl eframe::App for LightsSimulator {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        log::debug!("Update Called.");
        // Request repaint ensures GUI updates even if the worker is idle
        ctx.request_repaint_after(Duration::from_millis(100));

        egui::CentralPanel::default().show(ctx, |ui| match self.state {
            State::Initialising => {
                // Show a simple "Loading..." message while init runs
                ui.centered_and_justified(|ui| {
                    ui.label("Initialising...");
                });
                // Actual init logic runs once after this frame
                self.init();
            }
            State::About => {
                ui::draw_about_screen(self, ui);
            }
            State::Running => {
                ui::draw_running_state(self, ui, ctx);
            }
        });
    }

    // Called when the application is about to close
    fn on_exit(&mut self, _gl: Option<&glow::Context>) {
        self.shutdown_app();
    }
}
