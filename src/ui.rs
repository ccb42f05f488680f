use crate::about;
use crate::light::LightMode;
use crate::state::State;
use crate::{LightsSimulator, INITIAL_WIDTH, PROGRAM_TITLE};
use eframe::egui::{self, Color32, Context, Ui};

const LAMP_RADIUS: f32 = 55.0;
const STOP_COLOR: Color32 = Color32::from_rgb(255, 0, 0); // Red for the stop button

// Keep UI action handlers associated with LightsSimulator
impl LightsSimulator {
    // --- Button/Action Handlers (called from draw_running_state) ---

    fn handle_connect_toggle(&mut self) {
        if self.config.data.broker_host.is_empty() || self.config.data.topic.is_empty() {
            log::warn!("Connect ignored: broker host or topic is empty.");
            return; // Don't toggle without a broker and topic
        }

        let was_started;
        {
            let &(ref lock, ref cvar) = &*self.thread_state;
            let mut started_guard = lock.lock().expect("Thread state mutex poisoned");
            was_started = *started_guard;
            *started_guard = !was_started; // Toggle the state
            log::info!("Toggled worker thread state to: {}", *started_guard);
            cvar.notify_all(); // Notify thread if it was waiting
        } // Mutex guard dropped here

        if !was_started {
            // If we just started it
            if !self.spawn_worker() {
                // If spawning failed, revert the state
                log::error!("Worker thread failed to spawn, reverting state.");
                let &(ref lock, ref cvar) = &*self.thread_state;
                let mut started_guard = lock.lock().expect("Thread state mutex poisoned");
                *started_guard = false;
                cvar.notify_all();
            } else {
                log::info!("Worker thread started.");
                // Save config on start
                if let Err(e) = self.config.save() {
                    log::error!("Failed to save config on start: {}", e);
                }
            }
        } else {
            // If we just stopped it
            log::info!("Worker thread stopped.");
            self.stop_worker_cleanup(); // Perform cleanup actions
            // Save config on stop
            if let Err(e) = self.config.save() {
                log::error!("Failed to save config on stop: {}", e);
            }
        }
    }
}

// --- UI Drawing Functions ---

pub(crate) fn draw_about_screen(app: &mut LightsSimulator, ui: &mut Ui) {
    ui.set_width(INITIAL_WIDTH);
    ui.vertical_centered(|ui| {
        ui.heading(format!("About {}", PROGRAM_TITLE));
        ui.separator();
        for line in about::about() {
            ui.label(line);
        }
        ui.separator();
        if ui.button("OK").clicked() {
            app.state = State::Running;
        }
    });
}

pub(crate) fn draw_running_state(app: &mut LightsSimulator, ui: &mut Ui, ctx: &Context) {
    let thread_running = app.get_thread_status();
    let connected = app.get_connection_status();

    ui.vertical_centered(|ui| {
        draw_connection_status(app, ui, thread_running, connected);
        ui.separator();
        draw_lamp_section(app, ui);
        ui.separator();
    });

    draw_settings_section(app, ui, thread_running);
    ui.separator();
    draw_control_buttons(app, ui, ctx, thread_running);
}

/// Draws the broker/topic line and the ONLINE/CONNECTING/OFFLINE indicator.
fn draw_connection_status(
    app: &LightsSimulator,
    ui: &mut Ui,
    thread_running: bool,
    connected: bool,
) {
    ui.horizontal(|ui| {
        ui.label(format!(
            "Broker: {}:{}  Topic: {}",
            app.config.data.broker_host, app.config.data.broker_port, app.config.data.topic
        ));
        ui.add_space(15.0);

        let (text, color) = if thread_running && connected {
            ("ONLINE", Color32::GREEN)
        } else if thread_running {
            ("CONNECTING", Color32::YELLOW)
        } else {
            ("OFFLINE", Color32::GRAY)
        };
        ui.label(egui::RichText::new(text).color(color));
    });
}

/// Draws the lamp circle, the status line, and the last received command.
fn draw_lamp_section(app: &LightsSimulator, ui: &mut Ui) {
    let mode = match app.light_state.lock() {
        Ok(guard) => *guard,
        Err(poisoned) => {
            log::error!("UI: Lamp state mutex poisoned!");
            **poisoned.get_ref() // Try to get the value anyway
        }
    };

    // Lamp circle
    let (rect, _response) = ui.allocate_exact_size(
        egui::vec2(LAMP_RADIUS * 2.5, LAMP_RADIUS * 2.5),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.circle_filled(rect.center(), LAMP_RADIUS, lamp_color(mode));
    painter.circle_stroke(
        rect.center(),
        LAMP_RADIUS,
        egui::Stroke::new(2.0, Color32::DARK_GRAY),
    );

    // Status line and asset caption
    match mode {
        Some(mode) => {
            ui.label(egui::RichText::new(mode.status_text()).strong());
            ui.label(
                egui::RichText::new(mode.image_asset())
                    .small()
                    .color(Color32::GRAY),
            );
        }
        None => {
            ui.label(egui::RichText::new("Waiting for command...").italics());
        }
    }

    // Last command readout
    let last = match app.last_command.lock() {
        Ok(guard) => guard.clone(),
        Err(_) => None,
    };
    if let Some(command) = last {
        ui.label(format!("Last command: {}", command));
    }
}

/// Maps the lamp mode to the colour it is painted with. `None` means no
/// command has been classified yet.
fn lamp_color(mode: Option<LightMode>) -> Color32 {
    match mode {
        Some(LightMode::OnBright) => Color32::from_rgb(255, 235, 90),
        Some(LightMode::OnWarm) => Color32::from_rgb(250, 160, 60),
        Some(LightMode::Dimmed) => Color32::from_rgb(120, 110, 55),
        Some(LightMode::Off) => Color32::from_rgb(45, 45, 45),
        None => Color32::from_rgb(30, 30, 30),
    }
}

/// Draws the editable connection settings. Locked while the worker runs.
fn draw_settings_section(app: &mut LightsSimulator, ui: &mut Ui, thread_running: bool) {
    ui.add_enabled_ui(!thread_running, |ui| {
        ui.horizontal(|ui| {
            ui.label("Broker:");
            ui.add(
                egui::TextEdit::singleline(&mut app.config.data.broker_host).desired_width(140.0),
            );
            ui.label("Port:");
            ui.add(egui::DragValue::new(&mut app.config.data.broker_port));
        });
        ui.horizontal(|ui| {
            ui.label("Topic:");
            ui.add(egui::TextEdit::singleline(&mut app.config.data.topic).desired_width(180.0));
        });
        ui.horizontal(|ui| {
            ui.label("Daytime hours:");
            ui.add(
                egui::DragValue::new(&mut app.config.data.daytime.start_hour).range(0..=23),
            );
            ui.label("to");
            ui.add(egui::DragValue::new(&mut app.config.data.daytime.end_hour).range(0..=23));
            // The range does not wrap around midnight, so keep end >= start
            // rather than silently producing an empty window.
            if app.config.data.daytime.end_hour < app.config.data.daytime.start_hour {
                app.config.data.daytime.end_hour = app.config.data.daytime.start_hour;
            }
            ui.label(format!("({})", app.config.data.daytime));
        });
    });
}

/// Draws the control buttons in the bottom row.
fn draw_control_buttons(
    app: &mut LightsSimulator,
    ui: &mut Ui,
    ctx: &Context,
    thread_running: bool,
) {
    ui.horizontal(|ui| {
        // Connect/Disconnect Button
        let (toggle_text, toggle_color) = if thread_running {
            ("Disconnect", STOP_COLOR)
        } else {
            ("Connect", Color32::GREEN)
        };
        if ui
            .button(
                egui::RichText::new(toggle_text)
                    .color(Color32::BLACK) // Text color
                    .background_color(toggle_color),
            )
            .clicked()
        {
            app.handle_connect_toggle();
        }

        if ui.button("About").clicked() {
            app.state = State::About;
        }

        if ui.button("Exit").clicked() {
            // Ask eframe to close the window. `on_exit` will be called.
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
