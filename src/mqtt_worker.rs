use crate::config::DaytimeRange;
use crate::light::classify;
use crate::{SharedConnectionFlag, SharedLastCommand, SharedLightState, SharedStateFlag};
use chrono::{Local, Timelike};
use rumqttc::{Client, Connection, Event, Incoming, MqttOptions, QoS};
use std::{thread, time::Duration};

// Constants for MQTT communication
// Keep-alive kept low so the blocking event iterator wakes up promptly and
// checks the stop flag even when the topic is quiet.
const KEEP_ALIVE_SECS: u64 = 5;
const RECONNECT_DELAY_SECS: u64 = 1;
// Queue for outgoing requests (subscribe/disconnect). Small, since this
// client never publishes.
const QUEUE_SIZE: usize = 16;
// The original setup commands the lights at QoS 1
const SUBSCRIBE_QOS: QoS = QoS::AtLeastOnce;

// Structure to hold data passed to the worker thread
// Clone Arcs for shared state, clone config data needed
struct WorkerData {
    run_state: SharedStateFlag,
    broker_host: String,
    broker_port: u16,
    topic: String,
    client_id: String,
    daytime: DaytimeRange,
    light_state_shared: SharedLightState,
    connected_shared: SharedConnectionFlag,
    last_command_shared: SharedLastCommand,
}

// Main function to spawn the worker thread
impl crate::LightsSimulator {
    pub fn spawn_worker(&mut self) -> bool {
        log::info!("Attempting to spawn MQTT worker thread...");

        // Clone data needed by the thread
        let worker_data = WorkerData {
            run_state: self.thread_state.clone(),
            broker_host: self.config.data.broker_host.clone(),
            broker_port: self.config.data.broker_port,
            topic: self.config.data.topic.clone(),
            client_id: self.config.data.client_id.clone(),
            daytime: self.config.data.daytime, // Copy (it's Copy)
            light_state_shared: self.light_state.clone(),
            connected_shared: self.connected.clone(),
            last_command_shared: self.last_command.clone(),
        };

        // Spawn the thread. The client is created *within* the thread so the
        // UI never blocks on broker I/O.
        thread::spawn(move || {
            let mut options = MqttOptions::new(
                worker_data.client_id.clone(),
                worker_data.broker_host.clone(),
                worker_data.broker_port,
            );
            options.set_keep_alive(Duration::from_secs(KEEP_ALIVE_SECS));

            let (client, connection) = Client::new(options, QUEUE_SIZE);
            run_mqtt_worker_loop(client, connection, worker_data);
        });

        log::info!("MQTT worker thread spawn initiated.");
        true // Indicate spawn attempt was made
    }

    // Cleanup actions when the worker is stopped from the UI
    pub fn stop_worker_cleanup(&mut self) {
        log::info!("Performing worker stop cleanup...");
        // Reset shared states displayed in the UI
        if let Ok(mut mode) = self.light_state.lock() {
            *mode = None;
        }
        if let Ok(mut connected) = self.connected.lock() {
            *connected = false;
        }
        if let Ok(mut last) = self.last_command.lock() {
            *last = None;
        }
        log::info!("Worker stop cleanup finished.");
    }
}

/// Handles one inbound publish: decodes the payload, classifies it against the
/// current local hour, and updates the shared lamp state.
fn handle_publish(payload: &[u8], data: &WorkerData) {
    let message = String::from_utf8_lossy(payload).into_owned();
    log::info!("Incoming message: {}", message);

    // Record the raw payload for the UI, recognised or not
    if let Ok(mut last) = data.last_command_shared.lock() {
        *last = Some(message.clone());
    }

    let hour = Local::now().hour();
    match classify(&message, hour, data.daytime) {
        Some(mode) => {
            log::info!("Command '{}' at hour {} -> {}", message, hour, mode);
            if let Ok(mut guard) = data.light_state_shared.lock() {
                *guard = Some(mode);
            }
        }
        None => {
            // The lamp intentionally stays in its previous mode here
            log::warn!(
                "Ignoring unrecognised command '{}'; display left unchanged.",
                message
            );
        }
    }
}

// The core worker loop logic
fn run_mqtt_worker_loop(client: Client, mut connection: Connection, data: WorkerData) {
    log::info!(
        "MQTT worker loop starting. Broker {}:{}, topic '{}'.",
        data.broker_host,
        data.broker_port,
        data.topic
    );

    let &(ref run_lock, ref _run_cvar) = &*data.run_state;

    for event in connection.iter() {
        // --- Check Run State ---
        let should_run = {
            // Scope for mutex guard
            match run_lock.lock() {
                Ok(guard) => *guard,
                Err(_) => {
                    log::error!("Run state mutex poisoned in worker loop!");
                    false
                }
            }
        };

        if !should_run {
            log::info!("Stop signal received, disconnecting and exiting worker loop.");
            // Attempt a clean disconnect, ignore errors on the way out
            let _ = client.disconnect();
            break;
        }

        match event {
            Ok(Event::Incoming(Incoming::ConnAck(ack))) => {
                log::info!(
                    "Connected to {}:{} (session_present={}).",
                    data.broker_host,
                    data.broker_port,
                    ack.session_present
                );
                if let Ok(mut connected) = data.connected_shared.lock() {
                    *connected = true;
                }

                // (Re-)subscribe on every ConnAck: a reconnect may have come
                // with a fresh session, losing the previous subscription.
                match client.subscribe(&data.topic, SUBSCRIBE_QOS) {
                    Ok(_) => log::info!("Subscription requested for topic '{}'.", data.topic),
                    Err(e) => log::error!("Failed to subscribe to '{}': {}", data.topic, e),
                }
            }
            Ok(Event::Incoming(Incoming::SubAck(_))) => {
                log::info!("Subscription to '{}' acknowledged.", data.topic);
            }
            Ok(Event::Incoming(Incoming::Publish(publish))) => {
                handle_publish(&publish.payload, &data);
            }
            Ok(_) => {
                // Ignore other events (pings, outgoing packets, ...)
            }
            Err(e) => {
                log::warn!(
                    "Connection error: {} (retrying in {}s)",
                    e,
                    RECONNECT_DELAY_SECS
                );
                if let Ok(mut connected) = data.connected_shared.lock() {
                    *connected = false;
                }
                thread::sleep(Duration::from_secs(RECONNECT_DELAY_SECS));
            }
        }
    }

    // --- Cleanup before thread exit ---
    if let Ok(mut connected) = data.connected_shared.lock() {
        *connected = false;
    }
    log::info!("MQTT worker thread exiting.");
}
