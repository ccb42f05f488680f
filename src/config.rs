use serde::{Deserialize, Serialize};

// Broker/topic defaults match the mosquitto instance this panel was
// originally paired with (a Raspberry Pi on the local network).
pub const DEFAULT_BROKER_HOST: &str = "192.168.0.83";
pub const DEFAULT_BROKER_PORT: u16 = 1883;
pub const DEFAULT_TOPIC: &str = "lightModeTopicUpdate";
pub const DEFAULT_CLIENT_ID: &str = "lights_simulator_panel";

// Configuration data saved to JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default = "default_broker_host")] // Ensure field exists even if missing in JSON
    pub broker_host: String,
    #[serde(default = "default_broker_port")]
    pub broker_port: u16,
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
    #[serde(default)] // Use default if missing
    pub daytime: DaytimeRange,
}

fn default_broker_host() -> String {
    DEFAULT_BROKER_HOST.to_string()
}

fn default_broker_port() -> u16 {
    DEFAULT_BROKER_PORT
}

fn default_topic() -> String {
    DEFAULT_TOPIC.to_string()
}

fn default_client_id() -> String {
    DEFAULT_CLIENT_ID.to_string()
}

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            broker_host: default_broker_host(),
            broker_port: default_broker_port(),
            topic: default_topic(),
            client_id: default_client_id(),
            daytime: DaytimeRange::default(), // 06:00-17:00
        }
    }
}

/// The hours of the day (inclusive on both ends) during which an "on" command
/// selects the bright lamp instead of the warm one.
#[derive(Debug, Copy, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DaytimeRange {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for DaytimeRange {
    fn default() -> Self {
        Self {
            start_hour: 6,
            end_hour: 17,
        }
    }
}

impl DaytimeRange {
    /// Returns true if `hour` (0-23) falls inside the daytime window.
    /// The window does not wrap around midnight: if `start_hour` exceeds
    /// `end_hour` the range is empty and no hour matches.
    pub fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

// How the range is displayed in the UI
impl std::fmt::Display for DaytimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02}:00-{:02}:59", self.start_hour, self.end_hour)
    }
}
