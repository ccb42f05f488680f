use crate::config::DaytimeRange;

// Represents the lamp picture currently shown on the panel
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LightMode {
    Dimmed,
    Off,
    OnBright,
    OnWarm,
}

impl LightMode {
    /// Identifier of the lamp image drawn for this mode.
    pub fn image_asset(&self) -> &'static str {
        match self {
            LightMode::Dimmed => "lightdim",
            LightMode::Off => "lightoffcompletely",
            LightMode::OnBright => "lightonbright",
            LightMode::OnWarm => "lightonwarm",
        }
    }

    /// Status line shown underneath the lamp image.
    pub fn status_text(&self) -> &'static str {
        match self {
            LightMode::Dimmed => "Lights dimmed.",
            LightMode::Off => "Lights turned off.",
            LightMode::OnBright => "Lights turned on bright.",
            LightMode::OnWarm => "Lights set to 'On' but warmer since it's late.",
        }
    }
}

// How the mode is displayed in logs and the UI
impl std::fmt::Display for LightMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LightMode::Dimmed => write!(f, "DIMMED"),
            LightMode::Off => write!(f, "OFF"),
            LightMode::OnBright => write!(f, "ON (bright)"),
            LightMode::OnWarm => write!(f, "ON (warm)"),
        }
    }
}

/// Maps an inbound command payload and the current hour of day onto a lamp
/// mode. First match wins, evaluated in this order:
///
/// 1. payload contains "dim"                         -> Dimmed
/// 2. payload contains "off"                         -> Off
/// 3. payload contains "on" during the daytime range -> OnBright
/// 4. payload contains "on" outside of it            -> OnWarm
///
/// Substring match, not exact match, so "turn on please" counts as "on".
/// Anything else returns `None` and the panel keeps showing whatever it was
/// showing before; the caller is expected to log the ignored payload.
pub fn classify(payload: &str, hour: u32, daytime: DaytimeRange) -> Option<LightMode> {
    if payload.contains("dim") {
        Some(LightMode::Dimmed)
    } else if payload.contains("off") {
        Some(LightMode::Off)
    } else if payload.contains("on") && daytime.contains(hour) {
        Some(LightMode::OnBright)
    } else if payload.contains("on") {
        Some(LightMode::OnWarm)
    } else {
        None
    }
}
