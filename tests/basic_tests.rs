use lights_simulator::config::{ConfigData, DaytimeRange};
use lights_simulator::light::{classify, LightMode};
use lights_simulator::state::State;

#[test]
fn test_config_data_default() {
    // Test that the default ConfigData is created correctly
    let config = ConfigData::default();

    assert_eq!(config.broker_host, "192.168.0.83");
    assert_eq!(config.broker_port, 1883);
    assert_eq!(config.topic, "lightModeTopicUpdate");
    assert_eq!(config.client_id, "lights_simulator_panel");

    // Check that the daytime range has the default value (06:00-17:59)
    assert_eq!(config.daytime, DaytimeRange::default());
    assert_eq!(config.daytime.start_hour, 6);
    assert_eq!(config.daytime.end_hour, 17);
}

#[test]
fn test_daytime_range_contains() {
    let daytime = DaytimeRange::default();

    // Both ends of the range are inclusive
    assert!(daytime.contains(6));
    assert!(daytime.contains(12));
    assert!(daytime.contains(17));

    assert!(!daytime.contains(5));
    assert!(!daytime.contains(18));
    assert!(!daytime.contains(0));
    assert!(!daytime.contains(23));
}

#[test]
fn test_daytime_range_does_not_wrap_around_midnight() {
    // An inverted range is empty: every hour falls outside it, so "on"
    // always selects the warm lamp
    let inverted = DaytimeRange {
        start_hour: 17,
        end_hour: 6,
    };

    for hour in 0..24 {
        assert!(!inverted.contains(hour));
        assert_eq!(classify("on", hour, inverted), Some(LightMode::OnWarm));
    }
}

#[test]
fn test_daytime_range_display() {
    // Test the Display implementation for DaytimeRange
    assert_eq!(format!("{}", DaytimeRange::default()), "06:00-17:59");

    let night_shift = DaytimeRange {
        start_hour: 0,
        end_hour: 5,
    };
    assert_eq!(format!("{}", night_shift), "00:00-05:59");
}

#[test]
fn test_classify_dim_at_any_hour() {
    let daytime = DaytimeRange::default();

    // "dim" wins regardless of the hour
    for hour in 0..24 {
        assert_eq!(classify("dim", hour, daytime), Some(LightMode::Dimmed));
    }
}

#[test]
fn test_classify_off_at_any_hour() {
    let daytime = DaytimeRange::default();

    for hour in 0..24 {
        assert_eq!(classify("off", hour, daytime), Some(LightMode::Off));
    }

    // "off" wins over "on" because it is checked first
    assert_eq!(
        classify("turn off not on", 12, daytime),
        Some(LightMode::Off)
    );
}

#[test]
fn test_classify_dim_wins_over_off() {
    // "dim" is checked before "off", so a payload containing both dims
    let daytime = DaytimeRange::default();
    assert_eq!(classify("dim off", 12, daytime), Some(LightMode::Dimmed));
    assert_eq!(classify("off dim", 3, daytime), Some(LightMode::Dimmed));
}

#[test]
fn test_classify_on_respects_daytime_boundaries() {
    let daytime = DaytimeRange::default();

    // Inside the range (inclusive on both ends) -> bright
    assert_eq!(classify("on", 6, daytime), Some(LightMode::OnBright));
    assert_eq!(classify("on", 17, daytime), Some(LightMode::OnBright));

    // Just outside the range -> warm
    assert_eq!(classify("on", 5, daytime), Some(LightMode::OnWarm));
    assert_eq!(classify("on", 18, daytime), Some(LightMode::OnWarm));
}

#[test]
fn test_classify_matches_substrings() {
    // Commands are matched on substring, not exact text
    let daytime = DaytimeRange::default();
    assert_eq!(
        classify("turn on please", 12, daytime),
        Some(LightMode::OnBright)
    );
    assert_eq!(
        classify("please dim the lights", 22, daytime),
        Some(LightMode::Dimmed)
    );
}

#[test]
fn test_classify_ignores_unrecognised_payloads() {
    // Unknown commands produce no state change
    let daytime = DaytimeRange::default();
    assert_eq!(classify("status", 12, daytime), None);
    assert_eq!(classify("", 12, daytime), None);
    assert_eq!(classify("brighter", 12, daytime), None);
}

#[test]
fn test_classify_with_custom_daytime_range() {
    // A custom range shifts the bright/warm boundary accordingly
    let daytime = DaytimeRange {
        start_hour: 8,
        end_hour: 20,
    };

    assert_eq!(classify("on", 7, daytime), Some(LightMode::OnWarm));
    assert_eq!(classify("on", 8, daytime), Some(LightMode::OnBright));
    assert_eq!(classify("on", 20, daytime), Some(LightMode::OnBright));
    assert_eq!(classify("on", 21, daytime), Some(LightMode::OnWarm));
}

#[test]
fn test_light_mode_assets_and_status() {
    // Each mode carries a fixed image identifier and status line
    assert_eq!(LightMode::Dimmed.image_asset(), "lightdim");
    assert_eq!(LightMode::Off.image_asset(), "lightoffcompletely");
    assert_eq!(LightMode::OnBright.image_asset(), "lightonbright");
    assert_eq!(LightMode::OnWarm.image_asset(), "lightonwarm");

    assert_eq!(LightMode::Dimmed.status_text(), "Lights dimmed.");
    assert_eq!(LightMode::Off.status_text(), "Lights turned off.");
    assert_eq!(LightMode::OnBright.status_text(), "Lights turned on bright.");
    assert_eq!(
        LightMode::OnWarm.status_text(),
        "Lights set to 'On' but warmer since it's late."
    );
}

#[test]
fn test_light_mode_display() {
    // Test the Display implementation for LightMode
    assert_eq!(format!("{}", LightMode::Dimmed), "DIMMED");
    assert_eq!(format!("{}", LightMode::Off), "OFF");
    assert_eq!(format!("{}", LightMode::OnBright), "ON (bright)");
    assert_eq!(format!("{}", LightMode::OnWarm), "ON (warm)");
}

#[test]
fn test_state_enum() {
    // Test that the State enum has the expected variants
    let initialising = State::Initialising;
    let about = State::About;
    let running = State::Running;

    // Test that the variants are different
    assert_ne!(initialising, about);
    assert_ne!(initialising, running);
    assert_ne!(about, running);

    // Test equality with same variant
    assert_eq!(initialising, State::Initialising);
    assert_eq!(about, State::About);
    assert_eq!(running, State::Running);
}
