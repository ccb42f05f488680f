pub fn about() -> Vec<String> {
    vec![
        "Lights Simulator subscribes to a single MQTT topic and mirrors the \
        commanded light state on screen.".to_string(),
        "\n".to_string(),
        "Commands containing \"dim\" dim the lights, \"off\" turns them off, \
        and \"on\" turns them on - bright during the configured daytime hours, \
        warm outside of them.".to_string(),
        "Broker, topic and daytime hours are stored in lights_simulator.json \
        in the platform config directory.".to_string(),
    ]
}
