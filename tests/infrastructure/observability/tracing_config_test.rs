use reelbrief::infrastructure::observability::TracingConfig;
use reelbrief::presentation::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_copies_level_and_format() {
    let settings = LoggingSettings {
        level: "debug".to_string(),
        enable_json: true,
    };

    let config = TracingConfig::from_settings(&settings, Environment::Prod);

    assert_eq!(config.environment, Environment::Prod);
    assert!(config.json_format);
    assert_eq!(
        config.default_directive(),
        "debug,reelbrief=debug,tower_http=debug"
    );
}
