use super::*;

use std::{
    collections::HashMap,
    env,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_settings_file(contents: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("gesture_replay_config_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write settings");
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn missing_file_yields_defaults() {
    let path = env::temp_dir().join("gesture_replay_config_test_missing.toml");
    let settings = load_settings_with_env(&path, no_env).expect("settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.tick_interval(), Duration::from_secs(1));
}

#[test]
fn file_values_override_defaults() {
    let path = temp_settings_file(
        "tick_interval_ms = 250\nvariant = \"imperative\"\nlog_filter = \"debug\"\n",
    );

    let settings = load_settings_with_env(&path, no_env).expect("settings");
    assert_eq!(settings.tick_interval_ms, 250);
    assert_eq!(settings.variant, Variant::Imperative);
    assert_eq!(settings.log_filter, "debug");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn env_overrides_file() {
    let path = temp_settings_file("tick_interval_ms = 250\n");
    let env: HashMap<&str, &str> = HashMap::from([
        ("APP__TICK_INTERVAL_MS", "50"),
        ("APP__VARIANT", "Imperative"),
        ("RUST_LOG", "warn"),
        ("APP__LOG_FILTER", "gesture_core=trace"),
    ]);

    let settings =
        load_settings_with_env(&path, |key| env.get(key).map(|v| v.to_string())).expect("settings");
    assert_eq!(settings.tick_interval_ms, 50);
    assert_eq!(settings.variant, Variant::Imperative);
    assert_eq!(settings.log_filter, "gesture_core=trace");

    fs::remove_file(path).expect("cleanup");
}

#[test]
fn rejects_zero_interval() {
    let path = temp_settings_file("tick_interval_ms = 0\n");
    let err = load_settings_with_env(&path, no_env).expect_err("zero interval");
    assert!(err.to_string().contains("greater than zero"));
    fs::remove_file(path).expect("cleanup");
}

#[test]
fn rejects_unknown_keys_and_bad_env() {
    let path = temp_settings_file("tick_interval = 10\n");
    assert!(load_settings_with_env(&path, no_env).is_err());
    fs::remove_file(path).expect("cleanup");

    let path = env::temp_dir().join("gesture_replay_config_test_missing.toml");
    let err = load_settings_with_env(&path, |key| {
        (key == "APP__TICK_INTERVAL_MS").then(|| "soon".to_string())
    })
    .expect_err("bad number");
    assert!(err.to_string().contains("APP__TICK_INTERVAL_MS"));
}
