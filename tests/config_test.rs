use guest_rsvp::config::{AppConfig, ConfigError, ConfigManager, FormConfig};
use guest_rsvp::form::{Attendance, GuestForm};

#[test]
fn test_empty_toml_uses_defaults() {
    let config = AppConfig::from_toml_str("").expect("空配置应该有效");
    assert_eq!(config, AppConfig::default());
    assert!(!config.form.reset_clears_attendance);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_partial_toml_overrides_fields() {
    let content = r#"
[logging]
level = "debug"
file = ""

[form]
reset_clears_attendance = true
"#;
    let config = AppConfig::from_toml_str(content).expect("配置应该有效");
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file.is_empty());
    assert!(config.form.reset_clears_attendance);
    // 未指定的字段保持默认
    assert_eq!(config.form.event_buffer_size, 256);
    assert_eq!(config.gui.title, "Guest RSVP");
}

#[test]
fn test_invalid_values_rejected() {
    let unknown_level = "[logging]\nlevel = \"loud\"\n";
    assert!(matches!(AppConfig::from_toml_str(unknown_level), Err(ConfigError::Invalid(_))));

    let zero_buffer = "[form]\nevent_buffer_size = 0\n";
    assert!(matches!(AppConfig::from_toml_str(zero_buffer), Err(ConfigError::Invalid(_))));

    let bad_window = "[gui]\nwidth = 0.0\n";
    assert!(matches!(AppConfig::from_toml_str(bad_window), Err(ConfigError::Invalid(_))));

    let not_toml = "[form\n";
    assert!(matches!(AppConfig::from_toml_str(not_toml), Err(ConfigError::Toml(_))));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("guest_rsvp_config_test_{}.toml", std::process::id()));
    std::fs::write(&path, "[logging]\nlevel = \"info\"\n\n[form]\nevent_buffer_size = 32\n").expect("写入配置");

    let mut manager = ConfigManager::with_path(&path);
    let result = manager.load();
    let _ = std::fs::remove_file(&path);

    result.expect("读取配置");
    assert_eq!(manager.config().logging.level, "info");
    assert_eq!(manager.config().form.event_buffer_size, 32);
    assert!(!manager.config().form.reset_clears_attendance);
}

#[test]
fn test_invalid_file_falls_back_to_defaults() {
    let path = std::env::temp_dir().join(format!("guest_rsvp_bad_config_{}.toml", std::process::id()));
    std::fs::write(&path, "[form]\nevent_buffer_size = 0\n").expect("写入配置");

    let mut manager = ConfigManager::with_path(&path);
    let error = manager.load_or_default();
    let _ = std::fs::remove_file(&path);

    assert!(matches!(error, Some(ConfigError::Invalid(_))));
    assert_eq!(manager.config(), &AppConfig::default());
}

#[test]
fn test_reset_policy_follows_config() {
    let config = FormConfig { reset_clears_attendance: true, ..FormConfig::default() };
    let mut form = GuestForm::from_config(&config);
    form.select_attendance(Attendance::Yes);
    form.reset();
    assert!(!form.is_attending());

    let mut form = GuestForm::from_config(&AppConfig::default().form);
    form.select_attendance(Attendance::Yes);
    form.reset();
    assert!(form.is_attending());
}
