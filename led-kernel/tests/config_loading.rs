//! Tests for loading kernel configuration from disk.

use std::io::Write;

use led_kernel::config::KernelConfig;
use led_kernel::{ConfigError, RgbwMixer, RgbwMode};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[mixer]
mode = "advanced"
saturation = 0.9
target_temp = 6500.0
white_temp = 4000.0

[output]
brightness = 0.75
correction = 0xFFB0F0
has_white = true
"#
    )
    .unwrap();

    let config = KernelConfig::load(file.path()).unwrap();
    assert_eq!(config.mixer.mode, RgbwMode::Advanced);
    assert_eq!(config.mixer.saturation, 0.9);
    assert_eq!(config.output.brightness, 0.75);
    assert_eq!(config.output.correction, 0xFFB0F0);

    let mixer = RgbwMixer::new(&config.mixer);
    assert_eq!(mixer.white_color(), led_kernel::temperature_to_rgb(4000.0));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");
    let err = KernelConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}

#[test]
fn test_load_or_default_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kernel.toml");
    std::fs::write(&path, "[output]\nbrightness = 3.0\n").unwrap();

    assert!(KernelConfig::load(&path).is_err());
    assert_eq!(KernelConfig::load_or_default(&path), KernelConfig::default());
}

#[test]
fn test_saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kernel.toml");

    let mut config = KernelConfig::default();
    config.mixer.mode = RgbwMode::Legacy;
    config.output.has_white = true;
    std::fs::write(&path, config.to_toml_string().unwrap()).unwrap();

    assert_eq!(KernelConfig::load(&path).unwrap(), config);
}
