//! Kernel configuration (TOML)
//!
//! Per-effect settings the rendering layer hands to the kernel: how colors
//! are split across RGBW channels and how they are quantized for output.
//! Every section and field has a default so partial files load.
//!
//! ```toml
//! [mixer]
//! mode = "advanced"
//! saturation = 0.9
//! target_temp = 6500.0
//! white_temp = 4000.0
//!
//! [output]
//! brightness = 0.75
//! correction = 0xFFB0F0
//! has_white = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rgbw::RgbwMode;

/// Lowest color temperature the blackbody fit is trusted for (K)
pub const MIN_TEMPERATURE: f32 = 1000.0;
/// Highest color temperature the blackbody fit is trusted for (K)
pub const MAX_TEMPERATURE: f32 = 40000.0;

/// Kernel configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct KernelConfig {
    /// RGBW channel splitting
    #[serde(default)]
    pub mixer: MixerConfig,
    /// 8-bit output quantization
    #[serde(default)]
    pub output: OutputConfig,
}

/// RGBW mixer settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixerConfig {
    /// Splitting algorithm (default: advanced)
    #[serde(default)]
    pub mode: RgbwMode,
    /// Fraction of chroma kept on the colored LEDs (default: 1.0, range: 0.0-1.0)
    #[serde(default = "default_saturation")]
    pub saturation: f32,
    /// Color temperature neutral content is mapped to (default: 6500 K)
    #[serde(default = "default_target_temp")]
    pub target_temp: f32,
    /// Color temperature of the white LED (default: 5000 K)
    #[serde(default = "default_white_temp")]
    pub white_temp: f32,
}

/// Output quantization settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Global brightness (default: 1.0, range: 0.0-1.0)
    #[serde(default = "default_brightness")]
    pub brightness: f32,
    /// Per-channel correction as `0xRRGGBB` (default: 0xFFFFFF, no correction)
    #[serde(default = "default_correction")]
    pub correction: u32,
    /// Whether the strip has a dedicated white LED (default: false)
    #[serde(default)]
    pub has_white: bool,
}

fn default_saturation() -> f32 {
    1.0
}
fn default_target_temp() -> f32 {
    6500.0
}
fn default_white_temp() -> f32 {
    5000.0
}

fn default_brightness() -> f32 {
    1.0
}
fn default_correction() -> u32 {
    0xFFFFFF
}

impl Default for MixerConfig {
    fn default() -> Self {
        Self {
            mode: RgbwMode::default(),
            saturation: default_saturation(),
            target_temp: default_target_temp(),
            white_temp: default_white_temp(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            brightness: default_brightness(),
            correction: default_correction(),
            has_white: false,
        }
    }
}

fn check_range(field: &'static str, value: f32, min: f32, max: f32) -> Result<(), ConfigError> {
    // NaN fails the range check
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        })
    }
}

impl MixerConfig {
    /// Check that every field is inside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("mixer.saturation", self.saturation, 0.0, 1.0)?;
        check_range("mixer.target_temp", self.target_temp, MIN_TEMPERATURE, MAX_TEMPERATURE)?;
        check_range("mixer.white_temp", self.white_temp, MIN_TEMPERATURE, MAX_TEMPERATURE)?;
        Ok(())
    }
}

impl OutputConfig {
    /// Check that every field is inside its accepted range
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_range("output.brightness", self.brightness, 0.0, 1.0)?;
        if self.correction > 0xFFFFFF {
            return Err(ConfigError::OutOfRange {
                field: "output.correction",
                value: self.correction.into(),
                min: 0.0,
                max: f64::from(0xFFFFFF),
            });
        }
        Ok(())
    }
}

impl KernelConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML, or
    /// holds out-of-range values.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded kernel config");
        Ok(config)
    }

    /// Load a configuration file, falling back to defaults on any error
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), "Using default kernel config: {}", e);
                Self::default()
            }
        }
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mixer.validate()?;
        self.output.validate()
    }
}
