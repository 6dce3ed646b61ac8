//! RGB to RGBW channel splitting
//!
//! Decides how much of a computed color goes to the dedicated white LED and
//! how much stays on the colored LEDs. The white LED is modeled as a
//! blackbody at `white_temp`; the neutral part of the input is re-targeted to
//! a blackbody at `target_temp` before white is extracted.
//!
//! The split is a greedy per-pixel heuristic, not an optimal decomposition.
//! What it guarantees is reconstruction: `w * white + (r, g, b)` equals the
//! desired color and every channel is non-negative.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::color::{Rgb, Rgbw};
use crate::config::MixerConfig;
use crate::temperature::temperature_to_rgb;

/// Channel-splitting algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RgbwMode {
    /// Temperature-aware split ([`split_rgbw`])
    #[default]
    Advanced,
    /// Desaturation-based split ([`split_rgbw_legacy`])
    Legacy,
}

/// Full result of a temperature-aware split
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbwSplit {
    /// Output channels
    pub rgbw: Rgbw,
    /// Neutral-adjusted color the output reconstructs
    pub desired: Rgb,
    /// Color of the white LED
    pub white: Rgb,
    /// Greyscale amount eligible to move to the white channel
    pub neutral_strength: f32,
}

/// Split `rgb` into RGBW
///
/// `saturation_factor` below 1.0 reclassifies part of the chroma as neutral,
/// making more light eligible for the white channel.
pub fn split_rgbw(rgb: Rgb, saturation_factor: f32, target_temp: f32, white_temp: f32) -> Rgbw {
    split_rgbw_detailed(rgb, saturation_factor, target_temp, white_temp).rgbw
}

/// [`split_rgbw`] with its intermediate values
pub fn split_rgbw_detailed(
    rgb: Rgb,
    saturation_factor: f32,
    target_temp: f32,
    white_temp: f32,
) -> RgbwSplit {
    split_with_colors(
        rgb,
        saturation_factor,
        temperature_to_rgb(target_temp),
        temperature_to_rgb(white_temp),
    )
}

fn split_with_colors(rgb: Rgb, saturation_factor: f32, target: Rgb, white: Rgb) -> RgbwSplit {
    let input = Vec3::from(rgb.clamped());
    let max = input.max_element();
    if max <= 0.0 {
        return RgbwSplit {
            rgbw: Rgbw::OFF,
            desired: Rgb::BLACK,
            white,
            neutral_strength: 0.0,
        };
    }

    // Out-of-range saturation would push `neutral` outside [min, max]
    let sat = saturation_factor.clamp(0.0, 1.0);
    let min = input.min_element();
    let chroma = max - min;
    let neutral = min + (1.0 - sat) * chroma;

    let desired = (input - Vec3::splat(min)) * sat + Vec3::from(target) * neutral;

    // Largest white level that keeps every channel non-negative
    let white_v = Vec3::from(white);
    let mut w = neutral;
    for (d, wc) in desired.to_array().into_iter().zip(white_v.to_array()) {
        if wc > 0.0 {
            w = w.min(d / wc);
        }
    }
    let w = w.max(0.0).min(neutral);

    let remaining = (desired - white_v * w).max(Vec3::ZERO);

    RgbwSplit {
        rgbw: Rgbw::from_parts(remaining.into(), w),
        desired: desired.into(),
        white,
        neutral_strength: neutral,
    }
}

/// Desaturation-based split used before the temperature-aware mixer
///
/// Pulls every channel toward the maximum by `saturation`, moves the common
/// minimum out of RGB, and emits its square on the white channel. A
/// saturation that quantizes to zero in 8 bits sends everything to white.
pub fn split_rgbw_legacy(rgb: Rgb, saturation: f32) -> Rgbw {
    let input = Vec3::from(rgb.clamped());
    let max = input.max_element();

    let (chroma, min) = if (saturation * 255.0) as i32 == 0 {
        (Vec3::ZERO, max)
    } else {
        let pulled = (input - Vec3::splat(max)) * saturation + Vec3::splat(max);
        let min = pulled.min_element();
        (pulled - Vec3::splat(min), min)
    };

    Rgbw::from_parts(chroma.into(), min * min)
}

/// Resolved mixer settings
///
/// Caches the target and white LED colors so per-pixel splits skip the
/// temperature fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbwMixer {
    mode: RgbwMode,
    saturation: f32,
    target: Rgb,
    white: Rgb,
}

impl Default for RgbwMixer {
    fn default() -> Self {
        Self::new(&MixerConfig::default())
    }
}

impl RgbwMixer {
    /// Resolve a mixer from its configuration
    pub fn new(config: &MixerConfig) -> Self {
        let target = temperature_to_rgb(config.target_temp);
        let white = temperature_to_rgb(config.white_temp);
        tracing::debug!(
            mode = ?config.mode,
            saturation = config.saturation,
            target = ?target.to_array(),
            white = ?white.to_array(),
            "RGBW mixer resolved"
        );
        Self {
            mode: config.mode,
            saturation: config.saturation,
            target,
            white,
        }
    }

    pub fn mode(&self) -> RgbwMode {
        self.mode
    }

    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    /// Color the neutral part of the input is mapped to
    pub fn target_color(&self) -> Rgb {
        self.target
    }

    /// Color of the white LED
    pub fn white_color(&self) -> Rgb {
        self.white
    }

    /// Split one pixel using the configured mode
    #[inline]
    pub fn split(&self, rgb: Rgb) -> Rgbw {
        match self.mode {
            RgbwMode::Advanced => self.split_detailed(rgb).rgbw,
            RgbwMode::Legacy => split_rgbw_legacy(rgb, self.saturation),
        }
    }

    /// Temperature-aware split with intermediate values, regardless of mode
    #[inline]
    pub fn split_detailed(&self, rgb: Rgb) -> RgbwSplit {
        split_with_colors(rgb, self.saturation, self.target, self.white)
    }
}
