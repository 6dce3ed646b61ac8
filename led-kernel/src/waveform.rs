//! Periodic waveforms and lookup-table quantization
//!
//! Every waveform has a period of exactly 1.0 in `t` and an output range of
//! 0.0 to 1.0. They drive brightness and hue oscillation over animation time.

use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

/// Number of buckets produced by the quantization helpers
pub const MILLIS_BUCKETS: usize = 1000;

/// Waveform selection for configurable effects
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Waveform {
    /// Hard on/off step, high for `duty_cycle` of each period
    Pulse { duty_cycle: f32 },
    /// Linear ramp up then down, 0 at integer `t`
    Triangle,
    /// Cosine, 1 at integer `t`
    #[default]
    Sine,
    /// Cubic-eased approximation of [`Waveform::Sine`]
    CubicSine,
}

impl Waveform {
    /// Sample the waveform at time `t`
    #[inline]
    pub fn sample(self, t: f32) -> f32 {
        match self {
            Waveform::Pulse { duty_cycle } => pulse(t, duty_cycle),
            Waveform::Triangle => triangle(t),
            Waveform::Sine => sine(t),
            Waveform::CubicSine => cubic_sine(t),
        }
    }
}

/// Pulse wave with duty cycle
///
/// High on `[0, duty_cycle)` of every period, low elsewhere. The step is hard;
/// at `frac(t) == duty_cycle` the output is already 0.
#[inline]
pub fn pulse(t: f32, duty_cycle: f32) -> f32 {
    // rem_euclid rounds up to exactly 1.0 for tiny negative t
    let frac = t.rem_euclid(1.0);
    let frac = if frac < 1.0 { frac } else { 0.0 };
    (duty_cycle - frac).ceil().clamp(0.0, 1.0)
}

/// Folded ramp: 1 at integer `t`, 0 at half period
#[inline]
fn fold(t: f32) -> f32 {
    ((2.0 * t).rem_euclid(2.0) - 1.0).abs()
}

/// Triangle wave, 0 at integer `t` and 1 at `t = 0.5`
#[inline]
pub fn triangle(t: f32) -> f32 {
    1.0 - fold(t)
}

/// Cosine wave rescaled to 0..1, 1 at `t = 0`
#[inline]
pub fn sine(t: f32) -> f32 {
    (TAU * t).cos() / 2.0 + 0.5
}

/// Sine approximation: folded triangle with cubic in-out easing
///
/// Shares the critical points of [`sine`] (max at integer `t`, min at half
/// period) without any trigonometry.
#[inline]
pub fn cubic_sine(t: f32) -> f32 {
    let x = fold(t);
    if x > 0.5 {
        let inv = 1.0 - x;
        1.0 - 4.0 * inv * inv * inv
    } else {
        4.0 * x * x * x
    }
}

/// Map a time fraction to a LUT bucket in `0..1000`
///
/// Out-of-range `t` wraps instead of failing.
#[inline]
pub fn quantize_millis(t: f32) -> usize {
    ((t * 999.9) as i32).rem_euclid(MILLIS_BUCKETS as i32) as usize
}

/// Map a time fraction to a ping-pong LUT bucket in `0..1000`
///
/// Runs 999 down to 0 and back up over one period, so a LUT indexed with it
/// is traversed backward then forward instead of wrapping.
#[inline]
pub fn quantize_millis_mirrored(t: f32) -> usize {
    let ramp = ((t * 1998.9) as i32).rem_euclid(1999);
    (ramp - 999).unsigned_abs() as usize
}
