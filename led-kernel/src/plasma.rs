//! Plasma field generators
//!
//! Sums of sines for flowing color fields. Results are unnormalized; callers
//! rescale into whatever color range the effect needs.

use serde::{Deserialize, Serialize};

use crate::octave::OctaveParams;

/// Frequency coefficients for [`sum_of_sines`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlasmaCoefficients {
    /// Frequency of the horizontal term
    pub x: f32,
    /// Frequency of the vertical term
    pub y: f32,
    /// Frequency of the diagonal (`x + y`) term
    pub xy: f32,
    /// Frequency of the radial (distance from origin) term
    pub dist: f32,
}

impl Default for PlasmaCoefficients {
    fn default() -> Self {
        Self {
            x: 1.0,
            y: 1.0,
            xy: 1.0,
            dist: 1.0,
        }
    }
}

/// Sum of four sine terms, each phase-shifted by `t`
///
/// Returns a value in roughly -4.0 to 4.0.
#[inline]
pub fn sum_of_sines(x: f32, y: f32, t: f32, coeffs: PlasmaCoefficients) -> f32 {
    let dist = (x * x + y * y).sqrt();
    ((x + t) * coeffs.x).sin()
        + ((y + t) * coeffs.y).sin()
        + ((x + y + t) * coeffs.xy).sin()
        + ((dist + t) * coeffs.dist).sin()
}

/// Domain-warped plasma
///
/// Each octave displaces `x` by a cosine of `y` and `y` by a sine of the
/// previous `x`. The cross dependency gives swirling, non-separable motion.
/// Returns the warped `x` halved, so zero octaves yields `x / 2`.
#[inline]
pub fn octave_plasma(x: f32, y: f32, t: f32, params: OctaveParams) -> f32 {
    let mut vx = x;
    let mut vy = y;
    for (frequency, amplitude) in params.steps() {
        let prev_x = vx;
        vx += (vy * frequency + t * frequency).cos() * amplitude;
        vy += (prev_x * frequency + t * frequency).sin() * amplitude;
    }
    vx / 2.0
}
