//! Octave parameters shared by the fractal generators

use serde::{Deserialize, Serialize};

/// Configuration for multi-octave iteration
///
/// Each octave multiplies the frequency by `lacunarity` and the amplitude by
/// `persistence`. The loop count is bounded by `octaves`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OctaveParams {
    /// Number of octaves (0 disables the generator)
    pub octaves: u8,
    /// Frequency multiplier per octave
    pub lacunarity: f32,
    /// Amplitude multiplier per octave
    pub persistence: f32,
}

impl Default for OctaveParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
        }
    }
}

impl OctaveParams {
    pub const fn new(octaves: u8, lacunarity: f32, persistence: f32) -> Self {
        Self {
            octaves,
            lacunarity,
            persistence,
        }
    }

    /// Same parameters with a different octave count
    pub const fn with_octaves(self, octaves: u8) -> Self {
        Self { octaves, ..self }
    }

    /// Iterate `(frequency, amplitude)` for each octave, starting at `(1, 1)`
    pub fn steps(self) -> impl Iterator<Item = (f32, f32)> {
        let mut frequency = 1.0;
        let mut amplitude = 1.0;
        (0..self.octaves).map(move |_| {
            let step = (frequency, amplitude);
            frequency *= self.lacunarity;
            amplitude *= self.persistence;
            step
        })
    }
}
