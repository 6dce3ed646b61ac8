//! Per-pixel color kernel for addressable LED strip animations
//!
//! Pure numeric building blocks the animation engine calls once per pixel per
//! frame. Nothing here knows about frame timing, networking, or hardware.
//!
//! - [`waveform`]: periodic waveforms (period 1.0, range 0..1) and LUT
//!   quantization
//! - [`plasma`]: sum-of-sines and domain-warped plasma fields
//! - [`lattice`]: 3D lattice noise over a fixed permutation table, plus its
//!   fractal sum
//! - [`temperature`]: blackbody color temperature to normalized RGB
//! - [`rgbw`]: color-temperature-aware RGB to RGBW channel splitting
//! - [`pixel`]: 8-bit quantization and packing for output drivers
//! - [`config`]: TOML configuration for the mixer and output stage
//!
//! All kernel functions are total: out-of-range input is clamped or wrapped,
//! never reported. Only configuration loading returns errors.
//!
//! # Example
//! ```
//! use led_kernel::{Rgb, noise3d, split_rgbw, temperature_to_rgb, waveform};
//!
//! let t = 0.25;
//! let level = waveform::sine(t);
//! let texture = noise3d(3.0 * t as f64, 0.5, 1.5) as f32;
//!
//! let color = Rgb::new(level, texture, 0.4);
//! let out = split_rgbw(color, 0.9, 6500.0, 4000.0);
//!
//! // The white LED plus the leftover chroma rebuild the neutral-adjusted color
//! let rebuilt = out.reconstruct(temperature_to_rgb(4000.0));
//! assert!(rebuilt.r >= out.r && out.w >= 0.0);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod lattice;
pub mod octave;
pub mod pixel;
pub mod plasma;
pub mod rgbw;
pub mod temperature;
pub mod waveform;

pub use color::{Rgb, Rgbw};
pub use config::{KernelConfig, MixerConfig, OutputConfig};
pub use error::ConfigError;
pub use lattice::{Fractal, Lattice, fractal_noise3d, noise3d};
pub use octave::OctaveParams;
pub use pixel::{pack_rgbw, render_pixel, scale8, unpack_rgbw};
pub use plasma::{PlasmaCoefficients, octave_plasma, sum_of_sines};
pub use rgbw::{
    RgbwMixer, RgbwMode, RgbwSplit, split_rgbw, split_rgbw_detailed, split_rgbw_legacy,
};
pub use temperature::{blackbody_correction, temperature_to_rgb};
pub use waveform::Waveform;
