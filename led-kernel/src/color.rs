//! Normalized color value types
//!
//! Channels are linear-ish intensities nominally in 0.0 to 1.0. Arithmetic
//! that needs vector math goes through [`glam::Vec3`].

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Normalized RGB color
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color from its three channels
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Grey with the same value in every channel
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Clamp every channel to 0.0..=1.0
    #[inline]
    pub fn clamped(self) -> Self {
        Self::new(
            self.r.clamp(0.0, 1.0),
            self.g.clamp(0.0, 1.0),
            self.b.clamp(0.0, 1.0),
        )
    }

    #[inline]
    pub fn max_channel(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    #[inline]
    pub fn min_channel(self) -> f32 {
        self.r.min(self.g).min(self.b)
    }

    /// Channel-wise product
    #[inline]
    pub fn modulate(self, other: Rgb) -> Self {
        Self::from(Vec3::from(self) * Vec3::from(other))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<Vec3> for Rgb {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Rgb> for Vec3 {
    #[inline]
    fn from(c: Rgb) -> Self {
        Vec3::new(c.r, c.g, c.b)
    }
}

impl From<[f32; 3]> for Rgb {
    #[inline]
    fn from([r, g, b]: [f32; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Normalized RGBW color: chromatic channels plus a dedicated white channel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgbw {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub w: f32,
}

impl Rgbw {
    pub const OFF: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, w: f32) -> Self {
        Self { r, g, b, w }
    }

    /// Combine an RGB part and a white level
    #[inline]
    pub fn from_parts(rgb: Rgb, w: f32) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b, w)
    }

    /// The chromatic part without the white channel
    #[inline]
    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.w]
    }

    /// Light emitted when the white LED has color `white_color`
    #[inline]
    pub fn reconstruct(self, white_color: Rgb) -> Rgb {
        Rgb::from(Vec3::from(self.rgb()) + Vec3::from(white_color) * self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        let c = Rgb::new(-0.5, 0.5, 1.5).clamped();
        assert_eq!(c, Rgb::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_min_max_channel() {
        let c = Rgb::new(0.2, 0.9, 0.4);
        assert_eq!(c.max_channel(), 0.9);
        assert_eq!(c.min_channel(), 0.2);
    }

    #[test]
    fn test_vec3_conversion() {
        let c = Rgb::new(0.1, 0.2, 0.3);
        let v: Vec3 = c.into();
        assert_eq!(v, Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(Rgb::from(v), c);
    }

    #[test]
    fn test_reconstruct() {
        let rgbw = Rgbw::new(0.1, 0.0, 0.2, 0.5);
        let out = rgbw.reconstruct(Rgb::new(1.0, 0.8, 0.6));
        assert!((out.r - 0.6).abs() < 1e-6);
        assert!((out.g - 0.4).abs() < 1e-6);
        assert!((out.b - 0.5).abs() < 1e-6);
    }
}
