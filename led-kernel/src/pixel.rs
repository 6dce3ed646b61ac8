//! 8-bit pixel quantization and packing
//!
//! Turns normalized colors into the packed `0xWWRRGGBB` words LED output
//! drivers consume. Brightness scaling and per-channel color correction
//! happen here; the white channel is never color-corrected.

use glam::Vec3;

use crate::color::{Rgb, Rgbw};
use crate::config::OutputConfig;
use crate::rgbw::RgbwMixer;

/// Scale one 8-bit value by another, `a * b / 256`
#[inline]
pub fn scale8(a: u8, b: u8) -> u8 {
    ((a as u16 * b as u16) >> 8) as u8
}

/// Pack channels into `0xWWRRGGBB`
#[inline]
pub fn pack_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
    (w as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Unpack `0xWWRRGGBB` into `[r, g, b, w]`
#[inline]
pub fn unpack_rgbw(color: u32) -> [u8; 4] {
    [
        (color >> 16) as u8,
        (color >> 8) as u8,
        color as u8,
        (color >> 24) as u8,
    ]
}

/// Unpack `0xRRGGBB` into `[r, g, b]`
#[inline]
pub fn unpack_rgb(color: u32) -> [u8; 3] {
    [(color >> 16) as u8, (color >> 8) as u8, color as u8]
}

/// Truncate a normalized channel to 8 bits after brightness scaling
#[inline]
fn to_u8(value: f32, brightness: f32) -> u8 {
    ((value * brightness * 255.0) as i32).clamp(0, 255) as u8
}

/// Pull every channel toward the channel average by `saturation`
///
/// Used for strips without a white channel, where desaturated light has to
/// come from the colored LEDs.
pub fn desaturate_rgb(rgb: Rgb, saturation: f32) -> Rgb {
    let c = Vec3::from(rgb.clamped());
    let sat = (saturation * 255.0) as i32;
    if sat == 255 {
        return c.into();
    }
    let avg = Vec3::splat(c.element_sum() / 3.0);
    if sat == 0 {
        avg.into()
    } else {
        ((c - avg) * saturation + avg).into()
    }
}

/// Quantize an RGBW color and pack it, applying brightness and correction
pub fn quantize_rgbw(rgbw: Rgbw, output: &OutputConfig) -> u32 {
    let [cr, cg, cb] = unpack_rgb(output.correction);
    let brightness = output.brightness;
    pack_rgbw(
        scale8(to_u8(rgbw.r, brightness), cr),
        scale8(to_u8(rgbw.g, brightness), cg),
        scale8(to_u8(rgbw.b, brightness), cb),
        to_u8(rgbw.w, brightness),
    )
}

/// Render one pixel to a packed word
///
/// RGBW strips go through `mixer`; RGB strips desaturate toward grey with
/// the mixer's saturation and leave the white byte at zero.
pub fn render_pixel(rgb: Rgb, mixer: &RgbwMixer, output: &OutputConfig) -> u32 {
    let rgbw = if output.has_white {
        mixer.split(rgb)
    } else {
        Rgbw::from_parts(desaturate_rgb(rgb, mixer.saturation()), 0.0)
    };
    quantize_rgbw(rgbw, output)
}

/// Render a row of pixels into `out`, reusing its allocation
pub fn render_into(colors: &[Rgb], mixer: &RgbwMixer, output: &OutputConfig, out: &mut Vec<u32>) {
    out.clear();
    out.extend(colors.iter().map(|&c| render_pixel(c, mixer, output)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MixerConfig;
    use crate::rgbw::RgbwMode;

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 255), 254);
        assert_eq!(scale8(255, 128), 127);
        assert_eq!(scale8(100, 0), 0);
        assert_eq!(scale8(0, 255), 0);
    }

    #[test]
    fn test_pack_unpack() {
        let packed = pack_rgbw(0x12, 0x34, 0x56, 0x78);
        assert_eq!(packed, 0x7812_3456);
        assert_eq!(unpack_rgbw(packed), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!(unpack_rgb(0xFFAA78), [0xFF, 0xAA, 0x78]);
    }

    #[test]
    fn test_desaturate_rgb() {
        let c = Rgb::new(0.9, 0.3, 0.0);
        assert_eq!(desaturate_rgb(c, 1.0), c);
        let grey = desaturate_rgb(c, 0.0);
        assert!((grey.r - 0.4).abs() < 1e-6 && grey.r == grey.g && grey.g == grey.b);
        let half = desaturate_rgb(c, 0.5);
        assert!((half.r - 0.65).abs() < 1e-6);
        assert!((half.b - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_render_rgb_strip() {
        let mixer = RgbwMixer::new(&MixerConfig::default());
        let output = OutputConfig {
            brightness: 1.0,
            correction: 0xFFFFFF,
            has_white: false,
        };
        let packed = render_pixel(Rgb::new(1.0, 0.0, 0.5), &mixer, &output);
        // 0.5 * 255 truncates to 127; 255-correction scaling drops one step
        assert_eq!(unpack_rgbw(packed), [254, 0, 126, 0]);
    }

    #[test]
    fn test_render_rgbw_strip_grey() {
        let mixer = RgbwMixer::new(&MixerConfig {
            mode: RgbwMode::Advanced,
            saturation: 1.0,
            target_temp: 6600.0,
            white_temp: 6600.0,
        });
        let output = OutputConfig {
            brightness: 0.5,
            correction: 0xFFFFFF,
            has_white: true,
        };
        let [r, g, b, w] = unpack_rgbw(render_pixel(Rgb::splat(1.0), &mixer, &output));
        assert_eq!((r, g, b), (0, 0, 0));
        assert_eq!(w, 127);
    }

    #[test]
    fn test_correction_skips_white() {
        let output = OutputConfig {
            brightness: 1.0,
            correction: 0x000000,
            has_white: true,
        };
        let packed = quantize_rgbw(Rgbw::new(1.0, 1.0, 1.0, 1.0), &output);
        assert_eq!(unpack_rgbw(packed), [0, 0, 0, 255]);
    }

    #[test]
    fn test_render_into_reuses_buffer() {
        let mixer = RgbwMixer::default();
        let output = OutputConfig::default();
        let mut out = vec![1, 2, 3, 4, 5];
        render_into(&[Rgb::BLACK, Rgb::WHITE], &mixer, &output, &mut out);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], 0);
    }
}
