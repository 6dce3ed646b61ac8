//! Blackbody color temperature approximation
//!
//! Closed-form fit by Tanner Helland, informally valid from about 1000 K to
//! 40000 K. The fit works in 8-bit units; channels are divided by 255 and
//! clamped before normalization.

use crate::color::Rgb;

/// Temperature (in hundreds of kelvin) where the fit switches branches
const BREAKPOINT: f32 = 66.0;

/// Below this (in hundreds of kelvin) blue is fully off
const BLUE_CUTOFF: f32 = 19.0;

#[inline]
fn channel(value: f32) -> f32 {
    (value / 255.0).clamp(0.0, 1.0)
}

fn red(temp: f32) -> f32 {
    if temp <= BREAKPOINT {
        1.0
    } else {
        channel(329.698727446 * (temp - 60.0).powf(-0.1332047592))
    }
}

fn green(temp: f32) -> f32 {
    if temp > 0.0 && temp <= BREAKPOINT {
        channel(99.4708025861 * temp.ln() - 161.1195681661)
    } else if temp > BREAKPOINT {
        channel(288.1221695283 * (temp - 60.0).powf(-0.0755148492))
    } else {
        0.0
    }
}

fn blue(temp: f32) -> f32 {
    if temp >= BREAKPOINT {
        1.0
    } else if temp <= BLUE_CUTOFF {
        0.0
    } else {
        channel(138.5177312231 * (temp - 10.0).ln() - 305.0447927307)
    }
}

/// Apparent color of a blackbody at `kelvin`, normalized so the brightest
/// channel is 1.0
///
/// Degenerate input that leaves every channel at zero (or NaN) yields white,
/// which is the safe default for the RGBW mixer.
pub fn temperature_to_rgb(kelvin: f32) -> Rgb {
    let temp = kelvin / 100.0;
    let rgb = Rgb::new(red(temp), green(temp), blue(temp));

    let max = rgb.max_channel();
    if max > 0.0 && rgb.to_array().iter().all(|c| c.is_finite()) {
        Rgb::new(rgb.r / max, rgb.g / max, rgb.b / max)
    } else {
        Rgb::WHITE
    }
}

/// Tint `rgb` by the color of a blackbody at `kelvin`
pub fn blackbody_correction(rgb: Rgb, kelvin: f32) -> Rgb {
    rgb.modulate(temperature_to_rgb(kelvin))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-3;

    fn assert_rgb_near(actual: Rgb, expected: (f32, f32, f32)) {
        assert!(
            (actual.r - expected.0).abs() < EPSILON
                && (actual.g - expected.1).abs() < EPSILON
                && (actual.b - expected.2).abs() < EPSILON,
            "{:?} != {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_daylight_neutral() {
        assert_rgb_near(temperature_to_rgb(6600.0), (1.0, 1.0, 1.0));
    }

    #[test]
    fn test_golden_values() {
        assert_rgb_near(temperature_to_rgb(1000.0), (1.0, 0.26635, 0.0));
        assert_rgb_near(temperature_to_rgb(2700.0), (1.0, 0.65380, 0.34277));
        assert_rgb_near(temperature_to_rgb(5000.0), (1.0, 0.89417, 0.80757));
        assert_rgb_near(temperature_to_rgb(10000.0), (0.79100, 0.85518, 1.0));
        assert_rgb_near(temperature_to_rgb(40000.0), (0.59480, 0.72757, 1.0));
    }

    #[test]
    fn test_warm_has_no_blue() {
        let rgb = temperature_to_rgb(1900.0);
        assert_eq!(rgb.b, 0.0);
        assert_eq!(rgb.r, 1.0);
    }

    #[test]
    fn test_normalized_and_in_range() {
        for k in (500..=40000).step_by(250) {
            let rgb = temperature_to_rgb(k as f32);
            assert!((rgb.max_channel() - 1.0).abs() < 1e-6, "k={} {:?}", k, rgb);
            assert!(rgb.min_channel() >= 0.0);
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        // Non-positive temperatures only light the red branch
        assert_eq!(temperature_to_rgb(0.0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(temperature_to_rgb(-500.0), Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(temperature_to_rgb(f32::NAN), Rgb::WHITE);
    }

    #[test]
    fn test_blackbody_correction() {
        let corrected = blackbody_correction(Rgb::splat(0.5), 2700.0);
        let tint = temperature_to_rgb(2700.0);
        assert_eq!(corrected, Rgb::new(0.5 * tint.r, 0.5 * tint.g, 0.5 * tint.b));
    }
}
