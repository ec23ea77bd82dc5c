//! Brightness to color mapping
//!
//! A sparkle has a single scalar brightness in `0..=511`. Up to 255 it is a
//! blue/red blend following the base color's hue; past 255 green ramps in and
//! the sparkle washes out towards white.

use crate::color::Rgb;

/// Ratio of the base color's red channel to its blue channel.
///
/// A base color with no blue yields an infinite (or NaN) coefficient, which
/// [`color_from_brightness`] saturates to full red.
pub fn hue_coefficient(base: Rgb) -> f32 {
    f32::from(base.r) / f32::from(base.b)
}

/// Derive a sparkle color from its brightness
///
/// # Arguments
/// * `brightness` - Scalar brightness, `0..=511`
/// * `hue_coefficient` - Red/blue ratio, see [`hue_coefficient`]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn color_from_brightness(brightness: u16, hue_coefficient: f32) -> Rgb {
    let red = libm::truncf((f32::from(brightness) * hue_coefficient).min(255.0));

    Rgb {
        r: red as u8,
        g: brightness.saturating_sub(255).min(255) as u8,
        b: brightness.min(255) as u8,
    }
}
