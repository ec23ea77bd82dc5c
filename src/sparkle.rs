//! Sparkle entity
//!
//! A sparkle is a three pixel highlight (side, center, side) that starts at the
//! beginning of the strip and moves one pixel forward every `period_ticks`
//! ticks until it has left the strip.

use crate::color::{Rgb, color_from_brightness};
use crate::pattern::BASE_COLOR;
use crate::spawn::SpawnParams;

/// A single traveling highlight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sparkle {
    /// Color of the pixel at `position`
    pub center_color: Rgb,
    /// Color of the pixels next to `position`
    pub side_color: Rgb,
    /// Ticks between two position advances
    pub period_ticks: u8,
    /// Ticks left until the next advance
    pub remaining_ticks: u8,
    /// Index of the center pixel
    pub position: usize,
    /// Whether the slot holding this sparkle is in use
    pub active: bool,
}

impl Sparkle {
    /// Free slot state
    pub const NULL: Self = Self {
        center_color: BASE_COLOR,
        side_color: BASE_COLOR,
        period_ticks: 0,
        remaining_ticks: 0,
        position: 0,
        active: false,
    };

    /// Build a new active sparkle at the start of the strip
    ///
    /// The sides use the brightness halfway between the center and the base
    /// color's blue channel.
    pub fn spawn(params: SpawnParams, hue_coefficient: f32) -> Self {
        let side_brightness = (params.brightness + u16::from(BASE_COLOR.b)) / 2;

        Self {
            center_color: color_from_brightness(params.brightness, hue_coefficient),
            side_color: color_from_brightness(side_brightness, hue_coefficient),
            period_ticks: params.ticks,
            remaining_ticks: params.ticks,
            position: 0,
            active: true,
        }
    }

    /// Count down one tick and move forward when the timer runs out
    ///
    /// Deactivates the sparkle once its position has passed `strip_len`.
    /// Returns whether the sparkle is still active. The timer is an 8-bit
    /// countdown, so a zero period wraps and waits 256 ticks.
    pub fn advance(&mut self, strip_len: usize) -> bool {
        self.remaining_ticks = self.remaining_ticks.wrapping_sub(1);
        if self.remaining_ticks == 0 {
            self.position += 1;
            self.remaining_ticks = self.period_ticks;
            if self.position > strip_len {
                self.active = false;
            }
        }
        self.active
    }
}

impl Default for Sparkle {
    fn default() -> Self {
        Self::NULL
    }
}
