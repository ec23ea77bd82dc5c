//! Spawn parameters
//!
//! Every spawn consumes exactly one 32-bit random draw. The low byte selects the
//! sparkle speed, the next byte the delay until the following spawn and the
//! upper half-word the sparkle brightness.

use crate::pattern::{BRIGHTNESS_RANGE, DELAY_RANGE, TICKS_RANGE};

/// Random parameters of a single spawn event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnParams {
    /// Ticks between two position advances of the new sparkle
    pub ticks: u8,
    /// Ticks until the next spawn
    pub delay: u8,
    /// Brightness of the sparkle center
    pub brightness: u16,
}

impl SpawnParams {
    /// Decompose a raw random draw
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn from_raw(raw: u32) -> Self {
        let ticks = raw as u8;
        let delay = (raw >> 8) as u8;
        let brightness = (raw >> 16) as u16;

        Self {
            // Both ranges top out below 256
            ticks: TICKS_RANGE.reduce(ticks as u16) as u8,
            delay: DELAY_RANGE.reduce(delay as u16) as u8,
            brightness: BRIGHTNESS_RANGE.reduce(brightness),
        }
    }

    /// Draw parameters from a random source
    pub fn draw<R: rand_core::RngCore>(random: &mut R) -> Self {
        Self::from_raw(random.next_u32())
    }
}
