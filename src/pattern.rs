//! Compiled pattern constants
//!
//! The sparkle pattern is fixed at build time. Ranges follow the
//! `raw % (max - min) + min` reduction, so `max` itself is never produced.

use embassy_time::Duration;

use crate::color::{Rgb, rgb_from_u32};

/// Background color of the strip; also the hue reference for sparkles.
pub const BASE_COLOR: Rgb = rgb_from_u32(0x0F_0016);

/// Capacity of the sparkle pool.
pub const MAX_SPARKLES: usize = 100;

/// Sleep between two ticks.
pub const TICK_DURATION: Duration = Duration::from_millis(10);

/// Ticks a sparkle waits between two position advances, `1..=7`.
pub const TICKS_RANGE: RandomRange = RandomRange::new(1, 8);

/// Ticks between two spawns, `3..=14`.
pub const DELAY_RANGE: RandomRange = RandomRange::new(3, 15);

/// Center brightness of a new sparkle, `0x20..=0x1fe`.
pub const BRIGHTNESS_RANGE: RandomRange = RandomRange::new(0x20, 0x1ff);

/// Half-open range a raw random field is folded into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomRange {
    pub min: u16,
    pub max: u16,
}

impl RandomRange {
    /// Create a new range, `min` must be below `max`
    pub const fn new(min: u16, max: u16) -> Self {
        assert!(min < max);
        Self { min, max }
    }

    /// Fold a raw random value into the range
    pub const fn reduce(self, raw: u16) -> u16 {
        raw % (self.max - self.min) + self.min
    }

    /// Largest value [`reduce`](Self::reduce) can return
    pub const fn last(self) -> u16 {
        self.max - 1
    }
}
