//! Frame compositor
//!
//! Paints the background and every active sparkle into the frame buffer.
//! Pixels that would land outside the strip are dropped one by one, so a
//! sparkle entering or leaving the strip shows only its visible part.

use crate::color::Rgb;
use crate::pool::SparklePool;
use crate::sparkle::Sparkle;

/// Owner of the frame buffer
///
/// LEDS is the number of pixels on the strip
#[derive(Debug, Clone)]
pub struct FrameCompositor<const LEDS: usize> {
    background: Rgb,
    frame_buffer: [Rgb; LEDS],
}

impl<const LEDS: usize> FrameCompositor<LEDS> {
    /// Create a compositor with the frame filled with `background`
    pub const fn new(background: Rgb) -> Self {
        Self {
            background,
            frame_buffer: [background; LEDS],
        }
    }

    /// Render one frame
    ///
    /// Sparkles later in slot order overwrite earlier ones.
    pub fn render<const N: usize>(&mut self, pool: &SparklePool<N>) -> &[Rgb] {
        self.frame_buffer.fill(self.background);

        for sparkle in pool.active() {
            place(&mut self.frame_buffer, sparkle);
        }

        &self.frame_buffer
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &[Rgb] {
        &self.frame_buffer
    }

    /// Color of pixels not covered by a sparkle
    pub const fn background(&self) -> Rgb {
        self.background
    }
}

fn place(frame: &mut [Rgb], sparkle: &Sparkle) {
    let center = sparkle.position;
    if let Some(left) = center.checked_sub(1) {
        put(frame, left, sparkle.side_color);
    }
    put(frame, center, sparkle.center_color);
    put(frame, center + 1, sparkle.side_color);
}

fn put(frame: &mut [Rgb], index: usize, color: Rgb) {
    if let Some(pixel) = frame.get_mut(index) {
        *pixel = color;
    }
}
