#![no_std]

pub mod color;
pub mod compositor;
pub mod output;
pub mod pattern;
pub mod pool;
pub mod simulation;
pub mod sparkle;
pub mod spawn;

pub use compositor::FrameCompositor;
pub use output::SmartLedsOutput;
pub use pattern::{BASE_COLOR, MAX_SPARKLES, TICK_DURATION};
pub use pool::SparklePool;
pub use simulation::{Simulation, Spawn, StartError, TickReport};
pub use sparkle::Sparkle;
pub use spawn::SpawnParams;

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The simulation is generic over this trait.
pub trait OutputDriver {
    /// Error reported when a frame could not be written
    type Error: core::fmt::Debug;

    /// Device name used in log messages
    fn name(&self) -> &str {
        "led_strip"
    }

    /// Check if the strip can accept frames
    fn is_ready(&self) -> bool {
        true
    }

    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error>;
}
