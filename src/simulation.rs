//! Sparkle simulation loop
//!
//! One tick spawns a sparkle when the spawn timer has run out, renders the
//! frame, advances every sparkle, pushes the frame to the strip and counts the
//! spawn timer down. The run loops sleep [`TICK_DURATION`] between ticks.

use core::fmt;

use embassy_time::Timer;
use log::{debug, error, info};
use rand_core::RngCore;

use crate::OutputDriver;
use crate::color::{Rgb, hue_coefficient};
use crate::compositor::FrameCompositor;
use crate::pattern::{BASE_COLOR, MAX_SPARKLES, TICK_DURATION};
use crate::pool::SparklePool;
use crate::spawn::SpawnParams;
use crate::sparkle::Sparkle;

/// Error returned when the simulation can not start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartError {
    /// The LED strip reported it is not ready
    DeviceNotReady,
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DeviceNotReady => f.write_str("LED strip device is not ready"),
        }
    }
}

impl core::error::Error for StartError {}

/// A sparkle created during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    /// Random parameters the sparkle was built from
    pub params: SpawnParams,
    /// The new sparkle
    pub sparkle: Sparkle,
    /// Slot the sparkle was placed in, `None` if the pool was full
    pub slot: Option<usize>,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Sparkle spawned on this tick, if the spawn timer ran out
    pub spawn: Option<Spawn>,
    /// Whether the output accepted the frame
    pub frame_pushed: bool,
}

/// Sparkle simulation - owns the pool, the frame and the spawn timer
///
/// LEDS is the strip length, N the pool capacity
pub struct Simulation<O: OutputDriver, R: RngCore, const LEDS: usize, const N: usize = MAX_SPARKLES>
{
    // External dependencies
    output: O,
    random: R,

    // Internal state
    pool: SparklePool<N>,
    compositor: FrameCompositor<LEDS>,
    counter: u8,
    hue_coefficient: f32,
}

impl<O: OutputDriver, R: RngCore, const LEDS: usize, const N: usize> Simulation<O, R, LEDS, N> {
    /// Check the strip and prepare the simulation
    ///
    /// Fails without touching the strip when the output is not ready.
    pub fn start(output: O, random: R) -> Result<Self, StartError> {
        if !output.is_ready() {
            error!("LED strip device {} is not ready", output.name());
            return Err(StartError::DeviceNotReady);
        }
        info!("Found LED strip device {}", output.name());

        let mut pool = SparklePool::new();
        pool.reset();

        info!("Displaying pattern on strip");
        Ok(Self {
            output,
            random,
            pool,
            compositor: FrameCompositor::new(BASE_COLOR),
            counter: 0,
            hue_coefficient: hue_coefficient(BASE_COLOR),
        })
    }

    /// Run one tick without sleeping
    pub fn tick(&mut self) -> TickReport {
        let spawn = if self.counter == 0 {
            Some(self.spawn())
        } else {
            None
        };

        let frame = self.compositor.render(&self.pool);
        self.pool.advance(LEDS);

        let frame_pushed = match self.output.write(frame) {
            Ok(()) => true,
            Err(err) => {
                error!("couldn't update strip: {:?}", err);
                false
            }
        };

        // Also runs on a spawn tick, so the first delay tick is this one
        self.counter = self.counter.saturating_sub(1);

        TickReport {
            spawn,
            frame_pushed,
        }
    }

    /// Run forever, sleeping on the embassy timer between ticks
    pub async fn run(&mut self) {
        loop {
            self.tick();
            Timer::after(TICK_DURATION).await;
        }
    }

    /// Run forever, busy-waiting between ticks
    pub fn run_blocking(&mut self) -> ! {
        loop {
            self.tick();
            embassy_time::block_for(TICK_DURATION);
        }
    }

    fn spawn(&mut self) -> Spawn {
        let params = SpawnParams::draw(&mut self.random);
        let sparkle = Sparkle::spawn(params, self.hue_coefficient);
        let slot = self.pool.allocate(sparkle).ok();
        if let Some(slot) = slot {
            debug!(
                "spawned sparkle in slot {}: ticks={}, brightness={}",
                slot, params.ticks, params.brightness
            );
        }
        self.counter = params.delay;

        Spawn {
            params,
            sparkle,
            slot,
        }
    }

    /// Last rendered frame
    pub const fn frame(&self) -> &[Rgb] {
        self.compositor.frame()
    }

    /// Sparkle slots, free ones included
    pub const fn pool(&self) -> &SparklePool<N> {
        &self.pool
    }

    /// Ticks left until the next spawn
    pub const fn counter(&self) -> u8 {
        self.counter
    }

    /// Red/blue ratio of the base color, fixed at startup
    pub const fn hue_coefficient(&self) -> f32 {
        self.hue_coefficient
    }

    /// Strip the frames are pushed to
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Mutable access to the strip
    pub fn output_mut(&mut self) -> &mut O {
        &mut self.output
    }
}
