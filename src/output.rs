//! Adapter for `smart-leds` drivers

use smart_leds::{RGB8, SmartLedsWrite};

use crate::{OutputDriver, Rgb};

/// Output driver backed by any [`SmartLedsWrite`] implementation
///
/// Drivers from the `smart-leds` ecosystem are ready once constructed, so the
/// adapter always reports ready.
pub struct SmartLedsOutput<W> {
    name: &'static str,
    writer: W,
}

impl<W> SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub const fn new(name: &'static str, writer: W) -> Self {
        Self { name, writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite<Color = RGB8>,
    W::Error: core::fmt::Debug,
{
    type Error = W::Error;

    fn name(&self) -> &str {
        self.name
    }

    fn write(&mut self, colors: &[Rgb]) -> Result<(), Self::Error> {
        self.writer.write(colors.iter().copied())
    }
}
