//! Fixed-capacity sparkle pool
//!
//! Slots are scanned in index order. A slot is free when its sparkle is
//! inactive; the remaining fields of a free slot carry no meaning.

use crate::pattern::MAX_SPARKLES;
use crate::sparkle::Sparkle;

/// Arena of sparkle slots
///
/// N is the number of slots
#[derive(Debug, Clone)]
pub struct SparklePool<const N: usize = MAX_SPARKLES> {
    slots: [Sparkle; N],
}

impl<const N: usize> SparklePool<N> {
    /// Create a pool with every slot free
    pub const fn new() -> Self {
        Self {
            slots: [Sparkle::NULL; N],
        }
    }

    /// Free every slot
    pub fn reset(&mut self) {
        self.slots.fill(Sparkle::NULL);
    }

    /// Place a sparkle into the first free slot
    ///
    /// Returns the slot index, or hands the sparkle back if the pool is full.
    pub fn allocate(&mut self, sparkle: Sparkle) -> Result<usize, Sparkle> {
        let Some((index, slot)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| !slot.active)
        else {
            return Err(sparkle);
        };
        *slot = sparkle;
        Ok(index)
    }

    /// Mark a slot as free
    ///
    /// Out of range indices are ignored.
    pub fn release(&mut self, index: usize) {
        if let Some(slot) = self.slots.get_mut(index) {
            slot.active = false;
        }
    }

    /// Apply `f` to every active sparkle in slot order
    pub fn for_each_active(&mut self, f: impl FnMut(&mut Sparkle)) {
        self.slots
            .iter_mut()
            .filter(|slot| slot.active)
            .for_each(f);
    }

    /// Advance every active sparkle by one tick
    pub fn advance(&mut self, strip_len: usize) {
        self.for_each_active(|sparkle| {
            sparkle.advance(strip_len);
        });
    }

    /// Iterate over the active sparkles in slot order
    pub fn active(&self) -> impl Iterator<Item = &Sparkle> {
        self.slots.iter().filter(|slot| slot.active)
    }

    /// Number of slots in use
    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    /// Check if every slot is in use
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| slot.active)
    }

    /// All slots, free ones included
    pub const fn slots(&self) -> &[Sparkle; N] {
        &self.slots
    }
}

impl<const N: usize> Default for SparklePool<N> {
    fn default() -> Self {
        Self::new()
    }
}
