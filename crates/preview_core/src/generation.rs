//! Request generations for overlapping reads.
//!
//! Each qualifying selection gets the next generation. A completion can then
//! tell whether a newer selection was made while its read was in flight.

use std::cell::Cell;
use std::fmt;

/// Id of one preview request. Later requests compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonically increasing generation source.
///
/// Single-threaded: lives on the UI thread next to the handler.
#[derive(Debug, Default)]
pub struct GenerationCounter {
    latest: Cell<u64>,
}

impl GenerationCounter {
    /// Create a counter that has issued nothing yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next generation, making it the latest.
    pub fn issue(&self) -> Generation {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Generation(next)
    }

    /// The most recently issued generation, if any.
    pub fn latest(&self) -> Option<Generation> {
        match self.latest.get() {
            0 => None,
            n => Some(Generation(n)),
        }
    }

    /// Whether `generation` is the most recently issued one.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest.get() == generation.0
    }
}
