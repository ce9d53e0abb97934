#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Population-wide signal counters shared by every critter of one colony.
//!
//! A [`PopulationSignal`] is a plain shared scalar. Every clone of the handle
//! reads and writes the same value, in whatever order the engine calls the
//! critters holding it. There is no attribution, history or atomicity; the
//! engine drives all critters from a single thread.

use std::{cell::Cell, rc::Rc};

/// Cloneable handle to one shared, non-negative counter.
#[derive(Clone, Debug, Default)]
pub struct PopulationSignal {
    level: Rc<Cell<u32>>,
}

impl PopulationSignal {
    /// Creates a new counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of the counter.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level.get()
    }

    /// Raises the counter by `amount`, saturating at `u32::MAX`, and returns the new level.
    pub fn promote(&self, amount: u32) -> u32 {
        let level = self.level.get().saturating_add(amount);
        self.level.set(level);
        level
    }

    /// Lowers the counter by `amount`, floored at zero, and returns the new level.
    pub fn inhibit(&self, amount: u32) -> u32 {
        let level = self.level.get().saturating_sub(amount);
        self.level.set(level);
        level
    }

    /// Drops the counter back to zero.
    pub fn reset(&self) {
        self.level.set(0);
    }

    /// Reports whether both handles refer to the same counter.
    #[must_use]
    pub fn shares_with(&self, other: &PopulationSignal) -> bool {
        Rc::ptr_eq(&self.level, &other.level)
    }
}

/// Counters one colony coordinates through.
#[derive(Clone, Debug, Default)]
pub struct ColonySignals {
    /// Rises while critters hold a colony and gates the migration phase.
    pub migration: PopulationSignal,
    /// Rises during the opening sweep and ends it for everyone at once.
    pub clump: PopulationSignal,
}

impl ColonySignals {
    /// Creates a fresh pair of counters at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops every counter back to zero.
    pub fn reset(&self) {
        self.migration.reset();
        self.clump.reset();
    }
}
