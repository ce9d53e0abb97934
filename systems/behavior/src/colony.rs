//! Spawner handing out colonists that share one set of signals.

use critter_colony_system_signal::ColonySignals;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{Colonist, ColonyTuning, TuningError};

/// Source of every critter of one colony.
///
/// Each spawned colonist shares the colony's signals and receives its own
/// generator seeded from the colony stream, so replaying the same spawn order
/// from the same seed reproduces every decision.
#[derive(Debug)]
pub struct Colony {
    tuning: ColonyTuning,
    signals: ColonySignals,
    rng: ChaCha8Rng,
    spawned: u64,
}

impl Colony {
    /// Creates a colony after validating its tuning.
    pub fn new(tuning: ColonyTuning) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            tuning,
            signals: ColonySignals::new(),
            rng: ChaCha8Rng::seed_from_u64(tuning.seed),
            spawned: 0,
        })
    }

    /// Creates a colony from a TOML tuning document.
    pub fn from_toml_str(contents: &str) -> Result<Self, TuningError> {
        Self::new(ColonyTuning::from_toml_str(contents)?)
    }

    /// Creates the next critter of the colony.
    pub fn spawn(&mut self) -> Colonist<ChaCha8Rng> {
        let seed = self.rng.gen::<u64>();
        let index = self.spawned;
        self.spawned += 1;
        debug!(index, phase = ?self.tuning.initial_phase, "spawned colonist");
        Colonist::new(
            self.tuning,
            self.signals.clone(),
            ChaCha8Rng::seed_from_u64(seed),
        )
    }

    /// Tuning every colonist is created with.
    #[must_use]
    pub fn tuning(&self) -> &ColonyTuning {
        &self.tuning
    }

    /// Counters shared by every colonist of this colony.
    #[must_use]
    pub fn signals(&self) -> &ColonySignals {
        &self.signals
    }

    /// Number of colonists spawned so far.
    #[must_use]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }
}
