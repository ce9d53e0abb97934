//! Tuning surface for the colony behavior.

use critter_colony_core::{Direction, Phase};
use critter_colony_system_style::PulseConfig;
use serde::{Deserialize, Serialize};

/// Every adjustable knob of the colony behavior.
///
/// Deserializing fills any field missing from the document with its default,
/// so a tuning file only needs to name what it changes.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColonyTuning {
    /// Phase every newly spawned critter starts in.
    ///
    /// `Searching` selects the three-phase behavior; `Clumping` prepends the
    /// opening sweep.
    pub initial_phase: Phase,
    /// Seed for the colony's random stream.
    pub seed: u64,
    /// Ticks a critter keeps turning toward the direction of its last attack.
    pub commit_ticks: u32,
    /// Migration signal parameters.
    pub migration: MigrationTuning,
    /// Opening sweep parameters.
    pub clump: ClumpTuning,
    /// Color pulse parameters.
    pub style: PulseConfig,
}

impl Default for ColonyTuning {
    fn default() -> Self {
        Self {
            initial_phase: Phase::Searching,
            seed: 0x5eed_c0de,
            commit_ticks: 6,
            migration: MigrationTuning::default(),
            clump: ClumpTuning::default(),
            style: PulseConfig::default(),
        }
    }
}

/// Parameters of the migration signal and of migrating critters.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigrationTuning {
    /// Signal level at which a grouping critter leaves to migrate.
    pub threshold: u32,
    /// Signal increase contributed by each grouping critter per tick.
    pub promote: u32,
    /// Signal decrease applied by each migrating critter per tick.
    pub inhibit: u32,
    /// Probability per tick that a migrating critter veers one quarter turn.
    pub jitter: f64,
    /// Heading a critter migrates relative to on its first migration.
    pub initial_heading: Direction,
}

impl Default for MigrationTuning {
    fn default() -> Self {
        Self {
            threshold: 18_000,
            promote: 1,
            inhibit: 25,
            jitter: 0.35,
            initial_heading: Direction::East,
        }
    }
}

/// Parameters of the opening sweep.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClumpTuning {
    /// Clump signal level that ends the sweep for every critter.
    pub threshold: u32,
    /// Clump signal increase contributed by each sweeping critter per tick.
    pub speed: u32,
    /// Heading every sweeping critter travels toward.
    pub heading: Direction,
}

impl Default for ClumpTuning {
    fn default() -> Self {
        Self {
            threshold: 1_000,
            speed: 1,
            heading: Direction::West,
        }
    }
}

/// Reasons a tuning document is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    /// The document is not valid TOML or does not match the tuning layout.
    #[error("failed to parse colony tuning: {0}")]
    Parse(#[from] toml::de::Error),
    /// A threshold that gates a phase change is zero.
    #[error("{field} must be greater than zero")]
    ZeroThreshold {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The migration jitter is not a probability.
    #[error("migration jitter {0} must lie within [0, 1]")]
    Jitter(f64),
    /// The color scale bounds are inverted or not finite.
    #[error("color scale range [{min}, {max}] must be finite and ordered")]
    ScaleRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The color scale step is negative or not finite.
    #[error("color scale step {0} must be finite and non-negative")]
    ScaleStep(f64),
    /// Critters can only be spawned into an opening phase.
    #[error("critters cannot start in the {0:?} phase")]
    InitialPhase(Phase),
}

impl ColonyTuning {
    /// Parses and validates a TOML tuning document.
    pub fn from_toml_str(contents: &str) -> Result<Self, TuningError> {
        let tuning: Self = toml::from_str(contents)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Checks that every knob lies in its legal range.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !matches!(self.initial_phase, Phase::Clumping | Phase::Searching) {
            return Err(TuningError::InitialPhase(self.initial_phase));
        }
        if self.migration.threshold == 0 {
            return Err(TuningError::ZeroThreshold {
                field: "migration.threshold",
            });
        }
        if self.initial_phase == Phase::Clumping && self.clump.threshold == 0 {
            return Err(TuningError::ZeroThreshold {
                field: "clump.threshold",
            });
        }
        if !(0.0..=1.0).contains(&self.migration.jitter) {
            return Err(TuningError::Jitter(self.migration.jitter));
        }

        let style = &self.style;
        if !style.scale_min.is_finite()
            || !style.scale_max.is_finite()
            || style.scale_min > style.scale_max
        {
            return Err(TuningError::ScaleRange {
                min: style.scale_min,
                max: style.scale_max,
            });
        }
        if !style.scale_step.is_finite() || style.scale_step < 0.0 {
            return Err(TuningError::ScaleStep(style.scale_step));
        }

        Ok(())
    }
}
