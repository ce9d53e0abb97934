#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Layered decision making for a colony critter.
//!
//! Each tick a [`Colonist`] first runs its reactive layer, which answers
//! immediate threats and keeps pressure on the spot of its last attack. Only
//! when no reflex applies does it fall through to its strategic [`Phase`],
//! which searches for same-kind critters, holds a place in a colony, or
//! migrates to seed a new one. Migration timing is coordinated across the whole
//! colony through the shared [`ColonySignals`] counters.

mod colony;
mod tuning;

pub use colony::Colony;
pub use tuning::{ClumpTuning, ColonyTuning, MigrationTuning, TuningError};

use critter_colony_core::{
    Action, Appearance, Critter, Direction, Neighbor, Observation, Occupant, Phase,
};
use critter_colony_system_geometry::{
    minimal_turn, nearest_friend_facing, nearest_occupant, rotate,
};
use critter_colony_system_signal::ColonySignals;
use critter_colony_system_style::ColorPulse;
use rand::Rng;
use tracing::{debug, info, trace};

/// Direction of the last attack and the ticks left to keep facing it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Commit {
    direction: Direction,
    remaining: u32,
}

/// Reactive rule that produced an action.
#[derive(Clone, Copy, Debug)]
enum Reflex {
    Attack,
    Escape,
    FaceThreat,
    Commit,
}

/// One critter of the colony together with its private state.
#[derive(Debug)]
pub struct Colonist<R> {
    tuning: ColonyTuning,
    signals: ColonySignals,
    rng: R,
    phase: Phase,
    commit: Commit,
    migration_heading: Direction,
    pulse: ColorPulse,
    newborn: bool,
}

impl<R> Colonist<R>
where
    R: Rng,
{
    /// Creates a critter that coordinates through `signals` and draws its
    /// random decisions from `rng`.
    #[must_use]
    pub fn new(tuning: ColonyTuning, signals: ColonySignals, rng: R) -> Self {
        Self {
            tuning,
            signals,
            rng,
            phase: tuning.initial_phase,
            commit: Commit {
                direction: tuning.migration.initial_heading,
                remaining: 0,
            },
            migration_heading: tuning.migration.initial_heading,
            pulse: ColorPulse::new(tuning.style),
            newborn: true,
        }
    }

    /// Strategic phase the critter is currently in.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Heading the critter travels along while migrating.
    #[must_use]
    pub fn migration_heading(&self) -> Direction {
        self.migration_heading
    }

    /// Direction of the last attack and the ticks left to honor it.
    #[must_use]
    pub fn commitment(&self) -> (Direction, u32) {
        (self.commit.direction, self.commit.remaining)
    }

    /// Reports whether the critter has yet to take its first decision.
    #[must_use]
    pub fn is_newborn(&self) -> bool {
        self.newborn
    }

    /// Counters shared with the rest of the colony.
    #[must_use]
    pub fn signals(&self) -> &ColonySignals {
        &self.signals
    }

    fn react(&mut self, observation: &Observation) -> Option<(Reflex, Action)> {
        let front = observation.front().kind();

        if front == Neighbor::Other {
            self.commit = Commit {
                direction: observation.direction(),
                remaining: self.tuning.commit_ticks,
            };
            return Some((Reflex::Attack, Action::Infect));
        }

        if observation.back().kind() == Neighbor::Other && front == Neighbor::Empty {
            return Some((Reflex::Escape, Action::Hop));
        }

        if let Some(threat) = nearest_occupant(observation, Neighbor::Other, &mut self.rng) {
            return Some((Reflex::FaceThreat, minimal_turn(observation, threat)));
        }

        if self.commit.remaining > 0 {
            self.commit.remaining -= 1;
            return Some((
                Reflex::Commit,
                minimal_turn(observation, self.commit.direction),
            ));
        }

        None
    }

    fn strategize(&mut self, observation: &Observation) -> Action {
        match self.phase {
            Phase::Clumping => self.clump(observation),
            Phase::Searching => self.search(observation),
            Phase::Grouping => self.group(observation),
            Phase::Migrating => self.migrate(observation),
        }
    }

    fn clump(&mut self, observation: &Observation) -> Action {
        let level = self.signals.clump.promote(self.tuning.clump.speed);
        if level >= self.tuning.clump.threshold {
            self.enter(Phase::Searching);
            return self.search(observation);
        }

        let heading = self.tuning.clump.heading;
        if observation.direction() != heading {
            return minimal_turn(observation, heading);
        }

        sweep(observation)
    }

    fn search(&mut self, observation: &Observation) -> Action {
        match nearest_friend_facing(observation, &mut self.rng) {
            Some(facing) => {
                self.enter(Phase::Grouping);
                minimal_turn(observation, facing)
            }
            None => sweep(observation),
        }
    }

    fn group(&mut self, observation: &Observation) -> Action {
        let friend = nearest_friend_facing(observation, &mut self.rng);
        let gap = nearest_occupant(observation, Neighbor::Empty, &mut self.rng);

        let level = self.signals.migration.promote(self.tuning.migration.promote);
        if level >= self.tuning.migration.threshold && gap.is_some() {
            self.migration_heading = rotate(self.migration_heading, 1);
            info!(
                level,
                heading = ?self.migration_heading,
                "migration threshold reached"
            );
            self.enter(Phase::Migrating);
            return self.migrate(observation);
        }

        let Some(facing) = friend else {
            self.enter(Phase::Searching);
            return Action::Hop;
        };

        match gap {
            Some(gap) => minimal_turn(observation, gap),
            None => minimal_turn(observation, facing),
        }
    }

    fn migrate(&mut self, observation: &Observation) -> Action {
        let _ = self.signals.migration.inhibit(self.tuning.migration.inhibit);

        if self.rng.gen::<f64>() < self.tuning.migration.jitter {
            let delta = if self.rng.gen_bool(0.5) { 1 } else { -1 };
            self.migration_heading = rotate(self.migration_heading, delta);
        }

        if observation.front() == Occupant::Wall {
            self.migration_heading = rotate(self.migration_heading, 1);
        }

        if observation.direction() != self.migration_heading {
            return minimal_turn(observation, self.migration_heading);
        }
        if observation.front() == Occupant::Empty {
            return Action::Hop;
        }

        if let Some(facing) = nearest_friend_facing(observation, &mut self.rng) {
            self.enter(Phase::Grouping);
            return minimal_turn(observation, facing);
        }

        Action::Hop
    }

    fn enter(&mut self, phase: Phase) {
        debug!(
            from = ?self.phase,
            to = ?phase,
            migration = self.signals.migration.level(),
            clump = self.signals.clump.level(),
            "phase transition"
        );
        self.phase = phase;
    }
}

impl<R> Critter for Colonist<R>
where
    R: Rng,
{
    fn decide(&mut self, observation: &Observation) -> Action {
        self.newborn = false;
        self.pulse.advance();

        if let Some((reflex, action)) = self.react(observation) {
            trace!(?reflex, ?action, "reactive decision");
            return action;
        }

        self.strategize(observation)
    }

    fn appearance(&self) -> Appearance {
        self.pulse.appearance(self.newborn)
    }
}

/// Wall-following sweep: hop ahead, turning clockwise at walls.
fn sweep(observation: &Observation) -> Action {
    if observation.front() == Occupant::Wall {
        Action::TurnRight
    } else {
        Action::Hop
    }
}
