#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the critter colony behavior.
//!
//! This crate defines the surface that connects a hosting simulation engine to
//! the colony systems. Each tick the engine hands a critter an [`Observation`]
//! of its four relative neighbors and receives exactly one [`Action`] in
//! return through the [`Critter`] contract. Systems built on top of these types
//! never see the grid itself, only the tick-scoped observation.

use serde::{Deserialize, Serialize};

/// Cardinal directions a critter can face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Facing toward decreasing row indices.
    North,
    /// Facing toward increasing column indices.
    East,
    /// Facing toward increasing row indices.
    South,
    /// Facing toward decreasing column indices.
    West,
}

/// Cyclic ordinal headings laid out in clockwise order.
///
/// The ordinal form supports arithmetic on turns; convert from and to
/// [`Direction`] at the edges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridHeading {
    /// Ordinal 0.
    Right,
    /// Ordinal 1.
    Down,
    /// Ordinal 2.
    Left,
    /// Ordinal 3.
    Up,
}

impl GridHeading {
    /// Every heading in ordinal order.
    pub const ALL: [GridHeading; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Zero-based clockwise ordinal of the heading.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Right => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Up => 3,
        }
    }

    /// Heading for an ordinal, wrapping values past 3.
    #[must_use]
    pub const fn from_index(index: u8) -> Self {
        Self::ALL[(index % 4) as usize]
    }
}

/// Category of whatever occupies a relative cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Neighbor {
    /// Nothing occupies the cell.
    Empty,
    /// The cell lies outside the board.
    Wall,
    /// A critter of this colony's own kind.
    Same,
    /// A critter of any rival kind.
    Other,
}

/// Occupant reported for a single relative cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Nothing occupies the cell.
    Empty,
    /// The cell lies outside the board.
    Wall,
    /// A same-kind critter together with the direction it is facing.
    Same {
        /// Direction the neighboring critter faces.
        facing: Direction,
    },
    /// A rival critter.
    Other,
}

impl Occupant {
    /// Projects the occupant onto its category.
    #[must_use]
    pub const fn kind(self) -> Neighbor {
        match self {
            Self::Empty => Neighbor::Empty,
            Self::Wall => Neighbor::Wall,
            Self::Same { .. } => Neighbor::Same,
            Self::Other => Neighbor::Other,
        }
    }

    /// Facing direction of a same-kind occupant.
    #[must_use]
    pub const fn same_facing(self) -> Option<Direction> {
        match self {
            Self::Same { facing } => Some(facing),
            Self::Empty | Self::Wall | Self::Other => None,
        }
    }
}

/// Cells surrounding a critter, named relative to its facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relative {
    /// Cell directly ahead.
    Front,
    /// Cell a quarter turn clockwise.
    Right,
    /// Cell directly behind.
    Back,
    /// Cell a quarter turn counter-clockwise.
    Left,
}

impl Relative {
    /// Number of clockwise quarter turns from the facing to this cell.
    #[must_use]
    pub const fn clockwise_offset(self) -> u8 {
        match self {
            Self::Front => 0,
            Self::Right => 1,
            Self::Back => 2,
            Self::Left => 3,
        }
    }

    /// Relative cell reached after the provided clockwise quarter turns.
    #[must_use]
    pub const fn from_clockwise_offset(offset: u8) -> Self {
        match offset % 4 {
            0 => Self::Front,
            1 => Self::Right,
            2 => Self::Back,
            _ => Self::Left,
        }
    }
}

/// Tick-scoped snapshot handed to a critter by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    direction: Direction,
    front: Occupant,
    back: Occupant,
    left: Occupant,
    right: Occupant,
}

impl Observation {
    /// Creates an observation from the critter's facing and its four neighbors.
    #[must_use]
    pub const fn new(
        direction: Direction,
        front: Occupant,
        back: Occupant,
        left: Occupant,
        right: Occupant,
    ) -> Self {
        Self {
            direction,
            front,
            back,
            left,
            right,
        }
    }

    /// Creates an observation with every neighbor empty.
    #[must_use]
    pub const fn open(direction: Direction) -> Self {
        Self::new(
            direction,
            Occupant::Empty,
            Occupant::Empty,
            Occupant::Empty,
            Occupant::Empty,
        )
    }

    /// Returns a copy with the occupant of one relative cell replaced.
    #[must_use]
    pub const fn with(mut self, cell: Relative, occupant: Occupant) -> Self {
        match cell {
            Relative::Front => self.front = occupant,
            Relative::Back => self.back = occupant,
            Relative::Left => self.left = occupant,
            Relative::Right => self.right = occupant,
        }
        self
    }

    /// Direction the critter currently faces.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Occupant of the cell ahead.
    #[must_use]
    pub const fn front(&self) -> Occupant {
        self.front
    }

    /// Occupant of the cell behind.
    #[must_use]
    pub const fn back(&self) -> Occupant {
        self.back
    }

    /// Occupant of the cell to the left.
    #[must_use]
    pub const fn left(&self) -> Occupant {
        self.left
    }

    /// Occupant of the cell to the right.
    #[must_use]
    pub const fn right(&self) -> Occupant {
        self.right
    }

    /// Occupant of the requested relative cell.
    #[must_use]
    pub const fn occupant(&self, cell: Relative) -> Occupant {
        match cell {
            Relative::Front => self.front,
            Relative::Back => self.back,
            Relative::Left => self.left,
            Relative::Right => self.right,
        }
    }

    /// Category of the requested relative cell.
    #[must_use]
    pub const fn neighbor(&self, cell: Relative) -> Neighbor {
        self.occupant(cell).kind()
    }
}

/// Decision returned to the engine for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move one cell forward.
    Hop,
    /// Rotate a quarter turn counter-clockwise.
    TurnLeft,
    /// Rotate a quarter turn clockwise.
    TurnRight,
    /// Attack the cell directly ahead.
    Infect,
}

/// Strategic mode of a colony critter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Opening sweep toward a fixed heading while the colony builds up.
    Clumping,
    /// Wall-following sweep looking for same-kind critters.
    Searching,
    /// Holding a place in a colony and plugging gaps.
    Grouping,
    /// Travelling away from the colony to seed a new one.
    Migrating,
}

/// Display color applied to a critter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CritterColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl CritterColor {
    /// Pure white.
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);

    /// Creates a new critter color from byte RGB components.
    #[must_use]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Red component of the color.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Green component of the color.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Blue component of the color.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }
}

/// Glyph drawn for a critter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Glyph {
    /// Shown before the critter has taken its first decision.
    Newborn,
    /// Shown on every later tick.
    Settled,
}

impl Glyph {
    /// Text rendition of the glyph.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Newborn => "⏺",
            Self::Settled => "✿",
        }
    }
}

/// Everything the host needs to draw a critter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appearance {
    /// Color of the critter.
    pub color: CritterColor,
    /// Glyph of the critter.
    pub glyph: Glyph,
}

/// Per-tick contract between the hosting engine and a critter.
pub trait Critter {
    /// Chooses the action for the current tick.
    fn decide(&mut self, observation: &Observation) -> Action;

    /// Reports how the critter should currently be drawn.
    fn appearance(&self) -> Appearance;
}
