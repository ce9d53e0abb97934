#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure turn-cost and neighbor queries over a single [`Observation`].
//!
//! Every query maps between the cardinal [`Direction`] the engine reports and
//! the clockwise [`GridHeading`] ordinal so turns can be computed with modular
//! arithmetic. Queries that break ties randomly take the random source as an
//! argument.

use critter_colony_core::{Action, Direction, GridHeading, Neighbor, Observation, Relative};
use rand::Rng;

/// Converts a cardinal direction into its clockwise ordinal heading.
#[must_use]
pub const fn grid_heading(direction: Direction) -> GridHeading {
    match direction {
        Direction::North => GridHeading::Up,
        Direction::East => GridHeading::Right,
        Direction::South => GridHeading::Down,
        Direction::West => GridHeading::Left,
    }
}

/// Converts an ordinal heading back into its cardinal direction.
#[must_use]
pub const fn cardinal(heading: GridHeading) -> Direction {
    match heading {
        GridHeading::Up => Direction::North,
        GridHeading::Right => Direction::East,
        GridHeading::Down => Direction::South,
        GridHeading::Left => Direction::West,
    }
}

/// Advances a heading clockwise by `delta` quarter turns.
///
/// Negative deltas turn counter-clockwise; the result is always one of the
/// four headings.
#[must_use]
pub fn shift(heading: GridHeading, delta: i32) -> GridHeading {
    let index = (i32::from(heading.index()) + delta).rem_euclid(4);
    GridHeading::from_index(index as u8)
}

/// Rotates a cardinal direction clockwise by `delta` quarter turns.
#[must_use]
pub fn rotate(direction: Direction, delta: i32) -> Direction {
    cardinal(shift(grid_heading(direction), delta))
}

/// Clockwise quarter turns needed to get from `from` to `to`, in `0..4`.
#[must_use]
pub fn clockwise_steps(from: Direction, to: Direction) -> u8 {
    let from = i32::from(grid_heading(from).index());
    let to = i32::from(grid_heading(to).index());
    (to - from).rem_euclid(4) as u8
}

/// Absolute direction of a relative cell for a critter facing `facing`.
#[must_use]
pub fn absolute(facing: Direction, cell: Relative) -> Direction {
    rotate(facing, i32::from(cell.clockwise_offset()))
}

/// Relative cell that lies in the absolute `direction` for a critter facing `facing`.
#[must_use]
pub fn relative(facing: Direction, direction: Direction) -> Relative {
    Relative::from_clockwise_offset(clockwise_steps(facing, direction))
}

/// Finds the closest relative cell holding `category`.
///
/// The front wins outright. When both flanks match, one of them is chosen
/// with even odds (`true` from the generator picks the right flank). Then the
/// left flank, the right flank and finally the back are checked in order.
pub fn nearest_occupant<R>(
    observation: &Observation,
    category: Neighbor,
    rng: &mut R,
) -> Option<Direction>
where
    R: Rng + ?Sized,
{
    let matches = |cell: Relative| observation.neighbor(cell) == category;

    let cell = if matches(Relative::Front) {
        Relative::Front
    } else if matches(Relative::Left) && matches(Relative::Right) {
        if rng.gen_bool(0.5) {
            Relative::Right
        } else {
            Relative::Left
        }
    } else if matches(Relative::Left) {
        Relative::Left
    } else if matches(Relative::Right) {
        Relative::Right
    } else if matches(Relative::Back) {
        Relative::Back
    } else {
        return None;
    };

    Some(absolute(observation.direction(), cell))
}

/// Cheapest action that brings the critter closer to facing `target`.
///
/// Already facing the target yields [`Action::Infect`]. A target directly
/// behind is reached by turning left.
#[must_use]
pub fn minimal_turn(observation: &Observation, target: Direction) -> Action {
    match clockwise_steps(observation.direction(), target) {
        0 => Action::Infect,
        1 => Action::TurnRight,
        _ => Action::TurnLeft,
    }
}

/// Facing of the same-kind critter located in the absolute direction `target`.
///
/// Returns `None` when that cell does not hold a same-kind critter.
#[must_use]
pub fn facing_of(observation: &Observation, target: Direction) -> Option<Direction> {
    observation
        .occupant(relative(observation.direction(), target))
        .same_facing()
}

/// Facing of the nearest same-kind neighbor, if one is adjacent.
pub fn nearest_friend_facing<R>(observation: &Observation, rng: &mut R) -> Option<Direction>
where
    R: Rng + ?Sized,
{
    nearest_occupant(observation, Neighbor::Same, rng)
        .and_then(|friend| facing_of(observation, friend))
}

#[cfg(test)]
mod tests {
    use super::*;
    use critter_colony_core::Occupant;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const DIRECTIONS: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    fn always_true() -> StepRng {
        StepRng::new(0, 0)
    }

    fn always_false() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn heading_conversion_round_trips() {
        for direction in DIRECTIONS {
            assert_eq!(cardinal(grid_heading(direction)), direction);
        }
        for heading in GridHeading::ALL {
            assert_eq!(grid_heading(cardinal(heading)), heading);
        }
    }

    #[test]
    fn headings_follow_clockwise_order() {
        assert_eq!(rotate(Direction::North, 1), Direction::East);
        assert_eq!(rotate(Direction::East, 1), Direction::South);
        assert_eq!(rotate(Direction::South, 1), Direction::West);
        assert_eq!(rotate(Direction::West, 1), Direction::North);
    }

    #[test]
    fn shift_is_cyclic_for_any_delta() {
        for heading in GridHeading::ALL {
            for delta in -9..=9 {
                assert_eq!(shift(heading, delta), shift(heading, delta + 4));
            }
        }
    }

    #[test]
    fn shift_handles_negative_deltas() {
        assert_eq!(shift(GridHeading::Right, -1), GridHeading::Up);
        assert_eq!(shift(GridHeading::Right, -4), GridHeading::Right);
        assert_eq!(shift(GridHeading::Down, -3), GridHeading::Left);
        assert_eq!(shift(GridHeading::Up, -7), GridHeading::Right);
    }

    #[test]
    fn minimal_turn_infects_when_already_facing() {
        for direction in DIRECTIONS {
            let observation = Observation::open(direction);
            assert_eq!(minimal_turn(&observation, direction), Action::Infect);
        }
    }

    #[test]
    fn minimal_turn_takes_the_single_step_side() {
        for direction in DIRECTIONS {
            let observation = Observation::open(direction);
            assert_eq!(
                minimal_turn(&observation, rotate(direction, 1)),
                Action::TurnRight
            );
            assert_eq!(
                minimal_turn(&observation, rotate(direction, -1)),
                Action::TurnLeft
            );
        }
    }

    #[test]
    fn minimal_turn_breaks_the_behind_tie_to_the_left() {
        let observation = Observation::open(Direction::West);
        for _ in 0..8 {
            assert_eq!(
                minimal_turn(&observation, Direction::East),
                Action::TurnLeft
            );
        }
    }

    #[test]
    fn nearest_occupant_prefers_the_front() {
        let observation = Observation::new(
            Direction::South,
            Occupant::Other,
            Occupant::Other,
            Occupant::Other,
            Occupant::Other,
        );
        assert_eq!(
            nearest_occupant(&observation, Neighbor::Other, &mut always_true()),
            Some(Direction::South)
        );
    }

    #[test]
    fn nearest_occupant_resolves_flank_ties_with_the_generator() {
        let observation = Observation::open(Direction::North)
            .with(Relative::Left, Occupant::Wall)
            .with(Relative::Right, Occupant::Wall);

        assert_eq!(
            nearest_occupant(&observation, Neighbor::Wall, &mut always_true()),
            Some(Direction::East)
        );
        assert_eq!(
            nearest_occupant(&observation, Neighbor::Wall, &mut always_false()),
            Some(Direction::West)
        );
    }

    #[test]
    fn nearest_occupant_flank_tie_reaches_both_sides_with_a_seeded_stream() {
        let observation = Observation::open(Direction::East)
            .with(Relative::Left, Occupant::Other)
            .with(Relative::Right, Occupant::Other);
        let mut rng = ChaCha8Rng::seed_from_u64(7);

        let mut north = 0;
        let mut south = 0;
        for _ in 0..200 {
            match nearest_occupant(&observation, Neighbor::Other, &mut rng) {
                Some(Direction::North) => north += 1,
                Some(Direction::South) => south += 1,
                other => panic!("unexpected tie-break result {other:?}"),
            }
        }
        assert!(north > 0 && south > 0, "north={north} south={south}");
    }

    #[test]
    fn nearest_occupant_checks_left_right_then_back() {
        let left_only = Observation::open(Direction::North).with(Relative::Left, Occupant::Wall);
        let right_only = Observation::open(Direction::North).with(Relative::Right, Occupant::Wall);
        let back_only = Observation::open(Direction::North).with(Relative::Back, Occupant::Wall);
        let left_and_back = left_only.with(Relative::Back, Occupant::Wall);

        let mut rng = always_true();
        assert_eq!(
            nearest_occupant(&left_only, Neighbor::Wall, &mut rng),
            Some(Direction::West)
        );
        assert_eq!(
            nearest_occupant(&right_only, Neighbor::Wall, &mut rng),
            Some(Direction::East)
        );
        assert_eq!(
            nearest_occupant(&back_only, Neighbor::Wall, &mut rng),
            Some(Direction::South)
        );
        assert_eq!(
            nearest_occupant(&left_and_back, Neighbor::Wall, &mut rng),
            Some(Direction::West)
        );
    }

    #[test]
    fn nearest_occupant_is_none_only_without_a_match() {
        let occupants = [
            Occupant::Empty,
            Occupant::Wall,
            Occupant::Other,
            Occupant::Same {
                facing: Direction::North,
            },
        ];
        let categories = [Neighbor::Empty, Neighbor::Wall, Neighbor::Same, Neighbor::Other];
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for front in occupants {
            for back in occupants {
                for left in occupants {
                    for right in occupants {
                        let observation =
                            Observation::new(Direction::West, front, back, left, right);
                        for category in categories {
                            let present = [front, back, left, right]
                                .iter()
                                .any(|occupant| occupant.kind() == category);
                            let found = nearest_occupant(&observation, category, &mut rng);
                            assert_eq!(found.is_some(), present);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn facing_of_reads_the_matching_relative_cell() {
        let observation = Observation::new(
            Direction::East,
            Occupant::Same {
                facing: Direction::North,
            },
            Occupant::Same {
                facing: Direction::West,
            },
            Occupant::Same {
                facing: Direction::South,
            },
            Occupant::Same {
                facing: Direction::East,
            },
        );

        assert_eq!(facing_of(&observation, Direction::East), Some(Direction::North));
        assert_eq!(facing_of(&observation, Direction::West), Some(Direction::West));
        assert_eq!(facing_of(&observation, Direction::North), Some(Direction::South));
        assert_eq!(facing_of(&observation, Direction::South), Some(Direction::East));
    }

    #[test]
    fn facing_of_is_none_for_non_friends() {
        let observation =
            Observation::open(Direction::North).with(Relative::Front, Occupant::Other);
        assert_eq!(facing_of(&observation, Direction::North), None);
        assert_eq!(facing_of(&observation, Direction::South), None);
    }

    #[test]
    fn nearest_friend_facing_combines_both_queries() {
        let observation = Observation::open(Direction::South).with(
            Relative::Right,
            Occupant::Same {
                facing: Direction::North,
            },
        );
        assert_eq!(
            nearest_friend_facing(&observation, &mut always_true()),
            Some(Direction::North)
        );
        assert_eq!(
            nearest_friend_facing(&Observation::open(Direction::South), &mut always_true()),
            None
        );
    }

    #[test]
    fn relative_and_absolute_are_inverse() {
        for facing in DIRECTIONS {
            for cell in [Relative::Front, Relative::Right, Relative::Back, Relative::Left] {
                assert_eq!(relative(facing, absolute(facing, cell)), cell);
            }
        }
    }
}
