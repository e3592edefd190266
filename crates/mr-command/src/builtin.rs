//! The three standard commands.

use mr_core::Position;
use mr_world::World;

use crate::Command;

/// `L`: rotate 90° left in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnLeft;

impl Command for TurnLeft {
    fn symbol(&self) -> char {
        'L'
    }

    fn apply(&self, current: Position, _world: &World) -> Position {
        current.with_orientation(current.orientation.turn_left())
    }
}

/// `R`: rotate 90° right in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurnRight;

impl Command for TurnRight {
    fn symbol(&self) -> char {
        'R'
    }

    fn apply(&self, current: Position, _world: &World) -> Position {
        current.with_orientation(current.orientation.turn_right())
    }
}

/// `F`: move one cell along the current heading.
///
/// If the target cell is off the grid the robot stays where it is and a
/// scent is recorded at its current cell and heading:
///
/// - first robot to fall from here → returned position is marked lost;
/// - scent already present → the move is ignored and the position is
///   returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveForward;

impl Command for MoveForward {
    fn symbol(&self) -> char {
        'F'
    }

    fn apply(&self, current: Position, world: &World) -> Position {
        let candidate = current.forward_candidate();
        if world.is_position_valid(candidate.x, candidate.y) {
            return candidate;
        }

        if world.try_record_marker(current.x, current.y, current.orientation) {
            current.marked_lost()
        } else {
            tracing::trace!(
                x = current.x,
                y = current.y,
                orientation = %current.orientation,
                "scent present, move ignored"
            );
            current
        }
    }
}
