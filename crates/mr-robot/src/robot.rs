//! The `Robot` struct and its instruction loop.

use std::fmt;

use mr_command::CommandRegistry;
use mr_core::{Orientation, Position};
use mr_world::World;

use crate::{RobotBuilder, RobotError, RobotResult};

/// Instruction strings must be strictly shorter than this many characters.
pub const MAX_INSTRUCTION_LENGTH: usize = 100;

/// A robot on a shared [`World`].
///
/// The robot borrows its world and command registry; many robots may share
/// both.  Its [`Position`] is owned exclusively and replaced after every
/// command, never mutated in place.
///
/// `Display` renders the current position: `"1 1 E"`, or `"3 3 N LOST"`.
#[derive(Debug)]
pub struct Robot<'a> {
    world:    &'a World,
    commands: &'a CommandRegistry,
    position: Position,
}

impl<'a> Robot<'a> {
    /// Place a robot at `(x, y)` facing `orientation`.
    ///
    /// Fails with [`RobotError::NegativeCoordinates`] or
    /// [`RobotError::OutOfBounds`]; see [`RobotBuilder`] for the full set of
    /// checks.
    pub fn new(
        x:           i32,
        y:           i32,
        orientation: Orientation,
        world:       &'a World,
        commands:    &'a CommandRegistry,
    ) -> RobotResult<Self> {
        RobotBuilder::new()
            .at(x, y, orientation)
            .world(world)
            .commands(commands)
            .build()
    }

    pub fn builder() -> RobotBuilder<'a> {
        RobotBuilder::new()
    }

    pub(crate) fn from_parts(
        position: Position,
        world:    &'a World,
        commands: &'a CommandRegistry,
    ) -> Self {
        Self { world, commands, position }
    }

    /// The current position.
    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    #[inline]
    pub fn is_lost(&self) -> bool {
        self.position.lost
    }

    pub fn world(&self) -> &'a World {
        self.world
    }

    /// Execute `instructions` one symbol at a time.
    ///
    /// - Strings of [`MAX_INSTRUCTION_LENGTH`] characters or more are rejected
    ///   before anything runs.
    /// - An empty string leaves the robot where it is.
    /// - Processing stops as soon as the robot is lost; the remaining symbols
    ///   are not looked up.  Stopping early is not an error.
    /// - An unknown symbol aborts with [`RobotError::Command`].  Commands
    ///   applied before it are kept.
    pub fn process_instructions(&mut self, instructions: &str) -> RobotResult<()> {
        let len = instructions.chars().count();
        if len >= MAX_INSTRUCTION_LENGTH {
            return Err(RobotError::InstructionsTooLong { len, limit: MAX_INSTRUCTION_LENGTH });
        }

        let was_lost = self.position.lost;
        for symbol in instructions.chars() {
            if self.position.lost {
                break;
            }

            let command = self.commands.get(symbol)?;
            self.position = command.apply(self.position, self.world);
            tracing::trace!(%symbol, position = %self.position, "command applied");
        }

        if self.position.lost && !was_lost {
            tracing::debug!(position = %self.position, "robot lost");
        }
        Ok(())
    }
}

impl fmt::Display for Robot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.position, f)
    }
}
