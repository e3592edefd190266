//! Fluent builder for constructing a [`Robot`].

use mr_command::CommandRegistry;
use mr_core::{Orientation, Position};
use mr_world::World;

use crate::{Robot, RobotError, RobotResult};

/// Fluent builder for [`Robot<'a>`].
///
/// # Required inputs
///
/// | Method          | Missing →                      |
/// |-----------------|--------------------------------|
/// | `.world(w)`     | `RobotError::MissingWorld`     |
/// | `.commands(c)`  | `RobotError::MissingCommands`  |
///
/// The start cell defaults to `(0, 0)` facing north; override it with
/// [`at`](Self::at).
///
/// # Example
///
/// ```rust,ignore
/// let world = World::new(5, 3)?;
/// let commands = CommandRegistry::standard();
/// let mut robot = RobotBuilder::new()
///     .at(1, 1, Orientation::E)
///     .world(&world)
///     .commands(&commands)
///     .build()?;
/// robot.process_instructions("RFRFRFRF")?;
/// ```
#[derive(Debug, Default)]
pub struct RobotBuilder<'a> {
    x:           i32,
    y:           i32,
    orientation: Option<Orientation>,
    world:       Option<&'a World>,
    commands:    Option<&'a CommandRegistry>,
}

impl<'a> RobotBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start cell and heading.
    pub fn at(mut self, x: i32, y: i32, orientation: Orientation) -> Self {
        self.x = x;
        self.y = y;
        self.orientation = Some(orientation);
        self
    }

    /// The world the robot moves on (shared, not owned).
    pub fn world(mut self, world: &'a World) -> Self {
        self.world = Some(world);
        self
    }

    /// The registry used to resolve instruction symbols (shared, not owned).
    pub fn commands(mut self, commands: &'a CommandRegistry) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Validate inputs and return a robot standing at its start cell.
    ///
    /// Checks run in order: world present, coordinates non-negative, start
    /// cell inside the world, registry present.
    pub fn build(self) -> RobotResult<Robot<'a>> {
        let world = self.world.ok_or(RobotError::MissingWorld)?;

        let (x, y) = (self.x, self.y);
        if x < 0 || y < 0 {
            return Err(RobotError::NegativeCoordinates { x, y });
        }
        if !world.is_position_valid(x, y) {
            return Err(RobotError::OutOfBounds {
                x,
                y,
                max_x: world.max_x(),
                max_y: world.max_y(),
            });
        }

        let commands = self.commands.ok_or(RobotError::MissingCommands)?;
        let orientation = self.orientation.unwrap_or(Orientation::N);

        Ok(Robot::from_parts(Position::new(x, y, orientation), world, commands))
    }
}
