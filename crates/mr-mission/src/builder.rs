//! Fluent builder for constructing a [`Mission`].

use mr_command::CommandRegistry;
use mr_world::World;

use crate::{Mission, MissionConfig, MissionPlan, MissionResult, RobotPlan};

/// Fluent builder for [`Mission`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                          |
/// |------------------|----------------------------------|
/// | `.commands(r)`   | `CommandRegistry::standard()`    |
/// | `.robots(v)`     | no robots                        |
/// | `.config(c)`     | `MissionConfig::default()`       |
pub struct MissionBuilder {
    max_x:    i32,
    max_y:    i32,
    commands: Option<CommandRegistry>,
    robots:   Vec<RobotPlan>,
    config:   MissionConfig,
}

impl MissionBuilder {
    /// Start a mission on a grid with inclusive upper bounds `max_x`, `max_y`.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self {
            max_x,
            max_y,
            commands: None,
            robots:   Vec::new(),
            config:   MissionConfig::default(),
        }
    }

    /// Seed bounds and robots from a loaded [`MissionPlan`].
    pub fn from_plan(plan: MissionPlan) -> Self {
        Self::new(plan.max_x, plan.max_y).robots(plan.robots)
    }

    /// Replace the command registry (e.g. to add custom instructions).
    pub fn commands(mut self, commands: CommandRegistry) -> Self {
        self.commands = Some(commands);
        self
    }

    /// Replace the robot list.
    pub fn robots(mut self, robots: Vec<RobotPlan>) -> Self {
        self.robots = robots;
        self
    }

    /// Append one robot.
    pub fn robot(mut self, robot: RobotPlan) -> Self {
        self.robots.push(robot);
        self
    }

    pub fn config(mut self, config: MissionConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the bounds, build the world, and return a ready-to-run
    /// [`Mission`].
    pub fn build(self) -> MissionResult<Mission> {
        let world = World::new(self.max_x, self.max_y)?;
        Ok(Mission {
            config:   self.config,
            world,
            commands: self.commands.unwrap_or_else(CommandRegistry::standard),
            robots:   self.robots,
        })
    }
}
