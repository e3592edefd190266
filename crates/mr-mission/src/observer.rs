//! Mission observer trait for progress reporting and output.

use mr_core::RobotId;
use mr_world::World;

use crate::{RobotPlan, RobotReport};

/// Callbacks invoked by [`Mission::run`][crate::Mission::run].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// With [`Mission::run_parallel`][crate::Mission::run_parallel] the robots
/// have already finished when the hooks fire; start/end pairs are still
/// delivered in ascending `RobotId` order.
pub trait MissionObserver {
    /// Called before robot `robot` is constructed.
    fn on_robot_start(&mut self, _robot: RobotId, _plan: &RobotPlan) {}

    /// Called with the robot's report once it has finished (or failed).
    fn on_robot_end(&mut self, _report: &RobotReport) {}

    /// Called once after the last robot, with read access to the final scent set.
    fn on_mission_end(&mut self, _world: &World) {}
}

/// A [`MissionObserver`] that does nothing.
pub struct NoopObserver;

impl MissionObserver for NoopObserver {}
