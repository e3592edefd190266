//! The `Mission` struct and its robot loop.

use mr_command::CommandRegistry;
use mr_core::{Position, RobotId};
use mr_robot::{Robot, RobotError};
use mr_world::World;

use crate::{
    MissionConfig, MissionError, MissionObserver, MissionResult, RobotOutcome, RobotPlan,
    RobotReport,
};

/// A world, a command registry, and the robots to run on them.
///
/// The world lives as long as the mission, so scent accumulates across
/// every run: calling [`run`](Self::run) twice replays the robots against
/// the scent left by the first pass.
///
/// Create via [`MissionBuilder`][crate::MissionBuilder].
#[derive(Debug)]
pub struct Mission {
    pub config:   MissionConfig,
    pub world:    World,
    pub commands: CommandRegistry,
    pub robots:   Vec<RobotPlan>,
}

impl Mission {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run every robot in input order and return one report per robot.
    ///
    /// With `config.halt_on_error` the first failing robot aborts the run
    /// with [`MissionError::Robot`]; robots before it have already left
    /// their scent.
    pub fn run<O: MissionObserver>(&self, observer: &mut O) -> MissionResult<Vec<RobotReport>> {
        tracing::info!(
            robots = self.robots.len(),
            max_x = self.world.max_x(),
            max_y = self.world.max_y(),
            "mission started"
        );

        let mut reports = Vec::with_capacity(self.robots.len());
        for (i, plan) in self.robots.iter().enumerate() {
            let robot = robot_id(i);
            observer.on_robot_start(robot, plan);
            let report = self.report(robot, plan, self.run_robot(plan))?;
            observer.on_robot_end(&report);
            reports.push(report);
        }

        observer.on_mission_end(&self.world);
        self.log_summary(&reports);
        Ok(reports)
    }

    /// Run every robot concurrently against the shared world.
    ///
    /// Robots race for scent; at any edge exactly one of them falls off and
    /// the rest are saved, but which one depends on scheduling.  Observer
    /// hooks and the returned reports are in ascending `RobotId` order.
    /// `config.num_threads` selects a dedicated pool size.
    #[cfg(feature = "parallel")]
    pub fn run_parallel<O: MissionObserver>(
        &self,
        observer: &mut O,
    ) -> MissionResult<Vec<RobotReport>> {
        use rayon::prelude::*;

        tracing::info!(
            robots = self.robots.len(),
            threads = ?self.config.num_threads,
            "parallel mission started"
        );

        let compute = || -> Vec<Result<Position, RobotError>> {
            self.robots.par_iter().map(|plan| self.run_robot(plan)).collect()
        };
        let outcomes = match self.config.num_threads {
            Some(n) => rayon::ThreadPoolBuilder::new().num_threads(n).build()?.install(compute),
            None => compute(),
        };

        // Sequential apply phase keeps observer order deterministic.
        let mut reports = Vec::with_capacity(outcomes.len());
        for (i, (plan, outcome)) in self.robots.iter().zip(outcomes).enumerate() {
            let robot = robot_id(i);
            observer.on_robot_start(robot, plan);
            let report = self.report(robot, plan, outcome)?;
            observer.on_robot_end(&report);
            reports.push(report);
        }

        observer.on_mission_end(&self.world);
        self.log_summary(&reports);
        Ok(reports)
    }

    // ── Per-robot processing ──────────────────────────────────────────────

    fn run_robot(&self, plan: &RobotPlan) -> Result<Position, RobotError> {
        let mut robot = Robot::new(plan.x, plan.y, plan.orientation, &self.world, &self.commands)?;
        robot.process_instructions(&plan.instructions)?;
        Ok(robot.position())
    }

    /// Turn a robot's result into a report, or into a mission error when
    /// configured to halt.
    fn report(
        &self,
        robot:   RobotId,
        plan:    &RobotPlan,
        outcome: Result<Position, RobotError>,
    ) -> MissionResult<RobotReport> {
        let outcome = match outcome {
            Ok(position) => RobotOutcome::Completed(position),
            Err(source) if self.config.halt_on_error => {
                return Err(MissionError::Robot { robot, source });
            }
            Err(e) => {
                tracing::warn!(%robot, error = %e, "robot rejected");
                RobotOutcome::Rejected(e.to_string())
            }
        };
        Ok(RobotReport {
            robot,
            start: Position::new(plan.x, plan.y, plan.orientation),
            outcome,
        })
    }

    fn log_summary(&self, reports: &[RobotReport]) {
        let lost = reports.iter().filter(|r| r.is_lost()).count();
        tracing::info!(
            robots = reports.len(),
            lost,
            scents = self.world.scent_count(),
            "mission finished"
        );
    }
}

fn robot_id(index: usize) -> RobotId {
    // Mission sizes never approach u32::MAX robots.
    RobotId(index as u32)
}
