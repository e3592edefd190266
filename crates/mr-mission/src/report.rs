//! Per-robot results.

use std::fmt;

use mr_core::{Position, RobotId};

/// How one robot's run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RobotOutcome {
    /// Instructions were processed (possibly stopping early on loss).
    Completed(Position),
    /// Construction or instruction processing failed; holds the error text.
    Rejected(String),
}

/// The result of running one robot of a mission.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotReport {
    pub robot:   RobotId,
    /// The requested start position (not validated).
    pub start:   Position,
    pub outcome: RobotOutcome,
}

impl RobotReport {
    /// Final position, if the robot completed.
    pub fn final_position(&self) -> Option<Position> {
        match &self.outcome {
            RobotOutcome::Completed(p) => Some(*p),
            RobotOutcome::Rejected(_) => None,
        }
    }

    pub fn is_lost(&self) -> bool {
        self.final_position().is_some_and(|p| p.lost)
    }
}

impl fmt::Display for RobotOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotOutcome::Completed(p) => write!(f, "{p}"),
            RobotOutcome::Rejected(msg) => write!(f, "ERROR: {msg}"),
        }
    }
}

impl fmt::Display for RobotReport {
    /// Same text as the outcome: `"1 1 E"`, `"3 3 N LOST"`, or `"ERROR: …"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.outcome)
    }
}
