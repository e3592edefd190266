//! Error types for mr-mission.

use mr_core::RobotId;
use mr_robot::RobotError;
use mr_world::WorldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MissionError {
    #[error("mission parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid world: {0}")]
    World(#[from] WorldError),

    #[error("{robot} failed: {source}")]
    Robot {
        robot:  RobotId,
        #[source]
        source: RobotError,
    },

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "parallel")]
    #[error("thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type MissionResult<T> = Result<T, MissionError>;
