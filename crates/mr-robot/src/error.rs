use mr_command::CommandError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RobotError {
    #[error("robot has no world to move on")]
    MissingWorld,

    #[error("robot has no command registry")]
    MissingCommands,

    #[error("coordinates cannot be negative: ({x}, {y})")]
    NegativeCoordinates { x: i32, y: i32 },

    #[error("initial position ({x}, {y}) is outside the world bounds (0..={max_x}, 0..={max_y})")]
    OutOfBounds {
        x:     i32,
        y:     i32,
        max_x: i32,
        max_y: i32,
    },

    #[error("instruction string has {len} characters; it must be shorter than {limit}")]
    InstructionsTooLong { len: usize, limit: usize },

    #[error("invalid instruction: {0}")]
    Command(#[from] CommandError),
}

pub type RobotResult<T> = Result<T, RobotError>;
