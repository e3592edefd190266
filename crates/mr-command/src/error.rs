use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0:?}")]
    UnknownCommand(char),
}

pub type CommandResult<T> = Result<T, CommandError>;
