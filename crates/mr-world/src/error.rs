use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("grid bound {axis}={value} exceeds the maximum of {max}")]
    BoundExceeded {
        axis:  &'static str,
        value: i32,
        max:   i32,
    },
}

pub type WorldResult<T> = Result<T, WorldError>;
