//! `mr-command`: the instructions a robot understands.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`command`]  | `Command` trait                                            |
//! | [`builtin`]  | `TurnLeft` (`L`), `TurnRight` (`R`), `MoveForward` (`F`)   |
//! | [`registry`] | `CommandRegistry`: symbol → command lookup                |
//! | [`error`]    | `CommandError`, `CommandResult<T>`                         |
//!
//! # Design notes
//!
//! Commands are stateless transformations `Position × &World → Position`.
//! New instructions are added by implementing [`Command`] and registering
//! the value; neither `Robot` nor `World` needs to change.

pub mod builtin;
pub mod command;
pub mod error;
pub mod registry;


pub use builtin::{MoveForward, TurnLeft, TurnRight};
pub use command::Command;
pub use error::{CommandError, CommandResult};
pub use registry::CommandRegistry;
