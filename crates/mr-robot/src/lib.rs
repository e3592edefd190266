//! `mr-robot`: a robot walking an instruction string across a [`World`][mr_world::World].
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`robot`]   | `Robot<'a>`: current position + instruction processing       |
//! | [`builder`] | `RobotBuilder<'a>`: validated construction                   |
//! | [`error`]   | `RobotError`, `RobotResult<T>`                                |
//!
//! # State machine
//!
//! ```text
//!            symbol (command applied)
//!           ┌──────────┐
//!           ▼          │
//!        ACTIVE ───────┘ ── F off an unscented edge ──▶ LOST (terminal)
//! ```
//!
//! Once lost, the rest of the instruction string is dropped without being
//! looked up, validated, or applied.

pub mod builder;
pub mod error;
pub mod robot;


pub use builder::RobotBuilder;
pub use error::{RobotError, RobotResult};
pub use robot::{MAX_INSTRUCTION_LENGTH, Robot};
