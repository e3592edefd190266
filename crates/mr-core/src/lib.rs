//! `mr-core`: value types shared by every `mr-*` crate.
//!
//! This crate has no `mr-*` dependencies and only `thiserror` (plus optional
//! `serde`) from outside the standard library.
//!
//! # What lives here
//!
//! | Module            | Contents                                        |
//! |-------------------|-------------------------------------------------|
//! | [`orientation`]   | `Orientation`: the N/E/S/W compass 4-cycle     |
//! | [`position`]      | `Position`: immutable coordinates + heading    |
//! | [`ids`]           | `RobotId`                                       |
//! | [`error`]         | `CoreError`, `CoreResult`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod orientation;
pub mod position;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use ids::RobotId;
pub use orientation::Orientation;
pub use position::Position;
