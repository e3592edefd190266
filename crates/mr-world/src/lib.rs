//! `mr-world`: the grid robots move on and the scent they leave behind.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`world`]   | `World`: inclusive bounds + concurrent scent set         |
//! | [`scent`]   | `ScentMarker`: the `(x, y, orientation)` key             |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                            |
//!
//! # Sharing
//!
//! A `World` is built once and then shared by reference between any number
//! of robots, including robots running on different threads.  Bounds are
//! immutable; the scent set is the only mutable state and is backed by a
//! sharded `DashSet`, so [`World::try_record_marker`] is an atomic
//! insert-if-absent that needs no outer lock.

pub mod error;
pub mod scent;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use scent::ScentMarker;
pub use world::{MAX_COORDINATE, World};
