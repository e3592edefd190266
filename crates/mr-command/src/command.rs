//! The `Command` trait: the extension point for robot instructions.

use mr_core::Position;
use mr_world::World;

/// One robot instruction, identified by a single-character symbol.
///
/// Implementations must be stateless: `apply` returns a new [`Position`]
/// derived from `current` and never mutates anything except the world's
/// scent set.
///
/// # Thread safety
///
/// A registry is shared by every robot of a mission, possibly across Rayon
/// workers, so implementations must be `Send + Sync`.
///
/// # Example
///
/// ```rust,ignore
/// struct MoveBackward;
///
/// impl Command for MoveBackward {
///     fn symbol(&self) -> char { 'B' }
///
///     fn apply(&self, current: Position, world: &World) -> Position {
///         let reversed = current.with_orientation(current.orientation.reverse());
///         let candidate = reversed.forward_candidate();
///         if world.is_position_valid(candidate.x, candidate.y) {
///             candidate.with_orientation(current.orientation)
///         } else {
///             current
///         }
///     }
/// }
/// ```
pub trait Command: Send + Sync + 'static {
    /// The instruction character this command is registered under.
    fn symbol(&self) -> char;

    /// Compute the position that results from executing this command at
    /// `current` on `world`.
    fn apply(&self, current: Position, world: &World) -> Position;
}
