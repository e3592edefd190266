//! Immutable robot position value.
//!
//! A `Position` is never mutated in place.  Every transition builds a new
//! value from the old one with one or more fields overridden, so a robot's
//! previous position is simply dropped when it is replaced.

use std::fmt;

use crate::Orientation;

/// Grid coordinates, heading, and lost flag of one robot at one instant.
///
/// Equality compares all four fields, `lost` included.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x:           i32,
    pub y:           i32,
    pub orientation: Orientation,
    pub lost:        bool,
}

impl Position {
    /// A position that is not lost.
    #[inline]
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation, lost: false }
    }

    /// Copy of `self` facing `orientation`.
    #[inline]
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self { orientation, ..self }
    }

    /// Copy of `self` moved to `(x, y)`.
    #[inline]
    pub fn with_coords(self, x: i32, y: i32) -> Self {
        Self { x, y, ..self }
    }

    /// Copy of `self` flagged as lost.
    #[inline]
    pub fn marked_lost(self) -> Self {
        Self { lost: true, ..self }
    }

    /// The position one unit ahead along the current heading.
    ///
    /// No bounds check: the candidate may have negative or out-of-grid
    /// coordinates, which is exactly what edge detection needs.
    #[inline]
    pub fn forward_candidate(self) -> Self {
        let (dx, dy) = self.orientation.forward_delta();
        self.with_coords(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Position {
    /// `"X Y O"`, with a trailing `" LOST"` once the robot has fallen off.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)?;
        if self.lost {
            f.write_str(" LOST")?;
        }
        Ok(())
    }
}
