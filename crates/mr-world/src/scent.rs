//! Scent markers left where robots fell off the grid.

use std::fmt;

use mr_core::Orientation;

/// The last valid position and heading of a robot that fell off the grid.
///
/// A later robot standing on the same cell with the same heading will not
/// follow it over the edge.  Membership is binary: the same triple is
/// recorded at most once per [`World`][crate::World].
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScentMarker {
    pub x:           i32,
    pub y:           i32,
    pub orientation: Orientation,
}

impl ScentMarker {
    #[inline]
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }
}

impl fmt::Display for ScentMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)
    }
}
