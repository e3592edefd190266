//! The `World` struct: grid bounds plus the shared scent set.

use dashmap::DashSet;
use mr_core::Orientation;

use crate::{ScentMarker, WorldError, WorldResult};

/// Largest accepted value for either upper grid bound.
pub const MAX_COORDINATE: i32 = 50;

#[cfg(feature = "fx-hash")]
type ScentHasher = rustc_hash::FxBuildHasher;
#[cfg(not(feature = "fx-hash"))]
type ScentHasher = std::collections::hash_map::RandomState;

/// A rectangular grid `[0, max_x] × [0, max_y]` and the scent markers left on it.
///
/// `World` is `Send + Sync`.  Share it by reference (or `Arc`) between all
/// robots of a mission; the scent set grows monotonically for the lifetime of
/// the value and entries are never removed.
#[derive(Debug)]
pub struct World {
    max_x:  i32,
    max_y:  i32,
    scents: DashSet<ScentMarker, ScentHasher>,
}

impl World {
    /// Create a world with inclusive upper bounds `max_x` and `max_y`.
    ///
    /// Fails if either bound exceeds [`MAX_COORDINATE`].  Negative bounds are
    /// accepted; such a world simply has no valid cells.
    pub fn new(max_x: i32, max_y: i32) -> WorldResult<Self> {
        if max_x > MAX_COORDINATE {
            return Err(WorldError::BoundExceeded { axis: "max_x", value: max_x, max: MAX_COORDINATE });
        }
        if max_y > MAX_COORDINATE {
            return Err(WorldError::BoundExceeded { axis: "max_y", value: max_y, max: MAX_COORDINATE });
        }
        Ok(Self {
            max_x,
            max_y,
            scents: DashSet::with_hasher(ScentHasher::default()),
        })
    }

    #[inline]
    pub fn max_x(&self) -> i32 {
        self.max_x
    }

    #[inline]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// `true` iff `(x, y)` lies inside the inclusive bounds.
    #[inline]
    pub fn is_position_valid(&self, x: i32, y: i32) -> bool {
        (0..=self.max_x).contains(&x) && (0..=self.max_y).contains(&y)
    }

    /// Record a scent at `(x, y, orientation)`.
    ///
    /// Returns `true` if this call inserted the marker (the caller is the
    /// first robot to fall from here) and `false` if it was already present.
    /// Among any number of concurrent callers with the same triple exactly
    /// one observes `true`; the insert is atomic within its shard.
    pub fn try_record_marker(&self, x: i32, y: i32, orientation: Orientation) -> bool {
        let inserted = self.scents.insert(ScentMarker::new(x, y, orientation));
        if inserted {
            tracing::debug!(x, y, orientation = %orientation, "scent recorded");
        }
        inserted
    }

    /// `true` if a robot has already fallen from `(x, y)` facing `orientation`.
    pub fn has_scent(&self, x: i32, y: i32, orientation: Orientation) -> bool {
        self.scents.contains(&ScentMarker::new(x, y, orientation))
    }

    /// Number of distinct scent markers recorded so far.
    pub fn scent_count(&self) -> usize {
        self.scents.len()
    }

    /// Sorted snapshot of every recorded marker.
    pub fn scents(&self) -> Vec<ScentMarker> {
        let mut markers: Vec<ScentMarker> = self.scents.iter().map(|m| *m).collect();
        markers.sort_unstable();
        markers
    }
}
