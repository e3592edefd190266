//! Compass orientation shared by positions, scent markers, and commands.
//!
//! The four headings form a closed cycle.  Turning left walks
//! N → W → S → E → N; turning right walks the same cycle backwards, so the two
//! rotations are mutual inverses and four turns in either direction are the
//! identity.

use std::fmt;
use std::str::FromStr;

use crate::CoreError;

/// The direction a robot is facing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    N,
    E,
    S,
    W,
}

impl Orientation {
    /// All four headings in clockwise order starting at north.
    pub const ALL: [Orientation; 4] = [Orientation::N, Orientation::E, Orientation::S, Orientation::W];

    /// Rotate 90° counter-clockwise.
    #[inline]
    pub fn turn_left(self) -> Orientation {
        match self {
            Orientation::N => Orientation::W,
            Orientation::W => Orientation::S,
            Orientation::S => Orientation::E,
            Orientation::E => Orientation::N,
        }
    }

    /// Rotate 90° clockwise.
    #[inline]
    pub fn turn_right(self) -> Orientation {
        match self {
            Orientation::N => Orientation::E,
            Orientation::E => Orientation::S,
            Orientation::S => Orientation::W,
            Orientation::W => Orientation::N,
        }
    }

    /// The heading pointing the opposite way.
    #[inline]
    pub fn reverse(self) -> Orientation {
        self.turn_left().turn_left()
    }

    /// Unit step `(dx, dy)` taken when moving forward with this heading.
    ///
    /// North is `+y`, east is `+x`.
    #[inline]
    pub fn forward_delta(self) -> (i32, i32) {
        match self {
            Orientation::N => (0, 1),
            Orientation::E => (1, 0),
            Orientation::S => (0, -1),
            Orientation::W => (-1, 0),
        }
    }

    /// Single-letter label used in text input and output.
    pub fn as_char(self) -> char {
        match self {
            Orientation::N => 'N',
            Orientation::E => 'E',
            Orientation::S => 'S',
            Orientation::W => 'W',
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Orientation {
    type Error = CoreError;

    fn try_from(c: char) -> Result<Orientation, CoreError> {
        match c {
            'N' => Ok(Orientation::N),
            'E' => Ok(Orientation::E),
            'S' => Ok(Orientation::S),
            'W' => Ok(Orientation::W),
            other => Err(CoreError::InvalidOrientation(other.to_string())),
        }
    }
}

impl FromStr for Orientation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Orientation, CoreError> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Orientation::try_from(c),
            _ => Err(CoreError::InvalidOrientation(s.to_owned())),
        }
    }
}
