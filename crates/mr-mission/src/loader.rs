//! Mission text loader.
//!
//! # Text format
//!
//! ```text
//! 5 3
//! 1 1 E
//! RFRFRFRF
//!
//! 3 2 N
//! FRRFLLFFRRFLL
//! ```
//!
//! - The first non-blank line holds the upper-right grid corner `maxX maxY`.
//! - Each robot is two lines: a start position `x y O` (`O` one of
//!   `N E S W`), then its instruction string.  The instruction line is
//!   always the line directly after the position line and may be empty.
//! - Blank lines between robots are ignored.
//!
//! Only the shape of the text is checked here.  Bound limits, negative
//! start cells, and instruction length are enforced when the mission runs.

use std::io::Read;
use std::path::Path;

use mr_core::Orientation;

use crate::{MissionError, MissionResult};

// ── Plans ─────────────────────────────────────────────────────────────────────

/// One robot as described by the mission text.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RobotPlan {
    pub x:            i32,
    pub y:            i32,
    pub orientation:  Orientation,
    pub instructions: String,
}

impl RobotPlan {
    pub fn new(x: i32, y: i32, orientation: Orientation, instructions: impl Into<String>) -> Self {
        Self { x, y, orientation, instructions: instructions.into() }
    }
}

/// Grid bounds plus the robots to run, in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MissionPlan {
    pub max_x:  i32,
    pub max_y:  i32,
    pub robots: Vec<RobotPlan>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a mission from a text file.
pub fn load_mission_file(path: &Path) -> MissionResult<MissionPlan> {
    let file = std::fs::File::open(path)?;
    load_mission_reader(file)
}

/// Like [`load_mission_file`] but accepts any `Read` source (stdin, a
/// `Cursor` in tests, …).
pub fn load_mission_reader<R: Read>(mut reader: R) -> MissionResult<MissionPlan> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    load_mission_str(&text)
}

/// Parse mission text already held in memory.
pub fn load_mission_str(text: &str) -> MissionResult<MissionPlan> {
    // 1-based line numbers for error messages.
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    // ── Grid bounds ───────────────────────────────────────────────────────
    let Some((line, bounds)) = lines.by_ref().find(|(_, l)| !l.is_empty()) else {
        return Err(parse_err(1, "missing grid bounds line"));
    };
    let (max_x, max_y) = parse_bounds(line, bounds)?;

    // ── Robot pairs ───────────────────────────────────────────────────────
    let mut robots = Vec::new();
    while let Some((line, position)) = lines.by_ref().find(|(_, l)| !l.is_empty()) {
        let (x, y, orientation) = parse_position(line, position)?;
        let Some((_, instructions)) = lines.next() else {
            return Err(parse_err(line, "robot position is not followed by an instruction line"));
        };
        robots.push(RobotPlan::new(x, y, orientation, instructions));
    }

    Ok(MissionPlan { max_x, max_y, robots })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_err(line: usize, message: impl Into<String>) -> MissionError {
    MissionError::Parse { line, message: message.into() }
}

fn parse_int(line: usize, what: &str, token: &str) -> MissionResult<i32> {
    token
        .parse::<i32>()
        .map_err(|_| parse_err(line, format!("invalid {what} {token:?}: expected an integer")))
}

fn parse_bounds(line: usize, text: &str) -> MissionResult<(i32, i32)> {
    match text.split_whitespace().collect::<Vec<_>>().as_slice() {
        [x, y] => Ok((parse_int(line, "maxX", x)?, parse_int(line, "maxY", y)?)),
        _ => Err(parse_err(line, format!("expected \"maxX maxY\", got {text:?}"))),
    }
}

fn parse_position(line: usize, text: &str) -> MissionResult<(i32, i32, Orientation)> {
    match text.split_whitespace().collect::<Vec<_>>().as_slice() {
        [x, y, o] => {
            let orientation = o
                .parse::<Orientation>()
                .map_err(|e| parse_err(line, e.to_string()))?;
            Ok((parse_int(line, "x", x)?, parse_int(line, "y", y)?, orientation))
        }
        _ => Err(parse_err(line, format!("expected \"x y orientation\", got {text:?}"))),
    }
}
