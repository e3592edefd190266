//! CSV report backend.
//!
//! One header row, then one row per robot:
//!
//! ```csv
//! robot_id,start_x,start_y,start_orientation,final_x,final_y,final_orientation,lost,error
//! 0,1,1,E,1,1,E,0,
//! 1,3,2,N,3,3,N,1,
//! 2,9,9,N,,,,,initial position (9, 9) is outside the world bounds (0..=5, 0..=3)
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use mr_world::World;

use crate::{MissionError, MissionObserver, MissionResult, RobotOutcome, RobotReport};

const HEADER: [&str; 9] = [
    "robot_id",
    "start_x",
    "start_y",
    "start_orientation",
    "final_x",
    "final_y",
    "final_orientation",
    "lost",
    "error",
];

/// A [`MissionObserver`] that writes one CSV row per robot report.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct CsvReportObserver<W: Write> {
    writer:     Writer<W>,
    last_error: Option<MissionError>,
}

impl CsvReportObserver<File> {
    /// Create (or truncate) `path` and write the header row.
    pub fn create(path: &Path) -> MissionResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> CsvReportObserver<W> {
    /// Wrap any `Write` sink and write the header row.
    pub fn new(sink: W) -> MissionResult<Self> {
        let mut writer = Writer::from_writer(sink);
        writer.write_record(HEADER)?;
        Ok(Self { writer, last_error: None })
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<MissionError> {
        self.last_error.take()
    }

    /// Flush and unwrap the inner sink.
    pub fn into_inner(self) -> MissionResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| MissionError::Io(e.into_error()))
    }

    fn write_report(&mut self, report: &RobotReport) -> MissionResult<()> {
        let start = report.start;
        let mut record = vec![
            report.robot.0.to_string(),
            start.x.to_string(),
            start.y.to_string(),
            start.orientation.to_string(),
        ];
        match &report.outcome {
            RobotOutcome::Completed(p) => record.extend([
                p.x.to_string(),
                p.y.to_string(),
                p.orientation.to_string(),
                (p.lost as u8).to_string(),
                String::new(),
            ]),
            RobotOutcome::Rejected(msg) => record.extend([
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                msg.clone(),
            ]),
        }
        self.writer.write_record(&record)?;
        Ok(())
    }

    fn store_err(&mut self, result: MissionResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> MissionObserver for CsvReportObserver<W> {
    fn on_robot_end(&mut self, report: &RobotReport) {
        let result = self.write_report(report);
        self.store_err(result);
    }

    fn on_mission_end(&mut self, _world: &World) {
        let result = self.writer.flush().map_err(MissionError::from);
        self.store_err(result);
    }
}
