//! `mr-mission`: run a batch of robots over one shared world.
//!
//! # Mission flow
//!
//! ```text
//! text ──load_mission_*──▶ MissionPlan ──MissionBuilder──▶ Mission
//!                                                            │
//!   for each robot, in input order:                          │ run()
//!     ① on_robot_start                                       ▼
//!     ② Robot::new + process_instructions   (shared World, shared registry)
//!     ③ on_robot_end(RobotReport)
//!   on_mission_end(&World)
//! ```
//!
//! Order matters: scent left by robot *k* protects robot *k + 1*.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                      |
//! |------------|-------------------------------------------------------------|
//! | `parallel` | Adds `Mission::run_parallel` (Rayon).                       |
//! | `serde`    | Serde derives on `MissionConfig`, plans, and reports.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mr_mission::{MissionBuilder, NoopObserver, load_mission_str};
//!
//! let plan = load_mission_str("5 3\n1 1 E\nRFRFRFRF\n")?;
//! let mission = MissionBuilder::from_plan(plan).build()?;
//! for report in mission.run(&mut NoopObserver)? {
//!     println!("{report}");
//! }
//! ```

pub mod builder;
pub mod config;
pub mod csv_report;
pub mod error;
pub mod loader;
pub mod mission;
pub mod observer;
pub mod report;


pub use builder::MissionBuilder;
pub use config::MissionConfig;
pub use csv_report::CsvReportObserver;
pub use error::{MissionError, MissionResult};
pub use loader::{MissionPlan, RobotPlan, load_mission_file, load_mission_reader, load_mission_str};
pub use mission::Mission;
pub use observer::{MissionObserver, NoopObserver};
pub use report::{RobotOutcome, RobotReport};
