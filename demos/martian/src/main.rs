//! martian: run a martian robots mission from a file or stdin.
//!
//! Reads the classic mission text (grid bounds, then position/instruction
//! line pairs) and prints one result line per robot:
//!
//! ```text
//! $ printf '5 3\n1 1 E\nRFRFRFRF\n3 2 N\nFRRFLLFFRRFLL\n' | cargo run -p martian
//! 1 1 E
//! 3 3 N LOST
//! ```
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see scent being recorded.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mr_core::RobotId;
use mr_mission::{
    CsvReportObserver, MissionBuilder, MissionConfig, MissionObserver, RobotPlan, RobotReport,
    load_mission_file, load_mission_reader,
};
use mr_world::World;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "martian", about = "Simulate robots exploring a bounded grid on Mars")]
struct Args {
    /// Mission file.  Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Also write a CSV report to this path.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Record failing robots and carry on instead of stopping.
    #[arg(long)]
    keep_going: bool,

    /// Run robots concurrently against the shared world.
    #[arg(long)]
    parallel: bool,

    /// Worker threads for `--parallel` (default: all cores).
    #[arg(long, requires = "parallel")]
    threads: Option<usize>,
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Prints each report to stdout and forwards it to the optional CSV writer.
struct ConsoleObserver {
    csv: Option<CsvReportObserver<File>>,
}

impl MissionObserver for ConsoleObserver {
    fn on_robot_start(&mut self, robot: RobotId, plan: &RobotPlan) {
        tracing::debug!(%robot, x = plan.x, y = plan.y, orientation = %plan.orientation, "robot deployed");
    }

    fn on_robot_end(&mut self, report: &RobotReport) {
        println!("{report}");
        if let Some(csv) = self.csv.as_mut() {
            csv.on_robot_end(report);
        }
    }

    fn on_mission_end(&mut self, world: &World) {
        for marker in world.scents() {
            tracing::debug!(%marker, "scent");
        }
        if let Some(csv) = self.csv.as_mut() {
            csv.on_mission_end(world);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let plan = match &args.input {
        Some(path) => load_mission_file(path)
            .with_context(|| format!("loading mission from {}", path.display()))?,
        None => load_mission_reader(io::stdin().lock()).context("reading mission from stdin")?,
    };

    let config = MissionConfig {
        halt_on_error: !args.keep_going,
        num_threads:   args.threads,
    };
    let mission = MissionBuilder::from_plan(plan).config(config).build()?;

    let csv = match &args.csv {
        Some(path) => Some(
            CsvReportObserver::create(path)
                .with_context(|| format!("creating report {}", path.display()))?,
        ),
        None => None,
    };
    let mut observer = ConsoleObserver { csv };

    if args.parallel {
        mission.run_parallel(&mut observer)?;
    } else {
        mission.run(&mut observer)?;
    }

    if let Some(err) = observer.csv.as_mut().and_then(CsvReportObserver::take_error) {
        return Err(err).context("writing CSV report");
    }
    Ok(())
}
