//! Mission run configuration.

/// Knobs for [`Mission::run`][crate::Mission::run] and
/// [`Mission::run_parallel`][crate::Mission::run_parallel].
///
/// Fixed engine limits (grid size, instruction length) are constants in
/// `mr-world` and `mr-robot`, not configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct MissionConfig {
    /// Abort the mission on the first robot that fails to construct or hits
    /// an unknown instruction.  When `false` the failure is recorded as
    /// [`RobotOutcome::Rejected`][crate::RobotOutcome::Rejected] and the next
    /// robot runs.  Default: `true`.
    pub halt_on_error: bool,

    /// Worker thread count for the parallel runner.  `None` uses Rayon's
    /// global pool (all logical cores).
    pub num_threads: Option<usize>,
}

impl Default for MissionConfig {
    fn default() -> Self {
        Self {
            halt_on_error: true,
            num_threads:   None,
        }
    }
}
