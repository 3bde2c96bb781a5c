#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The evaluation strategy driving the physics through time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Strategy {
    /// Single-threaded per-second loop
    #[default]
    Sequential,

    /// Fixed thread team synchronized by a barrier
    Parallel,

    /// Reserved; rejected as unimplemented
    Gpu,
}

/// What the run reports: per-second snapshots, wall-clock timing, both, or
/// nothing. A four-way enumeration, not independent booleans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum OutputMode {
    /// No snapshots, no timing
    #[default]
    None,

    /// Timing only
    Performance,

    /// Snapshots only
    Results,

    /// Snapshots and timing
    All,
}

impl OutputMode {
    /// Whether per-second snapshots are emitted
    #[inline]
    pub fn show_results(&self) -> bool {
        matches!(self, OutputMode::Results | OutputMode::All)
    }

    /// Whether the elapsed wall-clock duration is reported
    #[inline]
    pub fn show_performance(&self) -> bool {
        matches!(self, OutputMode::Performance | OutputMode::All)
    }
}

/// Configuration parameters for one simulation run
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// The evaluation strategy
    pub strategy: Strategy,

    /// Thread count for the parallel strategy; 0 means one thread per body.
    /// A count exceeding the body count is legal and leaves the surplus
    /// threads with no assigned indices.
    pub threads: usize,

    /// The number of whole seconds to simulate; must be at least 1
    pub seconds: u64,

    /// The output verbosity
    pub output: OutputMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Sequential,
            threads: 0,
            seconds: 1,
            output: OutputMode::None,
        }
    }
}
