use crate::bodies::Body;
use crate::core::{parallel, sequential, Reporter, SimulationConfig, Strategy};
use crate::error::SimulationError;
use crate::Result;

/// The main simulation entry point: owns the initial body set and dispatches
/// runs to the configured evaluation strategy.
///
/// Every run operates on a fresh copy of the initial set, so repeated
/// `simulate` calls are independent and can be compared against each other
/// (the primary use of this engine is checking that the strategies agree on
/// the physics while differing in wall-clock cost).
pub struct Simulator {
    /// The initial body states shared by every run
    bodies: Vec<Body>,
}

impl Simulator {
    /// Creates a simulator over the given initial body set
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies }
    }

    /// Returns the initial body states
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Runs the simulation for the configured number of seconds and returns
    /// the final body states.
    ///
    /// Preconditions are checked before any physics executes: the body set
    /// must be non-empty, the duration at least one second, and the strategy
    /// implemented. Failing a check leaves no partial side effects.
    ///
    /// Snapshots go to `reporter` per the configured output mode, as does
    /// one wall-clock measurement of the physics loop in milliseconds.
    pub fn simulate(
        &self,
        config: &SimulationConfig,
        reporter: &mut dyn Reporter,
    ) -> Result<Vec<Body>> {
        if self.bodies.is_empty() {
            return Err(SimulationError::EmptyBodySet);
        }
        if config.seconds == 0 {
            return Err(SimulationError::InvalidDuration(config.seconds));
        }

        let mut bodies = self.bodies.clone();

        let elapsed = match config.strategy {
            Strategy::Sequential => {
                sequential::run(&mut bodies, config.seconds, config.output, reporter)
            }
            Strategy::Parallel => parallel::run(
                &mut bodies,
                config.threads,
                config.seconds,
                config.output,
                reporter,
            ),
            Strategy::Gpu => return Err(SimulationError::Unimplemented("gpu")),
        };

        if config.output.show_performance() {
            reporter.timing(elapsed.as_secs_f64() * 1_000.0);
        }

        Ok(bodies)
    }
}
