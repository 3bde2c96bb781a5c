use crate::bodies::Body;

/// Sink for per-second snapshots and the run's wall-clock measurement.
///
/// Drivers call `snapshot` once per simulated second (before that second's
/// physics) and once more after the final second, so a run of `n` seconds
/// with results enabled produces `n + 1` snapshots at indices `0..=n`.
/// `Send` because the parallel driver hands the reporter to its first
/// worker thread.
pub trait Reporter: Send {
    /// Receives the ordered body states at the given simulation second
    fn snapshot(&mut self, bodies: &[Body], second: u64);

    /// Receives the elapsed wall-clock duration of the physics loop
    fn timing(&mut self, elapsed_ms: f64);
}

/// Reporter that renders snapshots and timing to standard output
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Creates a new console reporter
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn snapshot(&mut self, bodies: &[Body], second: u64) {
        println!("Second {second}:");
        for (i, body) in bodies.iter().enumerate() {
            println!(
                "  body {i}: pos={} vel={} acc={}",
                body.position, body.velocity, body.acceleration
            );
        }
    }

    fn timing(&mut self, elapsed_ms: f64) {
        println!("Simulation took {elapsed_ms:.3} ms");
    }
}

/// Reporter that discards everything
#[derive(Debug, Default)]
pub struct NullReporter;

impl NullReporter {
    /// Creates a new null reporter
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for NullReporter {
    fn snapshot(&mut self, _bodies: &[Body], _second: u64) {}

    fn timing(&mut self, _elapsed_ms: f64) {}
}
