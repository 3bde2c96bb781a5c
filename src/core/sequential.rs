use crate::bodies::Body;
use crate::collision::handle_collisions;
use crate::core::{OutputMode, Reporter};
use crate::forces::update_acceleration;
use crate::integration::step;

use std::time::{Duration, Instant};

/// Single-threaded driver: composes the kernel and integrator over all
/// bodies, one simulated second at a time.
///
/// Per second: snapshot (if requested), acceleration update for every index
/// in ascending order, one collision pass, then integration for every body.
/// A closing snapshot at index `seconds` follows the loop. The returned
/// duration brackets the loop only, so the closing snapshot is excluded
/// while per-second snapshots inside the loop are included.
pub(crate) fn run(
    bodies: &mut [Body],
    seconds: u64,
    output: OutputMode,
    reporter: &mut dyn Reporter,
) -> Duration {
    let start = Instant::now();

    for second in 0..seconds {
        if output.show_results() {
            reporter.snapshot(bodies, second);
        }

        for index in 0..bodies.len() {
            update_acceleration(bodies, index);
        }

        handle_collisions(bodies);

        for body in bodies.iter_mut() {
            step(body);
        }
    }

    let elapsed = start.elapsed();

    if output.show_results() {
        reporter.snapshot(bodies, seconds);
    }

    elapsed
}
