use crate::bodies::Body;
use crate::collision::handle_collisions;
use crate::core::{OutputMode, Reporter, StridePartition};
use crate::forces::pairwise_acceleration;
use crate::integration::step;
use crate::math::Vector3;

use std::sync::Barrier;
use std::thread;
use std::time::{Duration, Instant};

/// View over the shared body array enabling the barrier-phased thread team
/// to cooperate on it without locks.
///
/// # Safety
///
/// Soundness rests on the phase protocol in [`worker`], not on this type:
///
/// - During Phase B, only the stride owner of index `i` writes
///   `bodies[i].acceleration`/`collided` (through [`write_acceleration`]);
///   concurrent readers copy only `position` and `mass`, which no thread
///   writes during that phase. Reads and writes go through raw place
///   expressions, so no reference to a body is held across thread
///   boundaries.
/// - During Phase D, each thread touches only the bodies it owns in the
///   stride partition.
/// - [`as_slice`] and [`as_mut_slice`] are materialized only while every
///   other thread is parked at (or running toward) a barrier it has no
///   body access before.
///
/// [`worker`]: worker
/// [`write_acceleration`]: SharedBodies::write_acceleration
/// [`as_slice`]: SharedBodies::as_slice
/// [`as_mut_slice`]: SharedBodies::as_mut_slice
struct SharedBodies {
    ptr: *mut Body,
    len: usize,
}

unsafe impl Send for SharedBodies {}
unsafe impl Sync for SharedBodies {}

impl SharedBodies {
    fn new(bodies: &mut [Body]) -> Self {
        Self {
            ptr: bodies.as_mut_ptr(),
            len: bodies.len(),
        }
    }

    fn len(&self) -> usize {
        self.len
    }

    /// Copies the position of body `index` out of the shared array
    #[inline]
    unsafe fn position(&self, index: usize) -> Vector3 {
        debug_assert!(index < self.len);
        (*self.ptr.add(index)).position
    }

    /// Copies the mass of body `index` out of the shared array
    #[inline]
    unsafe fn mass(&self, index: usize) -> f64 {
        debug_assert!(index < self.len);
        (*self.ptr.add(index)).mass
    }

    /// Stores a freshly computed acceleration and clears the collision flag,
    /// the Phase B write set for one owned index
    #[inline]
    unsafe fn write_acceleration(&self, index: usize, acceleration: Vector3) {
        debug_assert!(index < self.len);
        let body = self.ptr.add(index);
        (*body).acceleration = acceleration;
        (*body).collided = false;
    }

    /// Exclusive access to one owned body (Phase D)
    #[allow(clippy::mut_from_ref)]
    #[inline]
    unsafe fn body_mut(&self, index: usize) -> &mut Body {
        debug_assert!(index < self.len);
        &mut *self.ptr.add(index)
    }

    /// Shared view of the whole array (snapshots)
    unsafe fn as_slice(&self) -> &[Body] {
        std::slice::from_raw_parts(self.ptr, self.len)
    }

    /// Exclusive view of the whole array (Phase C, thread 0 only)
    #[allow(clippy::mut_from_ref)]
    unsafe fn as_mut_slice(&self) -> &mut [Body] {
        std::slice::from_raw_parts_mut(self.ptr, self.len)
    }
}

/// Barrier-phased driver: reproduces the sequential driver's physics,
/// partitioned across a fixed team of threads.
///
/// A requested thread count of 0 resolves to one thread per body; a count
/// exceeding the body count leaves the surplus threads with no assigned
/// indices but the same barrier discipline. Threads are created once per run
/// and joined at the end; the returned duration brackets spawn through join.
///
/// Thread spawn or join failure is logged and the run continues (fail-soft,
/// inherited from the source design). A missing team member leaves its
/// striped indices unprocessed and, with a fixed-size barrier, can stall the
/// remaining team; the condition is reported, not recovered.
pub(crate) fn run(
    bodies: &mut [Body],
    threads: usize,
    seconds: u64,
    output: OutputMode,
    reporter: &mut dyn Reporter,
) -> Duration {
    let team = if threads == 0 { bodies.len() } else { threads };
    let barrier = Barrier::new(team);
    let shared = SharedBodies::new(bodies);

    let start = Instant::now();

    thread::scope(|scope| {
        let mut reporter = Some(reporter);
        let mut handles = Vec::with_capacity(team);

        for thread_id in 0..team {
            // Only the first thread reports; the rest never touch the sink.
            let reporter = if thread_id == 0 { reporter.take() } else { None };
            let barrier = &barrier;
            let shared = &shared;

            let spawned = thread::Builder::new()
                .name(format!("nbody-worker-{thread_id}"))
                .spawn_scoped(scope, move || {
                    worker(thread_id, team, seconds, output, barrier, shared, reporter)
                });

            match spawned {
                Ok(handle) => handles.push((thread_id, handle)),
                Err(e) => log::warn!("failed to spawn worker thread {thread_id}: {e}"),
            }
        }

        for (thread_id, handle) in handles {
            if handle.join().is_err() {
                log::warn!("worker thread {thread_id} panicked");
            }
        }
    });

    start.elapsed()
}

/// The per-second four-phase protocol, executed identically by every thread.
///
/// The barrier enforces a strict total order of phases within each second:
/// snapshot (A), acceleration (B), collision (C), integration (D). Within
/// Phases B and D every thread waits once per stride position, valid index
/// or not, so the team's barrier-wait counts stay identical — a prerequisite
/// for correctness with a fixed-size barrier. That per-stride wait also
/// serializes progress across stride positions; it costs parallelism but is
/// preserved to match the source protocol exactly.
fn worker(
    thread_id: usize,
    team: usize,
    seconds: u64,
    output: OutputMode,
    barrier: &Barrier,
    shared: &SharedBodies,
    mut reporter: Option<&mut dyn Reporter>,
) {
    let partition = StridePartition::new(thread_id, team, shared.len());

    for second in 0..seconds {
        // Phase A: snapshot for the current second, before any physics.
        if output.show_results() {
            if let Some(reporter) = reporter.as_mut() {
                // SAFETY: no thread writes bodies between the previous
                // second's final barrier and the Phase A barrier below.
                reporter.snapshot(unsafe { shared.as_slice() }, second);
            }
        }
        barrier.wait();

        // Phase B: recompute accelerations for owned indices.
        for position in 0..partition.positions() {
            if let Some(index) = partition.index_at(position) {
                // SAFETY: Phase B writes only `acceleration`/`collided` of
                // owned indices; positions and masses are stable.
                let acceleration = unsafe { accumulate_gravity(shared, index) };
                unsafe { shared.write_acceleration(index, acceleration) };
            }
            barrier.wait();
        }

        // Phase C: collisions, single-threaded by policy so overlapping
        // pairs are never resolved concurrently.
        if thread_id == 0 {
            // SAFETY: between Phase B's final wait and the barrier below,
            // every other thread is parked and touches no body.
            handle_collisions(unsafe { shared.as_mut_slice() });
        }
        barrier.wait();

        // Phase D: integrate owned indices.
        for position in 0..partition.positions() {
            if let Some(index) = partition.index_at(position) {
                // SAFETY: the integrator reads and writes only this body,
                // and stride ownership makes the access exclusive.
                step(unsafe { shared.body_mut(index) });
            }
            barrier.wait();
        }
    }

    // Closing snapshot at index `seconds`. All writes ended at the final
    // Phase D barrier, so no further synchronization is needed.
    if output.show_results() {
        if let Some(reporter) = reporter.as_mut() {
            reporter.snapshot(unsafe { shared.as_slice() }, seconds);
        }
    }
}

/// Phase B gravity sum through the raw view.
///
/// Iterates attractors in the same ascending order as
/// [`crate::forces::update_acceleration`] so both drivers accumulate in the
/// identical sequence and agree bitwise.
///
/// # Safety
///
/// No thread may write any body's `position` or `mass` while this runs.
unsafe fn accumulate_gravity(shared: &SharedBodies, index: usize) -> Vector3 {
    let at = shared.position(index);
    let mut acceleration = Vector3::zero();

    for j in 0..shared.len() {
        if j == index {
            continue;
        }
        acceleration += pairwise_acceleration(at, shared.position(j), shared.mass(j));
    }

    acceleration
}
