/// Static striped partition of the body index space across a thread team.
///
/// Thread `t` of `threads` owns indices `t, t + threads, t + 2*threads, …`
/// below `body_count`. The index space is padded up to a multiple of the
/// team size, so every thread sees the same number of stride positions
/// (`ceil(body_count / threads)`) whether or not each position carries a
/// valid index. The parallel driver relies on that equality to keep every
/// thread's barrier-wait count identical.
#[derive(Debug, Clone, Copy)]
pub struct StridePartition {
    thread: usize,
    threads: usize,
    body_count: usize,
}

impl StridePartition {
    /// Creates the partition for one thread of the team
    pub fn new(thread: usize, threads: usize, body_count: usize) -> Self {
        debug_assert!(threads > 0);
        debug_assert!(thread < threads);
        Self {
            thread,
            threads,
            body_count,
        }
    }

    /// The number of stride positions every thread steps through,
    /// `ceil(body_count / threads)`
    pub fn positions(&self) -> usize {
        self.body_count.div_ceil(self.threads)
    }

    /// The body index this thread owns at the given stride position, or
    /// `None` when the padded position falls beyond the body count
    pub fn index_at(&self, position: usize) -> Option<usize> {
        let index = self.thread + position * self.threads;
        (index < self.body_count).then_some(index)
    }

    /// Iterates over the valid body indices owned by this thread
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.positions()).filter_map(|position| self.index_at(position))
    }
}
