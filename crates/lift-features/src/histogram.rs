//! Cumulative demand histogram.

use lift_core::{Floor, FloorSet};

/// Per-floor cumulative count of demand origins since the run started.
///
/// Counts are stored densely, aligned to the served floor range, and are
/// monotonically increasing — the histogram is never reset during a run, so
/// its total always equals the number of demand events generated so far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemandHistogram {
    floors: FloorSet,
    counts: Vec<u64>,
    total:  u64,
}

impl DemandHistogram {
    pub fn new(floors: FloorSet) -> Self {
        Self {
            counts: vec![0; floors.len()],
            total: 0,
            floors,
        }
    }

    /// Count one request originating at `floor`.
    ///
    /// # Panics
    /// Panics if `floor` lies outside the served range; callers sample
    /// origins from the range, so this indicates a logic error upstream.
    pub fn record(&mut self, floor: Floor) {
        let i = (floor - self.floors.min()) as usize;
        self.counts[i] += 1;
        self.total += 1;
    }

    /// Counts in ascending floor order, aligned to the served range.
    #[inline]
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Total requests recorded so far.
    #[inline]
    pub fn total(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn floors(&self) -> &FloorSet {
        &self.floors
    }

    /// Iterate `(floor, count)` pairs in ascending floor order.
    pub fn iter(&self) -> impl Iterator<Item = (Floor, u64)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.floors.floor_at(i), c))
    }
}
