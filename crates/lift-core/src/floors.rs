//! Floor numbering and the contiguous range of floors a building serves.

use std::fmt;

use crate::{CoreError, CoreResult};

/// A floor number.  Plain `i32` — buildings with basements use negatives.
pub type Floor = i32;

// ── FloorSet ──────────────────────────────────────────────────────────────────

/// The contiguous, inclusive range of floors served by the elevator.
///
/// Stored as its two endpoints; membership and index arithmetic are O(1).
/// A range must span at least two floors — with a single floor no
/// origin/destination pair can exist, so construction rejects it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FloorSet {
    min: Floor,
    max: Floor,
}

impl FloorSet {
    /// Create the range `min..=max`.
    ///
    /// Fails if `min >= max` (empty or single-floor ranges cannot generate
    /// demand).
    pub fn new(min: Floor, max: Floor) -> CoreResult<Self> {
        if min >= max {
            return Err(CoreError::Config(format!(
                "floor range {min}..={max} must contain at least two floors"
            )));
        }
        Ok(Self { min, max })
    }

    #[inline]
    pub fn min(&self) -> Floor {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Floor {
        self.max
    }

    /// Number of floors in the range.
    #[inline]
    pub fn len(&self) -> usize {
        (self.max - self.min) as usize + 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // construction guarantees at least two floors
    }

    #[inline]
    pub fn contains(&self, floor: Floor) -> bool {
        (self.min..=self.max).contains(&floor)
    }

    /// Zero-based position of `floor` within the range, for indexing into
    /// per-floor arrays.  `None` if the floor is outside the range.
    #[inline]
    pub fn index_of(&self, floor: Floor) -> Option<usize> {
        self.contains(floor)
            .then(|| (floor - self.min) as usize)
    }

    /// The floor at zero-based position `index`.
    ///
    /// # Panics
    /// Panics in debug mode if `index` is out of range.
    #[inline]
    pub fn floor_at(&self, index: usize) -> Floor {
        debug_assert!(index < self.len());
        self.min + index as Floor
    }

    /// Iterate floors in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Floor> + '_ {
        self.min..=self.max
    }
}

impl fmt::Display for FloorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "floors {}..={}", self.min, self.max)
    }
}
