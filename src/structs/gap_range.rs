use crate::FrameNumber;
use core::fmt;
use derive_new::new;

/// A run of consecutive missing frames.
///
/// Both `start` and `end` are inclusive, and `start <= end` always holds for
/// ranges produced by [`find_gaps`].
///
/// [`find_gaps`]: crate::utilities::analysis::find_gaps::find_gaps
#[derive(new, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GapRange {
    /// First missing frame.
    pub start: FrameNumber,
    /// Last missing frame.
    pub end: FrameNumber,
}

// A range always covers at least one frame, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl GapRange {
    /// Number of frames covered by this range.
    ///
    /// Returned as `u64` since a range spanning most of `i64` does not fit
    /// back into a [`FrameNumber`]. Saturates for the one range that
    /// covers all of `i64`.
    pub fn len(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Returns true if `frame` falls inside this range.
    pub fn contains(&self, frame: FrameNumber) -> bool {
        (self.start..=self.end).contains(&frame)
    }
}

impl fmt::Display for GapRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl fmt::Debug for GapRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl From<GapRange> for (FrameNumber, FrameNumber) {
    fn from(value: GapRange) -> Self {
        (value.start, value.end)
    }
}
