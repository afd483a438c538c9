use super::gap_range::GapRange;
use core::fmt;

/// Result of analyzing a frame sequence.
///
/// Invariants:
/// - `missing_count` equals the sum of [`GapRange::len`] over `gaps`.
/// - `longest_gap` is [`None`] if and only if `gaps` is empty.
/// - When several gaps share the maximum length, `longest_gap` is the
///   first of them in `gaps`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GapReport {
    /// Missing ranges in ascending order.
    pub gaps: Vec<GapRange>,
    /// The widest entry of `gaps`.
    pub longest_gap: Option<GapRange>,
    /// Total number of missing frames.
    pub missing_count: u64,
}

impl GapReport {
    /// Appends a gap, keeping `missing_count` and `longest_gap` in sync.
    ///
    /// Gaps must be pushed in ascending order; `longest_gap` only moves on
    /// a strictly larger gap.
    pub fn push_gap(&mut self, gap: GapRange) {
        let size = gap.len();
        self.missing_count = self.missing_count.saturating_add(size);

        match self.longest_gap {
            Some(longest) if longest.len() >= size => {}
            _ => self.longest_gap = Some(gap),
        }

        self.gaps.push(gap);
    }

    /// True when no frames are missing.
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl fmt::Display for GapReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gaps: {:?}, longest_gap: ", self.gaps)?;
        match self.longest_gap {
            Some(longest) => write!(f, "{}", longest)?,
            None => f.write_str("[]")?,
        }
        write!(f, ", missing_count: {}", self.missing_count)
    }
}
