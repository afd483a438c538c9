use crate::api::traits::has_frame_number::HasFrameNumber;
use crate::structs::gap_report::GapReport;
use crate::utilities::analysis::find_gaps::find_gaps;
use crate::utilities::arrange::merge_sort::merge_sort;
use crate::FrameNumber;
use derive_new::new;
use tracing::debug;

/// Finds the frames missing from a sequence of frame numbers.
///
/// The analyzer holds on to the frames it was created with and the report
/// of the last [`analyze`] call. The frames are never reordered; sorting
/// works on a private copy.
///
/// # Example
///
/// ```
/// use frame_gap_analyzer::prelude::*;
///
/// let mut analyzer = FrameAnalyzer::new(vec![5, 6, 7, 8, 9]);
/// analyzer.analyze();
/// assert!(analyzer.get_report().is_empty());
/// ```
///
/// [`analyze`]: FrameAnalyzer::analyze
#[derive(new, Debug, Clone)]
pub struct FrameAnalyzer {
    frames: Vec<FrameNumber>,

    #[new(default)]
    report: GapReport,
}

impl FrameAnalyzer {
    /// Creates an analyzer from any items that carry a frame number.
    pub fn from_items<T: HasFrameNumber>(items: &[T]) -> Self {
        Self::new(items.iter().map(HasFrameNumber::frame_number).collect())
    }

    /// The frames as originally supplied.
    pub fn frames(&self) -> &[FrameNumber] {
        &self.frames
    }

    /// Returns a sorted copy of the frames.
    pub fn sorted_frames(&self) -> Vec<FrameNumber> {
        merge_sort(&self.frames)
    }

    /// Computes the gap report, replacing the result of any previous call.
    pub fn analyze(&mut self) -> &GapReport {
        debug!(frames = self.frames.len(), "analyzing frame sequence");

        let sorted = self.sorted_frames();
        self.report = find_gaps(&sorted);

        debug!(
            gaps = self.report.gaps.len(),
            missing = self.report.missing_count,
            "frame analysis complete"
        );
        &self.report
    }

    /// Returns the report of the last [`analyze`] call.
    ///
    /// Before the first call this is an empty report.
    ///
    /// [`analyze`]: FrameAnalyzer::analyze
    pub fn get_report(&self) -> &GapReport {
        &self.report
    }

    /// Consumes the analyzer, returning its report.
    pub fn into_report(self) -> GapReport {
        self.report
    }
}
