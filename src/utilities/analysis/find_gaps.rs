use crate::structs::{gap_range::GapRange, gap_report::GapReport};
use crate::FrameNumber;
use tracing::trace;

/// Scans a sorted frame sequence for missing runs.
///
/// Every adjacent pair more than one frame apart produces the gap
/// `[previous + 1, next - 1]`. Duplicates and consecutive frames produce
/// nothing, so sequences shorter than two frames always yield an empty
/// report.
///
/// # Arguments
///
/// * `sorted` - Frames in non-decreasing order, e.g. the output of
///   [`merge_sort`]. Descending pairs in unsorted input are skipped, so
///   every reported range still has `start <= end`.
///
/// [`merge_sort`]: crate::utilities::arrange::merge_sort::merge_sort
pub fn find_gaps(sorted: &[FrameNumber]) -> GapReport {
    let mut report = GapReport::default();
    for pair in sorted.windows(2) {
        let (previous, next) = (pair[0], pair[1]);

        // abs_diff avoids overflow between frames at opposite ends of i64.
        if next > previous && next.abs_diff(previous) > 1 {
            let gap = GapRange::new(previous + 1, next - 1);
            trace!(start = gap.start, end = gap.end, size = gap.len(), "found gap");
            report.push_gap(gap);
        }
    }

    report
}
