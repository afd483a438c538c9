pub use crate::api::frame_analyzer::FrameAnalyzer;
pub use crate::api::traits::has_frame_number::HasFrameNumber;
pub use crate::structs::gap_range::GapRange;
pub use crate::structs::gap_report::GapReport;
pub use crate::utilities::analysis::find_gaps::find_gaps;
pub use crate::utilities::arrange::merge_sort::{merge_sort, merge_sort_by, sort_by_frame_number};
pub use crate::utilities::format::report_block::{render_report_block, DEFAULT_REPORT_TITLE};
pub use crate::utilities::parse::frame_list::{parse_frame_list, FrameListParseError};
pub use crate::FrameNumber;
