use crate::structs::gap_report::GapReport;

/// Title used by the command line tool when none is given.
pub const DEFAULT_REPORT_TITLE: &str = " FrameAnalyzer - Full Report ";

/// Width of the border on each side of the title.
const BORDER_WIDTH: usize = 30;

/// Renders a report as a text block framed by `=` borders.
///
/// ```text
/// ============================== FrameAnalyzer - Full Report ==============================
/// gaps: [[4, 4], [7, 9]], longest_gap: [7, 9], missing_count: 4
/// =========================================================================================
/// ```
///
/// The bottom border spans the full width of the title line.
pub fn render_report_block(report: &GapReport, title: &str) -> String {
    let border = "=".repeat(BORDER_WIDTH);
    let footer = "=".repeat(BORDER_WIDTH * 2 + title.chars().count());
    format!("{border}{title}{border}\n{report}\n{footer}")
}
