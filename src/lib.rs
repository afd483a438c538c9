//! # Frame Gap Analyzer
//! Sorts a sequence of frame identifiers and reports the runs of frames
//! missing from it.
//!
//! ```
//! use frame_gap_analyzer::prelude::*;
//!
//! let mut analyzer = FrameAnalyzer::new(vec![1, 2, 3, 5, 6, 10, 11, 16]);
//! let report = analyzer.analyze();
//! assert_eq!(report.missing_count, 8);
//! assert_eq!(report.longest_gap, Some(GapRange::new(12, 15)));
//! ```

/// Public High Level API
pub mod api {
    pub mod frame_analyzer;

    pub mod traits {
        pub mod has_frame_number;
    }
}

/// Plain value types produced by the analysis.
pub mod structs {
    /// An inclusive run of missing frames.
    pub mod gap_range;

    /// Everything found by a single analysis run.
    pub mod gap_report;
}

pub mod utilities {
    pub mod arrange {
        pub mod merge_sort;
    }

    pub mod analysis {
        pub mod find_gaps;
    }

    pub mod format {
        pub mod report_block;
    }

    pub mod parse {
        /// Turns user supplied text such as `1, 2, 5 -3` into frame numbers.
        pub mod frame_list;
    }

}

pub mod prelude;

/// Identifier of a single frame. Negative values are valid.
pub type FrameNumber = i64;
