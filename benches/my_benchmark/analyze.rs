use crate::assets::{get_dropped_frame_sequence, FRAME_COUNTS};
use criterion::{black_box, Criterion};
use frame_gap_analyzer::api::frame_analyzer::FrameAnalyzer;

pub fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");

    for &count in &FRAME_COUNTS {
        let mut analyzer = FrameAnalyzer::new(get_dropped_frame_sequence(count));
        group.bench_function(format!("{}", count), |b| {
            b.iter(|| black_box(analyzer.analyze().missing_count))
        });

        println!(
            "[analyze_{}] Missing frames: {}",
            count,
            analyzer.get_report().missing_count
        );
    }

    group.finish();
}
