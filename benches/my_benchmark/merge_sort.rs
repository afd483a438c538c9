use crate::assets::{get_dropped_frame_sequence, FRAME_COUNTS};
use criterion::{black_box, Criterion};
use frame_gap_analyzer::utilities::arrange::merge_sort::merge_sort;

pub fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sort");

    for &count in &FRAME_COUNTS {
        let frames = get_dropped_frame_sequence(count);
        group.bench_function(format!("{}", count), |b| {
            b.iter(|| merge_sort(black_box(&frames)))
        });
    }

    group.finish();
}

pub fn bench_std_sort_baseline(c: &mut Criterion) {
    let mut group = c.benchmark_group("std_sort_baseline");

    for &count in &FRAME_COUNTS {
        let frames = get_dropped_frame_sequence(count);
        group.bench_function(format!("{}", count), |b| {
            b.iter(|| {
                let mut sorted = black_box(&frames).clone();
                sorted.sort();
                sorted
            })
        });
    }

    group.finish();
}
