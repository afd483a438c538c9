use frame_gap_analyzer::FrameNumber;

/// Sequence sizes every benchmark is run against.
pub const FRAME_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

/// Builds a shuffled frame sequence of `count` frames with a gap after
/// every 13th frame and a duplicate every 31st.
///
/// Deterministic, so runs can be compared against each other.
pub fn get_dropped_frame_sequence(count: usize) -> Vec<FrameNumber> {
    let mut frames: Vec<FrameNumber> = (0..count as FrameNumber)
        .filter(|frame| frame % 13 != 0)
        .collect();

    let duplicates: Vec<FrameNumber> = frames.iter().copied().step_by(31).collect();
    frames.extend(duplicates);

    // Multiplicative shuffle. 7919 is prime and divides none of the lengths used.
    let len = frames.len();
    (0..len).map(|x| frames[(x * 7919) % len]).collect()
}
