use crate::api::traits::has_frame_number::HasFrameNumber;
use core::cmp::Ordering;

/// Returns a sorted copy of `items` in non-decreasing order.
///
/// Top-down merge sort; equal elements keep their relative order.
/// The input is left untouched.
///
/// # Arguments
///
/// * `items` - The items to sort.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, T::cmp)
}

/// Returns a sorted copy of `items`, ordered by `compare`.
///
/// # Arguments
///
/// * `items` - The items to sort.
/// * `compare` - Comparison function. On [`Ordering::Equal`] the element
///   from the left half is taken first, which keeps the sort stable.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_recursive(items, &mut compare)
}

/// Helper function to sort items by their frame number.
///
/// # Arguments
///
/// * `items` - The items to sort.
pub fn sort_by_frame_number<T: HasFrameNumber + Clone>(items: &[T]) -> Vec<T> {
    merge_sort_by(items, |a, b| a.frame_number().cmp(&b.frame_number()))
}

fn sort_recursive<T, F>(items: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items.to_vec();
    }

    let (left, right) = items.split_at(items.len() / 2);
    let left = sort_recursive(left, compare);
    let right = sort_recursive(right, compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if compare(l, r) == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }

    // One side is exhausted, append the rest.
    merged.extend(left);
    merged.extend(right);
    merged
}
