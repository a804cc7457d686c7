use tracing::trace;

/// Returns the index of the earliest minimum of `bucket[from..]`.
///
/// The comparison is strict, so the candidate only moves on a strictly smaller value and the
/// first occurrence of the minimum wins. If `from` is at or past the end of `bucket`, `from` is
/// returned unchanged.
#[inline]
pub fn min_index<T>(bucket: &[T], from: usize) -> usize
where
    T: Ord,
{
    let mut low = from;

    for j in (from + 1)..bucket.len() {
        if bucket[low] > bucket[j] {
            low = j;
        }
    }

    low
}

/// Sorts `bucket` in place into non-decreasing order using selection sort.
///
/// Each pass swaps the earliest minimum of the unsorted suffix into place. Exactly
/// `len - 1` passes run, and the sort is not stable.
pub fn selection_sort<T>(bucket: &mut [T])
where
    T: Ord,
{
    if bucket.len() < 2 {
        return;
    }

    trace!(len = bucket.len(), "selection_sort");

    for i in 0..(bucket.len() - 1) {
        let low = min_index(bucket, i);
        bucket.swap(i, low);
    }

    debug_assert!(crate::utils::is_sorted(bucket));
}
