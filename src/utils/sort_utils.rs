use crate::SortError;

#[inline]
pub fn is_sorted<T>(bucket: &[T]) -> bool
where
    T: Ord,
{
    bucket.windows(2).all(|w| w[0] <= w[1])
}

/// Splits off the first `len` elements of `bucket`, or reports how far out of range `len` is.
#[inline]
pub fn checked_prefix<T>(bucket: &mut [T], len: usize) -> Result<&mut [T], SortError> {
    let capacity = bucket.len();

    bucket
        .get_mut(..len)
        .ok_or(SortError::LengthOutOfBounds { len, capacity })
}
