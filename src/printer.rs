use crate::sorts::selection_sort;
use crate::SortError;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::debug;

/// Writes each value followed by a single space. No newline is written.
pub fn write_values<T, W>(mut out: W, values: &[T]) -> io::Result<()>
where
    T: Display,
    W: Write,
{
    for v in values {
        write!(out, "{} ", v)?;
    }

    Ok(())
}

/// Sorts `values` in place, then writes them to `out` in the `write_values` format.
///
/// ```
/// let mut values = [5, 3, 8, 1];
/// let mut out = Vec::new();
/// selsort::sort_and_write(&mut values, &mut out).unwrap();
///
/// assert_eq!(values, [1, 3, 5, 8]);
/// assert_eq!(out, b"1 3 5 8 ");
/// ```
pub fn sort_and_write<T, W>(values: &mut [T], mut out: W) -> Result<(), SortError>
where
    T: Ord + Display,
    W: Write,
{
    selection_sort(values);
    write_values(&mut out, values)?;
    out.flush()?;

    debug!(len = values.len(), "wrote sorted values");

    Ok(())
}

/// Sorts `values` in place, then prints them to stdout.
pub fn sort_and_print<T>(values: &mut [T]) -> Result<(), SortError>
where
    T: Ord + Display,
{
    let stdout = io::stdout();
    sort_and_write(values, stdout.lock())
}
