use crate::printer::{sort_and_print, sort_and_write};
use crate::sorts::selection_sort;
use crate::utils::checked_prefix;
use crate::SortError;
use std::fmt::Display;
use std::io::Write;
use tracing::debug;

pub struct SelectionSortBuilder<'a, T> {
    data: &'a mut [T],
    len: Option<usize>,
}

impl<'a, T> SelectionSortBuilder<'a, T>
where
    T: Ord,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self { data, len: None }
    }

    /// Restricts the sort, and any output, to the first `len` elements. Elements after the
    /// prefix are never read or moved.
    pub fn with_len(mut self, len: usize) -> Self {
        self.len = Some(len);

        self
    }

    pub fn with_full_len(mut self) -> Self {
        self.len = None;

        self
    }

    fn into_prefix(self) -> Result<&'a mut [T], SortError> {
        match self.len {
            Some(len) => checked_prefix(self.data, len),
            None => Ok(self.data),
        }
    }

    pub fn sort(self) -> Result<(), SortError> {
        let prefix = self.into_prefix()?;

        // By definition, this is already sorted
        if prefix.len() <= 1 {
            return Ok(());
        }

        debug!(len = prefix.len(), "sorting prefix");
        selection_sort(prefix);

        Ok(())
    }

    pub fn sort_and_write<W>(self, out: W) -> Result<(), SortError>
    where
        T: Display,
        W: Write,
    {
        sort_and_write(self.into_prefix()?, out)
    }

    pub fn sort_and_print(self) -> Result<(), SortError>
    where
        T: Display,
    {
        sort_and_print(self.into_prefix()?)
    }
}
