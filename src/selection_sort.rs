use crate::selection_sort_builder::SelectionSortBuilder;
use crate::sorts::selection_sort;

pub trait SelectionSort<T> {
    /// selection_sort sorts your `Vec<T>` or `[T]` in place into non-decreasing order.
    ///
    /// ```
    /// use selsort::SelectionSort;
    ///
    /// let mut values = [3, 1, 2];
    /// values.selection_sort();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn selection_sort(&mut self);

    fn selection_sort_builder(&'_ mut self) -> SelectionSortBuilder<'_, T>;
}

impl<T> SelectionSort<T> for Vec<T>
where
    T: Ord,
{
    fn selection_sort(&mut self) {
        selection_sort(self);
    }

    fn selection_sort_builder(&'_ mut self) -> SelectionSortBuilder<'_, T> {
        SelectionSortBuilder::new(self)
    }
}

impl<T> SelectionSort<T> for [T]
where
    T: Ord,
{
    fn selection_sort(&mut self) {
        selection_sort(self);
    }

    fn selection_sort_builder(&'_ mut self) -> SelectionSortBuilder<'_, T> {
        SelectionSortBuilder::new(self)
    }
}
