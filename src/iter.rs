use std::iter::FusedIterator;

use crate::error::{ArrayError, Result};

/// Forward cursor over a [`DynamicArray`](crate::DynamicArray), created by
/// [`DynamicArray::iter`](crate::DynamicArray::iter).
///
/// Besides the usual [`Iterator`] interface it exposes the cursor directly: [`has_next`] and
/// [`try_next`], the latter reporting an exhausted cursor as an error instead of `None`.
/// A finished cursor stays finished; iterate again by asking the array for a new one.
///
/// [`has_next`]: Iter::has_next
/// [`try_next`]: Iter::try_next
#[derive(Debug)]
pub struct Iter<'a, T> {
    items: &'a [T],
    cursor: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(items: &'a [T]) -> Iter<'a, T> {
        Iter { items, cursor: 0 }
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.items.len()
    }

    /// # Errors
    /// [`ArrayError::NoSuchElement`] once every element has been yielded.
    pub fn try_next(&mut self) -> Result<&'a T> {
        let item = self.items.get(self.cursor).ok_or(ArrayError::NoSuchElement {
            position: self.cursor,
        })?;
        self.cursor += 1;
        Ok(item)
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            items: self.items,
            cursor: self.cursor,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.try_next().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.items.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator returned by `DynamicArray::into_iter`.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(items: Vec<T>) -> IntoIter<T> {
        IntoIter {
            inner: items.into_iter(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod test {
    use insta::assert_snapshot;

    use crate::{ArrayError, DynamicArray};

    #[test]
    fn cursor_walks_then_fails() {
        let array = DynamicArray::from([1, 2]);
        let mut iter = array.iter();

        assert!(iter.has_next());
        assert_eq!(iter.try_next(), Ok(&1));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.try_next(), Ok(&2));
        assert!(!iter.has_next());

        let err = iter.try_next().unwrap_err();
        assert_eq!(err, ArrayError::NoSuchElement { position: 2 });
        assert_snapshot!(err, @"no element at position 2: iteration has ended");
        assert_eq!(iter.next(), None);
        assert_eq!(iter.try_next(), Err(err));
    }

    #[test]
    fn empty_array_has_nothing_to_yield() {
        let array: DynamicArray<String> = DynamicArray::new();
        let mut iter = array.iter();
        assert!(!iter.has_next());
        assert_eq!(
            iter.try_next(),
            Err(ArrayError::NoSuchElement { position: 0 })
        );
    }

    #[test]
    fn fresh_iterators_restart() {
        let array = DynamicArray::from(["a", "b", "c"]);
        let first_pass: Vec<_> = array.iter().collect();
        let mut partial = array.iter();
        partial.next();
        let resumed = partial.clone();

        assert_eq!(first_pass, [&"a", &"b", &"c"]);
        assert_eq!(resumed.copied().collect::<String>(), "bc");
        assert_eq!(array.iter().count(), 3);
    }

    #[test]
    fn for_loops() {
        let array = DynamicArray::from([3, 4, 5]);
        let mut sum = 0;
        for n in &array {
            sum += n;
        }
        assert_eq!(sum, 12);

        let mut owned = array.into_iter();
        assert_eq!(owned.len(), 3);
        assert_eq!(owned.next(), Some(3));
        assert_eq!(owned.collect::<Vec<_>>(), [4, 5]);
    }
}
