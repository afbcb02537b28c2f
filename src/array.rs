use std::{
    fmt::{Debug, Display},
    hash::{BuildHasher, BuildHasherDefault, DefaultHasher, Hash, Hasher},
    ops::{Index, IndexMut},
};

use tracing::{debug, trace};

use crate::{
    config::{ArrayConfig, DEFAULT_CAPACITY, grown_capacity},
    error::{ArrayError, Result},
    iter::{IntoIter, Iter},
};

/// A resizable, index-addressable sequence with a self-managed capacity.
///
/// Elements live in a contiguous buffer of [`capacity`](Self::capacity) slots, of which the
/// first [`len`](Self::len) are occupied. Appending to a full array reallocates it to 1.5x its
/// capacity. Inserting or removing in the middle shifts the tail in place.
///
/// The capacity reported here is the array's own bookkeeping: it only grows through the growth
/// policy or [`ensure_capacity`](Self::ensure_capacity), and only shrinks through
/// [`trim_to_size`](Self::trim_to_size).
///
/// ```
/// use dynamic_array::DynamicArray;
///
/// let mut array = DynamicArray::new();
/// array.push(10);
/// array.push(30);
/// array.insert(1, 20).unwrap();
///
/// assert_eq!(array.to_string(), "[10, 20, 30]");
/// assert_eq!(array.remove(0), Ok(10));
/// assert_eq!(array.index_of(&30), Some(1));
/// ```
pub struct DynamicArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// An empty array with room for [`DEFAULT_CAPACITY`] elements.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        DynamicArray {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn with_config(config: ArrayConfig) -> Self {
        Self::with_capacity(config.initial_capacity)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Appends `value`, growing the buffer first if it is full. Always returns `true`.
    pub fn push(&mut self, value: T) -> bool {
        self.make_room_for(1);
        self.items.push(value);
        true
    }

    /// Inserts `value` so that it ends up at `index`, shifting everything after it one slot to the
    /// right. `index == len()` appends.
    ///
    /// # Errors
    /// [`ArrayError::IndexOutOfRange`] if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        if index > len {
            return Err(ArrayError::IndexOutOfRange { index, len });
        }
        self.make_room_for(1);
        self.items.insert(index, value);
        Ok(())
    }

    /// Appends every element of `items` in order, reserving room for all of them up front.
    ///
    /// Returns `false` without touching the array if `items` is empty.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let items = items.into_iter();
        let incoming = items.len();
        if incoming == 0 {
            return false;
        }
        self.ensure_capacity(self.items.len().saturating_add(incoming));
        for item in items {
            self.push(item);
        }
        true
    }

    /// # Errors
    /// [`ArrayError::IndexOutOfRange`] unless `index < len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(ArrayError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// # Errors
    /// [`ArrayError::IndexOutOfRange`] unless `index < len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfRange { index, len })
    }

    /// # Errors
    /// [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn first(&self) -> Result<&T> {
        self.items
            .first()
            .ok_or(ArrayError::EmptyContainer { operation: "first" })
    }

    /// # Errors
    /// [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn last(&self) -> Result<&T> {
        self.items
            .last()
            .ok_or(ArrayError::EmptyContainer { operation: "last" })
    }

    /// Replaces the element at `index`, handing back the one that was there.
    ///
    /// # Errors
    /// [`ArrayError::IndexOutOfRange`] unless `index < len()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Removes the element at `index`, shifting everything after it one slot to the left.
    ///
    /// # Errors
    /// [`ArrayError::IndexOutOfRange`] unless `index < len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(ArrayError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Removes the first element equal to `value`. Returns whether one was found.
    pub fn remove_item(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove(index).is_ok(),
            None => false,
        }
    }

    /// # Errors
    /// [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn remove_first(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(ArrayError::EmptyContainer {
                operation: "remove_first",
            });
        }
        self.remove(0)
    }

    /// # Errors
    /// [`ArrayError::EmptyContainer`] if the array is empty.
    pub fn remove_last(&mut self) -> Result<T> {
        self.items.pop().ok_or(ArrayError::EmptyContainer {
            operation: "remove_last",
        })
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let dropped = self.items.len();
        self.items.clear();
        if dropped > 0 {
            debug!(dropped, capacity = self.capacity, "cleared array");
        }
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().position(|item| item == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.items.iter().rposition(|item| item == value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// An independent copy of the occupied part of the buffer.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        Box::from(self.as_slice())
    }

    /// Copies as many leading elements as fit into `buffer` and returns how many were copied.
    pub fn to_array_into(&self, buffer: &mut [T]) -> usize
    where
        T: Clone,
    {
        let copied = self.items.len().min(buffer.len());
        buffer[..copied].clone_from_slice(&self.items[..copied]);
        copied
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Reallocates to exactly `min_capacity` slots if the array is currently smaller.
    pub fn ensure_capacity(&mut self, min_capacity: usize) {
        if min_capacity > self.capacity {
            self.reallocate(min_capacity, "reserve");
        }
    }

    /// Reallocates so that the capacity equals the length.
    pub fn trim_to_size(&mut self) {
        if self.items.len() < self.capacity {
            self.reallocate(self.items.len(), "trim");
        }
    }

    /// A new array holding copies of the elements in `from..to`.
    ///
    /// # Errors
    /// [`ArrayError::RangeOutOfRange`] if `to > len()` or `from > to`.
    pub fn sub_list(&self, from: usize, to: usize) -> Result<DynamicArray<T>>
    where
        T: Clone,
    {
        let len = self.items.len();
        if to > len || from > to {
            return Err(ArrayError::RangeOutOfRange { from, to, len });
        }
        let mut sub = DynamicArray::new();
        for item in &self.items[from..to] {
            sub.push(item.clone());
        }
        Ok(sub)
    }

    /// A fresh forward cursor over the elements.
    ///
    /// The iterator borrows the array, so it cannot be structurally modified until the iterator
    /// is dropped.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.items)
    }

    /// Order-sensitive hash: `h = 31 * h + hash(element)` starting from 1, with wrapping
    /// arithmetic. Equal arrays always produce equal codes.
    pub fn hash_code(&self) -> u64
    where
        T: Hash,
    {
        let element_hasher = BuildHasherDefault::<DefaultHasher>::default();
        self.items.iter().fold(1u64, |code, item| {
            code.wrapping_mul(31)
                .wrapping_add(element_hasher.hash_one(item))
        })
    }

    fn make_room_for(&mut self, additional: usize) {
        let required = self.items.len().saturating_add(additional);
        if required > self.capacity {
            self.reallocate(grown_capacity(self.capacity, required), "grow");
        }
    }

    fn reallocate(&mut self, new_capacity: usize, reason: &'static str) {
        debug_assert!(new_capacity >= self.items.len());
        trace!(
            reason,
            from = self.capacity,
            to = new_capacity,
            len = self.items.len(),
            "reallocating backing buffer"
        );
        let mut fresh = Vec::with_capacity(new_capacity);
        fresh.append(&mut self.items);
        self.items = fresh;
        self.capacity = new_capacity;
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = DynamicArray::new();
        copy.ensure_capacity(self.items.len());
        copy.items.extend_from_slice(&self.items);
        copy
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for DynamicArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.items == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for DynamicArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.items == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for DynamicArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.items == other
    }
}

impl<T: Hash> Hash for DynamicArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl<T: Display> Display for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (ind, item) in self.items.iter().enumerate() {
            if ind > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: Debug> Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

/// # Panics
/// If `index` is out of bounds, with the same message as [`ArrayError::IndexOutOfRange`].
impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> From<Vec<T>> for DynamicArray<T> {
    fn from(mut items: Vec<T>) -> Self {
        let capacity = items.len().max(DEFAULT_CAPACITY);
        items.reserve_exact(capacity - items.len());
        DynamicArray { items, capacity }
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(items: [T; N]) -> Self {
        Vec::from(items).into()
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.make_room_for(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items)
    }
}
