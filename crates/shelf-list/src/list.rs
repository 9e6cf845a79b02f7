// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cmp::Ordering;

use crate::error::ListError;
use crate::sort;

/// Buffer capacity used by [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// Ordered random-access container over a fixed-length slot buffer.
///
/// Slots `[0, len)` hold items in list order; slots `[len, capacity)` are
/// empty. `None` is the typed empty-slot marker, so item values are never
/// overloaded to mean "unoccupied". Growth replaces the buffer wholesale:
/// a new buffer of double capacity is allocated, every item is moved
/// across, and the old buffer is released.
///
/// # Example
///
/// ```rust
/// use shelf_list::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.push("b");
/// list.push_front("a");
/// list.push("c");
///
/// assert_eq!(list.to_vec(), vec!["a", "b", "c"]);
/// assert_eq!(list.remove(1).unwrap(), "b");
/// assert_eq!(list.to_vec(), vec!["a", "c"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArrayList<T> {
    slots: Box<[Option<T>]>,
    len: usize,
}

impl<T> ArrayList<T> {
    /// Creates an empty list with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with the given number of slots.
    ///
    /// A capacity of 0 is clamped to 1, since doubling from zero would
    /// never produce a usable buffer.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelf_list::ArrayList;
    ///
    /// let list: ArrayList<u8> = ArrayList::with_capacity(4);
    /// assert_eq!(list.len(), 0);
    /// assert_eq!(list.capacity(), 4);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Self::empty_slots(capacity.max(1)),
            len: 0,
        }
    }

    fn empty_slots(capacity: usize) -> Box<[Option<T>]> {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        slots.into_boxed_slice()
    }

    /// Replaces the buffer with one of double capacity, moving every item.
    fn grow(&mut self) {
        let mut next = Self::empty_slots(self.slots.len() * 2);
        for (dst, src) in next.iter_mut().zip(self.slots.iter_mut()) {
            *dst = src.take();
        }
        self.slots = next;
    }

    /// Inserts `item` at `index`, shifting items at `index` and beyond one
    /// slot toward the back.
    ///
    /// `index == len` appends. Doubles the buffer first when it is full.
    /// O(len) for the shift.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InsertOutOfRange`] when `index > len`.
    pub fn insert(&mut self, index: usize, item: T) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::InsertOutOfRange {
                index,
                len: self.len,
            });
        }

        self.insert_at(index, item);
        Ok(())
    }

    /// Inserts at an index already validated to be `<= len`.
    fn insert_at(&mut self, index: usize, item: T) {
        if self.len == self.slots.len() {
            self.grow();
        }

        for i in (index..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[index] = Some(item);
        self.len += 1;
    }

    /// Appends `item` at the back. Equivalent to `insert(len, item)`.
    pub fn push(&mut self, item: T) {
        self.insert_at(self.len, item);
    }

    /// Prepends `item` at the front. Equivalent to `insert(0, item)`.
    pub fn push_front(&mut self, item: T) {
        self.insert_at(0, item);
    }

    /// Removes and returns the item at `index`, shifting subsequent items
    /// one slot toward the front.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] when `index >= len`, including
    /// every index on an empty list.
    pub fn remove(&mut self, index: usize) -> Result<T, ListError> {
        let len = self.len;
        if index >= len {
            return Err(ListError::OutOfBounds { index, len });
        }

        self.remove_at(index)
            .ok_or(ListError::OutOfBounds { index, len })
    }

    /// Removes at an index already validated to be `< len`.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        let item = self.slots[index].take();
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        item
    }

    /// Removes and returns the first item, or `None` on an empty list.
    ///
    /// The empty case is a sentinel, not an error, unlike [`remove`].
    ///
    /// [`remove`]: ArrayList::remove
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.remove_at(0)
    }

    /// Removes and returns the last item, or `None` on an empty list.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.remove_at(self.len - 1)
    }

    /// Removes the first item equal to `item` and returns its former index,
    /// or `None` when no slot matches.
    ///
    /// Equality is `PartialEq` value equality. Uses the same shift logic as
    /// [`remove`](ArrayList::remove).
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelf_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push(1);
    /// list.push(2);
    /// list.push(3);
    ///
    /// assert_eq!(list.remove_item(&2), Some(1));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// assert_eq!(list.remove_item(&2), None);
    /// ```
    pub fn remove_item(&mut self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let index = self.iter().position(|stored| stored == item)?;
        let _removed = self.remove_at(index);
        Some(index)
    }

    /// Returns whether any occupied slot holds an item equal to `item`.
    ///
    /// Linear `PartialEq` scan; always false on an empty list.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|stored| stored == item)
    }

    /// Returns a reference to the item at `index` without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::OutOfBounds`] when `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.slots[..self.len]
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(ListError::OutOfBounds {
                index,
                len: self.len,
            })
    }

    /// Returns a reference to the first item, or `None` on an empty list.
    pub fn front(&self) -> Option<&T> {
        self.slots[..self.len].first().and_then(Option::as_ref)
    }

    /// Returns a reference to the last item, or `None` on an empty list.
    pub fn back(&self) -> Option<&T> {
        self.slots[..self.len].last().and_then(Option::as_ref)
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the list holds no items.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots currently allocated, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Iterates over the occupied slots in list order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.slots[..self.len].iter().filter_map(Option::as_ref)
    }

    /// Drops every item and empties all slots. Capacity is unchanged.
    pub fn clear(&mut self) {
        for slot in self.slots[..self.len].iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Copies the occupied slots into a dense `Vec`, in list order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Reorders the items in place according to `compare`.
    ///
    /// `compare` follows the standard three-way convention
    /// (`Ordering::Less` means the first argument sorts earlier). The sort
    /// is an in-place quicksort: O(n log n) expected time, O(log n)
    /// auxiliary stack, and not stable.
    ///
    /// # Example
    ///
    /// ```rust
    /// use shelf_list::ArrayList;
    ///
    /// let mut list = ArrayList::new();
    /// list.push(3);
    /// list.push(1);
    /// list.push(2);
    ///
    /// list.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(list.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        // Empty slots never appear in [0, len), so the lifted comparator
        // only ever sees occupied slots.
        let mut lifted = |a: &Option<T>, b: &Option<T>| match (a.as_ref(), b.as_ref()) {
            (Some(a), Some(b)) => compare(a, b),
            _ => Ordering::Equal,
        };
        sort::quicksort(&mut self.slots[..self.len], &mut lifted);
    }

    /// Returns a sorted copy, leaving this list untouched.
    ///
    /// Shares the quicksort core with [`sort_by`](ArrayList::sort_by) and
    /// is likewise not stable.
    pub fn sorted_by<F>(&self, compare: F) -> Self
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut copy = self.clone();
        copy.sort_by(compare);
        copy
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists compare by occupied items only; capacity is ignored.
impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.push(item);
        }
        list
    }
}
