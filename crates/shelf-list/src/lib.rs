// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Array list with explicit capacity doubling and shift-based editing.
//!
//! `ArrayList<T>` stores its items in a contiguous fixed-length slot buffer.
//! Each slot is either occupied or empty, and the occupied slots always form
//! a prefix of the buffer. When an insert finds every slot occupied, the
//! buffer is replaced wholesale by a new one of twice the capacity — an
//! explicit, observable reallocation step, never a hidden `Vec` resize.
//!
//! - **Positional access**: `insert`, `remove`, and `get` validate their
//!   index and return a [`ListError`] when it falls outside the list.
//! - **Positional shortcuts**: `pop_front`, `pop_back`, `front`, and `back`
//!   return `None` on an empty list instead of erroring.
//! - **Comparator sorting**: `sort_by` reorders in place, `sorted_by`
//!   returns a sorted copy; both share one in-place quicksort.
//!
//! # Example
//!
//! ```rust
//! use shelf_list::ArrayList;
//!
//! let mut list = ArrayList::with_capacity(2);
//! list.push(1);
//! list.push(2);
//! list.push(3); // buffer doubled here
//!
//! assert_eq!(list.len(), 3);
//! assert_eq!(list.capacity(), 4);
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//! ```

mod error;
mod list;
mod sort;

#[cfg(test)]
mod tests;

pub use error::ListError;
pub use list::{ArrayList, DEFAULT_CAPACITY};
