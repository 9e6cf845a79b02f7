// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Linear containers: an array list with explicit capacity doubling and a
//! LIFO stack.
//!
//! This crate fronts the two container crates of the workspace:
//!
//! - [`ArrayList`] — random-access list over a fixed-length slot buffer
//!   that is replaced wholesale (doubled) when full, with shift-based
//!   insert and remove.
//! - [`Stack`] — push/pop/peek LIFO container backed by the array list.
//!
//! # Quick Start
//!
//! ```rust
//! use shelf::{ArrayList, Stack, StackError};
//!
//! let mut list = ArrayList::with_capacity(2);
//! list.push(1);
//! list.push(2);
//! list.push(3); // doubles the buffer
//! assert_eq!(list.to_vec(), vec![1, 2, 3]);
//!
//! list.sort_by(|a, b| b.cmp(a));
//! assert_eq!(list.to_vec(), vec![3, 2, 1]);
//!
//! let mut stack = Stack::new();
//! stack.push("top");
//! assert_eq!(stack.peek(), Ok(&"top"));
//! assert_eq!(stack.pop(), Ok("top"));
//! assert!(matches!(stack.pop(), Err(StackError::Empty)));
//! ```
//!
//! Indexed operations (`insert`, `remove`, `get`) report invalid positions
//! through [`ListError`]; the positional shortcuts (`pop_front`,
//! `pop_back`, `front`, `back`) return `None` on an empty list instead.

pub use shelf_list::{ArrayList, DEFAULT_CAPACITY, ListError};
pub use shelf_stack::{Stack, StackError};
