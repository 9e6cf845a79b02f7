// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LIFO stack over the shelf-list array list.
//!
//! Access is restricted to the most-recently-pushed end. Popping or peeking
//! an empty stack is an error, never a silent default.
//!
//! # Example
//!
//! ```rust
//! use shelf_stack::{Stack, StackError};
//!
//! let mut stack = Stack::new();
//! assert!(matches!(stack.pop(), Err(StackError::Empty)));
//!
//! stack.push(5);
//! assert_eq!(stack.pop().unwrap(), 5);
//! assert!(stack.is_empty());
//! ```

mod error;
mod stack;

#[cfg(test)]
mod tests;

pub use error::StackError;
pub use stack::Stack;
