// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use shelf_list::ArrayList;

use crate::error::StackError;

/// LIFO container with access restricted to the top.
///
/// Storage delegates to [`ArrayList`] with the top of the stack at the back
/// of the list, so every operation here is O(1) amortized; buffer growth
/// stays below this API.
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: ArrayList<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self {
            items: ArrayList::new(),
        }
    }

    /// Pushes `item` onto the top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] when the stack has no items.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop_back().ok_or(StackError::Empty)
    }

    /// Returns the top item without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`StackError::Empty`] when the stack has no items.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items.back().ok_or(StackError::Empty)
    }

    /// Whether the stack holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
