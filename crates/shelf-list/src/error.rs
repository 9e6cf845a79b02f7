// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shelf-list.

use thiserror::Error;

/// Error type for `ArrayList` operations.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum ListError {
    /// Attempted to insert past the end of the list.
    ///
    /// Inserting at `index == len` is an append and is valid; anything
    /// beyond that leaves a gap of empty slots and is rejected.
    #[error("insert index {index} is out of range for list of length {len}")]
    InsertOutOfRange { index: usize, len: usize },

    /// Index outside the occupied range `[0, len)`.
    ///
    /// Also covers every indexed operation on an empty list.
    #[error("index {index} is out of bounds for list of length {len}")]
    OutOfBounds { index: usize, len: usize },
}
