// Copyright (c) 2026 The Shelf Developers
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for shelf-stack.

use thiserror::Error;

/// Error type for `Stack` operations.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum StackError {
    /// Pop or peek on a stack with no items.
    #[error("stack is empty")]
    Empty,
}
