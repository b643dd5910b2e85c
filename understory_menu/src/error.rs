// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors returned by the dropdown API.

use crate::item::ItemPath;

/// Misuse of the dropdown API.
///
/// These never come from user interaction itself (a disabled row or a row
/// without a value is not an error); they flag host code routing an event
/// the dropdown cannot apply.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    /// The path does not address a row of the item tree.
    #[error("no menu row at {path:?}")]
    UnknownItem {
        /// The offending path.
        path: ItemPath,
    },
    /// Rows can only be activated while the dropdown is open.
    #[error("the dropdown is closed")]
    Closed,
}
