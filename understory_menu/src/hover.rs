// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover state over nested rows.
//!
//! Hovering a row in a cascading menu also hovers every row it is nested
//! under, since each submenu is laid out inside its parent row. The hovered
//! set is therefore a chain of row paths from the top level down, and moving
//! the pointer only opens or closes the part of the chain that changed.
//!
//! ## Minimal example
//!
//! ```
//! use understory_menu::hover::{HoverEvent, HoverState, row_chain};
//!
//! let mut hover = HoverState::new();
//!
//! // Pointer lands on the first child of the second top-level row.
//! let events = hover.update_path(&row_chain(&[1, 0]));
//! assert_eq!(events, vec![
//!     HoverEvent::Enter(row_chain(&[1])[0].clone()),
//!     HoverEvent::Enter(row_chain(&[1, 0])[1].clone()),
//! ]);
//!
//! // Moving to its sibling leaves the first child only.
//! let events = hover.update_path(&row_chain(&[1, 1]));
//! assert_eq!(events.len(), 2);
//! assert!(matches!(events[0], HoverEvent::Leave(ref p) if p.as_slice() == [1, 0]));
//! assert!(matches!(events[1], HoverEvent::Enter(ref p) if p.as_slice() == [1, 1]));
//! ```

use alloc::vec::Vec;

use crate::item::ItemPath;

/// A hover transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HoverEvent<K> {
    /// The pointer entered the given node (outer→inner).
    Enter(K),
    /// The pointer left the given node (inner→outer).
    Leave(K),
}

/// Tracks the currently hovered root→target chain.
///
/// Updating the chain yields the minimal set of transitions:
/// - Leave events are emitted from inner-most to outer-most.
/// - Enter events are emitted from outer-most to inner-most.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverState<K: Clone + Eq> {
    current: Vec<K>,
}

impl<K: Clone + Eq> HoverState<K> {
    /// Nothing hovered.
    pub fn new() -> Self {
        Self {
            current: Vec::new(),
        }
    }

    /// The currently hovered chain, outermost first.
    pub fn current_path(&self) -> &[K] {
        &self.current
    }

    /// Forget the hovered chain, returning leave events (inner→outer).
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        let out = self
            .current
            .iter()
            .rev()
            .cloned()
            .map(HoverEvent::Leave)
            .collect();
        self.current.clear();
        out
    }

    /// Replace the hovered chain and return the transitions.
    pub fn update_path(&mut self, new_path: &[K]) -> Vec<HoverEvent<K>> {
        let shared = self
            .current
            .iter()
            .zip(new_path)
            .take_while(|(a, b)| a == b)
            .count();

        let mut out = Vec::with_capacity(self.current.len() - shared + new_path.len() - shared);
        out.extend(self.current[shared..].iter().rev().cloned().map(HoverEvent::Leave));
        out.extend(new_path[shared..].iter().cloned().map(HoverEvent::Enter));
        self.current.clear();
        self.current.extend_from_slice(new_path);
        out
    }
}

/// The chain of rows hovered when the pointer is over `row`: every prefix of
/// its path, outermost first.
pub fn row_chain(row: &[usize]) -> Vec<ItemPath> {
    (1..=row.len())
        .map(|depth| ItemPath::from_slice(&row[..depth]))
        .collect()
}
