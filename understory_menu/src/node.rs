// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-panel state and the mounted node tree.
//!
//! While the dropdown is open, every item has a mounted [`MenuNode`]. Items
//! with children also own a [`Submenu`]: an open flag, the resolved
//! orientation, a resize observation, and the nested nodes. Unmounting (the
//! dropdown closing) drops the whole tree, which resets every submenu and
//! releases every observation.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use understory_placement::{Orientation, resolve};

use crate::host::{Host, ListenerKind, Phase, Subscription};
use crate::item::{Item, ItemPath};

/// Open flag and orientation of one panel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    /// Whether the panel is shown.
    pub is_open: bool,
    /// Flip applied to the panel.
    pub orientation: Orientation,
}

/// Placement bookkeeping shared by root panels and submenus.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct PanelState {
    pub(crate) state: MenuState,
    measured: Option<Size>,
}

impl PanelState {
    /// Show the panel at its default position; orientation is re-resolved at
    /// the next measurement.
    pub(crate) fn open(&mut self) -> bool {
        if self.state.is_open {
            return false;
        }
        *self = Self {
            state: MenuState {
                is_open: true,
                orientation: Orientation::None,
            },
            measured: None,
        };
        true
    }

    pub(crate) fn close(&mut self) -> bool {
        let was_open = self.state.is_open;
        *self = Self::default();
        was_open
    }

    /// Resolve orientation from a post-layout measurement.
    ///
    /// `bounds` is where the panel currently sits, flipped or not. A panel at
    /// its default position flips whenever it overflows. A flipped panel
    /// keeps its flip while it fits; if it overflows where it is, it is
    /// re-resolved once per size so two overflowing positions cannot
    /// alternate. Collapsed panels are never measured.
    pub(crate) fn measure(&mut self, bounds: Rect, viewport: Rect) {
        if bounds.is_zero_area() {
            return;
        }
        let size = bounds.size();
        let resized = self.measured != Some(size);
        self.measured = Some(size);
        let orientation = match (self.state.orientation, resolve(bounds, viewport)) {
            (current, Orientation::None) => current,
            (Orientation::None, flip) => flip,
            (_, flip) if resized => flip,
            (current, _) => current,
        };
        if orientation != self.state.orientation {
            log::trace!(
                "panel {:?} resolved {:?} -> {:?}",
                bounds,
                self.state.orientation,
                orientation
            );
        }
        self.state.orientation = orientation;
    }
}

/// A nested panel owned by a parent row.
#[derive(Debug)]
pub(crate) struct Submenu<H: Host> {
    pub(crate) panel: PanelState,
    pub(crate) nodes: Vec<MenuNode<H>>,
    // Released when the submenu unmounts.
    _observer: Subscription<H>,
}

impl<H: Host> Submenu<H> {
    pub(crate) fn open(&mut self) -> bool {
        self.panel.open()
    }

    /// Close this submenu and every submenu nested inside it.
    pub(crate) fn close(&mut self) -> bool {
        for node in &mut self.nodes {
            if let Some(submenu) = &mut node.submenu {
                submenu.close();
            }
        }
        self.panel.close()
    }

    /// Apply an observed panel size.
    ///
    /// A non-empty panel is open; an empty one is closed.
    pub(crate) fn observe(&mut self, bounds: Rect, viewport: Rect) {
        if bounds.is_zero_area() {
            self.close();
        } else {
            self.panel.open();
            self.panel.measure(bounds, viewport);
        }
    }
}

/// One mounted row.
#[derive(Debug)]
pub(crate) struct MenuNode<H: Host> {
    pub(crate) submenu: Option<Submenu<H>>,
}

impl<H: Host> MenuNode<H> {
    /// Mount `item` and, recursively, its children.
    pub(crate) fn mount<T, R>(item: &Item<T, R>, host: &H) -> Self {
        let submenu = item.children.as_ref().map(|children| Submenu {
            panel: PanelState::default(),
            nodes: mount_all(children, host),
            _observer: Subscription::attach(host, ListenerKind::Resize, Phase::Target),
        });
        Self { submenu }
    }
}

/// Mount one node per item.
pub(crate) fn mount_all<T, R, H: Host>(items: &[Item<T, R>], host: &H) -> Vec<MenuNode<H>> {
    items.iter().map(|item| MenuNode::mount(item, host)).collect()
}

pub(crate) fn node_at<'a, H: Host>(nodes: &'a [MenuNode<H>], path: &[usize]) -> Option<&'a MenuNode<H>> {
    let (&first, rest) = path.split_first()?;
    let mut node = nodes.get(first)?;
    for &idx in rest {
        node = node.submenu.as_ref()?.nodes.get(idx)?;
    }
    Some(node)
}

pub(crate) fn submenu_at_mut<'a, H: Host>(
    nodes: &'a mut [MenuNode<H>],
    path: &[usize],
) -> Option<&'a mut Submenu<H>> {
    let (&first, rest) = path.split_first()?;
    let mut node = nodes.get_mut(first)?;
    for &idx in rest {
        node = node.submenu.as_mut()?.nodes.get_mut(idx)?;
    }
    node.submenu.as_mut()
}

/// Post-layout pass over mounted submenus, parents before children.
///
/// Submenus nested in a closed submenu cannot be visible and are skipped.
pub(crate) fn layout<H: Host>(
    nodes: &mut [MenuNode<H>],
    path: &mut ItemPath,
    viewport: Rect,
    measure: &mut impl FnMut(&crate::PanelId) -> Option<Rect>,
) {
    for (idx, node) in nodes.iter_mut().enumerate() {
        let Some(submenu) = &mut node.submenu else {
            continue;
        };
        path.push(idx);
        if let Some(bounds) = measure(&crate::PanelId::Submenu(path.clone())) {
            submenu.observe(bounds, viewport);
        }
        if submenu.panel.state.is_open {
            layout(&mut submenu.nodes, path, viewport, measure);
        }
        path.pop();
    }
}
