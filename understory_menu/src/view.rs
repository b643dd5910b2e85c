// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless render model.
//!
//! [`Dropdown::view`](crate::Dropdown::view) describes what to draw: panels,
//! rows, their class tokens, widths and anchor offsets. Hosts translate this
//! into their own widgets or elements; nothing here paints.
//!
//! Every mounted submenu appears in the model, open or not, mirroring a
//! hidden-but-present element. Check [`PanelView::state`] (or the
//! [`SUBMENU_OPENED`](crate::class::SUBMENU_OPENED) token) before showing one.

use alloc::vec::Vec;

use understory_placement::{Length, Offsets, resolved_root_offsets, resolved_submenu_offsets};

use crate::PanelId;
use crate::class::{self, ClassList};
use crate::host::Host;
use crate::item::{Item, ItemPath};
use crate::node::{MenuNode, MenuState};

/// Custom row renderer.
pub(crate) type RenderFn<T, R> = dyn Fn(&Item<T, R>) -> R;

/// The whole dropdown: container plus, while open, the root panel.
#[derive(Debug)]
pub struct DropdownView<'a, T, R> {
    /// Container tokens: [`class::CONTAINER`] and the configured extra token.
    pub classes: ClassList<'a>,
    /// Whether the root panel is shown.
    pub is_open: bool,
    /// The root panel, present only while open.
    pub menu: Option<PanelView<'a, T, R>>,
}

/// One menu panel.
#[derive(Debug)]
pub struct PanelView<'a, T, R> {
    /// Which panel this is; matches the ids passed to the layout pass.
    pub id: PanelId,
    /// Structural, orientation and state tokens.
    pub classes: ClassList<'a>,
    /// Panel width.
    pub width: Length,
    /// Open flag and orientation.
    pub state: MenuState,
    /// Anchor offsets for the current orientation, relative to the trigger
    /// container (root) or the parent row (submenus).
    pub offsets: Offsets,
    /// Rows in item order.
    pub rows: Vec<RowView<'a, T, R>>,
}

/// One row of a panel.
#[derive(Debug)]
pub struct RowView<'a, T, R> {
    /// Address of the row; pass it back to hover and activation.
    pub path: ItemPath,
    /// The item this row renders.
    pub item: &'a Item<T, R>,
    /// [`class::OPTION`], the item's own token, and state tokens.
    pub classes: ClassList<'a>,
    /// What to draw inside the row.
    pub content: RowContent<'a, R>,
    /// The row's submenu panel, for parents.
    pub submenu: Option<PanelView<'a, T, R>>,
}

/// Row content.
#[derive(Debug)]
pub enum RowContent<'a, R> {
    /// Built-in layout: leading icon, label, trailing slot.
    Default {
        /// Leading icon slot.
        icon_before: Option<IconSlot<'a, R>>,
        /// Row label.
        label: &'a str,
        /// Trailing slot.
        trailing: Trailing<'a, R>,
    },
    /// Output of the dropdown's custom row renderer.
    Custom(R),
}

/// Trailing slot of a default row.
#[derive(Debug)]
pub enum Trailing<'a, R> {
    /// Nothing.
    None,
    /// The item's own trailing icon.
    Icon(IconSlot<'a, R>),
    /// Submenu affordance; replaces the trailing icon on parent rows. Carries
    /// the trailing slot's tokens.
    Chevron(ClassList<'static>),
}

/// An icon next to a row label.
#[derive(Debug)]
pub struct IconSlot<'a, R> {
    /// [`class::OPTION_ICON`] plus [`class::OPTION_ICON_LEFT`] or
    /// [`class::OPTION_ICON_RIGHT`].
    pub classes: ClassList<'static>,
    /// The host's renderable.
    pub icon: &'a R,
}

fn leading_slot() -> ClassList<'static> {
    ClassList::from_slice(&[class::OPTION_ICON, class::OPTION_ICON_LEFT])
}

fn trailing_slot() -> ClassList<'static> {
    ClassList::from_slice(&[class::OPTION_ICON, class::OPTION_ICON_RIGHT])
}

pub(crate) fn root_panel<'a, T, R, H: Host>(
    items: &'a [Item<T, R>],
    nodes: &[MenuNode<H>],
    state: MenuState,
    width: Length,
    render: Option<&RenderFn<T, R>>,
) -> PanelView<'a, T, R> {
    let mut classes = ClassList::from_slice(&[class::ROOT_MENU, class::MENU]);
    classes.extend(class::orientation(state.orientation));
    PanelView {
        id: PanelId::Root,
        classes,
        width,
        state,
        offsets: resolved_root_offsets(state.orientation),
        rows: rows(items, nodes, &mut ItemPath::new(), render),
    }
}

fn rows<'a, T, R, H: Host>(
    items: &'a [Item<T, R>],
    nodes: &[MenuNode<H>],
    path: &mut ItemPath,
    render: Option<&RenderFn<T, R>>,
) -> Vec<RowView<'a, T, R>> {
    let mut out = Vec::with_capacity(items.len());
    for (idx, (item, node)) in items.iter().zip(nodes).enumerate() {
        path.push(idx);
        out.push(row(item, node, path, render));
        path.pop();
    }
    out
}

fn row<'a, T, R, H: Host>(
    item: &'a Item<T, R>,
    node: &MenuNode<H>,
    path: &mut ItemPath,
    render: Option<&RenderFn<T, R>>,
) -> RowView<'a, T, R> {
    let mut classes = ClassList::new();
    classes.push(class::OPTION);
    classes.extend(item.class_name.as_deref());
    if item.disabled {
        classes.push(class::OPTION_DISABLED);
    }
    if item.has_submenu() {
        classes.push(class::OPTION_WITH_MENU);
    }

    let content = match render {
        Some(render) => RowContent::Custom(render(item)),
        None => RowContent::Default {
            icon_before: item.icon_before.as_ref().map(|icon| IconSlot {
                classes: leading_slot(),
                icon,
            }),
            label: &item.label,
            trailing: match &item.icon_after {
                _ if item.has_submenu() => Trailing::Chevron(trailing_slot()),
                Some(icon) => Trailing::Icon(IconSlot {
                    classes: trailing_slot(),
                    icon,
                }),
                None => Trailing::None,
            },
        },
    };

    let mut submenu = None;
    if let Some(sub) = &node.submenu {
        let state = sub.panel.state;
        let mut panel_classes = ClassList::from_slice(&[class::MENU, class::SUBMENU]);
        panel_classes.extend(class::orientation(state.orientation));
        if state.is_open {
            panel_classes.push(class::SUBMENU_OPENED);
        }
        submenu = Some(PanelView {
            id: PanelId::Submenu(path.clone()),
            classes: panel_classes,
            width: item.submenu_width(),
            state,
            offsets: resolved_submenu_offsets(state.orientation),
            rows: rows(item.children(), &sub.nodes, path, render),
        });
    }

    RowView {
        path: path.clone(),
        item,
        classes,
        content,
        submenu,
    }
}
