// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_menu --heading-base-level=0

//! Understory Menu: headless cascading dropdowns.
//!
//! ## Overview
//!
//! A [`Dropdown`] takes a declarative tree of [`Item`]s and manages a
//! toggleable root panel plus one submenu per parent item, nested to any
//! depth. It owns the state machine only: which panels are open, which way
//! each one flips to stay inside the viewport, when to dismiss, and which
//! handler a committed row reaches. Drawing, layout and event routing stay
//! with the host.
//!
//! ## Host contract
//!
//! Hosts implement [`Host`](host::Host) over their document: a cheap-clone
//! handle that can attach and detach listeners, walk to a node's parent, and
//! test a node for a class token. [`ListenerTable`](host::ListenerTable) is
//! ready-made bookkeeping for the attach/detach half.
//!
//! The dropdown attaches, while open:
//!
//! - one capture-phase pointer-down listener (outside-press dismissal),
//! - one capture-phase scroll listener when scroll dismissal is enabled,
//! - one resize observation per mounted submenu.
//!
//! All of them are released on close and on drop.
//!
//! ## Workflow
//!
//! 1) Render: [`Dropdown::render_trigger`] for the trigger and
//!    [`Dropdown::view`] for the panels, rows and their
//!    [class tokens](class).
//! 2) Lay out, then call [`Dropdown::layout`] with each panel's bounds.
//!    Panels that overflow the viewport flip; re-read the view for the new
//!    offsets before painting.
//! 3) Route events: trigger clicks to [`Dropdown::toggle`], pointer movement
//!    to [`Dropdown::hover`], row clicks to [`Dropdown::activate`], and
//!    captured presses and scrolls to [`Dropdown::pointer_down`] and
//!    [`Dropdown::scroll`].
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::Rect;
//! use understory_menu::host::{Host, ListenerId, ListenerKind, ListenerTable, Phase};
//! use understory_menu::{Activation, Dropdown, Item, Notified, Orientation, PanelId};
//!
//! // Node 0 is the container; node 1 (the trigger) sits inside it. Node 9 is
//! // elsewhere on the page.
//! #[derive(Clone, Debug, Default)]
//! struct Page(Rc<RefCell<ListenerTable>>);
//!
//! impl Host for Page {
//!     type Node = u32;
//!     fn attach(&self, kind: ListenerKind, phase: Phase) -> ListenerId {
//!         self.0.borrow_mut().insert(kind, phase)
//!     }
//!     fn detach(&self, id: ListenerId) {
//!         self.0.borrow_mut().remove(id);
//!     }
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node == 1).then_some(0)
//!     }
//!     fn has_class(&self, _node: &u32, _class: &str) -> bool {
//!         false
//!     }
//! }
//!
//! let items: Vec<Item<&str>> = vec![
//!     Item::new("Item 1").with_value("item-1"),
//!     Item::new("Item 2").with_children([
//!         Item::new("Item 2-1").with_value("item-2-1"),
//!     ]),
//! ];
//!
//! let picked = Rc::new(RefCell::new(Vec::new()));
//! let sink = picked.clone();
//! let mut dropdown = Dropdown::new(Page::default(), 0, items)
//!     .on_select(move |value, _item| sink.borrow_mut().push(*value));
//!
//! assert!(dropdown.toggle());
//!
//! // The menu hangs below a trigger near the bottom of the window.
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//! dropdown.layout(viewport, |panel| match panel {
//!     PanelId::Root => Some(Rect::new(100.0, 560.0, 400.0, 640.0)),
//!     PanelId::Submenu(_) => None,
//! });
//! assert_eq!(dropdown.root_state().orientation, Orientation::FlipTop);
//!
//! // Hovering "Item 2" opens its submenu; clicking its child commits.
//! dropdown.hover(Some(&[1])).unwrap();
//! assert!(dropdown.submenu_state(&[1]).unwrap().is_open);
//! assert_eq!(
//!     dropdown.activate(&[1, 0]),
//!     Ok(Activation::Committed(Notified::Root))
//! );
//!
//! assert_eq!(*picked.borrow(), ["item-2-1"]);
//! assert!(!dropdown.is_open());
//! ```
//!
//! Placement math lives in `understory_placement`; its [`Orientation`],
//! [`Length`] and [`Offsets`] are re-exported here.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod class;
pub mod host;
pub mod hover;
pub mod item;
pub mod view;
pub mod watch;

mod dropdown;
mod error;
mod node;

pub use dropdown::{
    Activation, CloseReason, DEFAULT_CONTAINER_WIDTH, Dropdown, DropdownConfig, Notified, PanelId,
    Trigger,
};
pub use error::MenuError;
pub use item::{DEFAULT_SUBMENU_WIDTH, Item, ItemPath, item_at};
pub use node::MenuState;
pub use understory_placement::{Length, Offsets, Orientation};
