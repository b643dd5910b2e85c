// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_placement --heading-base-level=0

//! Understory Placement: keep popup panels inside the viewport.
//!
//! This crate answers two small questions for dropdowns, context menus and
//! other anchored panels:
//!
//! - Does a laid-out panel overflow the viewport, and if so which way should
//!   it flip? See [`resolve`], [`overflow`] and [`Orientation`].
//! - Given an orientation, which anchor offsets should the panel use? See
//!   [`root_offsets`] for panels hanging off a trigger and
//!   [`submenu_offsets`] for panels extending sideways from a parent row.
//!
//! It does **not** perform layout. Callers lay a panel out at its default
//! position, measure it, call [`resolve`], and then re-apply the offsets for
//! the returned orientation before painting.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_placement::{Length, Orientation, resolve, resolved_root_offsets};
//!
//! let viewport = Rect::new(0.0, 0.0, 800.0, 600.0);
//!
//! // A menu dropped below a trigger near the bottom of the window.
//! let panel = Rect::new(500.0, 520.0, 700.0, 680.0);
//! let orientation = resolve(panel, viewport);
//! assert_eq!(orientation, Orientation::FlipTop);
//!
//! // Flip it above the trigger instead.
//! let offsets = resolved_root_offsets(orientation);
//! assert_eq!(offsets.bottom, Some(Length::Percent(100.0)));
//! assert_eq!(offsets.top, Some(Length::Auto));
//! ```
//!
//! ## Root panels vs submenus
//!
//! A root panel drops below its trigger (`top: 100%`, `right: 0`) and flips
//! above it. A submenu attaches to the side of a parent row (`left: 100%`,
//! `top: 0`) and flips to the other side. The two mappings are kept separate
//! because the anchor edges differ.
//!
//! ## Placing without a style engine
//!
//! [`Offsets::origin`] resolves a set of offsets into a concrete origin
//! within the containing block, for hosts that position panels themselves.
//!
//! This crate is `no_std`.

#![no_std]

mod offsets;
mod orientation;

pub use offsets::{
    Length, Offsets, ROOT_DEFAULT, SUBMENU_DEFAULT, resolved_root_offsets,
    resolved_submenu_offsets, root_offsets, submenu_offsets,
};
pub use orientation::{Orientation, Overflow, overflow, resolve};
