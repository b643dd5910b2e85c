// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural class tokens.
//!
//! Every element in the render model carries a fixed set of tokens so
//! external stylesheets can target structure, orientation and state. The
//! tokens are guaranteed to track state; what they look like is up to the
//! stylesheet.

use smallvec::SmallVec;
use understory_placement::Orientation;

/// Tokens attached to one element.
pub type ClassList<'a> = SmallVec<[&'a str; 4]>;

/// The dropdown's outer container.
pub const CONTAINER: &str = "dropdown";
/// Every menu panel, root or nested. Also marks scrollable menu content.
pub const MENU: &str = "dropdown__menu";
/// The panel attached to the trigger.
pub const ROOT_MENU: &str = "dropdown__root-menu";
/// A panel attached to a parent row.
pub const SUBMENU: &str = "dropdown__submenu";
/// A submenu that is currently shown.
pub const SUBMENU_OPENED: &str = "dropdown__submenu--opened";
/// Every row.
pub const OPTION: &str = "dropdown__option";
/// A disabled row.
pub const OPTION_DISABLED: &str = "dropdown__option--disabled";
/// A row that owns a submenu.
pub const OPTION_WITH_MENU: &str = "dropdown__option--with-menu";
/// An icon slot in a row.
pub const OPTION_ICON: &str = "dropdown__option-icon";
/// The leading icon slot.
pub const OPTION_ICON_LEFT: &str = "dropdown__option-icon--left";
/// The trailing icon slot.
pub const OPTION_ICON_RIGHT: &str = "dropdown__option-icon--right";

/// Token describing a panel's flip, if any.
pub const fn orientation(orientation: Orientation) -> Option<&'static str> {
    match orientation {
        Orientation::None => None,
        Orientation::FlipTop => Some("dropdown__menu--top"),
        Orientation::FlipBottom => Some("dropdown__menu--bottom"),
        Orientation::FlipLeft => Some("dropdown__menu--left"),
        Orientation::FlipRight => Some("dropdown__menu--right"),
    }
}
