// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor offsets for root panels and submenus.

use kurbo::{Point, Size};

use crate::Orientation;

/// A positional length, in the vocabulary of absolutely positioned boxes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Length {
    /// Device-independent pixels.
    Px(f64),
    /// Percentage of the containing block's extent on the same axis.
    Percent(f64),
    /// Explicitly unset: the opposite edge decides.
    #[default]
    Auto,
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Resolve against the containing block's extent on the same axis.
    ///
    /// Returns `None` for [`Length::Auto`].
    #[must_use]
    pub fn resolve(self, extent: f64) -> Option<f64> {
        match self {
            Self::Px(v) => Some(v),
            Self::Percent(p) => Some(extent * p / 100.0),
            Self::Auto => None,
        }
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// Edge offsets for an absolutely positioned panel.
///
/// A field set to `None` carries no opinion and leaves whatever it is laid
/// over in place; see [`Offsets::overlay`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offsets {
    /// Distance from the containing block's top edge.
    pub top: Option<Length>,
    /// Distance from the containing block's bottom edge.
    pub bottom: Option<Length>,
    /// Distance from the containing block's left edge.
    pub left: Option<Length>,
    /// Distance from the containing block's right edge.
    pub right: Option<Length>,
}

/// Default anchor for a root panel: directly below the trigger, right-aligned.
pub const ROOT_DEFAULT: Offsets = Offsets {
    top: Some(Length::Percent(100.0)),
    bottom: None,
    left: None,
    right: Some(Length::ZERO),
};

/// Default anchor for a submenu: to the right of its parent row, top-aligned.
pub const SUBMENU_DEFAULT: Offsets = Offsets {
    top: Some(Length::ZERO),
    bottom: None,
    left: Some(Length::Percent(100.0)),
    right: None,
};

impl Offsets {
    /// No offsets at all.
    pub const NONE: Self = Self {
        top: None,
        bottom: None,
        left: None,
        right: None,
    };

    /// Lay `delta` over `self`: every field `delta` sets wins.
    #[must_use]
    pub fn overlay(self, delta: Self) -> Self {
        Self {
            top: delta.top.or(self.top),
            bottom: delta.bottom.or(self.bottom),
            left: delta.left.or(self.left),
            right: delta.right.or(self.right),
        }
    }

    /// Resolve these offsets to the panel's origin inside its containing block.
    ///
    /// `left` takes precedence over `right` and `top` over `bottom`, as for
    /// over-constrained absolutely positioned boxes. An axis with neither edge
    /// set resolves to `0`.
    ///
    /// ```
    /// use kurbo::{Point, Size};
    /// use understory_placement::{Orientation, resolved_submenu_offsets};
    ///
    /// // A 150px wide submenu next to a 300x40 parent row.
    /// let row = Size::new(300.0, 40.0);
    /// let panel = Size::new(150.0, 120.0);
    ///
    /// let origin = resolved_submenu_offsets(Orientation::None).origin(row, panel);
    /// assert_eq!(origin, Point::new(300.0, 0.0));
    ///
    /// let origin = resolved_submenu_offsets(Orientation::FlipLeft).origin(row, panel);
    /// assert_eq!(origin, Point::new(-150.0, 0.0));
    /// ```
    #[must_use]
    pub fn origin(&self, container: Size, panel: Size) -> Point {
        let x = axis_origin(self.left, self.right, container.width, panel.width);
        let y = axis_origin(self.top, self.bottom, container.height, panel.height);
        Point::new(x, y)
    }
}

fn axis_origin(start: Option<Length>, end: Option<Length>, extent: f64, size: f64) -> f64 {
    if let Some(v) = start.and_then(|l| l.resolve(extent)) {
        return v;
    }
    if let Some(v) = end.and_then(|l| l.resolve(extent)) {
        return extent - v - size;
    }
    0.0
}

/// Offset deltas for a root panel in the given orientation.
#[must_use]
pub fn root_offsets(orientation: Orientation) -> Offsets {
    match orientation {
        Orientation::None => Offsets::NONE,
        Orientation::FlipTop => Offsets {
            top: Some(Length::Auto),
            bottom: Some(Length::Percent(100.0)),
            ..Offsets::NONE
        },
        Orientation::FlipBottom => Offsets {
            top: Some(Length::Percent(100.0)),
            bottom: Some(Length::Auto),
            ..Offsets::NONE
        },
        Orientation::FlipLeft => Offsets {
            left: Some(Length::Auto),
            right: Some(Length::ZERO),
            ..Offsets::NONE
        },
        Orientation::FlipRight => Offsets {
            left: Some(Length::ZERO),
            right: Some(Length::Auto),
            ..Offsets::NONE
        },
    }
}

/// Offset deltas for a submenu in the given orientation.
#[must_use]
pub fn submenu_offsets(orientation: Orientation) -> Offsets {
    match orientation {
        Orientation::None => Offsets::NONE,
        Orientation::FlipTop => Offsets {
            top: Some(Length::Auto),
            bottom: Some(Length::ZERO),
            ..Offsets::NONE
        },
        Orientation::FlipBottom => Offsets {
            top: Some(Length::ZERO),
            bottom: Some(Length::Auto),
            ..Offsets::NONE
        },
        Orientation::FlipLeft => Offsets {
            left: Some(Length::Auto),
            right: Some(Length::Percent(100.0)),
            ..Offsets::NONE
        },
        Orientation::FlipRight => Offsets {
            left: Some(Length::Percent(100.0)),
            right: Some(Length::Auto),
            ..Offsets::NONE
        },
    }
}

/// [`ROOT_DEFAULT`] with the deltas for `orientation` applied.
#[must_use]
pub fn resolved_root_offsets(orientation: Orientation) -> Offsets {
    ROOT_DEFAULT.overlay(root_offsets(orientation))
}

/// [`SUBMENU_DEFAULT`] with the deltas for `orientation` applied.
#[must_use]
pub fn resolved_submenu_offsets(orientation: Orientation) -> Offsets {
    SUBMENU_DEFAULT.overlay(submenu_offsets(orientation))
}
