// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow detection and flip orientation.

use kurbo::Rect;

bitflags::bitflags! {
    /// Edges of a panel that fall outside the viewport.
    ///
    /// Each edge is checked independently, so a panel taller than the
    /// viewport can report both [`Overflow::TOP`] and [`Overflow::BOTTOM`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Overflow: u8 {
        /// Top edge is above the viewport's top edge.
        const TOP    = 0b0000_0001;
        /// Bottom edge is below the viewport's bottom edge.
        const BOTTOM = 0b0000_0010;
        /// Left edge is left of the viewport's left edge.
        const LEFT   = 0b0000_0100;
        /// Right edge is right of the viewport's right edge.
        const RIGHT  = 0b0000_1000;
    }
}

/// Discrete flip direction chosen to keep a panel inside the viewport.
///
/// Orientations are derived from geometry by [`resolve`]; callers never pick
/// one directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// The panel fits; keep the default anchor.
    #[default]
    None,
    /// The panel overflows the bottom; anchor it above instead.
    FlipTop,
    /// The panel overflows the top; anchor it below instead.
    FlipBottom,
    /// The panel overflows the right; extend it leftwards instead.
    FlipLeft,
    /// The panel overflows the left; extend it rightwards instead.
    FlipRight,
}

impl Orientation {
    /// Pick a single orientation from a set of overflowing edges.
    ///
    /// A flip is only useful when exactly one edge of an axis overflows; a
    /// panel larger than the viewport on some axis keeps its default anchor
    /// on that axis. The vertical axis is considered first, so a panel
    /// overflowing diagonally reports its vertical flip.
    #[must_use]
    pub fn from_overflow(overflow: Overflow) -> Self {
        let vertical = overflow & (Overflow::TOP | Overflow::BOTTOM);
        let horizontal = overflow & (Overflow::LEFT | Overflow::RIGHT);
        if vertical == Overflow::BOTTOM {
            Self::FlipTop
        } else if vertical == Overflow::TOP {
            Self::FlipBottom
        } else if horizontal == Overflow::RIGHT {
            Self::FlipLeft
        } else if horizontal == Overflow::LEFT {
            Self::FlipRight
        } else {
            Self::None
        }
    }

    /// Returns `true` for the two vertical flips.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::FlipTop | Self::FlipBottom)
    }

    /// Returns `true` for the two horizontal flips.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::FlipLeft | Self::FlipRight)
    }
}

/// Compute which edges of `panel` fall outside `viewport`.
///
/// Both rectangles must be in the same coordinate space. A panel with zero
/// area has not been laid out yet and never overflows.
#[must_use]
pub fn overflow(panel: Rect, viewport: Rect) -> Overflow {
    if panel.is_zero_area() {
        return Overflow::empty();
    }
    let mut out = Overflow::empty();
    if panel.y0 < viewport.y0 {
        out |= Overflow::TOP;
    }
    if panel.y1 > viewport.y1 {
        out |= Overflow::BOTTOM;
    }
    if panel.x0 < viewport.x0 {
        out |= Overflow::LEFT;
    }
    if panel.x1 > viewport.x1 {
        out |= Overflow::RIGHT;
    }
    out
}

/// Resolve the orientation for a measured panel.
///
/// This is a pure function of its inputs: calling it twice with the same
/// bounds gives the same answer. Panels that are still collapsed resolve to
/// [`Orientation::None`].
///
/// ```
/// use kurbo::Rect;
/// use understory_placement::{Orientation, resolve};
///
/// let viewport = Rect::new(0.0, 0.0, 400.0, 300.0);
/// assert_eq!(resolve(Rect::new(10.0, 10.0, 100.0, 100.0), viewport), Orientation::None);
/// assert_eq!(resolve(Rect::new(350.0, 10.0, 500.0, 100.0), viewport), Orientation::FlipLeft);
/// assert_eq!(resolve(Rect::ZERO, viewport), Orientation::None);
/// ```
#[must_use]
pub fn resolve(panel: Rect, viewport: Rect) -> Orientation {
    Orientation::from_overflow(overflow(panel, viewport))
}
