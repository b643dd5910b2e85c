// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The declarative item tree.

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use smallvec::SmallVec;
use understory_placement::Length;

/// Root→row sequence of child indices addressing one row of the tree.
///
/// `[1, 0]` is the first child of the second top-level item.
pub type ItemPath = SmallVec<[usize; 4]>;

/// Submenu panel width used when an item does not set one.
pub const DEFAULT_SUBMENU_WIDTH: Length = Length::Px(150.0);

/// One entry in the menu tree.
///
/// An item with `children` (even an empty list) is a submenu parent: it opens
/// a nested panel on hover and never commits a selection of its own, whatever
/// its `value` or `on_select`. Items without `children` are selectable leaves.
///
/// `R` is the host's renderable handle type, used for icons and for custom row
/// rendering. It is never interpreted here.
#[derive(Clone)]
pub struct Item<T, R = ()> {
    /// Row label.
    pub label: String,
    /// Renderable shown before the label.
    pub icon_before: Option<R>,
    /// Renderable shown after the label. Parents show a chevron instead.
    pub icon_after: Option<R>,
    /// Nested items; presence makes this row a submenu parent.
    pub children: Option<Vec<Self>>,
    /// Width of this item's submenu panel.
    pub children_width: Option<Length>,
    /// Value reported to the dropdown's selection callback.
    pub value: Option<T>,
    /// Private selection handler; when set, the dropdown callback is skipped.
    pub on_select: Option<Rc<dyn Fn()>>,
    /// Disabled rows ignore activation. Their submenus still open.
    pub disabled: bool,
    /// Extra class token for this row.
    pub class_name: Option<String>,
}

impl<T, R> Item<T, R> {
    /// A leaf item with the given label and nothing else set.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon_before: None,
            icon_after: None,
            children: None,
            children_width: None,
            value: None,
            on_select: None,
            disabled: false,
            class_name: None,
        }
    }

    /// Set the value reported on selection.
    #[must_use]
    pub fn with_value(mut self, value: T) -> Self {
        self.value = Some(value);
        self
    }

    /// Turn this item into a submenu parent with the given children.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = Some(children.into_iter().collect());
        self
    }

    /// Set the width of this item's submenu panel.
    #[must_use]
    pub fn with_children_width(mut self, width: impl Into<Length>) -> Self {
        self.children_width = Some(width.into());
        self
    }

    /// Set a private selection handler.
    #[must_use]
    pub fn with_on_select(mut self, f: impl Fn() + 'static) -> Self {
        self.on_select = Some(Rc::new(f));
        self
    }

    /// Mark the item disabled (or enabled).
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attach an extra class token.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Set the leading icon.
    #[must_use]
    pub fn with_icon_before(mut self, icon: R) -> Self {
        self.icon_before = Some(icon);
        self
    }

    /// Set the trailing icon.
    #[must_use]
    pub fn with_icon_after(mut self, icon: R) -> Self {
        self.icon_after = Some(icon);
        self
    }

    /// Returns `true` if this item owns a submenu.
    pub fn has_submenu(&self) -> bool {
        self.children.is_some()
    }

    /// Nested items, or an empty slice for leaves.
    pub fn children(&self) -> &[Self] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Width of this item's submenu panel, falling back to [`DEFAULT_SUBMENU_WIDTH`].
    pub fn submenu_width(&self) -> Length {
        self.children_width.unwrap_or(DEFAULT_SUBMENU_WIDTH)
    }
}

impl<T: fmt::Debug, R: fmt::Debug> fmt::Debug for Item<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("label", &self.label)
            .field("icon_before", &self.icon_before)
            .field("icon_after", &self.icon_after)
            .field("children", &self.children)
            .field("children_width", &self.children_width)
            .field("value", &self.value)
            .field("on_select", &self.on_select.is_some())
            .field("disabled", &self.disabled)
            .field("class_name", &self.class_name)
            .finish()
    }
}

/// Look up the row addressed by `path`. An empty path addresses nothing.
pub fn item_at<'a, T, R>(items: &'a [Item<T, R>], path: &[usize]) -> Option<&'a Item<T, R>> {
    let (&first, rest) = path.split_first()?;
    let mut item = items.get(first)?;
    for &idx in rest {
        item = item.children().get(idx)?;
    }
    Some(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn tree() -> Vec<Item<&'static str>> {
        vec![
            Item::new("One").with_value("one"),
            Item::new("Two").with_children([
                Item::new("Two A").with_value("two-a"),
                Item::new("Two B").with_children([Item::new("Deep").with_value("deep")]),
            ]),
        ]
    }

    #[test]
    fn item_at_walks_children() {
        let items = tree();
        assert_eq!(item_at(&items, &[0]).map(|i| i.label.as_str()), Some("One"));
        assert_eq!(
            item_at(&items, &[1, 1, 0]).and_then(|i| i.value),
            Some("deep")
        );
        assert!(item_at(&items, &[]).is_none());
        assert!(item_at(&items, &[2]).is_none());
        assert!(item_at(&items, &[0, 0]).is_none());
    }

    #[test]
    fn empty_children_still_make_a_parent() {
        let item: Item<()> = Item::new("Empty").with_children([]);
        assert!(item.has_submenu());
        assert!(item.children().is_empty());
    }

    #[test]
    fn submenu_width_defaults() {
        let item: Item<()> = Item::new("x");
        assert_eq!(item.submenu_width(), DEFAULT_SUBMENU_WIDTH);
        let item: Item<()> = Item::new("x").with_children_width(220.0);
        assert_eq!(item.submenu_width(), Length::Px(220.0));
    }
}
