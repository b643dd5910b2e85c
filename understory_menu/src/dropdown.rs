// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropdown root: open state, dismissal, selection, and layout.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;
use understory_placement::Length;

use crate::class::{self, ClassList};
use crate::error::MenuError;
use crate::host::Host;
use crate::hover::{HoverEvent, HoverState, row_chain};
use crate::item::{Item, ItemPath, item_at};
use crate::node::{self, MenuNode, MenuState, PanelState};
use crate::view::{self, DropdownView, RenderFn};
use crate::watch::{OutsideWatcher, ScrollWatcher};

/// Width of the root panel when none is configured.
pub const DEFAULT_CONTAINER_WIDTH: Length = Length::Px(300.0);

/// Identifies a panel in the layout pass and the render model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PanelId {
    /// The panel attached to the trigger.
    Root,
    /// The submenu owned by the row at this path.
    Submenu(ItemPath),
}

/// Why the dropdown closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// The trigger was clicked while open.
    Toggle,
    /// A leaf row was committed.
    Selection,
    /// A pointer press landed outside the container.
    Outside,
    /// Something other than a menu panel scrolled.
    Scroll,
    /// The caller closed it.
    Explicit,
}

/// Outcome of activating a row.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Activation {
    /// The row owns a submenu; nothing happened.
    Parent,
    /// The row is disabled; nothing happened.
    Disabled,
    /// The row was committed and the dropdown closed.
    Committed(Notified),
}

/// Which handler a committed row reached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Notified {
    /// The item's own `on_select`.
    Item,
    /// The dropdown's selection callback, with the item's value.
    Root,
    /// Neither: the item has no handler and no value.
    Nobody,
}

/// Dropdown-wide settings.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DropdownConfig {
    /// Width of the root panel.
    pub container_width: Length,
    /// Close when anything but a menu panel scrolls.
    pub close_on_scroll: bool,
    /// Extra class token for the container.
    pub class_name: Option<String>,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            container_width: DEFAULT_CONTAINER_WIDTH,
            close_on_scroll: true,
            class_name: None,
        }
    }
}

type SelectFn<T, R> = dyn FnMut(&T, &Item<T, R>);

/// A toggleable root menu with cascading submenus.
///
/// The dropdown owns the item tree, the open state of every panel, and the
/// listeners it needs while open. The host renders [`view`](Self::view),
/// calls [`layout`](Self::layout) after laying it out, and routes events to
/// [`toggle`](Self::toggle), [`hover`](Self::hover),
/// [`activate`](Self::activate), [`pointer_down`](Self::pointer_down) and
/// [`scroll`](Self::scroll).
///
/// While closed no node is mounted and no listener is attached. Opening
/// mounts one node per item; closing drops them all, so every submenu starts
/// closed and unflipped on the next open.
pub struct Dropdown<T, H: Host, R = ()> {
    host: H,
    items: Vec<Item<T, R>>,
    config: DropdownConfig,
    on_select: Option<Box<SelectFn<T, R>>>,
    render_option: Option<Box<RenderFn<T, R>>>,
    root_panel: PanelState,
    nodes: Vec<MenuNode<H>>,
    hover: HoverState<ItemPath>,
    outside: OutsideWatcher<H>,
    scroll: ScrollWatcher<H>,
}

impl<T, H: Host, R> Dropdown<T, H, R> {
    /// A closed dropdown over `items`, anchored in `container`.
    ///
    /// `container` is the node holding both the trigger and the menu; presses
    /// inside it never count as outside.
    pub fn new(host: H, container: H::Node, items: Vec<Item<T, R>>) -> Self {
        Self {
            host,
            items,
            config: DropdownConfig::default(),
            on_select: None,
            render_option: None,
            root_panel: PanelState::default(),
            nodes: Vec::new(),
            hover: HoverState::new(),
            outside: OutsideWatcher::new(container),
            scroll: ScrollWatcher::new(class::MENU),
        }
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: DropdownConfig) -> Self {
        let close_on_scroll = config.close_on_scroll;
        self.config = config;
        self.set_close_on_scroll(close_on_scroll);
        self
    }

    /// Set the callback receiving committed values.
    ///
    /// It runs at most once per commit, only for leaves with a value and no
    /// `on_select` of their own.
    #[must_use]
    pub fn on_select(mut self, f: impl FnMut(&T, &Item<T, R>) + 'static) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Replace the default content of every row, at every depth.
    #[must_use]
    pub fn render_option(mut self, f: impl Fn(&Item<T, R>) -> R + 'static) -> Self {
        self.render_option = Some(Box::new(f));
        self
    }

    /// The host handle.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The container node.
    pub fn container(&self) -> &H::Node {
        self.outside.region()
    }

    /// The item tree.
    pub fn items(&self) -> &[Item<T, R>] {
        &self.items
    }

    /// Current configuration.
    pub fn config(&self) -> &DropdownConfig {
        &self.config
    }

    /// Replace the item tree. An open dropdown is closed first.
    pub fn set_items(&mut self, items: Vec<Item<T, R>>) {
        self.close(CloseReason::Explicit);
        self.items = items;
    }

    /// Enable or disable closing on scroll; applies immediately when open.
    pub fn set_close_on_scroll(&mut self, enabled: bool) {
        self.config.close_on_scroll = enabled;
        if self.is_open() {
            self.scroll.sync(&self.host, enabled);
        }
    }

    /// Returns `true` while the root panel is shown.
    pub fn is_open(&self) -> bool {
        self.root_panel.state.is_open
    }

    /// Open flag and orientation of the root panel.
    pub fn root_state(&self) -> MenuState {
        self.root_panel.state
    }

    /// Open flag and orientation of the submenu owned by `row`.
    ///
    /// `None` when `row` has no submenu or the dropdown is closed (nothing is
    /// mounted then).
    pub fn submenu_state(&self, row: &[usize]) -> Option<MenuState> {
        node::node_at(&self.nodes, row)?
            .submenu
            .as_ref()
            .map(|submenu| submenu.panel.state)
    }

    /// Open if closed, close if open. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        if self.is_open() {
            self.close(CloseReason::Toggle);
        } else {
            self.open();
        }
        self.is_open()
    }

    /// Open the root panel and arm the close watchers.
    ///
    /// Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if !self.root_panel.open() {
            return false;
        }
        self.nodes = node::mount_all(&self.items, &self.host);
        self.outside.watch(&self.host);
        self.scroll.sync(&self.host, self.config.close_on_scroll);
        log::debug!("dropdown opened with {} items", self.items.len());
        true
    }

    /// Close the whole tree and release every listener.
    ///
    /// Returns `false` if it was already closed.
    pub fn close(&mut self, reason: CloseReason) -> bool {
        if !self.root_panel.close() {
            return false;
        }
        self.nodes.clear();
        let _ = self.hover.clear();
        self.outside.stop();
        self.scroll.stop();
        log::debug!("dropdown closed: {reason:?}");
        true
    }

    /// Route a pointer press. Returns `true` if it closed the dropdown.
    pub fn pointer_down(&mut self, target: &H::Node) -> bool {
        self.outside.on_pointer_down(target) && self.close(CloseReason::Outside)
    }

    /// Route a scroll. Returns `true` if it closed the dropdown.
    pub fn scroll(&mut self, target: &H::Node) -> bool {
        self.scroll.on_scroll(target) && self.close(CloseReason::Scroll)
    }

    /// Move the pointer onto `row`, or off every row with `None`.
    ///
    /// Submenus along the hovered row's path open; submenus the pointer left
    /// close along with their descendants. Does nothing while closed.
    pub fn hover(&mut self, row: Option<&[usize]>) -> Result<(), MenuError> {
        if !self.is_open() {
            return Ok(());
        }
        let chain = match row {
            Some(row) if item_at(&self.items, row).is_some() => row_chain(row),
            Some(row) => {
                return Err(MenuError::UnknownItem {
                    path: ItemPath::from_slice(row),
                });
            }
            None => Vec::new(),
        };
        for event in self.hover.update_path(&chain) {
            log::trace!("hover {event:?}");
            match event {
                HoverEvent::Enter(path) => {
                    if let Some(submenu) = node::submenu_at_mut(&mut self.nodes, &path) {
                        submenu.open();
                    }
                }
                HoverEvent::Leave(path) => {
                    if let Some(submenu) = node::submenu_at_mut(&mut self.nodes, &path) {
                        submenu.close();
                    }
                }
            }
        }
        Ok(())
    }

    /// Activate (click) the row at `row`.
    ///
    /// Disabled rows and parents are inert. Any other row runs its own
    /// `on_select` if it has one, otherwise hands its value to the dropdown's
    /// callback, and then closes the dropdown.
    pub fn activate(&mut self, row: &[usize]) -> Result<Activation, MenuError> {
        if !self.is_open() {
            return Err(MenuError::Closed);
        }
        let item = item_at(&self.items, row).ok_or_else(|| MenuError::UnknownItem {
            path: ItemPath::from_slice(row),
        })?;
        if item.disabled {
            return Ok(Activation::Disabled);
        }
        if item.has_submenu() {
            return Ok(Activation::Parent);
        }

        let notified = if let Some(on_select) = &item.on_select {
            on_select();
            Notified::Item
        } else if let (Some(value), Some(callback)) = (&item.value, &mut self.on_select) {
            callback(value, item);
            Notified::Root
        } else {
            Notified::Nobody
        };
        self.close(CloseReason::Selection);
        Ok(Activation::Committed(notified))
    }

    /// Post-layout pass.
    ///
    /// `measure` reports the laid-out bounds of a panel, or `None` if the
    /// host has none. The root panel is measured first, then every submenu
    /// whose ancestors are open, parents before children. Each measurement
    /// updates the panel's orientation against `viewport`; an empty submenu
    /// measurement closes that submenu.
    pub fn layout(&mut self, viewport: Rect, mut measure: impl FnMut(&PanelId) -> Option<Rect>) {
        if !self.is_open() {
            return;
        }
        if let Some(bounds) = measure(&PanelId::Root) {
            self.root_panel.measure(bounds, viewport);
        }
        node::layout(&mut self.nodes, &mut ItemPath::new(), viewport, &mut measure);
    }

    /// Render model for the current state.
    pub fn view(&self) -> DropdownView<'_, T, R> {
        let mut classes = ClassList::new();
        classes.push(class::CONTAINER);
        classes.extend(self.config.class_name.as_deref());
        let menu = self.is_open().then(|| {
            view::root_panel(
                &self.items,
                &self.nodes,
                self.root_panel.state,
                self.config.container_width,
                self.render_option.as_deref(),
            )
        });
        DropdownView {
            classes,
            is_open: self.is_open(),
            menu,
        }
    }

    /// Hand the trigger renderer its handle and return what it renders.
    pub fn render_trigger<E>(&mut self, f: impl FnOnce(&mut Trigger<'_, T, H, R>) -> E) -> E {
        f(&mut Trigger { dropdown: self })
    }
}

impl<T: fmt::Debug, H: Host, R: fmt::Debug> fmt::Debug for Dropdown<T, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropdown")
            .field("host", &self.host)
            .field("items", &self.items)
            .field("config", &self.config)
            .field("root", &self.root_panel.state)
            .field("hovered", &self.hover.current_path())
            .field("outside", &self.outside)
            .field("scroll", &self.scroll)
            .finish_non_exhaustive()
    }
}

/// What the caller's trigger renderer gets to work with.
pub struct Trigger<'a, T, H: Host, R> {
    dropdown: &'a mut Dropdown<T, H, R>,
}

impl<T, H: Host, R> Trigger<'_, T, H, R> {
    /// Whether the menu is shown.
    pub fn is_open(&self) -> bool {
        self.dropdown.is_open()
    }

    /// The trigger was clicked. Returns the new open state.
    pub fn on_click(&mut self) -> bool {
        self.dropdown.toggle()
    }
}

impl<T, H: Host, R> fmt::Debug for Trigger<'_, T, H, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger")
            .field("is_open", &self.is_open())
            .finish_non_exhaustive()
    }
}
