// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Close-request watchers for pointer presses and scrolling.
//!
//! Both watchers register in the capture phase so they see events before any
//! inner handler can stop propagation. They only *report* close requests; the
//! owner decides what closing means.
//!
//! ## Usage
//!
//! 1) Arm the watcher when the guarded UI appears ([`OutsideWatcher::watch`],
//!    [`ScrollWatcher::sync`]).
//! 2) Forward each routed event's target to [`OutsideWatcher::on_pointer_down`]
//!    or [`ScrollWatcher::on_scroll`]; `true` means "close now".
//! 3) Stop the watcher when the guarded UI goes away. Stopping is idempotent,
//!    and dropping a watcher stops it.

use crate::host::{Host, ListenerKind, Phase, Subscription, contains};

/// Reports pointer presses outside a region.
#[derive(Debug)]
pub struct OutsideWatcher<H: Host> {
    region: H::Node,
    subscription: Option<Subscription<H>>,
}

impl<H: Host> OutsideWatcher<H> {
    /// A stopped watcher guarding `region` and its descendants.
    pub fn new(region: H::Node) -> Self {
        Self {
            region,
            subscription: None,
        }
    }

    /// The guarded region.
    pub fn region(&self) -> &H::Node {
        &self.region
    }

    /// Start watching. Does nothing if already active.
    pub fn watch(&mut self, host: &H) {
        if self.is_active() {
            return;
        }
        self.subscription = Some(Subscription::attach(
            host,
            ListenerKind::PointerDown,
            Phase::Capture,
        ));
    }

    /// Stop watching and detach the listener. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    /// Returns `true` while the listener is attached.
    pub fn is_active(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Returns `true` if a press on `target` should close the guarded UI.
    pub fn on_pointer_down(&self, target: &H::Node) -> bool {
        match &self.subscription {
            Some(subscription) if subscription.is_active() => {
                !contains(subscription.host(), &self.region, target)
            }
            _ => false,
        }
    }
}

/// Reports scrolling of anything not carrying a marker class.
///
/// Scrolling inside the guarded UI (whose scrollable panels carry the marker)
/// is ignored; scrolling the page behind it is reported.
#[derive(Debug)]
pub struct ScrollWatcher<H: Host> {
    marker: &'static str,
    subscription: Option<Subscription<H>>,
}

impl<H: Host> ScrollWatcher<H> {
    /// A stopped watcher ignoring scroll targets that carry `marker`.
    pub fn new(marker: &'static str) -> Self {
        Self {
            marker,
            subscription: None,
        }
    }

    /// The marker class.
    pub fn marker(&self) -> &'static str {
        self.marker
    }

    /// Attach while `active` holds and detach otherwise.
    ///
    /// Returns whether the watcher is active afterwards.
    pub fn sync(&mut self, host: &H, active: bool) -> bool {
        if active && !self.is_active() {
            self.subscription = Some(Subscription::attach(
                host,
                ListenerKind::Scroll,
                Phase::Capture,
            ));
        } else if !active {
            self.stop();
        }
        self.is_active()
    }

    /// Stop watching and detach the listener. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }

    /// Returns `true` while the listener is attached.
    pub fn is_active(&self) -> bool {
        self.subscription.as_ref().is_some_and(Subscription::is_active)
    }

    /// Returns `true` if scrolling `target` should close the guarded UI.
    pub fn on_scroll(&self, target: &H::Node) -> bool {
        match &self.subscription {
            Some(subscription) if subscription.is_active() => {
                !subscription.host().has_class(target, self.marker)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{ListenerId, ListenerTable};
    use alloc::rc::Rc;
    use core::cell::RefCell;

    /// Nodes are `u32`; the parent of `n` is `n / 10`. Odd nodes carry "m".
    #[derive(Clone, Debug, Default)]
    struct Decimal(Rc<RefCell<ListenerTable>>);

    impl Host for Decimal {
        type Node = u32;

        fn attach(&self, kind: ListenerKind, phase: Phase) -> ListenerId {
            self.0.borrow_mut().insert(kind, phase)
        }

        fn detach(&self, id: ListenerId) {
            self.0.borrow_mut().remove(id);
        }

        fn parent_of(&self, node: &u32) -> Option<u32> {
            (*node >= 10).then_some(node / 10)
        }

        fn has_class(&self, node: &u32, class: &str) -> bool {
            class == "m" && node % 2 == 1
        }
    }

    #[test]
    fn outside_press_reports_only_while_active() {
        let host = Decimal::default();
        let mut watcher = OutsideWatcher::new(4);
        assert!(!watcher.on_pointer_down(&7));

        watcher.watch(&host);
        assert!(watcher.on_pointer_down(&7));
        assert!(!watcher.on_pointer_down(&4));
        assert!(!watcher.on_pointer_down(&45));

        watcher.stop();
        assert!(!watcher.on_pointer_down(&7));
    }

    #[test]
    fn outside_watch_is_not_doubled() {
        let host = Decimal::default();
        let mut watcher = OutsideWatcher::new(1);
        watcher.watch(&host);
        watcher.watch(&host);
        assert_eq!(host.0.borrow().count(ListenerKind::PointerDown), 1);
        assert_eq!(
            watcher
                .subscription
                .as_ref()
                .and_then(Subscription::id)
                .and_then(|id| host.0.borrow().get(id)),
            Some((ListenerKind::PointerDown, Phase::Capture))
        );
        watcher.stop();
        watcher.stop();
        assert!(host.0.borrow().is_empty());
    }

    #[test]
    fn scroll_on_marker_is_ignored() {
        let host = Decimal::default();
        let mut watcher = ScrollWatcher::new("m");
        assert!(watcher.sync(&host, true));
        assert!(!watcher.on_scroll(&3));
        assert!(watcher.on_scroll(&8));
    }

    #[test]
    fn scroll_sync_follows_condition() {
        let host = Decimal::default();
        let mut watcher = ScrollWatcher::new("m");
        assert!(!watcher.sync(&host, false));
        assert!(!watcher.on_scroll(&8));

        watcher.sync(&host, true);
        watcher.sync(&host, true);
        assert_eq!(host.0.borrow().count(ListenerKind::Scroll), 1);

        assert!(!watcher.sync(&host, false));
        assert!(host.0.borrow().is_empty());
    }

    #[test]
    fn dropping_a_watcher_detaches() {
        let host = Decimal::default();
        {
            let mut watcher = OutsideWatcher::new(1);
            watcher.watch(&host);
            assert_eq!(host.0.borrow().len(), 1);
        }
        assert!(host.0.borrow().is_empty());
    }
}
