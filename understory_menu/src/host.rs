// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host integration: listener attachment and node queries.
//!
//! The dropdown never talks to a windowing system directly. Instead the host
//! (a DOM binding, a retained widget tree, a test double) implements [`Host`]:
//!
//! - `attach`/`detach` register and revoke global listeners. Detaching an id
//!   that is not (or no longer) registered must be a no-op.
//! - `parent_of` exposes the node hierarchy so "is this target inside that
//!   region" can be answered by walking ancestors.
//! - `has_class` reports whether a node carries a class token.
//!
//! Host handles are expected to be cheap clones of a shared, single-threaded
//! document handle. Listener attachments are owned through [`Subscription`],
//! which detaches on [`Subscription::cancel`] and on drop.
//!
//! [`ListenerTable`] is ready-made bookkeeping for hosts that do not already
//! track their listeners.

use core::fmt;

use hashbrown::HashMap;

/// What a listener observes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Pointer press anywhere in the document.
    PointerDown,
    /// Scroll of any scrollable node in the document.
    Scroll,
    /// Size changes of one observed panel.
    Resize,
}

/// Propagation phase a listener is registered for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Root→target, before target handlers can stop propagation.
    Capture,
    /// On the observed node itself.
    Target,
    /// Target→root.
    Bubble,
}

/// Handle for one attached listener.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Wrap a host-chosen raw identifier.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// The document a dropdown lives in.
pub trait Host: Clone + fmt::Debug {
    /// Node handle used for event targets and regions.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Register a listener and return its handle.
    fn attach(&self, kind: ListenerKind, phase: Phase) -> ListenerId;

    /// Revoke a listener. Unknown or already revoked ids are ignored.
    fn detach(&self, id: ListenerId);

    /// Parent of `node`, or `None` at the document root.
    fn parent_of(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns `true` if `node` carries the class token `class`.
    fn has_class(&self, node: &Self::Node, class: &str) -> bool;
}

/// Returns `true` if `target` is `region` or one of its descendants.
pub fn contains<H: Host>(host: &H, region: &H::Node, target: &H::Node) -> bool {
    let mut current = Some(target.clone());
    while let Some(node) = current {
        if node == *region {
            return true;
        }
        current = host.parent_of(&node);
    }
    false
}

/// A listener attachment owned by the code that made it.
///
/// Dropping the subscription detaches the listener. [`Subscription::cancel`]
/// does the same eagerly and may be called any number of times.
pub struct Subscription<H: Host> {
    host: H,
    kind: ListenerKind,
    id: Option<ListenerId>,
}

impl<H: Host> Subscription<H> {
    /// Attach a listener on `host`.
    pub fn attach(host: &H, kind: ListenerKind, phase: Phase) -> Self {
        let id = host.attach(kind, phase);
        Self {
            host: host.clone(),
            kind,
            id: Some(id),
        }
    }

    /// The host this subscription was made on.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// What the listener observes.
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// The listener handle while attached.
    pub fn id(&self) -> Option<ListenerId> {
        self.id
    }

    /// Returns `true` until the subscription is cancelled.
    pub fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Detach the listener. Idempotent.
    pub fn cancel(&mut self) {
        if let Some(id) = self.id.take() {
            self.host.detach(id);
        }
    }
}

impl<H: Host> Drop for Subscription<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<H: Host> fmt::Debug for Subscription<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kind", &self.kind)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// Bookkeeping for attached listeners.
///
/// Hosts can embed a table to hand out [`ListenerId`]s and answer "how many
/// listeners of this kind are attached right now".
#[derive(Clone, Debug, Default)]
pub struct ListenerTable {
    next: u64,
    active: HashMap<ListenerId, (ListenerKind, Phase)>,
}

impl ListenerTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new listener and return its id. Ids are never reused.
    pub fn insert(&mut self, kind: ListenerKind, phase: Phase) -> ListenerId {
        self.next += 1;
        let id = ListenerId(self.next);
        self.active.insert(id, (kind, phase));
        id
    }

    /// Forget a listener. Returns `false` if it was not attached.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.active.remove(&id).is_some()
    }

    /// Kind and phase of an attached listener.
    pub fn get(&self, id: ListenerId) -> Option<(ListenerKind, Phase)> {
        self.active.get(&id).copied()
    }

    /// Number of attached listeners of `kind`.
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.active.values().filter(|(k, _)| *k == kind).count()
    }

    /// Number of attached listeners.
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if nothing is attached.
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}
