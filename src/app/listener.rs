//! Document-wide pointer listeners.
//!
//! Every left click on the screen is offered to the listeners registered
//! here before it reaches the tree rows.  Registering hands back a
//! [`Subscription`]; dropping it unregisters the listener, so a listener
//! lives exactly as long as whoever holds the guard.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

/// What a registered listener reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerListener {
    /// Dismiss the context menu on clicks outside it and outside file rows.
    OutsideClick,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, PointerListener>,
}

/// The screen-level listener registry.
#[derive(Debug, Default)]
pub struct Document {
    registry: Rc<RefCell<Registry>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: PointerListener) -> Subscription {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, listener);
        tracing::debug!(id, ?listener, "pointer listener added");
        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Listeners currently installed, in registration order.
    pub fn listeners(&self) -> Vec<PointerListener> {
        self.registry.borrow().listeners.values().copied().collect()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

/// Guard for one registered listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
            tracing::debug!(id = self.id, "pointer listener removed");
        }
    }
}
