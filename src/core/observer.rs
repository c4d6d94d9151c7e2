// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/observer.rs
//!
//! Change notification for state containers
//!
//! A container owns a [`ListenerRegistry`] and calls
//! [`ListenerRegistry::notify_listeners`] after every mutation that affects
//! presentation. Views register a [`Listener`] and re-read whatever fields
//! they display each time it fires.
//!
//! # Identity
//!
//! Listeners are compared by `Rc` allocation, not by value. Keep a clone of
//! the `Rc` you registered if you want to remove it later:
//!
//! ```
//! use flowstate::core::observer::{Listener, ListenerRegistry};
//! use std::rc::Rc;
//!
//! let registry = ListenerRegistry::new();
//! let listener: Listener = Rc::new(|| println!("state changed"));
//!
//! registry.add_listener(listener.clone());
//! registry.add_listener(listener.clone()); // no-op, already registered
//! assert_eq!(registry.len(), 1);
//!
//! registry.remove_listener(&listener);
//! assert!(registry.is_empty());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::trace;

/// Something that wants to hear about state changes.
///
/// Carries no payload: implementors read the current state from the
/// container they were registered on.
pub trait Observer {
    /// Called once per notification, in registration order
    fn on_change(&self);
}

impl<F: Fn()> Observer for F {
    fn on_change(&self) {
        self()
    }
}

/// Shared handle to a registered observer
pub type Listener = Rc<dyn Observer>;

/// Ordered, duplicate-free set of listeners
///
/// All methods take `&self` so a registry can live inside a container that
/// is itself shared behind an `Rc`.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: RefCell<Vec<Listener>>,
}

impl ListenerRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `listener` unless the same `Rc` is already present
    pub fn add_listener(&self, listener: Listener) {
        let mut listeners = self.listeners.borrow_mut();
        if listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            return;
        }
        listeners.push(listener);
    }

    /// Unregisters `listener`; does nothing if it was never added
    pub fn remove_listener(&self, listener: &Listener) {
        self.listeners
            .borrow_mut()
            .retain(|l| !Rc::ptr_eq(l, listener));
    }

    /// Returns true if `listener` is currently registered
    pub fn contains(&self, listener: &Listener) -> bool {
        self.listeners
            .borrow()
            .iter()
            .any(|l| Rc::ptr_eq(l, listener))
    }

    /// Invokes every registered listener in registration order
    ///
    /// The list is snapshotted first, so a listener may add or remove
    /// listeners (or mutate the owning container) while being called.
    /// Such changes take effect from the next notification.
    pub fn notify_listeners(&self) {
        let snapshot: Vec<Listener> = self.listeners.borrow().clone();
        trace!(count = snapshot.len(), "notifying listeners");

        for listener in snapshot {
            listener.on_change();
        }
    }

    /// Drops every listener. Safe to call repeatedly.
    pub fn dispose(&self) {
        self.listeners.borrow_mut().clear();
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Returns true if no listener is registered
    pub fn is_empty(&self) -> bool {
        self.listeners.borrow().is_empty()
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.len())
            .finish()
    }
}

/// A state container that broadcasts changes to its listeners
///
/// Implementors only supply [`Observable::listeners`]; registration,
/// broadcast and disposal come for free.
pub trait Observable {
    /// The registry this container notifies
    fn listeners(&self) -> &ListenerRegistry;

    /// See [`ListenerRegistry::add_listener`]
    fn add_listener(&self, listener: Listener) {
        self.listeners().add_listener(listener);
    }

    /// See [`ListenerRegistry::remove_listener`]
    fn remove_listener(&self, listener: &Listener) {
        self.listeners().remove_listener(listener);
    }

    /// See [`ListenerRegistry::notify_listeners`]
    fn notify_listeners(&self) {
        self.listeners().notify_listeners();
    }

    /// Clears all listeners when the owning flow is torn down
    fn dispose(&self) {
        self.listeners().dispose();
    }
}
