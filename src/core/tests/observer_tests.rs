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

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::core::observer::{Listener, ListenerRegistry, Observable};

/// Helper: listener that appends `tag` to a shared log when called
fn recording(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Listener {
    let log = Rc::clone(log);
    Rc::new(move || log.borrow_mut().push(tag))
}

#[test]
fn test_notify_calls_in_registration_order() {
    let registry = ListenerRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));

    registry.add_listener(recording(&log, "first"));
    registry.add_listener(recording(&log, "second"));
    registry.add_listener(recording(&log, "third"));

    registry.notify_listeners();

    assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn test_add_listener_is_idempotent() {
    let registry = ListenerRegistry::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let listener: Listener = Rc::new(move || counter.set(counter.get() + 1));

    registry.add_listener(listener.clone());
    registry.add_listener(listener.clone());
    assert_eq!(registry.len(), 1);

    registry.notify_listeners();
    assert_eq!(calls.get(), 1, "Duplicate add must not double the calls");
}

#[test]
fn test_identical_closures_are_distinct_listeners() {
    let registry = ListenerRegistry::new();
    let a: Listener = Rc::new(|| {});
    let b: Listener = Rc::new(|| {});

    registry.add_listener(a);
    registry.add_listener(b);

    assert_eq!(registry.len(), 2, "Identity is the Rc, not the closure body");
}

#[test]
fn test_removed_listener_is_not_called() {
    let registry = ListenerRegistry::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    let keep = recording(&log, "keep");
    let drop_me = recording(&log, "drop");

    registry.add_listener(keep.clone());
    registry.add_listener(drop_me.clone());
    registry.remove_listener(&drop_me);

    registry.notify_listeners();

    assert_eq!(*log.borrow(), vec!["keep"]);
    assert!(!registry.contains(&drop_me));
    assert!(registry.contains(&keep));
}

#[test]
fn test_remove_unknown_listener_is_noop() {
    let registry = ListenerRegistry::new();
    let registered: Listener = Rc::new(|| {});
    let stranger: Listener = Rc::new(|| {});

    registry.add_listener(registered);
    registry.remove_listener(&stranger);

    assert_eq!(registry.len(), 1);
}

#[test]
fn test_dispose_twice_leaves_registry_empty() {
    let registry = ListenerRegistry::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    registry.add_listener(Rc::new(move || counter.set(counter.get() + 1)));

    registry.dispose();
    assert!(registry.is_empty());
    registry.dispose();
    assert!(registry.is_empty());

    registry.notify_listeners();
    assert_eq!(calls.get(), 0, "Notify after dispose must be a no-op");
}

#[test]
fn test_register_again_after_dispose() {
    let registry = ListenerRegistry::new();
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let listener: Listener = Rc::new(move || counter.set(counter.get() + 1));

    registry.add_listener(listener.clone());
    registry.dispose();
    registry.add_listener(listener);
    registry.notify_listeners();

    assert_eq!(calls.get(), 1);
}

#[test]
fn test_listener_removing_itself_during_notify() {
    let registry = Rc::new(ListenerRegistry::new());
    let calls = Rc::new(Cell::new(0));
    let slot: Rc<RefCell<Option<Listener>>> = Rc::new(RefCell::new(None));

    let listener: Listener = {
        let registry = Rc::downgrade(&registry);
        let calls = Rc::clone(&calls);
        let slot = Rc::clone(&slot);
        Rc::new(move || {
            calls.set(calls.get() + 1);
            if let (Some(registry), Some(me)) = (registry.upgrade(), slot.borrow().as_ref()) {
                registry.remove_listener(me);
            }
        })
    };
    *slot.borrow_mut() = Some(listener.clone());
    registry.add_listener(listener);

    registry.notify_listeners();
    registry.notify_listeners();

    assert_eq!(calls.get(), 1, "Self-removal applies from the next notify");
    assert!(registry.is_empty());
}

#[test]
fn test_listener_added_during_notify_waits_for_next_round() {
    let registry = Rc::new(ListenerRegistry::new());
    let log = Rc::new(RefCell::new(Vec::new()));
    let late = recording(&log, "late");

    let adder: Listener = {
        let registry = Rc::downgrade(&registry);
        let late = late.clone();
        let log = Rc::clone(&log);
        Rc::new(move || {
            log.borrow_mut().push("adder");
            if let Some(registry) = registry.upgrade() {
                registry.add_listener(late.clone());
            }
        })
    };
    registry.add_listener(adder);

    registry.notify_listeners();
    assert_eq!(*log.borrow(), vec!["adder"]);

    registry.notify_listeners();
    assert_eq!(*log.borrow(), vec!["adder", "adder", "late"]);
}

/// Minimal container used to exercise the provided trait methods
struct Counter {
    value: Cell<u32>,
    listeners: ListenerRegistry,
}

impl Observable for Counter {
    fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}

impl Counter {
    fn increment(&self) {
        self.value.set(self.value.get() + 1);
        self.notify_listeners();
    }
}

#[test]
fn test_observable_default_methods() {
    let counter = Rc::new(Counter {
        value: Cell::new(0),
        listeners: ListenerRegistry::new(),
    });
    let seen = Rc::new(Cell::new(0));

    let listener: Listener = {
        let counter = Rc::downgrade(&counter);
        let seen = Rc::clone(&seen);
        Rc::new(move || {
            if let Some(counter) = counter.upgrade() {
                seen.set(counter.value.get());
            }
        })
    };

    counter.add_listener(listener.clone());
    counter.increment();
    counter.increment();
    assert_eq!(seen.get(), 2, "Listener reads current state on each call");

    counter.remove_listener(&listener);
    counter.increment();
    assert_eq!(seen.get(), 2);

    counter.add_listener(listener);
    counter.dispose();
    counter.increment();
    assert_eq!(seen.get(), 2);
}
