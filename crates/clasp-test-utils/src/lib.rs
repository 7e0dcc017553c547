//! Test utilities for clasp development.
//!
//! Provides the [`Probe`] ordered event recorder and the [`Counter`]
//! invocation counter. Both are cheaply cloneable handles over shared
//! state, so one instance can be captured by an enter action, an exit
//! action, and the body of the same scope.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Ordered event recorder for observing scope lifecycles.
///
/// Clones share the same event list. Record with
/// [`mark`](Probe::mark), inspect with [`events`](Probe::events) and
/// [`count`](Probe::count).
#[derive(Clone, Default)]
pub struct Probe {
    events: Rc<RefCell<Vec<String>>>,
}

impl Probe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event label in arrival order.
    pub fn mark(&self, label: impl Into<String>) {
        self.events.borrow_mut().push(label.into());
    }

    /// All recorded events, in arrival order.
    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    /// Number of events recorded with exactly this label.
    pub fn count(&self, label: &str) -> usize {
        self.events.borrow().iter().filter(|e| *e == label).count()
    }

    /// Discard all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Invocation counter for exactly-once assertions.
///
/// Clones share the same count.
#[derive(Clone, Default)]
pub struct Counter {
    hits: Rc<Cell<usize>>,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn bump(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    /// Total invocations recorded so far.
    pub fn value(&self) -> usize {
        self.hits.get()
    }
}
