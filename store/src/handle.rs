//! Shared handle over one [`AttendanceState`].
//!
//! `AttendanceStore` is owned by the application's composition root and handed
//! to consumers by clone (the clone shares the same state). Dispatch is
//! serialized: the write lock is held across the transition and the broadcast,
//! so subscribers receive events in exactly the order they were applied.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::broadcast;

use crate::action::{Action, StoreEvent};
use crate::state::{AttendanceState, Stamper, SystemStamper};

/// Capacity of the event channel. Slow subscribers lag and skip ahead.
const EVENT_CAPACITY: usize = 256;

struct Inner {
    state: RwLock<AttendanceState>,
    events: broadcast::Sender<StoreEvent>,
    stamper: Box<dyn Stamper>,
}

#[derive(Clone)]
pub struct AttendanceStore {
    inner: Arc<Inner>,
}

impl Default for AttendanceStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AttendanceStore {
    /// Creates an empty store stamped with random ids and the wall clock.
    pub fn new() -> Self {
        Self::with_stamper(SystemStamper)
    }

    pub fn with_stamper(stamper: impl Stamper + 'static) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(AttendanceState::new()),
                events,
                stamper: Box::new(stamper),
            }),
        }
    }

    /// Applies `action` and notifies subscribers. Never fails.
    pub fn dispatch(&self, action: Action) -> StoreEvent {
        let name = action.name();
        let mut state = self.write();
        let event = state.apply(action, self.inner.stamper.stamp());
        // No subscribers is not an error.
        let _ = self.inner.events.send(event.clone());
        drop(state);

        tracing::debug!(action = name, "store transition applied");
        event
    }

    /// Decides on a batch of actions from the current state and applies them,
    /// all under one write lock. Nothing can interleave between the check in
    /// `decide` and the last transition. On `Err` the store is untouched.
    pub fn dispatch_with<E>(
        &self,
        decide: impl FnOnce(&AttendanceState) -> Result<Vec<Action>, E>,
    ) -> Result<Vec<StoreEvent>, E> {
        let mut state = self.write();
        let actions = decide(&state)?;

        let mut events = Vec::with_capacity(actions.len());
        for action in actions {
            let name = action.name();
            let event = state.apply(action, self.inner.stamper.stamp());
            let _ = self.inner.events.send(event.clone());
            tracing::debug!(action = name, "store transition applied");
            events.push(event);
        }
        drop(state);

        Ok(events)
    }

    /// Receives every event applied after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.inner.events.subscribe()
    }

    /// Runs `f` against the current state under the read lock.
    pub fn read<R>(&self, f: impl FnOnce(&AttendanceState) -> R) -> R {
        f(&self.read_guard())
    }

    /// A point-in-time copy of the whole state.
    pub fn snapshot(&self) -> AttendanceState {
        self.read_guard().clone()
    }

    /// Snapshot plus a receiver positioned right after it, so no event is
    /// missed or seen twice.
    pub fn snapshot_and_subscribe(&self) -> (AttendanceState, broadcast::Receiver<StoreEvent>) {
        let state = self.read_guard();
        let rx = self.inner.events.subscribe();
        (state.clone(), rx)
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.events.receiver_count()
    }

    // apply only pushes or swaps, so a poisoned lock still guards a whole state.
    fn read_guard(&self) -> RwLockReadGuard<'_, AttendanceState> {
        self.inner
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AttendanceState> {
        self.inner
            .state
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
