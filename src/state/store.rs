use std::sync::Arc;

use futures::channel::mpsc::{self, UnboundedReceiver};
use log::{debug, trace};
use parking_lot::RwLock;

use super::{AppState, reduce};
use crate::action::{Action, Dispatcher};
use crate::event::{EventBus, SnapshotHandler};

/// One published state, tagged with its position in the stream
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Number of actions folded to reach this state
    pub version: u64,
    pub state: Arc<AppState>,
}

/// Latest-value cell for renderers.
///
/// Readers always see the newest snapshot; older ones are never queued.
#[derive(Debug, Clone)]
pub struct LatestSnapshot {
    inner: Arc<RwLock<Snapshot>>,
}

impl LatestSnapshot {
    fn new(snapshot: Snapshot) -> Self {
        Self {
            inner: Arc::new(RwLock::new(snapshot)),
        }
    }

    pub fn get(&self) -> Snapshot {
        self.inner.read().clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.read().version
    }

    fn set(&self, snapshot: Snapshot) {
        *self.inner.write() = snapshot;
    }
}

/// Holds the action stream and folds it into successive snapshots.
///
/// Actions are processed strictly in dispatch order, one at a time, and every
/// resulting snapshot is broadcast to subscribers before the next is folded.
pub struct Store {
    state: Arc<AppState>,
    version: u64,
    receiver: UnboundedReceiver<Action>,
    dispatcher: Dispatcher,
    event_bus: EventBus,
    latest: LatestSnapshot,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("version", &self.version)
            .field("items", &self.state.current_canvas_item_list.len())
            .field("event_bus", &self.event_bus)
            .finish_non_exhaustive()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

impl Store {
    /// Creates a store seeded with `initial` as version 0
    pub fn new(initial: AppState) -> Self {
        let (sender, receiver) = mpsc::unbounded();
        let state = Arc::new(initial);
        let latest = LatestSnapshot::new(Snapshot {
            version: 0,
            state: Arc::clone(&state),
        });

        Self {
            state,
            version: 0,
            receiver,
            dispatcher: Dispatcher::new(sender),
            event_bus: EventBus::new(),
            latest,
        }
    }

    /// A handle for pushing actions onto this store's stream
    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    /// A latest-value handle for renderers
    pub fn latest(&self) -> LatestSnapshot {
        self.latest.clone()
    }

    pub fn state(&self) -> &Arc<AppState> {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: self.version,
            state: Arc::clone(&self.state),
        }
    }

    /// Subscribe a handler. It immediately receives the current snapshot,
    /// then every snapshot published afterwards.
    pub fn subscribe(&mut self, mut handler: Box<dyn SnapshotHandler>) {
        handler.handle_snapshot(&self.snapshot());
        self.event_bus.subscribe(handler);
    }

    /// Fold a single action and publish the result
    pub fn apply(&mut self, action: &Action) {
        let next = reduce(&self.state, action);
        if Arc::ptr_eq(&next, &self.state) {
            trace!("{} left the state unchanged", action.tag());
        }

        self.state = next;
        self.version += 1;

        let snapshot = self.snapshot();
        self.latest.set(snapshot.clone());
        self.event_bus.emit(&snapshot);
    }

    /// Drain every action dispatched so far, in order.
    ///
    /// Returns the number of actions folded.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        // The store keeps its own sender alive, so the stream never closes here;
        // `Err` only means it is empty for now.
        while let Ok(action) = self.receiver.try_recv() {
            self.apply(&action);
            processed += 1;
        }

        if processed > 0 {
            debug!("Folded {processed} actions, now at version {}", self.version);
        }
        processed
    }
}
