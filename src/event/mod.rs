mod bus;

pub use bus::EventBus;

use crate::state::Snapshot;

/// Receives every snapshot the store publishes, in order
pub trait SnapshotHandler {
    fn handle_snapshot(&mut self, snapshot: &Snapshot);
}

impl<F> SnapshotHandler for F
where
    F: FnMut(&Snapshot),
{
    fn handle_snapshot(&mut self, snapshot: &Snapshot) {
        self(snapshot);
    }
}
