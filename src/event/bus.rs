use crate::event::SnapshotHandler;
use crate::state::Snapshot;

/// Fans each published snapshot out to the subscribed handlers, in
/// subscription order
#[derive(Default)]
pub struct EventBus {
    handlers: Vec<Box<dyn SnapshotHandler>>,
    emitted: u64,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.len()))
            .field("emitted", &self.emitted)
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: Box<dyn SnapshotHandler>) {
        self.handlers.push(handler);
    }

    pub fn emit(&mut self, snapshot: &Snapshot) {
        self.emitted += 1;
        for handler in &mut self.handlers {
            handler.handle_snapshot(snapshot);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Snapshots broadcast so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Store;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_handler() {
        let mut bus = EventBus::new();
        let calls = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let calls = Rc::clone(&calls);
            bus.subscribe(Box::new(move |_: &Snapshot| calls.set(calls.get() + 1)));
        }
        assert_eq!(bus.handler_count(), 2);

        bus.emit(&Store::default().snapshot());
        assert_eq!(calls.get(), 2);
        assert_eq!(bus.emitted(), 1);
    }
}
