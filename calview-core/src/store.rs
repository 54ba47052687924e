//! Copy-on-write event collection.
//!
//! The store never mutates a snapshot in place: every change builds a new
//! `Arc<[CalendarEvent]>`, hands it to the host's sink, and swaps it in. A
//! reader holding an older snapshot keeps a consistent view of it.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::MutationError;
use crate::event::{CalendarEvent, EventId};

/// Immutable view of the event collection at one point in time.
pub type Snapshot = Arc<[CalendarEvent]>;

/// Receives every replacement collection (the host's persistence setter).
pub trait EventSink {
    fn replace_all(&mut self, events: Snapshot);
}

impl<F: FnMut(Snapshot)> EventSink for F {
    fn replace_all(&mut self, events: Snapshot) {
        self(events)
    }
}

/// Sink for hosts that only read the store.
pub struct NoSink;

impl EventSink for NoSink {
    fn replace_all(&mut self, _events: Snapshot) {}
}

pub struct EventStore {
    events: Snapshot,
    sink: Box<dyn EventSink>,
}

impl EventStore {
    /// Fails with the first event whose `start` is not before its `end`.
    pub fn new(
        events: Vec<CalendarEvent>,
        sink: impl EventSink + 'static,
    ) -> Result<Self, MutationError> {
        validate_all(&events)?;
        Ok(EventStore {
            events: events.into(),
            sink: Box::new(sink),
        })
    }

    /// Store whose changes go nowhere.
    pub fn detached(events: Vec<CalendarEvent>) -> Result<Self, MutationError> {
        Self::new(events, NoSink)
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.events)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|e| &e.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// Replace the collection wholesale, e.g. after the host reloads it.
    /// An invalid collection is rejected and the current one kept.
    pub fn replace(&mut self, events: Vec<CalendarEvent>) -> Result<(), MutationError> {
        validate_all(&events)?;
        self.commit(events.into());
        Ok(())
    }

    pub(crate) fn append(&mut self, event: CalendarEvent) {
        debug!(id = %event.id, "appending event");
        let events: Snapshot = self
            .events
            .iter()
            .cloned()
            .chain(std::iter::once(event))
            .collect();
        self.commit(events);
    }

    pub(crate) fn replace_by_id(&mut self, event: CalendarEvent) -> Result<(), MutationError> {
        if !self.contains(&event.id) {
            return Err(MutationError::NotFound(event.id));
        }
        debug!(id = %event.id, "replacing event");
        let events: Snapshot = self
            .events
            .iter()
            .map(|e| if e.id == event.id { event.clone() } else { e.clone() })
            .collect();
        self.commit(events);
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: &EventId) -> Result<CalendarEvent, MutationError> {
        let removed = self
            .get(id)
            .cloned()
            .ok_or_else(|| MutationError::NotFound(id.clone()))?;
        debug!(%id, "removing event");
        let events: Snapshot = self.events.iter().filter(|e| &e.id != id).cloned().collect();
        self.commit(events);
        Ok(removed)
    }

    fn commit(&mut self, events: Snapshot) {
        self.sink.replace_all(Arc::clone(&events));
        self.events = events;
    }
}

fn validate_all(events: &[CalendarEvent]) -> Result<(), MutationError> {
    events.iter().try_for_each(|e| {
        e.validate().inspect_err(|err| warn!(id = %e.id, error = %err, "rejecting event"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn at(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn event(id: &str, h: u32) -> CalendarEvent {
        CalendarEvent::new(id, id, at(h), at(h + 1))
    }

    #[test]
    fn older_snapshot_is_unaffected_by_mutation() {
        let mut store = EventStore::detached(vec![event("a", 9)]).unwrap();
        let before = store.snapshot();

        store.append(event("b", 10));

        assert_eq!(before.len(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.events()[1].id.as_str(), "b");
    }

    #[test]
    fn sink_receives_every_new_collection() {
        let received: Rc<RefCell<Vec<usize>>> = Rc::default();
        let seen = Rc::clone(&received);
        let mut store = EventStore::new(vec![event("a", 9)], move |events: Snapshot| {
            seen.borrow_mut().push(events.len())
        })
        .unwrap();

        store.append(event("b", 10));
        store.remove(&EventId::new("a")).unwrap();

        assert_eq!(*received.borrow(), vec![2, 1]);
    }

    #[test]
    fn replace_by_id_keeps_position() {
        let events = vec![event("a", 9), event("b", 10), event("c", 11)];
        let mut store = EventStore::detached(events).unwrap();
        let mut edited = event("b", 14);
        edited.title = "moved".into();

        store.replace_by_id(edited).unwrap();

        let ids: Vec<_> = store.events().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(store.events()[1].title, "moved");
        assert_eq!(store.events()[1].start, at(14));
    }

    #[test]
    fn missing_ids_are_not_found_and_leave_store_alone() {
        let received: Rc<RefCell<usize>> = Rc::default();
        let calls = Rc::clone(&received);
        let mut store = EventStore::new(vec![event("a", 9)], move |_: Snapshot| {
            *calls.borrow_mut() += 1
        })
        .unwrap();

        assert_eq!(
            store.replace_by_id(event("zzz", 9)),
            Err(MutationError::NotFound(EventId::new("zzz")))
        );
        assert!(store.remove(&EventId::new("zzz")).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(*received.borrow(), 0);
    }

    #[test]
    fn inverted_events_are_rejected() {
        let backwards = CalendarEvent::new("bad", "bad", at(11), at(9));

        assert!(matches!(
            EventStore::detached(vec![event("ok", 9), backwards.clone()]),
            Err(MutationError::ValidationFailed { .. })
        ));

        let mut store = EventStore::detached(vec![event("a", 9)]).unwrap();
        assert!(store.replace(vec![backwards]).is_err());
        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0].id.as_str(), "a");
    }
}
