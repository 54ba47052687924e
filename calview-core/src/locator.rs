//! "Jump to next event" search for browsing empty stretches of the calendar.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::event::{CalendarEvent, EventId};
use crate::range::{DateRange, visible_range};
use crate::view::{ViewMode, ViewState};

/// Result of a next-event search. Finding nothing is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextEvent {
    /// The nearest event after the visible month.
    Jump { id: EventId, start: NaiveDateTime },
    NoAction(NoActionReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoActionReason {
    /// Something is already visible in the current month.
    EventsInView,
    /// No event starts after the current month.
    NoFutureEvents,
    /// The search is only defined for month view.
    UnsupportedMode(ViewMode),
}

/// Find the next event for the current view.
pub fn next_event(view: &ViewState, events: &[CalendarEvent]) -> NextEvent {
    if view.mode != ViewMode::Month {
        return NextEvent::NoAction(NoActionReason::UnsupportedMode(view.mode));
    }
    next_event_after(&visible_range(view), events)
}

/// Nearest event starting at or after `month.end`, unless something
/// already overlaps `month`.
///
/// `month.end` is exclusive, so it is the first instant after the month.
/// Ties on start go to the earliest event in collection order.
pub fn next_event_after(month: &DateRange, events: &[CalendarEvent]) -> NextEvent {
    if events.iter().any(|e| month.overlaps_event(e)) {
        debug!(start = %month.start, "month already has events, nothing to jump to");
        return NextEvent::NoAction(NoActionReason::EventsInView);
    }

    let nearest = events
        .iter()
        .filter(|e| e.start >= month.end)
        .reduce(|best, e| if e.start < best.start { e } else { best });

    match nearest {
        Some(event) => {
            debug!(id = %event.id, start = %event.start, "next event found");
            NextEvent::Jump {
                id: event.id.clone(),
                start: event.start,
            }
        }
        None => NextEvent::NoAction(NoActionReason::NoFutureEvents),
    }
}
