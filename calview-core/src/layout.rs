//! Column layout for time-overlapping events in a single day track.
//!
//! Each event gets a `column` and a `column_count`; a renderer places it at
//! `column / column_count` of the track width with width `1 / column_count`.
//! Events that overlap never share a column, and every event in a cluster
//! of transitively overlapping events shares the cluster's `column_count`.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::CalendarEvent;
use crate::range::{DateRange, events_in_range};

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedEvent<'a> {
    pub event: &'a CalendarEvent,
    /// Start and end as drawn in the track (clipped for day tracks).
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub column: usize,
    pub column_count: usize,
}

/// Lay out events on their own start/end times.
pub fn layout_events<'a>(events: &[&'a CalendarEvent]) -> Vec<PlacedEvent<'a>> {
    let spans = events.iter().map(|e| (*e, e.start, e.end)).collect();
    place(spans)
}

/// Lay out the events of one day, clipped to that day.
///
/// Events spanning midnight occupy the track from its start (or to its end),
/// so a multi-day event is placed alongside the day's own events.
pub fn layout_day<'a>(events: &'a [CalendarEvent], day: NaiveDate) -> Vec<PlacedEvent<'a>> {
    let range = DateRange::for_day(day);
    let spans = events_in_range(events, &range)
        .into_iter()
        .map(|e| {
            let (start, end) = range.clip(e.start, e.end);
            (e, start, end)
        })
        .collect();
    place(spans)
}

struct Active {
    column: usize,
    end: NaiveDateTime,
}

fn place(mut spans: Vec<(&CalendarEvent, NaiveDateTime, NaiveDateTime)>) -> Vec<PlacedEvent<'_>> {
    spans.sort_by(|a, b| by_start_end_id(a, b));

    let mut placed: Vec<PlacedEvent> = Vec::with_capacity(spans.len());
    let mut active: Vec<Active> = Vec::new();
    let mut cluster_start = 0;
    let mut cluster_peak = 0;

    for (event, start, end) in spans {
        active.retain(|a| a.end > start);

        // Sorted by start, so an empty active set means no later event can
        // reach back into the previous cluster.
        if active.is_empty() {
            close_cluster(&mut placed[cluster_start..], cluster_peak);
            cluster_start = placed.len();
            cluster_peak = 0;
        }

        let column = lowest_free_column(&active);
        active.push(Active { column, end });
        cluster_peak = cluster_peak.max(active.len());

        placed.push(PlacedEvent {
            event,
            start,
            end,
            column,
            column_count: 0,
        });
    }
    close_cluster(&mut placed[cluster_start..], cluster_peak);

    placed
}

fn by_start_end_id(
    a: &(&CalendarEvent, NaiveDateTime, NaiveDateTime),
    b: &(&CalendarEvent, NaiveDateTime, NaiveDateTime),
) -> Ordering {
    a.1.cmp(&b.1)
        .then(a.2.cmp(&b.2))
        .then_with(|| a.0.id.cmp(&b.0.id))
}

fn lowest_free_column(active: &[Active]) -> usize {
    (0..)
        .find(|c| !active.iter().any(|a| a.column == *c))
        .unwrap_or(active.len())
}

fn close_cluster(cluster: &mut [PlacedEvent], peak: usize) {
    for p in cluster {
        p.column_count = peak;
    }
}
