//! Visible date ranges and the overlap test used to filter events.

use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::event::CalendarEvent;
use crate::view::{ViewMode, ViewState, first_of_month, first_of_year};

/// Half-open timestamp range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DateRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        DateRange { start, end }
    }

    /// Midnight to midnight of a single day.
    pub fn for_day(date: NaiveDate) -> Self {
        Self::between(date, date.checked_add_days(Days::new(1)))
    }

    /// Range covered by the given view: its day, week, month or year.
    pub fn for_view(view: &ViewState) -> Self {
        match view.mode {
            ViewMode::Day => Self::for_day(view.anchor),
            ViewMode::Week => {
                let first = view.week_start.week_of(view.anchor);
                Self::between(first, first.checked_add_days(Days::new(7)))
            }
            ViewMode::Month => {
                let first = first_of_month(view.anchor);
                Self::between(first, first.checked_add_months(Months::new(1)))
            }
            ViewMode::Year => {
                let first = first_of_year(view.anchor);
                Self::between(first, first.checked_add_months(Months::new(12)))
            }
        }
    }

    /// `end` of `None` means the next boundary is past chrono's range, so
    /// the range saturates at the last representable instant.
    fn between(first: NaiveDate, next: Option<NaiveDate>) -> Self {
        DateRange {
            start: first.and_time(NaiveTime::MIN),
            end: next
                .map(|d| d.and_time(NaiveTime::MIN))
                .unwrap_or(NaiveDateTime::MAX),
        }
    }

    /// The one overlap predicate: `start < self.end && end > self.start`.
    /// Touching a boundary is not overlapping.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }

    pub fn overlaps_event(&self, event: &CalendarEvent) -> bool {
        self.overlaps(event.start, event.end)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        at >= self.start && at < self.end
    }

    /// Intersection of `[start, end)` with this range.
    pub fn clip(&self, start: NaiveDateTime, end: NaiveDateTime) -> (NaiveDateTime, NaiveDateTime) {
        (start.max(self.start), end.min(self.end))
    }

    /// Calendar dates this range touches, in order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let last = if self.end.time() == NaiveTime::MIN {
            self.end.date().pred_opt()
        } else {
            Some(self.end.date())
        };
        let Some(last) = last else {
            return Vec::new();
        };

        self.start
            .date()
            .iter_days()
            .take_while(|d| *d <= last)
            .collect()
    }
}

/// Range the given view currently shows.
pub fn visible_range(view: &ViewState) -> DateRange {
    DateRange::for_view(view)
}

/// Events overlapping `range`, in source order.
pub fn events_in_range<'a>(
    events: &'a [CalendarEvent],
    range: &DateRange,
) -> Vec<&'a CalendarEvent> {
    events.iter().filter(|e| range.overlaps_event(e)).collect()
}
