//! Terminal rendering for calview types.
//!
//! Extension traits adding colored output to calview-core types using
//! owo_colors.

use calview_core::layout::PlacedEvent;
use calview_core::range::DateRange;
use calview_core::view::{ViewMode, ViewState};
use calview_core::CalendarEvent;
use chrono::{Duration, NaiveDate};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for ViewState {
    fn render(&self) -> String {
        let title = match self.mode {
            ViewMode::Day => self.anchor.format("%A %-d %B %Y").to_string(),
            ViewMode::Week => {
                let range = DateRange::for_view(self);
                let last = range.end.date() - Duration::days(1);
                format!("Week of {} - {}", range.start.format("%b %-d"), last.format("%b %-d %Y"))
            }
            ViewMode::Month => self.anchor.format("%B %Y").to_string(),
            ViewMode::Year => self.anchor.format("%Y").to_string(),
        };
        format!("{} {}", title.bold(), format!("[{}]", self.mode).dimmed())
    }
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            format_span(self.start.time(), self.end.time()),
            self.title,
            self.id.as_str().dimmed()
        )
    }
}

impl Render for PlacedEvent<'_> {
    fn render(&self) -> String {
        let column = if self.column_count > 1 {
            format!("{}/{}", self.column + 1, self.column_count)
                .yellow()
                .to_string()
        } else {
            String::new()
        };
        format!(
            "{} {} {} {}",
            format_span(self.start.time(), self.end.time()),
            self.event.title,
            column,
            self.event.id.as_str().dimmed()
        )
    }
}

/// Day heading, e.g. "Today" or "Wed Mar 13".
pub fn day_label(day: NaiveDate, today: NaiveDate) -> String {
    match (day - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        _ => day.format("%a %b %-d").to_string(),
    }
}

fn format_span(start: chrono::NaiveTime, end: chrono::NaiveTime) -> String {
    format!("{}-{}", start.format("%H:%M"), end.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_labels_relative_to_today() {
        let today = date(2024, 3, 13);
        assert_eq!(day_label(today, today), "Today");
        assert_eq!(day_label(date(2024, 3, 14), today), "Tomorrow");
        assert_eq!(day_label(date(2024, 3, 12), today), "Yesterday");
        assert_eq!(day_label(date(2024, 3, 20), today), "Wed Mar 20");
    }

    #[test]
    fn event_line_shows_times_and_title() {
        let start = date(2024, 3, 13).and_hms_opt(9, 0, 0).unwrap();
        let event = CalendarEvent::new("a", "Standup", start, start + Duration::minutes(15));
        let line = event.render();
        assert!(line.contains("09:00-09:15"));
        assert!(line.contains("Standup"));
    }
}
