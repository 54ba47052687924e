//! View mode and anchor date, plus calendar-aware navigation.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CalViewError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
    Month,
    Year,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [ViewMode::Day, ViewMode::Week, ViewMode::Month, ViewMode::Year];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
            ViewMode::Year => "year",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = CalViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "day" => Ok(ViewMode::Day),
            "week" => Ok(ViewMode::Week),
            "month" => Ok(ViewMode::Month),
            "year" => Ok(ViewMode::Year),
            _ => Err(CalViewError::InvalidViewMode(s.to_string())),
        }
    }
}

/// First day of the week used by the week view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Monday,
    Sunday,
}

impl WeekStart {
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
        }
    }

    /// First day of the week that contains `date`.
    pub fn week_of(&self, date: NaiveDate) -> NaiveDate {
        let offset = (date.weekday().num_days_from_monday() + 7
            - self.weekday().num_days_from_monday())
            % 7;
        date.checked_sub_days(Days::new(offset as u64))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl FromStr for WeekStart {
    type Err = CalViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "monday" => Ok(WeekStart::Monday),
            "sunday" => Ok(WeekStart::Sunday),
            _ => Err(CalViewError::Config(format!(
                "Invalid week start '{s}'. Expected monday or sunday"
            ))),
        }
    }
}

/// The active view mode and the date it is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub mode: ViewMode,
    pub anchor: NaiveDate,
    pub week_start: WeekStart,
}

impl ViewState {
    pub fn new(mode: ViewMode, anchor: NaiveDate) -> Self {
        ViewState {
            mode,
            anchor,
            week_start: WeekStart::default(),
        }
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    pub fn set_mode(&mut self, mode: ViewMode) {
        debug!(from = %self.mode, to = %mode, "view mode changed");
        self.mode = mode;
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        debug!(%anchor, "anchor changed");
        self.anchor = anchor;
    }

    /// Jump back to the current date, keeping the mode.
    pub fn today(&mut self, today: NaiveDate) {
        self.set_anchor(today);
    }

    pub fn next(&mut self) {
        let anchor = self.step_forward().unwrap_or(self.anchor);
        self.set_anchor(anchor);
    }

    pub fn previous(&mut self) {
        let anchor = self.step_back().unwrap_or(self.anchor);
        self.set_anchor(anchor);
    }

    fn step_forward(&self) -> Option<NaiveDate> {
        match self.mode {
            ViewMode::Day => self.anchor.checked_add_days(Days::new(1)),
            ViewMode::Week => self.anchor.checked_add_days(Days::new(7)),
            ViewMode::Month => first_of_month(self.anchor).checked_add_months(Months::new(1)),
            ViewMode::Year => first_of_year(self.anchor).checked_add_months(Months::new(12)),
        }
    }

    fn step_back(&self) -> Option<NaiveDate> {
        match self.mode {
            ViewMode::Day => self.anchor.checked_sub_days(Days::new(1)),
            ViewMode::Week => self.anchor.checked_sub_days(Days::new(7)),
            ViewMode::Month => first_of_month(self.anchor).checked_sub_months(Months::new(1)),
            ViewMode::Year => first_of_year(self.anchor).checked_sub_months(Months::new(12)),
        }
    }
}

pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub(crate) fn first_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}
