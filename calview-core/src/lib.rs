//! Core of the calview calendar.
//!
//! This crate holds everything a calendar front end needs besides drawing:
//! - `store` and `event`: the copy-on-write event collection
//! - `view` and `range`: view modes, navigation and visible ranges
//! - `locator`: the month view's "jump to next event" search
//! - `layout`: column layout for overlapping events in a day
//! - `dialog` and `session`: the create/edit/delete flow and the dispatch handle

pub mod config;
pub mod dialog;
pub mod error;
pub mod event;
pub mod layout;
pub mod locator;
pub mod range;
pub mod session;
pub mod store;
pub mod view;

pub use error::{CalViewError, CalViewResult, Field, MutationError};
pub use event::{CalendarEvent, EventDraft, EventId};
pub use session::{Action, Outcome, Session};
