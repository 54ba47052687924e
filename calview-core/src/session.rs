//! State-and-dispatch handle tying the store, the view and the dialogs.
//!
//! A host creates one [`Session`], reads from its accessors to render, and
//! forwards every user interaction as an [`Action`].

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::dialog::Dialog;
use crate::error::MutationError;
use crate::event::{CalendarEvent, EventDraft, EventId};
use crate::layout::{PlacedEvent, layout_day};
use crate::locator::{NextEvent, NoActionReason, next_event};
use crate::range::{DateRange, events_in_range, visible_range};
use crate::store::{EventSink, EventStore};
use crate::view::{ViewMode, ViewState};

/// Host callbacks, one variant per interaction.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetMode(ViewMode),
    SetAnchor(NaiveDate),
    Next,
    Previous,
    Today(NaiveDate),
    JumpToNextEvent,
    OpenNew(NaiveDateTime),
    OpenManage(EventId),
    CloseDialog,
    SubmitCreate(EventDraft),
    SubmitEdit(EventId, EventDraft),
    Delete(EventId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    ViewChanged(ViewState),
    NoAction(NoActionReason),
    DialogChanged,
    Created(CalendarEvent),
    Updated(CalendarEvent),
    Deleted(CalendarEvent),
}

pub struct Session {
    store: EventStore,
    view: ViewState,
    dialog: Dialog,
}

impl Session {
    /// Fails if any host event has `start >= end`.
    pub fn new(
        events: Vec<CalendarEvent>,
        sink: impl EventSink + 'static,
        view: ViewState,
    ) -> Result<Self, MutationError> {
        Ok(Session {
            store: EventStore::new(events, sink)?,
            view,
            dialog: Dialog::default(),
        })
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Outcome, MutationError> {
        debug!(?action, "dispatch");
        match action {
            Action::SetMode(mode) => {
                self.view.set_mode(mode);
                Ok(Outcome::ViewChanged(self.view))
            }
            Action::SetAnchor(date) => {
                self.view.set_anchor(date);
                Ok(Outcome::ViewChanged(self.view))
            }
            Action::Next => {
                self.view.next();
                Ok(Outcome::ViewChanged(self.view))
            }
            Action::Previous => {
                self.view.previous();
                Ok(Outcome::ViewChanged(self.view))
            }
            Action::Today(today) => {
                self.view.today(today);
                Ok(Outcome::ViewChanged(self.view))
            }
            Action::JumpToNextEvent => match self.next_event() {
                NextEvent::Jump { start, .. } => {
                    self.view.set_anchor(start.date());
                    Ok(Outcome::ViewChanged(self.view))
                }
                NextEvent::NoAction(reason) => Ok(Outcome::NoAction(reason)),
            },
            Action::OpenNew(start) => {
                self.dialog.open_new(start);
                Ok(Outcome::DialogChanged)
            }
            Action::OpenManage(id) => {
                self.dialog.open_manage(&self.store, &id)?;
                Ok(Outcome::DialogChanged)
            }
            Action::CloseDialog => {
                self.dialog.close();
                Ok(Outcome::DialogChanged)
            }
            Action::SubmitCreate(draft) => self
                .dialog
                .submit_create(&mut self.store, draft)
                .map(Outcome::Created),
            Action::SubmitEdit(id, draft) => self
                .dialog
                .submit_edit(&mut self.store, &id, draft)
                .map(Outcome::Updated),
            Action::Delete(id) => self.dialog.delete(&mut self.store, &id).map(Outcome::Deleted),
        }
    }

    /// Swap in a collection reloaded by the host. An open manage dialog
    /// whose event disappeared is closed. An invalid collection is rejected
    /// and nothing changes.
    pub fn replace_events(&mut self, events: Vec<CalendarEvent>) -> Result<(), MutationError> {
        self.store.replace(events)?;
        let vanished = self
            .dialog
            .selected_id()
            .is_some_and(|id| !self.store.contains(id));
        if vanished {
            debug!("selected event vanished on reload");
            self.dialog.close();
        }
        Ok(())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut Dialog {
        &mut self.dialog
    }

    pub fn selected_event(&self) -> Option<&CalendarEvent> {
        self.dialog.selected_event(&self.store)
    }

    pub fn visible_range(&self) -> DateRange {
        visible_range(&self.view)
    }

    pub fn visible_events(&self) -> Vec<&CalendarEvent> {
        events_in_range(self.store.events(), &self.visible_range())
    }

    pub fn visible_days(&self) -> Vec<NaiveDate> {
        self.visible_range().days()
    }

    pub fn day_layout(&self, day: NaiveDate) -> Vec<PlacedEvent<'_>> {
        layout_day(self.store.events(), day)
    }

    pub fn next_event(&self) -> NextEvent {
        next_event(&self.view, self.store.events())
    }
}
