//! Create/manage dialog state machine.
//!
//! All event mutations go through here: the dialog validates the submitted
//! draft, applies a copy-on-write change to the [`EventStore`], and closes.
//! At most one dialog is open at a time.

use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::error::MutationError;
use crate::event::{CalendarEvent, EventDraft, EventId};
use crate::store::EventStore;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    CreatingNew {
        draft: EventDraft,
    },
    /// `id` is only a lookup key; the event itself is read from the store.
    ManagingExisting {
        id: EventId,
        draft: EventDraft,
    },
}

#[derive(Debug, Default)]
pub struct Dialog {
    state: DialogState,
}

impl Dialog {
    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn new_event_dialog_open(&self) -> bool {
        matches!(self.state, DialogState::CreatingNew { .. })
    }

    pub fn manage_event_dialog_open(&self) -> bool {
        matches!(self.state, DialogState::ManagingExisting { .. })
    }

    pub fn selected_id(&self) -> Option<&EventId> {
        match &self.state {
            DialogState::ManagingExisting { id, .. } => Some(id),
            _ => None,
        }
    }

    /// The selected event as it is in the store right now.
    pub fn selected_event<'a>(&self, store: &'a EventStore) -> Option<&'a CalendarEvent> {
        self.selected_id().and_then(|id| store.get(id))
    }

    /// In-progress form values of whichever dialog is open.
    pub fn draft(&self) -> Option<&EventDraft> {
        match &self.state {
            DialogState::Closed => None,
            DialogState::CreatingNew { draft } | DialogState::ManagingExisting { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut EventDraft> {
        match &mut self.state {
            DialogState::Closed => None,
            DialogState::CreatingNew { draft } | DialogState::ManagingExisting { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn open_new(&mut self, start: NaiveDateTime) {
        debug!(%start, "opening new event dialog");
        self.state = DialogState::CreatingNew {
            draft: EventDraft::starting_at(start),
        };
    }

    pub fn open_manage(&mut self, store: &EventStore, id: &EventId) -> Result<(), MutationError> {
        let event = store
            .get(id)
            .ok_or_else(|| MutationError::NotFound(id.clone()))?;
        debug!(%id, "opening manage event dialog");
        self.state = DialogState::ManagingExisting {
            id: id.clone(),
            draft: EventDraft::from(event),
        };
        Ok(())
    }

    /// Close without saving; the draft is dropped.
    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn submit_create(
        &mut self,
        store: &mut EventStore,
        draft: EventDraft,
    ) -> Result<CalendarEvent, MutationError> {
        let event = draft.into_event(EventId::generate()).inspect_err(|e| {
            warn!(error = %e, "create rejected");
        })?;

        store.append(event.clone());
        self.close();
        Ok(event)
    }

    pub fn submit_edit(
        &mut self,
        store: &mut EventStore,
        id: &EventId,
        draft: EventDraft,
    ) -> Result<CalendarEvent, MutationError> {
        if !store.contains(id) {
            warn!(%id, "edit of missing event");
            self.close();
            return Err(MutationError::NotFound(id.clone()));
        }

        let event = draft.into_event(id.clone()).inspect_err(|e| {
            warn!(%id, error = %e, "edit rejected");
        })?;

        store.replace_by_id(event.clone())?;
        self.close();
        Ok(event)
    }

    /// Submit whatever dialog is open with its current draft.
    pub fn submit(
        &mut self,
        store: &mut EventStore,
    ) -> Option<Result<CalendarEvent, MutationError>> {
        match self.state.clone() {
            DialogState::Closed => None,
            DialogState::CreatingNew { draft } => Some(self.submit_create(store, draft)),
            DialogState::ManagingExisting { id, draft } => {
                Some(self.submit_edit(store, &id, draft))
            }
        }
    }

    pub fn delete(
        &mut self,
        store: &mut EventStore,
        id: &EventId,
    ) -> Result<CalendarEvent, MutationError> {
        let result = store.remove(id);
        if let Err(e) = &result {
            warn!(error = %e, "delete failed");
        }
        // A deleted or already missing event can't stay selected.
        self.close();
        result
    }
}
