use anyhow::{Context, Result};
use calview_core::{Action, EventId, Outcome, Session};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

use crate::events_file::SaveStatus;

pub fn run(
    session: &mut Session,
    saved: &SaveStatus,
    id: EventId,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
) -> Result<()> {
    session.dispatch(Action::OpenManage(id.clone()))?;

    // Start from the stored values; only the given fields change.
    let Some(mut draft) = session.dialog().draft().cloned() else {
        anyhow::bail!("Edit dialog did not open for {}", id);
    };
    if let Some(title) = title {
        draft.title = title;
    }
    if let Some(start) = start {
        // Moving the start keeps the duration unless an end is given.
        let duration = draft.end - draft.start;
        draft.start = start;
        draft.end = start
            .checked_add_signed(duration)
            .with_context(|| format!("Moving {id} to {start} runs past the last date"))?;
    }
    if let Some(end) = end {
        draft.end = end;
    }

    match session.dispatch(Action::SubmitEdit(id, draft)) {
        Ok(Outcome::Updated(event)) => {
            saved.check()?;
            println!("{}", format!("  Updated: {}", event.title).yellow());
            Ok(())
        }
        Ok(other) => anyhow::bail!("Unexpected outcome: {:?}", other),
        Err(e) => {
            session.dispatch(Action::CloseDialog)?;
            Err(e.into())
        }
    }
}
