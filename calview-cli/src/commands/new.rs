use anyhow::{Context, Result};
use calview_core::{Action, EventDraft, Outcome, Session};
use chrono::{Duration, NaiveDateTime};
use owo_colors::OwoColorize;

use crate::events_file::SaveStatus;

pub fn run(
    session: &mut Session,
    saved: &SaveStatus,
    title: String,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
) -> Result<()> {
    let end = match end {
        Some(end) => end,
        None => start
            .checked_add_signed(Duration::hours(1))
            .with_context(|| format!("No room for a one hour event after {start}"))?,
    };

    session.dispatch(Action::OpenNew(start))?;

    match session.dispatch(Action::SubmitCreate(EventDraft::new(title, start, end))) {
        Ok(Outcome::Created(event)) => {
            saved.check()?;
            println!("{}", format!("  Created: {}", event.title).green());
            println!("  {}", event.id.as_str().dimmed());
            Ok(())
        }
        Ok(other) => anyhow::bail!("Unexpected outcome: {:?}", other),
        Err(e) => {
            session.dispatch(Action::CloseDialog)?;
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events_file;
    use calview_core::view::{ViewMode, ViewState};
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn session_writing_to(path: std::path::PathBuf) -> (Session, SaveStatus) {
        let (sink, saved) = events_file::sink(path);
        let view = ViewState::new(ViewMode::Day, start().date());
        (Session::new(Vec::new(), sink, view).unwrap(), saved)
    }

    #[test]
    fn created_event_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let (mut session, saved) = session_writing_to(path.clone());

        run(&mut session, &saved, "Standup".into(), start(), None).unwrap();

        let written = events_file::load(&path).unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].end, start() + Duration::hours(1));
    }

    #[test]
    fn unwritable_events_file_fails_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("plain-file");
        std::fs::write(&blocker, "").unwrap();
        let (mut session, saved) = session_writing_to(blocker.join("events.json"));

        let err = run(&mut session, &saved, "Standup".into(), start(), None).unwrap_err();

        assert!(err.to_string().contains("Could not save events"));
    }

    #[test]
    fn no_default_slot_at_the_last_instant() {
        let dir = tempfile::tempdir().unwrap();
        let (mut session, saved) = session_writing_to(dir.path().join("events.json"));

        let result = run(&mut session, &saved, "Late".into(), NaiveDateTime::MAX, None);

        assert!(result.is_err());
        assert!(session.store().is_empty());
    }
}
