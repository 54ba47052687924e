use anyhow::Result;
use calview_core::{Action, EventId, MutationError, Outcome, Session};
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use crate::events_file::SaveStatus;
use crate::render::Render;

pub fn run(session: &mut Session, saved: &SaveStatus, id: EventId, force: bool) -> Result<()> {
    let Some(event) = session.store().get(&id) else {
        return Err(MutationError::NotFound(id).into());
    };

    if !force {
        println!("  {}", event.render());
        let confirmed = Confirm::new()
            .with_prompt("Delete this event?")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Nothing deleted".dimmed());
            return Ok(());
        }
    }

    match session.dispatch(Action::Delete(id))? {
        Outcome::Deleted(event) => {
            saved.check()?;
            println!("{}", format!("  Deleted: {}", event.title).red());
            Ok(())
        }
        other => anyhow::bail!("Unexpected outcome: {:?}", other),
    }
}
