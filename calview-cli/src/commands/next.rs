use anyhow::Result;
use calview_core::locator::NoActionReason;
use calview_core::{Action, Outcome, Session};
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use super::show;

pub fn run(session: &mut Session, today: NaiveDate) -> Result<()> {
    match session.dispatch(Action::JumpToNextEvent)? {
        Outcome::ViewChanged(_) => show::run(session, today),
        Outcome::NoAction(reason) => {
            let message = match reason {
                NoActionReason::EventsInView => "This month already has events".to_string(),
                NoActionReason::NoFutureEvents => "No upcoming events".to_string(),
                NoActionReason::UnsupportedMode(mode) => {
                    format!("Jumping to the next event is only available in month view, not {mode}")
                }
            };
            println!("{}", message.dimmed());
            Ok(())
        }
        other => anyhow::bail!("Unexpected outcome: {:?}", other),
    }
}
