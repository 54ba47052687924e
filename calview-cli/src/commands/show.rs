use anyhow::Result;
use calview_core::Session;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::render::{Render, day_label};

pub fn run(session: &Session, today: NaiveDate) -> Result<()> {
    println!("{}", session.view().render());

    if session.visible_events().is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut first = true;

    for day in session.visible_days() {
        let placed = session.day_layout(day);
        if placed.is_empty() {
            continue;
        }

        if !first {
            println!();
        }
        first = false;

        println!("{}", day_label(day, today).bold());
        for p in &placed {
            println!("  {}", p.render());
        }
    }

    Ok(())
}
