//! JSON events file: the persistence layer behind the CLI's session.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, Result};
use calview_core::CalendarEvent;
use calview_core::store::Snapshot;

pub fn load(path: &Path) -> Result<Vec<CalendarEvent>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read events file {}", path.display()))?;
    let events = serde_json::from_str(&content)
        .with_context(|| format!("Invalid events file {}", path.display()))?;

    Ok(events)
}

/// Write via a temp file so a crash never leaves a half-written file.
pub fn save(path: &Path, events: &[CalendarEvent]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let temp = path.with_extension("json.tmp");
    let content = serde_json::to_string_pretty(events)?;

    std::fs::write(&temp, content)?;
    std::fs::rename(&temp, path)?;
    Ok(())
}

/// First save failure of a [`sink`], held until a command checks it.
#[derive(Clone, Default)]
pub struct SaveStatus(Rc<RefCell<Option<anyhow::Error>>>);

impl SaveStatus {
    pub fn check(&self) -> Result<()> {
        match self.0.borrow_mut().take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn record(&self, error: anyhow::Error) {
        let mut slot = self.0.borrow_mut();
        if slot.is_none() {
            *slot = Some(error);
        }
    }
}

/// Session sink that rewrites the file on every change.
pub fn sink(path: PathBuf) -> (impl FnMut(Snapshot), SaveStatus) {
    let status = SaveStatus::default();
    let failures = status.clone();
    let write = move |events: Snapshot| {
        if let Err(e) = save(&path, &events) {
            tracing::error!(path = %path.display(), error = %e, "failed to save events");
            failures.record(e.context(format!("Could not save events to {}", path.display())));
        }
    };
    (write, status)
}
