use super::id_to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::LogInput;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::{success, warning};

/// Edit a study session in place.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        subject,
        hours,
        description,
    } = cmd
    {
        let index = id_to_index(*id);
        let mut store = LogStore::open(cfg.storage_path());

        let Some(current) = store.get(index) else {
            warning(format!("No log with id #{}; nothing changed.", id));
            return Ok(());
        };

        let mut input = LogInput::from_record(current);
        if let Some(d) = date {
            input.date = d.clone();
        }
        if let Some(s) = subject {
            input.subject = s.clone();
        }
        if let Some(h) = hours {
            input.duration = h.clone();
        }
        if let Some(desc) = description {
            input.description = desc.clone();
        }

        let log = input.validate()?;
        if store.update(index, log)?.applied() {
            success(format!("Log #{} updated.", id));
        }
    }

    Ok(())
}
