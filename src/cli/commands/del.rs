use super::id_to_index;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{LogStore, Mutation};
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let index = id_to_index(*id);
        let mut store = LogStore::open(cfg.storage_path());

        let Some(log) = store.get(index) else {
            warning(format!("No log with id #{}; nothing deleted.", id));
            return Ok(());
        };

        if !*yes {
            let prompt = format!(
                "Delete log #{} ({} {}h on {})? Ids after it will shift down by one.",
                id,
                log.subject,
                log.duration_str(),
                log.date_str()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        match store.delete(index)? {
            Mutation::Applied => success(format!("Log #{} has been deleted.", id)),
            Mutation::OutOfRange => warning(format!("No log with id #{}; nothing deleted.", id)),
        }
    }

    Ok(())
}
