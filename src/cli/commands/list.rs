use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::{header, info};
use crate::utils::formatting::pad_left;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter } = cmd {
        let store = LogStore::open(cfg.storage_path());

        if store.is_empty() {
            info("No logs recorded yet.");
            return Ok(());
        }

        let rows = store.filter(filter.as_deref().unwrap_or(""))?;
        if rows.is_empty() {
            info("No logs match the filter.");
            return Ok(());
        }

        let mut table = Table::new(&["#", "Date", "Subject", "Duration (h)", "Description"]);
        for (index, log) in &rows {
            table.add_row(vec![
                (index + 1).to_string(),
                log.date_str(),
                log.subject.clone(),
                pad_left(&log.duration_str(), "Duration (h)".len()),
                log.description.clone(),
            ]);
        }

        header(format!("{} of {} logs", rows.len(), store.len()));
        print!("{}", table.render());
    }

    Ok(())
}
