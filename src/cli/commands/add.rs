use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::input::LogInput;
use crate::errors::AppResult;
use crate::store::LogStore;
use crate::ui::messages::success;
use crate::utils::date;

/// Add a study session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        subject,
        hours,
        description,
    } = cmd
    {
        let input = LogInput {
            date: date.clone().unwrap_or_else(|| date::today().to_string()),
            subject: subject.clone(),
            duration: hours.clone(),
            description: description.clone(),
        };
        let log = input.validate()?;

        let mut store = LogStore::open(cfg.storage_path());
        store.add(log.clone())?;

        success(format!(
            "Added #{}: {} {}h on {}",
            store.len(),
            log.subject,
            log.duration_str(),
            log.date_str()
        ));
    }

    Ok(())
}
