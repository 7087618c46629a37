use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `init` command
///
/// This creates:
///  - the config directory and file (skipped in test mode)
///  - the storage file with only its header line, if missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    info("Initializing studytracker…");
    Config::init_all(cli.file.clone(), cli.test)?;
    info("studytracker initialization completed!");
    Ok(())
}
