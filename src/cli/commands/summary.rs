use crate::config::Config;
use crate::errors::AppResult;
use crate::store::LogStore;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = LogStore::open(cfg.storage_path());
    let report = store.summarize_by_subject().render(cfg.subject_width);
    println!("{}", report.trim_end());
    Ok(())
}
