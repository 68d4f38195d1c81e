use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result, WrapErr};
use env_logger::{Env, Target};

use crate::config::LogConfig;

/// Route `log` output to a file; the terminal belongs to the UI.
pub fn init(config: &LogConfig) -> Result<PathBuf> {
    let path = config
        .file
        .clone()
        .or_else(default_log_path)
        .ok_or_else(|| eyre!("no directory available for the log file"))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or(&config.level))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_secs()
        .try_init()?;

    Ok(path)
}

fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("prioriti").join("prioriti.log"))
}
