//! File-backed logging. The terminal belongs to the UI, so logs never go to
//! stdout or stderr while the game runs.

use crate::error::AppError;
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ARTILLERY_LOG";

/// Route `log` output to `path`. Without a path, logging stays disabled.
pub fn init(path: Option<&Path>) -> Result<(), AppError> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| AppError::LogFile {
        path: path.display().to_string(),
        source,
    })?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .init();
    Ok(())
}
