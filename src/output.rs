use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{BatchError, Result};

/// Ensure `<home>/.claude-batch/tmp` exists and return a path for this run's
/// output, named after the current epoch milliseconds.
///
/// Only the directory is created. Two calls within the same millisecond
/// return the same path.
pub fn prepare(home: &Path) -> Result<PathBuf> {
    let dir = config::output_dir(home);
    std::fs::create_dir_all(&dir).map_err(|e| BatchError::io(&dir, e))?;
    let path = path_at(&dir, chrono::Utc::now().timestamp_millis());
    tracing::debug!(path = %path.display(), "prepared output path");
    Ok(path)
}

/// `<dir>/out_<millis>.txt`
pub fn path_at(dir: &Path, millis: i64) -> PathBuf {
    dir.join(format!("out_{millis}.txt"))
}
