use std::path::{Path, PathBuf};

use crate::config;
use crate::error::{BatchError, Result};

/// Placeholder replaced by the command argument.
pub const ARGUMENTS_TOKEN: &str = "#$ARGUMENTS";

/// Path of the template for `name` under `home`: `<home>/.claude/commands/<name>.md`.
pub fn template_path(home: &Path, name: &str) -> PathBuf {
    config::commands_dir(home).join(format!("{name}.md"))
}

/// Load the template for `name` and substitute `arg` for every
/// `#$ARGUMENTS`. Without an argument the text is returned as read.
pub fn load(name: &str, arg: Option<&str>, home: &Path) -> Result<String> {
    let path = template_path(home, name);
    tracing::debug!(path = %path.display(), "loading command template");

    let template = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BatchError::CommandNotFound(path.clone())
        } else {
            BatchError::io(&path, e)
        }
    })?;

    Ok(match arg {
        Some(arg) => substitute(&template, arg),
        None => template,
    })
}

/// Replace every literal `#$ARGUMENTS` in `template` with `arg`.
pub fn substitute(template: &str, arg: &str) -> String {
    template.replace(ARGUMENTS_TOKEN, arg)
}
