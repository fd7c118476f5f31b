use std::path::{Path, PathBuf};

/// Overrides the home directory that templates and output live under.
pub const HOME_ENV: &str = "CLAUDE_BATCH_HOME";
/// Overrides the downstream program name.
pub const CLAUDE_ENV: &str = "CLAUDE_BATCH_CLAUDE";

const DEFAULT_CLAUDE_PROGRAM: &str = "claude";

/// Runtime settings threaded through every stage of a run.
///
/// Resolved once by the binary; nothing below the entry point consults the
/// environment or the current directory on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub home: PathBuf,
    pub claude_program: String,
}

/// Errors that can occur while resolving settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not determine home directory (set $CLAUDE_BATCH_HOME)")]
    HomeNotFound,
}

impl Settings {
    /// Build settings from explicit overrides, falling back to the platform
    /// home directory and the `claude` program. Empty overrides are ignored.
    pub fn resolve(
        home_override: Option<PathBuf>,
        program_override: Option<String>,
    ) -> Result<Self, ConfigError> {
        let home = home_override
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(dirs::home_dir)
            .ok_or(ConfigError::HomeNotFound)?;
        let claude_program = program_override
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_CLAUDE_PROGRAM.to_string());
        Ok(Settings {
            home,
            claude_program,
        })
    }

    /// Resolve settings from `CLAUDE_BATCH_HOME` and `CLAUDE_BATCH_CLAUDE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::resolve(
            std::env::var_os(HOME_ENV).map(PathBuf::from),
            std::env::var(CLAUDE_ENV).ok(),
        )
    }

    /// Settings rooted at `home` with the default program.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        Settings {
            home: home.into(),
            claude_program: DEFAULT_CLAUDE_PROGRAM.to_string(),
        }
    }

    /// `<home>/.claude/commands`
    pub fn commands_dir(&self) -> PathBuf {
        commands_dir(&self.home)
    }

    /// `<home>/.claude-batch/tmp`
    pub fn output_dir(&self) -> PathBuf {
        output_dir(&self.home)
    }
}

pub(crate) fn commands_dir(home: &Path) -> PathBuf {
    home.join(".claude").join("commands")
}

pub(crate) fn output_dir(home: &Path) -> PathBuf {
    home.join(".claude-batch").join("tmp")
}
