use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that abort a batch run. Every variant maps to exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
    #[error("No command specified (e.g. /foo)")]
    MissingCommand,
    #[error("Command file not found: {}", .0.display())]
    CommandNotFound(PathBuf),
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program}: not found in PATH")]
    ProgramNotFound {
        program: String,
        #[source]
        source: which::Error,
    },
    #[error("failed to read output of {program}: {source}")]
    Pipe {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Hook error: {source}")]
    Hook {
        hook: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BatchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BatchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_argument_message_names_token() {
        let err = BatchError::UnknownArgument("bogus".into());
        assert_eq!(err.to_string(), "Unknown argument: bogus");
    }

    #[test]
    fn command_not_found_message_contains_path() {
        let err = BatchError::CommandNotFound(PathBuf::from("/h/.claude/commands/x.md"));
        assert_eq!(
            err.to_string(),
            "Command file not found: /h/.claude/commands/x.md"
        );
    }

    #[test]
    fn hook_message_is_prefixed() {
        let err = BatchError::Hook {
            hook: "./post.sh".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "Hook error: no such file");
    }
}
