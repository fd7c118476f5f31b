use std::path::Path;

use tokio::process::Command;

use crate::error::{BatchError, Result};
use crate::process::shell;

/// Script suffixes run through an interpreter instead of the shell.
const SCRIPT_INTERPRETERS: &[(&str, &str)] =
    &[(".js", "node"), (".mjs", "node"), (".cjs", "node")];

/// How a hook is launched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStyle {
    /// `<interpreter> <hook> <output>`, no shell.
    Script { interpreter: &'static str },
    /// The hook text run through the shell with `<output>` as its argument.
    Shell,
}

impl HookStyle {
    /// Pick the launch style from the hook's file suffix.
    pub fn detect(hook: &str) -> Self {
        SCRIPT_INTERPRETERS
            .iter()
            .find(|(suffix, _)| hook.ends_with(suffix))
            .map_or(HookStyle::Shell, |&(_, interpreter)| HookStyle::Script {
                interpreter,
            })
    }

    fn command(self, hook: &str, output_path: &Path) -> Command {
        match self {
            HookStyle::Script { interpreter } => {
                let mut cmd = Command::new(interpreter);
                cmd.arg(hook).arg(output_path);
                cmd
            }
            HookStyle::Shell => shell::command(hook, [output_path]),
        }
    }
}

/// Run `hook` on the captured output file with inherited stdio and wait for it.
///
/// Returns the hook's exit code. Only a failure to start the hook is an error.
pub async fn execute(hook: &str, output_path: &Path) -> Result<Option<i32>> {
    run(HookStyle::detect(hook), hook, output_path).await
}

async fn run(style: HookStyle, hook: &str, output_path: &Path) -> Result<Option<i32>> {
    tracing::debug!(hook, ?style, "running hook");
    let status = style
        .command(hook, output_path)
        .status()
        .await
        .map_err(|source| {
            tracing::error!(hook, error = %source, "hook could not be started");
            BatchError::Hook {
                hook: hook.to_string(),
                source,
            }
        })?;
    Ok(status.code())
}
