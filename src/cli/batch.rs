use std::ffi::OsString;
use std::process::ExitCode;

use crate::command;
use crate::config::Settings;
use crate::error::Result;
use crate::options::Options;
use crate::output;
use crate::process::{self, ClaudeRun};

/// Batch arguments from a full argv: the program name is dropped and every
/// other token, `--` included, is kept as given (lossily decoded).
pub fn raw_args<I>(argv: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    argv.into_iter()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

/// Execute one batch run and map the outcome to an exit code.
///
/// This is the only place errors are reported: any failure prints a single
/// line to stderr and yields exit code 1.
pub async fn run<S: AsRef<str>>(args: &[S], settings: &Settings) -> ExitCode {
    match dispatch(args, settings).await {
        Ok(run) => {
            tracing::debug!(
                code = ?run.exit_code,
                path = %run.output_path.display(),
                "batch run complete"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Parse, load the template, prepare the output path, and run the
/// downstream tool, stopping at the first failure.
pub async fn dispatch<S: AsRef<str>>(args: &[S], settings: &Settings) -> Result<ClaudeRun> {
    let options = Options::parse(args)?;
    let name = options.command()?;

    let prompt = command::load(name, options.command_arg.as_deref(), &settings.home)?;
    let output_path = output::prepare(&settings.home)?;
    let claude_args = process::claude_args(&options, &prompt);

    process::execute(
        &settings.claude_program,
        &claude_args,
        &output_path,
        options.hook.as_deref(),
    )
    .await
}
