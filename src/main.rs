use std::process::ExitCode;

use clap::Parser;
use claude_batch::Settings;

/// Run a Claude Code slash-command template and capture its output.
///
/// Loads ~/.claude/commands/<command>.md, substitutes the argument for
/// #$ARGUMENTS, runs `claude` with the result and writes its output to
/// ~/.claude-batch/tmp/out_<millis>.txt.
#[derive(Debug, Parser)]
#[command(
    name = "claude-batch",
    version,
    about,
    override_usage = "claude-batch [-d|--debug] [-p|--print] [--model <NAME>] [--hook <PATH>] /<command> [argument]"
)]
struct Cli {
    // Declared for --help only. The batch parser reads the raw argv so a
    // leading `--` reaches it instead of being taken as clap's escape.
    /// Flags and `/command [argument]`, read left to right
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ARGS")]
    _args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    claude_batch::logging::init();
    Cli::parse();
    let args = claude_batch::raw_args(std::env::args_os());

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    claude_batch::run_batch(&args, &settings).await
}
