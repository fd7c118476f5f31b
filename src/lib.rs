pub mod command;
pub mod config;
pub mod error;
pub mod hook;
pub mod logging;
pub mod options;
pub mod output;
pub mod process;

pub(crate) mod cli;

#[cfg(all(test, unix))]
pub(crate) mod testing;

pub use cli::batch::raw_args;
pub use config::Settings;
pub use error::{BatchError, Result};
pub use options::Options;

/// Run a batch invocation with already-resolved settings.
///
/// This is the binary entry point. It bridges `main.rs` to the library
/// without exposing `cli` internals; for finer control use
/// [`options::Options`], [`command::load`], [`output::prepare`] and
/// [`process::execute`] directly.
pub async fn run_batch<S: AsRef<str>>(
    args: &[S],
    settings: &Settings,
) -> std::process::ExitCode {
    cli::batch::run(args, settings).await
}
