use std::ffi::OsStr;

use tokio::process::Command;

/// Build a command whose `program` text is interpreted by the shell while
/// each of `args` reaches it verbatim as a positional parameter.
#[cfg(unix)]
pub(crate) fn command<I, S>(program: &str, args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new("sh");
    cmd.arg("-c")
        .arg(format!("{program} \"$@\""))
        .arg(program)
        .args(args);
    cmd
}

#[cfg(windows)]
pub(crate) fn command<I, S>(program: &str, args: I) -> Command
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(program).args(args);
    cmd
}
