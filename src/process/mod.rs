use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

use crate::error::{BatchError, Result};
use crate::hook;
use crate::options::Options;

pub(crate) mod shell;

/// Result of one downstream run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaudeRun {
    /// Exit code, or `None` if the process was killed by a signal.
    /// Informational only: a non-zero code is not an error.
    pub exit_code: Option<i32>,
    pub output: String,
    pub output_path: PathBuf,
}

/// Map options to the downstream argument list. The prompt is always last.
pub fn claude_args(options: &Options, prompt: &str) -> Vec<String> {
    let mut args = Vec::new();
    if options.print {
        args.push("-p".to_string());
    }
    if options.debug {
        args.push("--debug".to_string());
    }
    if let Some(model) = options.model.as_deref().filter(|m| !m.is_empty()) {
        args.push("--model".to_string());
        args.push(model.to_string());
    }
    args.push(prompt.to_string());
    args
}

/// Run `program` through the shell with `args`, forwarding its stderr as it
/// arrives and buffering its stdout. Once it exits the buffered output is
/// written to `output_path`, then either `hook` runs on that file or the
/// path is printed.
pub async fn execute(
    program: &str,
    args: &[String],
    output_path: &Path,
    hook: Option<&str>,
) -> Result<ClaudeRun> {
    which::which(program_word(program)).map_err(|source| BatchError::ProgramNotFound {
        program: program.to_string(),
        source,
    })?;

    tracing::debug!(program, argc = args.len(), "spawning");
    let mut child = shell::command(program, args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|source| BatchError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let pipe_error = |source: std::io::Error| BatchError::Pipe {
        program: program.to_string(),
        source,
    };
    let (stdout, ()) = tokio::try_join!(
        collect(child.stdout.take()),
        forward(child.stderr.take(), tokio::io::stderr()),
    )
    .map_err(pipe_error)?;
    let status = child.wait().await.map_err(pipe_error)?;

    if !status.success() {
        tracing::warn!(program, code = ?status.code(), "downstream exited unsuccessfully");
    }

    let output = String::from_utf8_lossy(&stdout).into_owned();
    tokio::fs::write(output_path, &output)
        .await
        .map_err(|e| BatchError::io(output_path, e))?;

    match hook.filter(|h| !h.is_empty()) {
        Some(hook) => {
            let code = hook::execute(hook, output_path).await?;
            tracing::debug!(hook, ?code, "hook finished");
        }
        None => println!("Claude output written to: {}", output_path.display()),
    }

    Ok(ClaudeRun {
        exit_code: status.code(),
        output,
        output_path: output_path.to_path_buf(),
    })
}

/// First word of the shell text that names the program, e.g. `claude` in
/// `claude --verbose`. Paths containing whitespace are not supported.
fn program_word(program: &str) -> &str {
    program.split_whitespace().next().unwrap_or(program)
}

async fn collect<R: AsyncRead + Unpin>(pipe: Option<R>) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    if let Some(mut pipe) = pipe {
        pipe.read_to_end(&mut buf).await?;
    }
    Ok(buf)
}

/// Copy chunks from `pipe` to `sink` as they arrive.
async fn forward<R, W>(pipe: Option<R>, mut sink: W) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: tokio::io::AsyncWrite + Unpin,
{
    let Some(mut pipe) = pipe else {
        return Ok(());
    };
    let mut chunk = [0u8; 8192];
    loop {
        let n = pipe.read(&mut chunk).await?;
        if n == 0 {
            return Ok(());
        }
        sink.write_all(&chunk[..n]).await?;
        sink.flush().await?;
    }
}
