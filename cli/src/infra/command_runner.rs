//! Infrastructure implementation of the `CommandRunner` port.
//!
//! `TokioCommandRunner` is the production implementation that uses tokio
//! for async process execution with guaranteed timeout and kill.

use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner`.
///
/// `tokio::time::timeout` around `.wait()` would only drop the future and
/// leave the OS process running, so timeouts use `tokio::select!` with an
/// explicit `child.kill()`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

#[derive(Debug, Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    fn name(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// Forward every line of `handle` to the log as soon as it is read.
///
/// Lines are raw bytes, decoded lossily; the pipe is drained to EOF so the
/// child never sees it closed early.
async fn forward_lines<R>(program: &str, stream: Stream, handle: Option<R>)
where
    R: AsyncRead + Unpin,
{
    let Some(handle) = handle else {
        return;
    };
    let mut lines = BufReader::new(handle).split(b'\n');
    loop {
        match lines.next_segment().await {
            Ok(Some(line)) => {
                let line = String::from_utf8_lossy(&line);
                let line = line.trim_end_matches('\r');
                tracing::info!(program, stream = stream.name(), "{line}");
            }
            Ok(None) => break,
            Err(e) => {
                tracing::debug!(program, stream = stream.name(), error = %e, "read failed");
            }
        }
    }
}

/// Waits forever when there is no timeout.
async fn deadline(timeout: Option<Duration>) {
    match timeout {
        Some(t) => tokio::time::sleep(t).await,
        None => std::future::pending().await,
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run_logged(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        let stdout_handle = child.stdout.take();
        let stderr_handle = child.stderr.take();

        // Drain both pipes CONCURRENTLY with wait(); a child that fills the
        // pipe buffer would otherwise block forever on write.
        tokio::select! {
            result = async {
                let (status, (), ()) = tokio::join!(
                    child.wait(),
                    forward_lines(program, Stream::Stdout, stdout_handle),
                    forward_lines(program, Stream::Stderr, stderr_handle),
                );
                status.with_context(|| format!("waiting for {program}"))
            } => result,
            () = deadline(timeout) => {
                let _ = child.kill().await;
                anyhow::bail!(
                    "{program} timed out after {}s",
                    timeout.unwrap_or_default().as_secs()
                )
            }
        }
    }

    async fn run_merged(&self, program: &str, args: &[&str]) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .stdout(Stdio::inherit())
            .stderr(Stdio::from(std::io::stdout()))
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }

    async fn run_interactive(
        &self,
        program: &str,
        args: &[&str],
        dir: &Path,
    ) -> Result<ExitStatus> {
        let mut child = tokio::process::Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        child
            .wait()
            .await
            .with_context(|| format!("waiting for {program}"))
    }
}
