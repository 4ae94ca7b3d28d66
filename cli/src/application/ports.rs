//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;
use std::process::ExitStatus;
use std::time::Duration;

use anyhow::Result;

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
///
/// Every method starts exactly one child and waits for it.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program, forwarding each line it writes to stdout or stderr to
    /// the log as it arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_logged(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<ExitStatus>;

    /// Run a program in the foreground with its stderr merged into our stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_merged(&self, program: &str, args: &[&str]) -> Result<ExitStatus>;

    /// Run a program with inherited stdio in `dir` (interactive pass-through).
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or waited on.
    async fn run_interactive(&self, program: &str, args: &[&str], dir: &Path)
    -> Result<ExitStatus>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait; no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Environment Port ──────────────────────────────────────────────────────────

/// Read-only view of the process environment.
pub trait Environment {
    /// Value of `name`, or `None` when unset or not valid UTF-8.
    fn var(&self, name: &str) -> Option<String>;
}

// ── Identity Port ─────────────────────────────────────────────────────────────

/// Resolves the login name of the user running this process.
pub trait IdentityResolver {
    /// # Errors
    ///
    /// Returns an error if no login name can be determined.
    fn current_username(&self) -> Result<String>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Raw filesystem operations needed by the pipeline.
///
/// Methods return `std::io::Result` so callers can wrap the underlying
/// `io::Error` in their own typed errors.
pub trait LocalFs {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Create or truncate `path` and write `contents`, leaving the file with
    /// exactly the permission bits in `mode`.
    fn write_with_mode(&self, path: &Path, contents: &[u8], mode: u32) -> std::io::Result<()>;

    fn remove_file(&self, path: &Path) -> std::io::Result<()>;

    fn file_len(&self, path: &Path) -> std::io::Result<u64>;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;
}
