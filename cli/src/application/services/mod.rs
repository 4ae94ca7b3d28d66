//! Application services: use-case orchestration.
//!
//! Each step of the replay pipeline lives in its own module and is composed
//! by [`replay`]. Services import only from `crate::domain` and
//! `crate::application::ports`, never from `crate::infra`, `crate::commands`,
//! or `crate::output`.

pub mod agent;
pub mod index;
pub mod mount;
pub mod render;
pub mod replay;
pub mod shell;

use std::process::ExitStatus;

use anyhow::Result;

/// Turn a non-zero exit into an error naming the program.
pub(crate) fn ensure_success(program: &str, status: ExitStatus) -> Result<()> {
    if status.success() {
        Ok(())
    } else {
        anyhow::bail!("{program} exited with {status}")
    }
}
