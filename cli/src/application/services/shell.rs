//! Interactive Fallback: drop the operator into a login shell on the mount.

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{CommandRunner, IdentityResolver, LocalFs};
use crate::domain::layout::Layout;

/// A finished login shell session.
#[derive(Debug)]
pub struct ShellSession {
    pub user: String,
    pub state: ExitStatus,
}

/// Start `login -p -f <user>` in the mount point and wait for it to exit.
///
/// `-f` skips authentication (the user is already known), `-p` preserves
/// the environment.
///
/// # Errors
///
/// Returns an error if the mount point is not a directory, the user cannot
/// be determined, or the shell cannot be started.
pub async fn spawn_login_shell(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    identity: &impl IdentityResolver,
    layout: &Layout,
) -> Result<ShellSession> {
    let dir = &layout.mount_point;
    anyhow::ensure!(
        fs.is_dir(dir),
        "cannot change working directory to '{}'",
        dir.display()
    );

    let user = identity
        .current_username()
        .context("cannot determine current user")?;

    let state = runner
        .run_interactive(&layout.login_program, &["-p", "-f", &user], dir)
        .await
        .context("unable to start new interactive login shell")?;

    Ok(ShellSession { user, state })
}
