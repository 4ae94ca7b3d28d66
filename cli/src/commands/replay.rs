//! `logreplay replay`: mount the bucket and ship its logs (or look around).

use anyhow::Result;
use clap::Args;

use crate::application::services::replay::{self as service, ReplayOptions, ReplayOutcome};
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::load_layout;
use crate::infra::env::ProcessEnv;
use crate::infra::fs::HostFs;
use crate::infra::identity::PasswdIdentity;
use crate::output::LogReporter;

/// Arguments for the replay command.
#[derive(Args, Default, Debug)]
pub struct ReplayArgs {
    /// Do not start Filebeat, only mount the S3 bucket and start a shell to look around
    #[arg(long)]
    pub mount_only: bool,
}

/// Run `logreplay replay`.
///
/// # Errors
///
/// Returns an error naming the failing step if any part of the pipeline
/// fails. A failing login shell in `--mount-only` mode is logged, not returned.
pub async fn run(args: &ReplayArgs) -> Result<()> {
    let layout = load_layout()?;

    let outcome = service::replay(
        &TokioCommandRunner,
        &HostFs,
        &ProcessEnv,
        &PasswdIdentity::default(),
        ReplayOptions {
            reporter: &LogReporter,
            layout: &layout,
            mount_only: args.mount_only,
        },
    )
    .await?;

    match outcome {
        ReplayOutcome::AgentExited => tracing::info!("Filebeat agent exited."),
        ReplayOutcome::ShellExited { user, state } => {
            tracing::debug!(%user, %state, "login shell finished");
        }
        ReplayOutcome::ShellFailed { reason } => {
            tracing::error!("Error: {reason}");
        }
    }
    Ok(())
}
