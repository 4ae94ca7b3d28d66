//! Application service: the replay pipeline.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.
//!
//! Canonical order:
//!
//! 1. resolve environment (no side effects before this succeeds)
//! 2. render credentials file (0600)
//! 3. mount bucket
//! 4. dispose credentials file (always attempted once it may exist)
//! 5. either the login shell (`mount_only`), or
//!    render agent config (0644) → load index template → launch agent

use std::process::ExitStatus;

use anyhow::{Context, Result};

use crate::application::ports::{
    CommandRunner, Environment, IdentityResolver, LocalFs, ProgressReporter,
};
use crate::application::services::agent::launch_agent;
use crate::application::services::index::load_index_template;
use crate::application::services::mount::{dispose_credentials_file, mount_bucket};
use crate::application::services::render::render_to_file;
use crate::application::services::shell::spawn_login_shell;
use crate::domain::config::{self, AgentConfig, Credentials};
use crate::domain::error::RenderError;
use crate::domain::layout::{AGENT_CONFIG_MODE, CREDENTIALS_MODE, Layout};
use crate::domain::step::Step;

pub struct ReplayOptions<'a, R: ProgressReporter> {
    pub reporter: &'a R,
    pub layout: &'a Layout,
    /// Skip Filebeat and hand the terminal to a login shell instead.
    pub mount_only: bool,
}

/// Outcome of a pipeline run that did not fail.
#[derive(Debug)]
pub enum ReplayOutcome {
    /// Filebeat ran and exited successfully.
    AgentExited,
    /// The login shell ran; its exit state is informational only.
    ShellExited { user: String, state: ExitStatus },
    /// The login shell could not be run. Not fatal.
    ShellFailed { reason: String },
}

enum Plan {
    Inspect,
    Ship(AgentConfig),
}

/// Run the replay pipeline, stopping at the first failing step.
///
/// Every error carries a [`Step`] context naming where it failed.
///
/// # Errors
///
/// Returns an error if any step other than the login shell fails.
pub async fn replay(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    env: &impl Environment,
    identity: &impl IdentityResolver,
    opts: ReplayOptions<'_, impl ProgressReporter>,
) -> Result<ReplayOutcome> {
    let ReplayOptions {
        reporter,
        layout,
        mount_only,
    } = opts;
    let lookup = |name: &str| env.var(name);

    let creds = Credentials::resolve(lookup).context(Step::ResolveEnvironment)?;
    let bucket = config::require(lookup, config::S3_BUCKET).context(Step::ResolveEnvironment)?;
    let plan = if mount_only {
        Plan::Inspect
    } else {
        Plan::Ship(AgentConfig::resolve(lookup).context(Step::ResolveEnvironment)?)
    };

    render_credentials(fs, layout, reporter, creds)?;

    reporter.step(&format!(
        "mounting S3 bucket '{bucket}' at {}",
        layout.mount_point.display()
    ));
    let mounted = mount_bucket(runner, layout, &bucket)
        .await
        .with_context(|| Step::MountBucket {
            bucket: bucket.clone(),
        });
    let disposed =
        dispose_credentials_file(fs, &layout.credentials_file).context(Step::DisposeCredentials);

    match (mounted, disposed) {
        (Ok(()), Ok(())) => {
            reporter.success(&format!("mounted S3 bucket '{bucket}'"));
            reporter.success("deleted credentials file");
        }
        (Ok(()), Err(e)) => return Err(e),
        (Err(e), disposed) => {
            if let Err(cleanup) = disposed {
                reporter.warn(&format!("{cleanup:#}"));
            }
            return Err(e);
        }
    }

    match plan {
        Plan::Inspect => Ok(inspect(runner, fs, identity, layout, reporter).await),
        Plan::Ship(agent) => ship(runner, fs, layout, reporter, &agent).await,
    }
}

/// Render the `s3fs` password file. The record is consumed so the secret
/// does not outlive this call.
fn render_credentials(
    fs: &impl LocalFs,
    layout: &Layout,
    reporter: &impl ProgressReporter,
    creds: Credentials,
) -> Result<()> {
    let result = render_to_file(
        fs,
        &creds,
        &layout.credentials_template,
        &layout.credentials_file,
        CREDENTIALS_MODE,
    );
    drop(creds);

    if let Err(e) = result {
        // A failed write may have left a partial secret behind.
        if matches!(e, RenderError::Write { .. })
            && let Err(cleanup) = dispose_credentials_file(fs, &layout.credentials_file)
        {
            reporter.warn(&format!("{cleanup:#}"));
        }
        return Err(e).context(Step::RenderCredentials);
    }
    Ok(())
}

/// Run the login shell. A failure is returned as an outcome for the caller
/// to log, not reported here.
async fn inspect(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    identity: &impl IdentityResolver,
    layout: &Layout,
    reporter: &impl ProgressReporter,
) -> ReplayOutcome {
    reporter.step("starting interactive login shell");
    match spawn_login_shell(runner, fs, identity, layout).await {
        Ok(session) => {
            reporter.success(&format!(
                "quit interactive login shell for user '{}' with state: {}",
                session.user, session.state
            ));
            ReplayOutcome::ShellExited {
                user: session.user,
                state: session.state,
            }
        }
        Err(e) => ReplayOutcome::ShellFailed {
            reason: format!("{e:#}"),
        },
    }
}

async fn ship(
    runner: &impl CommandRunner,
    fs: &impl LocalFs,
    layout: &Layout,
    reporter: &impl ProgressReporter,
    agent: &AgentConfig,
) -> Result<ReplayOutcome> {
    reporter.step("rendering Filebeat configuration");
    render_to_file(
        fs,
        agent,
        &layout.agent_template,
        &layout.agent_config,
        AGENT_CONFIG_MODE,
    )
    .context(Step::RenderAgentConfig)?;

    reporter.step("loading Filebeat index template into Elasticsearch");
    load_index_template(runner, fs, layout, &agent.search_host)
        .await
        .context(Step::LoadIndexTemplate)?;
    reporter.success("loaded Filebeat index template into Elasticsearch");

    reporter.step("starting Filebeat agent");
    launch_agent(runner, layout)
        .await
        .context(Step::LaunchAgent)?;
    Ok(ReplayOutcome::AgentExited)
}
