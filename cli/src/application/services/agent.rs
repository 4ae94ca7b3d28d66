//! Agent Launcher: run Filebeat in the foreground for the rest of our life.

use anyhow::Result;

use crate::application::ports::CommandRunner;
use crate::application::services::ensure_success;
use crate::domain::layout::Layout;

/// Filebeat flags: `-v` for INFO-level output, `-e` to log to stderr instead
/// of syslog/files, `-c` for the rendered config.
#[must_use]
pub fn agent_args(layout: &Layout) -> Vec<String> {
    vec![
        "-v".to_string(),
        "-e".to_string(),
        "-c".to_string(),
        layout.agent_config.to_string_lossy().into_owned(),
    ]
}

/// Run the agent and block until it exits.
///
/// # Errors
///
/// Returns an error if the agent cannot be started or exits unsuccessfully.
pub async fn launch_agent(runner: &impl CommandRunner, layout: &Layout) -> Result<()> {
    let args = agent_args(layout);
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let status = runner.run_merged(&layout.agent_program, &args).await?;
    ensure_success(&layout.agent_program, status)
}
