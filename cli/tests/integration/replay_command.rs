//! End-to-end tests for `logreplay replay` against stub tools.

#![allow(clippy::expect_used)]

use std::time::{Duration, Instant};

use predicates::prelude::*;

use crate::sandbox::{Sandbox, mode_of};

// ============================================================================
// Service mode
// ============================================================================

#[test]
fn test_replay_all_steps_succeed_exits_zero() {
    let sb = Sandbox::new();

    sb.command().assert().success();

    let calls = sb.calls();
    assert_eq!(calls.len(), 3, "calls: {calls:?}");
    assert!(calls[0].starts_with("s3fs logs "));
    assert!(calls[1].starts_with("curl "));
    assert!(calls[1].contains("http://es:9200/_template/filebeat?pretty"));
    assert!(calls[2].starts_with("filebeat -v -e -c "));

    assert!(!sb.credentials_file().exists(), "credentials file left behind");
    assert_eq!(mode_of(&sb.agent_config()), 0o644);
    let config = std::fs::read_to_string(sb.agent_config()).expect("agent config");
    assert!(config.contains("/mnt/s3/nginx/*.log"));
}

#[test]
fn test_replay_agent_stderr_is_merged_into_stdout() {
    let sb = Sandbox::new();

    sb.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("filebeat: harvester started"))
        .stdout(predicate::str::contains("filebeat: stderr line"));
}

#[test]
fn test_replay_mount_helper_output_is_logged() {
    let sb = Sandbox::new();

    sb.command()
        .assert()
        .success()
        .stderr(predicate::str::contains("s3fs: mounted logs"));
}

#[test]
fn test_replay_never_logs_the_secret() {
    let sb = Sandbox::new();

    sb.command()
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stderr(predicate::str::contains("s3cr3t").not());
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_replay_missing_es_host_fails_before_mount() {
    let sb = Sandbox::new();

    sb.command()
        .env_remove("ES_HOST")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ES_HOST"));

    assert!(sb.calls().is_empty(), "a stub ran: {:?}", sb.calls());
    assert!(!sb.credentials_file().exists());
}

#[test]
fn test_replay_empty_bucket_fails_before_mount() {
    let sb = Sandbox::new();

    sb.command()
        .env("S3_BUCKET", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("S3_BUCKET"));

    assert!(!sb.called("s3fs"));
}

#[test]
fn test_replay_mount_failure_exits_nonzero_and_deletes_credentials() {
    let sb = Sandbox::new();
    sb.stub(
        "s3fs",
        &format!(
            "echo \"s3fs $*\" >> '{}'\necho 's3fs: bucket not found' >&2\nexit 1\n",
            sb.calls_path().display()
        ),
    );

    sb.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not mount S3 bucket 'logs'"))
        .stderr(predicate::str::contains("s3fs: bucket not found"));

    assert!(!sb.credentials_file().exists(), "credentials survived a failed mount");
    assert!(!sb.called("curl"));
    assert!(!sb.called("filebeat"));
}

#[test]
fn test_replay_mount_timeout_kills_helper() {
    let sb = Sandbox::new();
    sb.stub("s3fs", "exec sleep 30\n");

    let started = Instant::now();
    sb.command()
        .env("LOGREPLAY_MOUNT_TIMEOUT_SECS", "1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("timed out after 1s"));

    assert!(started.elapsed() < Duration::from_secs(20));
    assert!(!sb.credentials_file().exists());
}

#[test]
fn test_replay_index_template_failure_skips_agent() {
    let sb = Sandbox::new();
    sb.stub(
        "curl",
        &format!("echo \"curl $*\" >> '{}'\nexit 22\n", sb.calls_path().display()),
    );

    sb.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot load Filebeat index template"));

    assert!(sb.called("curl"));
    assert!(!sb.called("filebeat"));
}

#[test]
fn test_replay_agent_failure_exits_nonzero() {
    let sb = Sandbox::new();
    sb.stub("filebeat", "exit 1\n");

    sb.command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("unable to run Filebeat agent"));
}

#[test]
fn test_replay_invalid_layout_override_fails_before_mount() {
    let sb = Sandbox::new();

    sb.command()
        .env("LOGREPLAY_MOUNT_TIMEOUT_SECS", "soon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid layout override"));

    assert!(sb.calls().is_empty());
}

// ============================================================================
// --mount-only
// ============================================================================

#[test]
fn test_replay_mount_only_starts_shell_and_never_loads_template() {
    let sb = Sandbox::new();

    sb.command().arg("--mount-only").assert().success();

    assert!(sb.called("s3fs"));
    assert!(!sb.called("curl"));
    assert!(!sb.called("filebeat"));
    assert!(!sb.credentials_file().exists());
    assert!(!sb.agent_config().exists());
}

#[test]
fn test_replay_mount_only_exits_zero_when_shell_fails() {
    let sb = Sandbox::new();
    sb.stub("login", "exit 7\n");

    sb.command().arg("--mount-only").assert().success();
}

#[test]
fn test_replay_mount_only_ignores_agent_variables() {
    let sb = Sandbox::new();

    sb.command()
        .arg("--mount-only")
        .env_remove("ES_HOST")
        .env_remove("ES_INDEX")
        .assert()
        .success();
}

#[test]
fn test_replay_mount_only_shell_failure_is_logged_once() {
    let sb = Sandbox::new();

    let output = sb
        .command()
        .arg("--mount-only")
        .env("LOGREPLAY_MOUNT_POINT", sb.path("missing"))
        .output()
        .expect("run logreplay");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("cannot change working directory").count(),
        1,
        "{stderr}"
    );
    assert!(!sb.called("login"));
}
