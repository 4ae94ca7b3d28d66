//! Tests for `render_to_file` against the host filesystem.

#![allow(clippy::expect_used)]

use logreplay::application::services::render::render_to_file;
use logreplay::domain::{AgentConfig, Credentials, RenderError};
use logreplay::infra::fs::HostFs;

use crate::helpers::{Fixture, mode_of};

fn creds() -> Credentials {
    Credentials {
        access_key: "AKIAEXAMPLE".to_string(),
        secret_key: "s3cr3t".to_string(),
    }
}

fn agent() -> AgentConfig {
    AgentConfig {
        logs_path: "app/*.log".to_string(),
        index_type: "app".to_string(),
        search_host: "http://es:9200".to_string(),
        index_name: "replay".to_string(),
    }
}

#[test]
fn rendering_twice_is_byte_identical() {
    let fx = Fixture::new();
    let dest = fx.path("filebeat.yml");

    render_to_file(&HostFs, &agent(), &fx.layout.agent_template, &dest, 0o644)
        .expect("first");
    let first = std::fs::read(&dest).expect("read first");
    render_to_file(&HostFs, &agent(), &fx.layout.agent_template, &dest, 0o644)
        .expect("second");
    let second = std::fs::read(&dest).expect("read second");

    assert_eq!(first, second);
}

#[test]
fn destination_gets_requested_mode() {
    let fx = Fixture::new();
    let secret = fx.path("creds");
    let config = fx.path("config");

    render_to_file(
        &HostFs,
        &creds(),
        &fx.layout.credentials_template,
        &secret,
        0o600,
    )
    .expect("render creds");
    render_to_file(&HostFs, &agent(), &fx.layout.agent_template, &config, 0o644)
        .expect("render config");

    assert_eq!(mode_of(&secret), 0o600);
    assert_eq!(mode_of(&config), 0o644);
}

#[test]
fn unknown_field_creates_no_destination() {
    let fx = Fixture::new();
    let dest = fx.path("out");

    // The agent template names agent fields, not credential fields.
    let err = render_to_file(&HostFs, &creds(), &fx.layout.agent_template, &dest, 0o600)
        .expect_err("must fail");

    assert!(matches!(err, RenderError::UnknownField { ref field, .. } if field == "logs_path"));
    assert!(!dest.exists());
}

#[test]
fn unknown_field_leaves_prior_file_untouched() {
    let fx = Fixture::new();
    let dest = fx.path("filebeat.yml");
    std::fs::write(&dest, "previous: config\n").expect("seed");

    render_to_file(&HostFs, &creds(), &fx.layout.agent_template, &dest, 0o644)
        .expect_err("must fail");

    assert_eq!(
        std::fs::read_to_string(&dest).expect("read"),
        "previous: config\n"
    );
}

#[test]
fn missing_template_is_a_read_error() {
    let fx = Fixture::new();
    let err = render_to_file(
        &HostFs,
        &creds(),
        &fx.path("nope.template"),
        &fx.path("out"),
        0o600,
    )
    .expect_err("must fail");

    assert!(matches!(err, RenderError::Read { .. }));
    assert!(err.to_string().contains("nope.template"));
}

#[test]
fn empty_template_is_rejected() {
    let fx = Fixture::new();
    let template = fx.path("empty.template");
    std::fs::write(&template, "").expect("write");

    let err = render_to_file(&HostFs, &creds(), &template, &fx.path("out"), 0o600)
        .expect_err("must fail");

    assert!(matches!(err, RenderError::EmptyTemplate { .. }));
    assert!(!fx.path("out").exists());
}

#[test]
fn unwritable_destination_is_a_write_error() {
    let fx = Fixture::new();
    let dest = fx.path("no/such/dir/creds");

    let err = render_to_file(
        &HostFs,
        &creds(),
        &fx.layout.credentials_template,
        &dest,
        0o600,
    )
    .expect_err("must fail");

    assert!(matches!(err, RenderError::Write { .. }));
}
