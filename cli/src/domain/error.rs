//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while resolving configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing and/or empty required environment variable '{0}'.")]
    Missing(String),

    #[error("Invalid layout override: {0}")]
    InvalidLayout(String),
}

// ── Render errors ─────────────────────────────────────────────────────────────

/// Errors raised while turning a template file into a rendered file.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Unable to open template file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Template file '{}' is empty.", path.display())]
    EmptyTemplate { path: PathBuf },

    #[error("Malformed template at line {line}: {detail}")]
    Syntax { line: usize, detail: String },

    #[error("Template references unknown field '{field}' at line {line}")]
    UnknownField { field: String, line: usize },

    #[error("Template record must serialize to a map of fields")]
    NotARecord,

    #[error("Cannot write rendered template file '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

// ── Secret errors ─────────────────────────────────────────────────────────────

/// Errors raised while disposing of the rendered credentials file.
#[derive(Debug, Error)]
pub enum SecretError {
    #[error("Credentials file '{}' is still present after removal.", .0.display())]
    StillPresent(PathBuf),
}
