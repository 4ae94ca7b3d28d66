//! Configuration records resolved from the process environment.
//!
//! Pure functions only; the actual environment lookup is injected as a
//! closure so callers decide where values come from.

use std::fmt;

use serde::Serialize;

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const S3_BUCKET: &str = "S3_BUCKET";
pub const LOGS_PATH: &str = "LOGS_PATH";
pub const ES_TYPE: &str = "ES_TYPE";
pub const ES_HOST: &str = "ES_HOST";
pub const ES_INDEX: &str = "ES_INDEX";

/// Variables needed to mount the bucket, in resolution order.
pub const REQUIRED_MOUNT_VARS: &[&str] = &[AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY, S3_BUCKET];

/// Variables needed to configure and start the shipping agent.
pub const REQUIRED_AGENT_VARS: &[&str] = &[LOGS_PATH, ES_TYPE, ES_HOST, ES_INDEX];

// ── Resolution ───────────────────────────────────────────────────────────────

/// Resolve a required variable through `lookup`.
///
/// # Errors
///
/// Returns [`ConfigError::Missing`] if the variable is unset or empty.
pub fn require(lookup: impl Fn(&str) -> Option<String>, name: &str) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name.to_string())),
    }
}

// ── Records ──────────────────────────────────────────────────────────────────

/// Bucket-mount identity rendered into the `s3fs` password file.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub access_key: String,
    pub secret_key: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent variable.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            access_key: require(&lookup, AWS_ACCESS_KEY_ID)?,
            secret_key: require(&lookup, AWS_SECRET_ACCESS_KEY)?,
        })
    }
}

// Never let the secret reach a log line.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Runtime configuration for the Filebeat agent.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AgentConfig {
    /// Glob of log files, relative to the mount point.
    pub logs_path: String,
    /// Elasticsearch document type.
    pub index_type: String,
    /// Elasticsearch base URL, e.g. `http://elasticsearch:9200`.
    pub search_host: String,
    /// Elasticsearch index name.
    pub index_name: String,
}

impl AgentConfig {
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent variable.
    pub fn resolve(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            logs_path: require(&lookup, LOGS_PATH)?,
            index_type: require(&lookup, ES_TYPE)?,
            search_host: require(&lookup, ES_HOST)?,
            index_name: require(&lookup, ES_INDEX)?,
        })
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
