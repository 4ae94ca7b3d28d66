//! Fixed paths and external programs used by the replay pipeline.
//!
//! Every location is a field here rather than a literal at the call site, so
//! tests can point the whole pipeline at a temporary directory and stub tools.

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

/// Owner read/write only.
pub const CREDENTIALS_MODE: u32 = 0o600;

/// World-readable; the agent config holds no secrets.
pub const AGENT_CONFIG_MODE: u32 = 0o644;

/// Filesystem locations and program names, overridable via `LOGREPLAY_*`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Layout {
    /// Where the bucket is mounted.
    #[serde(default = "default_mount_point")]
    pub mount_point: PathBuf,

    /// Template for the `s3fs` password file.
    #[serde(default = "default_credentials_template")]
    pub credentials_template: PathBuf,

    /// Rendered `s3fs` password file (owner-only, deleted after mount).
    #[serde(default = "default_credentials_file")]
    pub credentials_file: PathBuf,

    /// Template for `filebeat.yml`.
    #[serde(default = "default_agent_template")]
    pub agent_template: PathBuf,

    /// Rendered `filebeat.yml`.
    #[serde(default = "default_agent_config")]
    pub agent_config: PathBuf,

    /// Index template document PUT to Elasticsearch.
    #[serde(default = "default_index_template")]
    pub index_template: PathBuf,

    #[serde(default = "default_mount_program")]
    pub mount_program: String,

    #[serde(default = "default_http_program")]
    pub http_program: String,

    #[serde(default = "default_agent_program")]
    pub agent_program: String,

    #[serde(default = "default_login_program")]
    pub login_program: String,

    /// Upper bound on the mount helper's runtime.
    #[serde(default = "default_mount_timeout_secs")]
    pub mount_timeout_secs: u64,
}

impl Layout {
    #[must_use]
    pub fn mount_timeout(&self) -> Duration {
        Duration::from_secs(self.mount_timeout_secs)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
            credentials_template: default_credentials_template(),
            credentials_file: default_credentials_file(),
            agent_template: default_agent_template(),
            agent_config: default_agent_config(),
            index_template: default_index_template(),
            mount_program: default_mount_program(),
            http_program: default_http_program(),
            agent_program: default_agent_program(),
            login_program: default_login_program(),
            mount_timeout_secs: default_mount_timeout_secs(),
        }
    }
}

fn default_mount_point() -> PathBuf {
    PathBuf::from("/mnt/s3")
}

fn default_credentials_template() -> PathBuf {
    PathBuf::from("template/aws_creds.template")
}

fn default_credentials_file() -> PathBuf {
    PathBuf::from("/root/aws_creds")
}

fn default_agent_template() -> PathBuf {
    PathBuf::from("template/filebeat.yml.template")
}

fn default_agent_config() -> PathBuf {
    PathBuf::from("/etc/filebeat/filebeat.yml")
}

fn default_index_template() -> PathBuf {
    PathBuf::from("/etc/filebeat/filebeat.template.json")
}

fn default_mount_program() -> String {
    "s3fs".to_string()
}

fn default_http_program() -> String {
    "curl".to_string()
}

fn default_agent_program() -> String {
    "/usr/bin/filebeat".to_string()
}

fn default_login_program() -> String {
    "/bin/login".to_string()
}

fn default_mount_timeout_secs() -> u64 {
    10
}
