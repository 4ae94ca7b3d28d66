//! User identity: implements the `IdentityResolver` port from the passwd db.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::IdentityResolver;
use crate::domain::identity::username_for_uid;

/// Looks the real uid up in a passwd file, falling back to `$USER`.
#[derive(Debug, Clone)]
pub struct PasswdIdentity {
    passwd: PathBuf,
}

impl PasswdIdentity {
    /// Use an explicit passwd file (used in tests).
    #[must_use]
    pub fn with_path(passwd: PathBuf) -> Self {
        Self { passwd }
    }
}

impl Default for PasswdIdentity {
    fn default() -> Self {
        Self::with_path(PathBuf::from("/etc/passwd"))
    }
}

impl IdentityResolver for PasswdIdentity {
    fn current_username(&self) -> Result<String> {
        let uid = rustix::process::getuid().as_raw();
        let from_passwd = std::fs::read_to_string(&self.passwd)
            .ok()
            .and_then(|content| username_for_uid(&content, uid));

        from_passwd
            .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
            .with_context(|| {
                format!("no passwd entry for uid {uid} in {}", self.passwd.display())
            })
    }
}
