//! Names of the replay pipeline steps.
//!
//! A `Step` is attached as `anyhow` context to whatever error a step returns,
//! so the final message names the failing step and callers can recover it
//! with `err.downcast_ref::<Step>()`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    ResolveEnvironment,
    RenderCredentials,
    MountBucket { bucket: String },
    DisposeCredentials,
    RenderAgentConfig,
    LoadIndexTemplate,
    LaunchAgent,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolveEnvironment => f.write_str("failed to resolve environment"),
            Self::RenderCredentials => f.write_str("failed to render credentials file"),
            Self::MountBucket { bucket } => write!(f, "could not mount S3 bucket '{bucket}'"),
            Self::DisposeCredentials => {
                f.write_str("unable to delete credentials file after mounting S3 bucket")
            }
            Self::RenderAgentConfig => f.write_str("failed to render Filebeat configuration"),
            Self::LoadIndexTemplate => {
                f.write_str("cannot load Filebeat index template into Elasticsearch")
            }
            Self::LaunchAgent => f.write_str("unable to run Filebeat agent"),
        }
    }
}
