//! Domain layer: pure types, validation, and template rendering.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod identity;
pub mod layout;
pub mod step;
pub mod template;

pub use config::{AgentConfig, Credentials, REQUIRED_AGENT_VARS, REQUIRED_MOUNT_VARS};
pub use error::{ConfigError, RenderError, SecretError};
pub use layout::{AGENT_CONFIG_MODE, CREDENTIALS_MODE, Layout};
pub use step::Step;
