//! Process environment: implements the `Environment` port.

use crate::application::ports::Environment;

/// Reads variables from this process's environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}
