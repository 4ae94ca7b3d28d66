//! `LogReporter`: Presentation-layer implementation of `ProgressReporter`.
//!
//! Maps each progress event onto a `tracing` event so application services
//! can emit progress without depending on the subscriber setup.

use crate::application::ports::ProgressReporter;

/// Progress reporter that writes through `tracing`.
///
/// - `step()` logs at `INFO`
/// - `success()` logs at `INFO` prefixed with `Successfully`
/// - `warn()` logs at `WARN`
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl ProgressReporter for LogReporter {
    fn step(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn success(&self, message: &str) {
        tracing::info!("Successfully {message}.");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
