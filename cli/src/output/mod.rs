//! Presentation layer: how pipeline progress reaches the operator.
//!
//! Everything goes to the `tracing` subscriber installed by `main`; stdout is
//! reserved for the agent's own output.

pub mod reporter;

pub use reporter::LogReporter;
