//! Command implementations

pub mod replay;
