//! Integration tests for logreplay
//!
//! These tests spawn the actual binary with stub `s3fs`, `curl`, `filebeat`
//! and `login` scripts and test end-to-end behavior.

mod replay_command;
