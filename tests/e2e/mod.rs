//! End-to-end tests for the buildgate binary
//!
//! Each test builds a small artifact tree and catalog in a temporary
//! directory, runs the compiled binary against it, and checks the report
//! and exit status.

pub mod commands;
pub mod helpers;
pub mod scenarios;
