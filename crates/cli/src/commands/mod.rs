//! CLI command implementations.

pub mod preview;
