//! Command implementations for archon-install CLI

pub mod completions;
pub mod install;
pub mod version;
