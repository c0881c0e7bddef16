//! CLI command implementations

pub mod build;
pub mod completions;
pub mod create;
pub mod deploy;
pub mod dev;
pub mod version;
