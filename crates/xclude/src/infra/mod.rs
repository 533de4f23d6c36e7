//! Infrastructure adapters for IO, git, and configuration.

pub mod config;
pub mod exclude;
pub mod git;
