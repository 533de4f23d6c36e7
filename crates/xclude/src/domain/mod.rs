//! Domain types: ignore patterns, status records, and errors.

pub mod errors;
pub mod model;
