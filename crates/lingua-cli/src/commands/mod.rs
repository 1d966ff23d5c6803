//! CLI command definitions.

pub mod capabilities;
pub mod exec;
pub mod list;
pub mod prompt;
pub mod read;
pub mod serve;
