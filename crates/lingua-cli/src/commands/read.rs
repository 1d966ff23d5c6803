//! `lingua read` command.
//!
//! Prints a text body. A missing id fails with the same
//! `Text '<id>' not found. Available: ...` message the resource reports.

use clap::Args;

use lingua_config::LinguaConfig;

use crate::shared;

/// Print the body of a text.
#[derive(Debug, Args)]
pub struct ReadArgs {
    /// Text identifier (see `lingua list`).
    pub text_id: String,
}

/// Executes the read command.
pub fn execute(args: &ReadArgs, config: &LinguaConfig) -> anyhow::Result<()> {
    let registry = shared::build_registry(config)?;
    let body = registry
        .provider()
        .get_text(&args.text_id)
        .map_err(shared::report)?;
    println!("{body}");
    Ok(())
}
