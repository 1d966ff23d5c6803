//! `lingua list` command.

use clap::Args;

use lingua_config::LinguaConfig;

use crate::shared;

/// List the identifiers of every text in the corpus.
#[derive(Debug, Args)]
pub struct ListArgs {}

/// Executes the list command.
pub fn execute(_args: &ListArgs, config: &LinguaConfig) -> anyhow::Result<()> {
    let registry = shared::build_registry(config)?;
    let listing = registry.provider().list_texts();
    if !listing.is_empty() {
        println!("{listing}");
    }
    Ok(())
}
