//! `lingua prompt` command.

use std::collections::HashMap;

use clap::Args;

use lingua_config::LinguaConfig;

use crate::shared;

/// Render a prompt template.
#[derive(Debug, Args)]
pub struct PromptArgs {
    /// Text identifier substituted into the prompt. Not checked against the corpus.
    pub text_id: String,
    /// Prompt name.
    #[arg(long, default_value = "analyze_complexity")]
    pub name: String,
}

/// Executes the prompt command.
pub fn execute(args: &PromptArgs, config: &LinguaConfig) -> anyhow::Result<()> {
    let registry = shared::build_registry(config)?;
    let arguments = HashMap::from([("text_id".to_string(), args.text_id.clone())]);
    let rendered = registry
        .get_prompt(&args.name, &arguments)
        .map_err(shared::report)?;
    println!("{rendered}");
    Ok(())
}
