//! `lingua exec` command.
//!
//! Runs an analysis tool through the same registry path `tools/call`
//! uses, so argument validation and result rendering match the server.

use clap::Args;
use serde_json::json;

use lingua_config::LinguaConfig;

use crate::{input, shared};

/// Run an analysis tool on a piece of text.
#[derive(Debug, Args)]
pub struct ExecArgs {
    /// Tool name (calculate_ttr, count_words, find_longest_word).
    pub tool: String,
    /// Text to analyse.
    pub text: Option<String>,
    /// Read the text from a file (use "-" for stdin).
    #[arg(short, long)]
    pub file: Option<String>,
}

/// Executes the exec command.
pub fn execute(args: &ExecArgs, config: &LinguaConfig) -> anyhow::Result<()> {
    let text = input::resolve_text(args.text.as_deref(), args.file.as_deref())?;
    let registry = shared::build_registry(config)?;

    tracing::debug!(tool = %args.tool, chars = text.chars().count(), "executing tool");
    let output = registry
        .call_tool(&args.tool, &json!({ "text": text }))
        .map_err(shared::report)?;

    println!("{}", output.render());
    Ok(())
}
