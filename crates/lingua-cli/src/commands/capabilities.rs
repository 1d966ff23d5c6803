//! `lingua capabilities` command.
//!
//! Prints the registry table: every resource, tool and prompt the
//! MCP server advertises.

use clap::Args;

use lingua_config::LinguaConfig;

use crate::{output, shared};

/// Show every resource, tool and prompt the server exposes.
#[derive(Debug, Args)]
pub struct CapabilitiesArgs {}

/// Executes the capabilities command.
pub fn execute(_args: &CapabilitiesArgs, config: &LinguaConfig) -> anyhow::Result<()> {
    let registry = shared::build_registry(config)?;
    let identity = shared::identity(config);

    println!("{} v{}", identity.name, identity.version);
    println!("{}", "─".repeat(40));
    print!("{}", output::capability_table(&registry.capabilities()));
    Ok(())
}
