//! LinguistHelper CLI: MCP server and local corpus/analysis commands.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

use lingua_types::LinguaError;

mod commands;
mod input;
mod output;
pub(crate) mod shared;

/// LinguistHelper - corpus lookup and lexical-diversity tools over MCP.
#[derive(Debug, Parser)]
#[command(name = "lingua", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv). Overrides `logging.level` from config.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the MCP server on stdio.
    Serve(commands::serve::ServeArgs),
    /// List the identifiers of every text in the corpus.
    List(commands::list::ListArgs),
    /// Print the body of a text.
    Read(commands::read::ReadArgs),
    /// Run an analysis tool on a piece of text.
    Exec(commands::exec::ExecArgs),
    /// Render a prompt template.
    Prompt(commands::prompt::PromptArgs),
    /// Show every resource, tool and prompt the server exposes.
    Capabilities(commands::capabilities::CapabilitiesArgs),
}

/// Maps `-v` occurrences to a filter directive; zero defers to config.
fn log_level(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match run(&cli).await {
        Ok(()) => Ok(()),
        Err(err) => match err.downcast::<LinguaError>() {
            Ok(domain) => {
                eprintln!("{}", output::render_error(&domain));
                std::process::exit(output::exit_code(&domain.kind));
            }
            Err(other) => Err(other),
        },
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config =
        lingua_config::load_config(cli.config.as_deref()).map_err(LinguaError::from)?;

    // stdout carries the protocol, so logs always go to stderr.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose, &config.logging.level)));
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config = ?cli.config, "lingua starting");

    match &cli.command {
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::List(args) => commands::list::execute(args, &config),
        Commands::Read(args) => commands::read::execute(args, &config),
        Commands::Exec(args) => commands::exec::execute(args, &config),
        Commands::Prompt(args) => commands::prompt::execute(args, &config),
        Commands::Capabilities(args) => commands::capabilities::execute(args, &config),
    }
}
