//! tutorlab CLI: the main entry point.
//!
//! Commands:
//! - `tools`: Print the enabled tool definitions
//! - `invoke`: Run a single tool call
//! - `batch`: Run newline-delimited tool calls from a file or stdin
//! - `config`: Show, locate, or validate the configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tutorlab_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "tutorlab",
    about = "tutorlab: deterministic calculation tools for tutor agents",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the enabled tool definitions as JSON
    Tools,

    /// Run one tool call and print the result
    Invoke {
        /// Tool name, e.g. physics_calc
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Run newline-delimited tool calls, one result per line
    Batch {
        /// Read calls from this file instead of stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Validate the configuration
    Validate,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // A broken config still gets default logging so `config validate` can report it.
    init_tracing(cli.verbose, &AppConfig::load().unwrap_or_default());

    match cli.command {
        Commands::Tools => commands::tools::run().await?,
        Commands::Invoke { tool, args } => commands::invoke::run(tool, args).await?,
        Commands::Batch { input } => commands::batch::run(input).await?,
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
            ConfigAction::Validate => commands::config_cmd::validate().await?,
        },
    }

    Ok(())
}

/// `-v` forces debug; otherwise `RUST_LOG` wins over the configured level.
/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool, config: &AppConfig) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    if config.json_logs() {
        builder.json().init();
    } else {
        builder.init();
    }
}
