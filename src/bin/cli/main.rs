mod client;
mod commands;
mod output;

use clap::{Parser, Subcommand};
use client::ReviewSchedulerClient;
use output::{OutputConfig, OutputFormat};
use review_scheduler::config;
use std::process;

/// CLI for the review scheduler service
#[derive(Parser, Debug)]
#[clap(name = "review-scheduler-cli", about = "CLI for the review scheduler")]
struct Cli {
    /// Server URL to connect to
    #[clap(long, env = "REVIEW_SCHEDULER_URL", global = true)]
    server_url: Option<String>,

    /// Output format
    #[clap(long, value_enum, default_value_t = OutputFormat::Human, global = true)]
    format: OutputFormat,

    /// Quiet mode: minimal output (just ids)
    #[clap(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Record reviews
    #[command(subcommand)]
    Review(commands::review::ReviewCommands),
    /// List due cards
    #[command(subcommand)]
    DueCards(commands::due_cards::DueCardsCommands),
}

/// Resolves the server URL from CLI args, config file, or defaults
///
/// Precedence: CLI flag / env var > config file > default (port based on debug/release)
fn resolve_server_url(cli_url: Option<String>) -> String {
    if let Some(url) = cli_url {
        return url;
    }

    let config_dir = config::get_config_dir_path();
    if let Some(ref dir) = config_dir {
        let config_path = dir.join("config.toml");
        if let Ok(update) = config::config_from_file(Some(config_path)) {
            if let Some(url) = update.server_url {
                return url;
            }
        }
    }

    let port = if cfg!(debug_assertions) { 3001 } else { 3000 };
    format!("http://localhost:{}", port)
}

/// Formats an error for human-readable stderr output
fn format_error(err: &dyn std::error::Error) -> String {
    let err_string = err.to_string();

    if err_string.contains("error sending request")
        || err_string.contains("connection refused")
        || err_string.contains("Connection refused")
        || err_string.contains("tcp connect error")
    {
        return format!("Could not connect to server. Is review-scheduler running?\n  {}", err_string);
    }

    err_string
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let server_url = resolve_server_url(cli.server_url);
    let client = ReviewSchedulerClient::new(server_url);
    let output_config = OutputConfig { format: cli.format, quiet: cli.quiet };

    let result = match cli.command {
        Commands::Review(cmd) => commands::review::execute(&client, cmd, &output_config).await,
        Commands::DueCards(cmd) => commands::due_cards::execute(&client, cmd, &output_config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", format_error(e.as_ref()));
        process::exit(1);
    }
}
