use anyhow::Result;
use clap::{Parser, Subcommand};
use docup::config::{self, Config};
use tracing_subscriber::EnvFilter;

/// Turns Mattermost posts into GitHub documentation request issues.
#[derive(Parser)]
#[command(name = "docup")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service (default)
    Serve,

    /// Load and validate configuration, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    init_tracing(&config);
    config.print_summary();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => docup::server::run(config).await,
        Commands::CheckConfig => {
            tracing::info!("Configuration is valid");
            Ok(())
        }
    }
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
