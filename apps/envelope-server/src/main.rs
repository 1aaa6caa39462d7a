use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use envelope_server::{logging, notes::NoteStore, router, AppConfig, AppState, CliArgs};
use std::path::PathBuf;

/// Envelope Server - reference API built on api-envelope
#[derive(Parser)]
#[command(name = "envelope-server")]
#[command(about = "Envelope Server - reference API built on api-envelope")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&CliArgs {
        port: cli.port,
        verbose: cli.verbose,
    });

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Check => {
            println!("Configuration is valid");
            Ok(())
        }
        Commands::Run => run(config).await,
    }
}

async fn run(config: AppConfig) -> Result<()> {
    logging::init_logging(&config.logging);

    let state = AppState::new(NoteStore::new(), config.pagination.clone())
        .context("Invalid pagination config")?;
    let app = router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "envelope-server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("envelope-server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
    }
}
