//! Chatterbox CLI and REST API entry point.
//!
//! Binary name: `chatterbox`
//!
//! Parses CLI arguments, loads configuration, wires the chat service, then
//! dispatches to a one-shot command or starts the REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;

use chatterbox_infra::config::{default_config_path, load_config, resolve_data_dir};
use chatterbox_observe::tracing_setup::{LogFormat, filter_directive, init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_tracing(filter_directive(cli.verbose, cli.quiet), format, cli.otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let data_dir = resolve_data_dir();
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| default_config_path(&data_dir));

    let mut config = load_config(&config_path).await;
    cli.apply_overrides(&mut config);

    let state = AppState::init(config, data_dir).await?;

    match cli.command {
        Commands::Serve { .. } => {
            let addr = format!("{}:{}", state.config.host, state.config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Chatterbox listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }
            tracing::info!(%addr, "Server started");

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Ask { input, lang } => {
            cli::chat::ask(&state, &input, lang.as_deref(), cli.json).await?;
        }

        Commands::Teach { input, response } => {
            cli::chat::teach(&state, &input, &response, cli.json).await?;
        }

        Commands::Forget { input, response } => {
            cli::chat::forget(&state, &input, response.as_deref(), cli.json).await?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
