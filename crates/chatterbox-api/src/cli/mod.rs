//! CLI command definitions for the `chatterbox` binary.
//!
//! Uses clap derive macros for argument parsing. Global flags override the
//! values loaded from `config.toml`.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use chatterbox_types::config::{ServerConfig, StorageBackend};

/// A small chat bot that answers, computes, picks and learns.
#[derive(Parser)]
#[command(name = "chatterbox", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config.toml (default: {data_dir}/config.toml).
    #[arg(long, global = true, env = "CHATTERBOX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Response store backend.
    #[arg(long, global = true)]
    pub storage: Option<StorageBackend>,

    /// SQLite database URL (only used with `--storage sqlite`).
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Disable the translation gateway; replies are returned as stored.
    #[arg(long, global = true)]
    pub no_translate: bool,

    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Export tracing spans via OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,
    },

    /// Ask for a reply, exactly as `POST /chat` would answer.
    Ask {
        /// Message to resolve.
        input: String,

        /// Reply language (default: config `default_lang`).
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Teach a reply for an input.
    Teach {
        /// Input phrase.
        input: String,

        /// Reply to learn (stored in English).
        response: String,
    },

    /// Forget one reply, or every reply for an input.
    #[command(alias = "rm")]
    Forget {
        /// Input phrase.
        input: String,

        /// Only forget this reply.
        #[arg(short, long)]
        response: Option<String>,
    },
}

impl Cli {
    /// Apply global and `serve` flag overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut ServerConfig) {
        if let Some(backend) = self.storage {
            config.storage.backend = backend;
        }
        if let Some(url) = &self.database_url {
            config.storage.database_url = Some(url.clone());
        }
        if self.no_translate {
            config.translation.enabled = false;
        }
        if let Commands::Serve { port, host } = &self.command {
            if let Some(port) = port {
                config.port = *port;
            }
            if let Some(host) = host {
                config.host = host.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        <Cli as clap::CommandFactory>::command().debug_assert();
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::try_parse_from([
            "chatterbox",
            "--storage",
            "sqlite",
            "--no-translate",
            "serve",
            "--port",
            "8080",
            "--host",
            "127.0.0.1",
        ])
        .unwrap();

        let mut config = ServerConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert!(!config.translation.enabled);
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_no_overrides_keeps_config() {
        let cli = Cli::try_parse_from(["chatterbox", "ask", "hello"]).unwrap();
        let mut config = ServerConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.translation.enabled);
    }

    #[test]
    fn test_forget_parses_optional_response() {
        let cli = Cli::try_parse_from(["chatterbox", "forget", "hi", "--response", "hello"]).unwrap();
        match cli.command {
            Commands::Forget { input, response } => {
                assert_eq!(input, "hi");
                assert_eq!(response.as_deref(), Some("hello"));
            }
            _ => panic!("expected forget"),
        }
    }

    #[test]
    fn test_unknown_storage_rejected() {
        assert!(Cli::try_parse_from(["chatterbox", "--storage", "redis", "ask", "hi"]).is_err());
    }
}
