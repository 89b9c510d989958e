//! Command-line interface: `serve` runs the HTTP server, `analyze` runs a
//! single appraisal and prints the JSON result.

use crate::api::analyze::{run_analysis, AnalyzeRequest};
use crate::server::{self, config::AppConfig};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Suimei command-line interface
#[derive(Debug, Parser)]
#[command(name = "suimei", version, about = "Four-pillar branding appraisal for video creators")]
pub struct Cli {
    /// Subcommand to run; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Bind host (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Bind port (overrides config)
        #[arg(long)]
        port: Option<u16>,
        /// Path to a TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Run one appraisal and print the result as JSON
    Analyze {
        /// Creator name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        birth_date: String,
        /// Birth time (HH:MM), defaults to noon
        #[arg(long)]
        birth_time: Option<String>,
        /// Gender label
        #[arg(long)]
        gender: String,
        /// Topic keyword
        #[arg(long)]
        keyword: String,
    },
}

/// Dispatches the parsed CLI.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Command::Analyze {
            name,
            birth_date,
            birth_time,
            gender,
            keyword,
        }) => {
            let config = AppConfig::default();
            let request = AnalyzeRequest {
                name,
                birth_date,
                birth_time,
                gender,
                keyword,
                gemini_api_key: None,
            };
            let response = run_analysis(request, &config.llm)
                .await
                .map_err(|e| anyhow::anyhow!(e.message()))?;
            println!(
                "{}",
                serde_json::to_string_pretty(&response).context("failed to serialize result")?
            );
            Ok(())
        }
        Some(Command::Serve { host, port, config }) => {
            let mut app_config = AppConfig::load(config.as_deref())?;
            if let Some(host) = host {
                app_config.server.host = host;
            }
            if let Some(port) = port {
                app_config.server.port = port;
            }
            server::run(app_config).await
        }
        None => server::run(AppConfig::load(None)?).await,
    }
}
