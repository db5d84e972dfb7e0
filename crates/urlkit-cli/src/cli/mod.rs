//! CLI for inspecting URL decomposition and MIME resolution.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlkit_core::config;

use commands::{run_mime_list, run_parse, run_type};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: split URLs into fields and resolve their content type", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Split a URL into scheme, host, port, path, query, tag and extension.
    Parse {
        /// URL or request path, possibly percent-encoded.
        url: String,
        /// Listen port reported when the URL has none (default: config listen_port).
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
        /// Print the fields as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the content type a server would send for a URL.
    Type {
        /// URL or request path, possibly percent-encoded.
        url: String,
        /// Listen port reported when the URL has none (default: config listen_port).
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,
        /// Output buffer size in bytes, NUL included (default: config output_capacity).
        #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
        capacity: Option<u16>,
    },

    /// List the MIME registry (built-in entries plus config overrides).
    MimeList,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url, port, json } => {
                run_parse(&url, port.unwrap_or(cfg.listen_port), json)?
            }
            CliCommand::Type {
                url,
                port,
                capacity,
            } => {
                let capacity = capacity.map_or(cfg.output_capacity, usize::from);
                run_type(&cfg, &url, port.unwrap_or(cfg.listen_port), capacity)
            }
            CliCommand::MimeList => run_mime_list(&cfg),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
