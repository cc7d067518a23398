//! CLI for the Open Graph metadata fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use opengraph_core::config;
use opengraph_core::OpenGraph;

use commands::{run_config, run_fetch, run_verify_image, FetchArgs};

/// Top-level CLI for the Open Graph metadata fetcher.
#[derive(Debug, Parser)]
#[command(name = "opengraph")]
#[command(about = "Fetch a web page and print its Open Graph metadata", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch a page and print its metadata as JSON.
    Fetch(FetchArgs),

    /// Check that an image URL answers with HTTP 200.
    VerifyImage {
        /// Image URL to check.
        url: String,
    },

    /// Print the config file path and the effective configuration.
    Config,
}

impl CliCommand {
    /// Parses arguments, runs the command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch(args) => run_fetch(&OpenGraph::new(cfg), &args),
            CliCommand::VerifyImage { url } => Ok(run_verify_image(&OpenGraph::new(cfg), &url)),
            CliCommand::Config => run_config(&cfg),
        }
    }
}
