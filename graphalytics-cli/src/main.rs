// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Graphalytics CLI
//!
//! Command-line interface for validating benchmark suite definitions and
//! aggregating recorded benchmark outcomes into a complete suite result.

use clap::{Parser, Subcommand};

mod commands;

/// Graphalytics - benchmark suite result aggregation
#[derive(Parser)]
#[command(name = "graphalytics")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "graphalytics.yaml")]
    pub config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the benchmark suite configuration
    Validate,

    /// Aggregate recorded outcomes into a complete suite result
    Aggregate {
        /// Path to the recorded results YAML file
        #[arg(short, long)]
        results: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match cli.command {
        Commands::Validate => commands::validate::execute(&cli.config),
        Commands::Aggregate { results } => commands::aggregate::execute(&cli.config, &results),
    }
}
