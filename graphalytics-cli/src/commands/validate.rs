// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `graphalytics validate` command - Validate configuration file.

use graphalytics_core::ConfigLoader;

pub fn execute(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(file = %file, "Validating configuration");

    match ConfigLoader::load_file(file) {
        Ok(config) => {
            println!("✓ Configuration is valid");
            println!();
            println!(
                "Platform: {}",
                config.platform.name().unwrap_or("(unnamed)")
            );
            for (key, value) in config.platform.properties() {
                println!("  {} = {}", key, value);
            }
            println!("System:");
            for (key, value) in config.system.properties() {
                println!("  {} = {}", key, value);
            }
            println!();
            println!("Benchmarks ({}):", config.suite.len());
            for graph in config.suite.graphs() {
                println!("  {}:", graph);
                for benchmark in config.suite.subset_for_graph(graph) {
                    println!(
                        "    - {} ({}{})",
                        benchmark.algorithm(),
                        benchmark.algorithm().name(),
                        if benchmark.is_output_required() {
                            ", output required"
                        } else {
                            ""
                        }
                    );
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Configuration validation failed:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
