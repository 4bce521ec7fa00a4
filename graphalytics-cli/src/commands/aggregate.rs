// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `graphalytics aggregate` command - Build the complete suite result from
//! recorded outcomes.

use std::sync::Arc;

use graphalytics_core::{
    BenchmarkSuiteResult, BenchmarkSuiteResultBuilder, ConfigLoader, ResultsLoader,
};

pub fn execute(config_file: &str, results_file: &str) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(config = %config_file, results = %results_file, "Aggregating benchmark results");

    let config = ConfigLoader::load_file(config_file)?;
    let recorded = ResultsLoader::load_file(results_file, &config.suite)?;
    tracing::debug!(count = recorded.len(), "Loaded recorded outcomes");

    let mut builder = BenchmarkSuiteResultBuilder::new(Arc::new(config.suite))?;
    for result in recorded {
        if let Err(e) = builder.with_benchmark_result(result) {
            eprintln!("✗ Rejected recorded outcome:");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }

    let suite_result = builder.build_from_configuration(config.system, config.platform)?;
    print_result(&suite_result);

    Ok(())
}

fn print_result(suite_result: &BenchmarkSuiteResult) {
    println!(
        "Platform: {}",
        suite_result
            .platform_configuration()
            .name()
            .unwrap_or("(unnamed)")
    );
    println!();

    let suite = suite_result.benchmark_suite();
    for graph in suite.graphs() {
        println!("{}:", graph);
        for benchmark in suite.subset_for_graph(graph) {
            let Some(result) = suite_result.result_for(benchmark) else {
                continue;
            };
            match result.elapsed() {
                Some(elapsed) => println!(
                    "  {:<6} {:<8} {}ms",
                    benchmark.algorithm().acronym(),
                    result.outcome().label(),
                    elapsed.num_milliseconds()
                ),
                None => println!(
                    "  {:<6} {}",
                    benchmark.algorithm().acronym(),
                    result.outcome()
                ),
            }
        }
    }

    let summary = suite_result.summary();
    println!();
    println!("Summary");
    println!("-------");
    println!("  Total:     {}", summary.total);
    println!("  Succeeded: {}", summary.succeeded);
    println!("  Failed:    {}", summary.failed);
    println!("  Not run:   {}", summary.not_run);
}
