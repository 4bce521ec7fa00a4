// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Thread-safe result collection using DashMap.
//!
//! Counterpart of [`BenchmarkSuiteResultBuilder`] for suites whose benchmarks
//! report back from several threads. Validation, last-write-wins and backfill
//! behave exactly as in the builder.

use std::sync::Arc;

use dashmap::DashMap;

use crate::benchmark::{Benchmark, BenchmarkSuite};
use crate::configuration::{PlatformConfiguration, SystemConfiguration};
use crate::error::GraphalyticsResult;
use crate::result::BenchmarkResult;
use crate::suite_result::{
    ensure_member, require, BenchmarkSuiteResult, BenchmarkSuiteResultBuilder,
};

/// Concurrent collector of benchmark results for one suite.
/// Uses DashMap so recording only locks the shard holding the benchmark.
#[derive(Debug)]
pub struct ResultCollector {
    benchmark_suite: Arc<BenchmarkSuite>,
    benchmark_results: DashMap<Benchmark, BenchmarkResult>,
}

impl ResultCollector {
    /// Create a collector for `benchmark_suite`.
    pub fn new(
        benchmark_suite: impl Into<Option<Arc<BenchmarkSuite>>>,
    ) -> GraphalyticsResult<Self> {
        let benchmark_suite = require(benchmark_suite.into(), "benchmark_suite")?;

        Ok(Self {
            benchmark_results: DashMap::with_capacity(benchmark_suite.len()),
            benchmark_suite,
        })
    }

    /// Create a collector wrapped in an Arc for sharing across threads.
    pub fn new_shared(
        benchmark_suite: impl Into<Option<Arc<BenchmarkSuite>>>,
    ) -> GraphalyticsResult<Arc<Self>> {
        Self::new(benchmark_suite).map(Arc::new)
    }

    pub fn benchmark_suite(&self) -> &Arc<BenchmarkSuite> {
        &self.benchmark_suite
    }

    /// Record the result of a benchmark, replacing any earlier result for the
    /// same benchmark.
    pub fn record(
        &self,
        benchmark_result: impl Into<Option<BenchmarkResult>>,
    ) -> GraphalyticsResult<()> {
        let benchmark_result = require(benchmark_result.into(), "benchmark_result")?;
        ensure_member(&self.benchmark_suite, &benchmark_result)?;

        tracing::debug!(
            benchmark = %benchmark_result.benchmark(),
            outcome = %benchmark_result.outcome(),
            "Recording benchmark result"
        );

        let benchmark = benchmark_result.benchmark().clone();
        if let Some(previous) = self.benchmark_results.insert(benchmark, benchmark_result) {
            if previous.is_completed() {
                tracing::warn!(
                    benchmark = %previous.benchmark(),
                    previous = %previous.outcome(),
                    "Replacing previously recorded benchmark result"
                );
            }
        }
        Ok(())
    }

    /// Number of benchmarks that currently have a stored result.
    pub fn recorded(&self) -> usize {
        self.benchmark_results.len()
    }

    /// Backfill and finalize the results collected so far.
    ///
    /// Results recorded concurrently with this call may or may not be part of
    /// the returned aggregate, but every benchmark appears exactly once.
    pub fn finalize(
        &self,
        system_configuration: impl Into<Option<SystemConfiguration>>,
        platform_configuration: impl Into<Option<PlatformConfiguration>>,
    ) -> GraphalyticsResult<BenchmarkSuiteResult> {
        let system_configuration = require(system_configuration.into(), "system_configuration")?;
        let platform_configuration =
            require(platform_configuration.into(), "platform_configuration")?;

        let benchmark_results = self
            .benchmark_suite
            .benchmarks()
            .map(|benchmark| {
                self.benchmark_results
                    .entry(benchmark.clone())
                    .or_insert_with(|| BenchmarkResult::not_run(benchmark.clone()))
                    .value()
                    .clone()
            })
            .collect();

        tracing::info!(
            suite_size = self.benchmark_suite.len(),
            "Finalized concurrently collected benchmark suite result"
        );

        Ok(BenchmarkSuiteResult::new(
            Arc::clone(&self.benchmark_suite),
            benchmark_results,
            platform_configuration,
            system_configuration,
        ))
    }

    /// Hand the collected results over to a single-writer builder.
    pub fn into_builder(self) -> GraphalyticsResult<BenchmarkSuiteResultBuilder> {
        let mut builder = BenchmarkSuiteResultBuilder::new(self.benchmark_suite)?;
        for (_, result) in self.benchmark_results {
            builder.with_benchmark_result(result)?;
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Algorithm, GraphName};
    use chrono::Utc;
    use std::thread;

    fn suite(graphs: usize) -> Arc<BenchmarkSuite> {
        let graphs: Vec<GraphName> = (0..graphs)
            .map(|i| GraphName::new(format!("graph-{}", i)).unwrap())
            .collect();
        Arc::new(BenchmarkSuite::from_product(&graphs, &Algorithm::ALL).unwrap())
    }

    fn succeeded(benchmark: &Benchmark) -> BenchmarkResult {
        let now = Utc::now();
        BenchmarkResult::completed(benchmark.clone(), true, now, now).unwrap()
    }

    #[test]
    fn test_concurrent_recording() {
        let suite = suite(4);
        let collector = ResultCollector::new_shared(Arc::clone(&suite)).unwrap();

        // Every other benchmark reports back, from its own thread.
        let handles: Vec<_> = suite
            .benchmarks()
            .step_by(2)
            .cloned()
            .map(|benchmark| {
                let collector = Arc::clone(&collector);
                thread::spawn(move || collector.record(succeeded(&benchmark)).unwrap())
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let result = collector
            .finalize(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();
        let summary = result.summary();

        assert_eq!(summary.total, suite.len());
        assert_eq!(summary.succeeded, suite.len().div_ceil(2));
        assert_eq!(summary.not_run, suite.len() / 2);
    }

    #[test]
    fn test_finalize_while_recording() {
        let suite = suite(4);
        let collector = ResultCollector::new_shared(Arc::clone(&suite)).unwrap();

        // One writer per graph, re-recording its benchmarks over and over.
        let handles: Vec<_> = suite
            .graphs()
            .into_iter()
            .map(|graph| {
                let benchmarks: Vec<Benchmark> =
                    suite.subset_for_graph(graph).into_iter().cloned().collect();
                let collector = Arc::clone(&collector);
                thread::spawn(move || {
                    for round in 0..500 {
                        for benchmark in &benchmarks {
                            let now = Utc::now();
                            let result =
                                BenchmarkResult::completed(benchmark.clone(), round % 2 == 0, now, now)
                                    .unwrap();
                            collector.record(result).unwrap();
                        }
                    }
                })
            })
            .collect();

        let mut finalized = 0;
        loop {
            let writers_done = handles.iter().all(|h| h.is_finished());

            let result = collector
                .finalize(SystemConfiguration::empty(), PlatformConfiguration::empty())
                .unwrap();
            assert_eq!(result.benchmark_results().len(), suite.len());
            for benchmark in suite.benchmarks() {
                let entries = result
                    .benchmark_results()
                    .iter()
                    .filter(|r| r.benchmark() == benchmark)
                    .count();
                assert_eq!(entries, 1, "{} has {} entries", benchmark, entries);
            }
            finalized += 1;

            if writers_done {
                break;
            }
        }

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(finalized >= 1);
        assert_eq!(collector.recorded(), suite.len());
    }

    #[test]
    fn test_record_replaces_completed_result() {
        let suite = suite(1);
        let collector = ResultCollector::new(Arc::clone(&suite)).unwrap();
        let first = suite.benchmarks().next().unwrap().clone();

        let now = Utc::now();
        collector
            .record(BenchmarkResult::completed(first.clone(), false, now, now).unwrap())
            .unwrap();
        collector.record(succeeded(&first)).unwrap();
        assert_eq!(collector.recorded(), 1);

        let result = collector
            .finalize(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();
        assert!(result.result_for(&first).unwrap().is_successful());
    }

    #[test]
    fn test_foreign_benchmark_rejected() {
        let collector = ResultCollector::new(suite(1)).unwrap();
        let foreign = Benchmark::new(Algorithm::Bfs, GraphName::new("elsewhere").unwrap());

        let err = collector.record(succeeded(&foreign)).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(collector.recorded(), 0);
    }

    #[test]
    fn test_missing_inputs_rejected() {
        assert!(ResultCollector::new(None).unwrap_err().is_invalid_argument());

        let collector = ResultCollector::new(suite(1)).unwrap();
        assert!(collector.record(None).unwrap_err().is_invalid_argument());
        assert!(collector
            .finalize(SystemConfiguration::empty(), None)
            .unwrap_err()
            .is_invalid_argument());
        assert_eq!(collector.recorded(), 0);
    }

    #[test]
    fn test_into_builder_keeps_results() {
        let suite = suite(1);
        let collector = ResultCollector::new(Arc::clone(&suite)).unwrap();
        let first = suite.benchmarks().next().unwrap().clone();
        collector.record(succeeded(&first)).unwrap();

        let mut builder = collector.into_builder().unwrap();
        assert_eq!(builder.recorded(), 1);

        let result = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();
        assert!(result.result_for(&first).unwrap().is_successful());
        assert_eq!(result.benchmark_results().len(), suite.len());
    }
}
