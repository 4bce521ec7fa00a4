// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Aggregation of per-benchmark results into a complete suite result.
//!
//! [`BenchmarkSuiteResultBuilder`] collects results while a suite executes and
//! is the only way to obtain a [`BenchmarkSuiteResult`]. Every finalized
//! aggregate holds exactly one result per benchmark in the suite: benchmarks
//! without a recorded outcome are backfilled with "not run" placeholders.

use std::collections::HashMap;
use std::sync::Arc;

use crate::benchmark::{Benchmark, BenchmarkSuite};
use crate::configuration::{PlatformConfiguration, SystemConfiguration};
use crate::error::{GraphalyticsResult, InvalidArgumentError};
use crate::result::BenchmarkResult;

/// Results of executing a benchmark suite on a single platform, together with
/// the system and platform configuration used during execution.
#[derive(Debug, Clone)]
pub struct BenchmarkSuiteResult {
    benchmark_suite: Arc<BenchmarkSuite>,
    benchmark_results: Vec<BenchmarkResult>,
    platform_configuration: PlatformConfiguration,
    system_configuration: SystemConfiguration,
}

impl BenchmarkSuiteResult {
    pub(crate) fn new(
        benchmark_suite: Arc<BenchmarkSuite>,
        benchmark_results: Vec<BenchmarkResult>,
        platform_configuration: PlatformConfiguration,
        system_configuration: SystemConfiguration,
    ) -> Self {
        Self {
            benchmark_suite,
            benchmark_results,
            platform_configuration,
            system_configuration,
        }
    }

    /// The suite these results were obtained for.
    pub fn benchmark_suite(&self) -> &Arc<BenchmarkSuite> {
        &self.benchmark_suite
    }

    /// One result per benchmark in the suite, in no particular order.
    pub fn benchmark_results(&self) -> &[BenchmarkResult] {
        &self.benchmark_results
    }

    pub fn platform_configuration(&self) -> &PlatformConfiguration {
        &self.platform_configuration
    }

    pub fn system_configuration(&self) -> &SystemConfiguration {
        &self.system_configuration
    }

    /// The result recorded (or backfilled) for a benchmark.
    pub fn result_for(&self, benchmark: &Benchmark) -> Option<&BenchmarkResult> {
        self.benchmark_results
            .iter()
            .find(|r| r.benchmark() == benchmark)
    }

    /// Results of benchmarks that were executed.
    pub fn completed(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.benchmark_results.iter().filter(|r| r.is_completed())
    }

    /// Placeholders of benchmarks that never produced an outcome.
    pub fn not_run(&self) -> impl Iterator<Item = &BenchmarkResult> {
        self.benchmark_results.iter().filter(|r| !r.is_completed())
    }

    /// Outcome counts over the whole suite.
    pub fn summary(&self) -> SuiteSummary {
        let mut summary = SuiteSummary {
            total: self.benchmark_results.len(),
            ..SuiteSummary::default()
        };
        for result in &self.benchmark_results {
            if result.is_successful() {
                summary.succeeded += 1;
            } else if result.is_completed() {
                summary.failed += 1;
            } else {
                summary.not_run += 1;
            }
        }
        summary
    }
}

/// Outcome counts of a finalized suite result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuiteSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub not_run: usize,
}

/// Collects benchmark results for one suite and finalizes them into a
/// [`BenchmarkSuiteResult`].
///
/// Single writer. Use [`crate::ResultCollector`] when results are reported from
/// several threads.
#[derive(Debug)]
pub struct BenchmarkSuiteResultBuilder {
    benchmark_suite: Arc<BenchmarkSuite>,
    benchmark_results: HashMap<Benchmark, BenchmarkResult>,
}

impl BenchmarkSuiteResultBuilder {
    /// Create a builder collecting results for `benchmark_suite`.
    ///
    /// Fails with `InvalidArgument` if no suite is given.
    pub fn new(
        benchmark_suite: impl Into<Option<Arc<BenchmarkSuite>>>,
    ) -> GraphalyticsResult<Self> {
        let benchmark_suite = require(benchmark_suite.into(), "benchmark_suite")?;

        Ok(Self {
            benchmark_results: HashMap::with_capacity(benchmark_suite.len()),
            benchmark_suite,
        })
    }

    pub fn benchmark_suite(&self) -> &Arc<BenchmarkSuite> {
        &self.benchmark_suite
    }

    /// Record the result of a benchmark, replacing any earlier result for the
    /// same benchmark.
    ///
    /// Fails with `InvalidArgument` if no result is given or the result refers
    /// to a benchmark outside the suite. A rejected result leaves the builder
    /// unchanged.
    pub fn with_benchmark_result(
        &mut self,
        benchmark_result: impl Into<Option<BenchmarkResult>>,
    ) -> GraphalyticsResult<&mut Self> {
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

        Ok(self)
    }

    /// Number of benchmarks that currently have a stored result.
    pub fn recorded(&self) -> usize {
        self.benchmark_results.len()
    }

    /// Finalize the collected results with the configuration used to run the
    /// suite.
    ///
    /// Every benchmark without a stored result is backfilled with a "not run"
    /// placeholder first. Fails with `InvalidArgument` naming whichever
    /// configuration is missing; a rejected call leaves the builder unchanged.
    pub fn build_from_configuration(
        &mut self,
        system_configuration: impl Into<Option<SystemConfiguration>>,
        platform_configuration: impl Into<Option<PlatformConfiguration>>,
    ) -> GraphalyticsResult<BenchmarkSuiteResult> {
        let system_configuration = require(system_configuration.into(), "system_configuration")?;
        let platform_configuration =
            require(platform_configuration.into(), "platform_configuration")?;

        for benchmark in self.benchmark_suite.benchmarks() {
            self.benchmark_results
                .entry(benchmark.clone())
                .or_insert_with(|| {
                    tracing::debug!(benchmark = %benchmark, "Backfilling benchmark as not run");
                    BenchmarkResult::not_run(benchmark.clone())
                });
        }

        let result = BenchmarkSuiteResult::new(
            Arc::clone(&self.benchmark_suite),
            self.benchmark_results.values().cloned().collect(),
            platform_configuration,
            system_configuration,
        );

        let summary = result.summary();
        tracing::info!(
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            not_run = summary.not_run,
            "Finalized benchmark suite result"
        );

        Ok(result)
    }
}

/// Unwrap a required argument or reject it by parameter name.
pub(crate) fn require<T>(
    value: Option<T>,
    parameter: &'static str,
) -> Result<T, InvalidArgumentError> {
    value.ok_or(InvalidArgumentError::MissingParameter { parameter })
}

/// Reject results for benchmarks that are not part of the suite.
pub(crate) fn ensure_member(
    suite: &BenchmarkSuite,
    result: &BenchmarkResult,
) -> Result<(), InvalidArgumentError> {
    if suite.contains(result.benchmark()) {
        Ok(())
    } else {
        Err(InvalidArgumentError::BenchmarkNotInSuite {
            benchmark: result.benchmark().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphalyticsError;
    use crate::result::BenchmarkOutcome;
    use crate::types::{Algorithm, GraphName};
    use chrono::{Duration, Utc};

    fn benchmark(algorithm: Algorithm, graph: &str) -> Benchmark {
        Benchmark::new(algorithm, GraphName::new(graph).unwrap())
    }

    fn suite() -> Arc<BenchmarkSuite> {
        Arc::new(
            BenchmarkSuite::new(vec![
                benchmark(Algorithm::Bfs, "kgs"),
                benchmark(Algorithm::Conn, "kgs"),
                benchmark(Algorithm::Stats, "kgs"),
            ])
            .unwrap(),
        )
    }

    fn completed(benchmark: Benchmark, successful: bool) -> BenchmarkResult {
        let start = Utc::now();
        BenchmarkResult::completed(benchmark, successful, start, start + Duration::seconds(2))
            .unwrap()
    }

    fn missing_parameter(err: GraphalyticsError) -> &'static str {
        match err {
            GraphalyticsError::InvalidArgument(InvalidArgumentError::MissingParameter {
                parameter,
            }) => parameter,
            other => panic!("expected missing parameter, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_suite_rejected() {
        let err = BenchmarkSuiteResultBuilder::new(None).unwrap_err();
        assert_eq!(missing_parameter(err), "benchmark_suite");
    }

    #[test]
    fn test_zero_results_backfills_everything() {
        let suite = suite();
        let mut builder = BenchmarkSuiteResultBuilder::new(Arc::clone(&suite)).unwrap();

        let result = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();

        assert_eq!(result.benchmark_results().len(), suite.len());
        assert!(result
            .benchmark_results()
            .iter()
            .all(|r| *r.outcome() == BenchmarkOutcome::NotRun));
        for b in suite.benchmarks() {
            assert!(result.result_for(b).is_some());
        }
    }

    #[test]
    fn test_real_result_kept_others_backfilled() {
        let suite = suite();
        let bfs = benchmark(Algorithm::Bfs, "kgs");
        let mut builder = BenchmarkSuiteResultBuilder::new(suite).unwrap();
        builder
            .with_benchmark_result(completed(bfs.clone(), true))
            .unwrap();

        let result = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();

        assert_eq!(result.benchmark_results().len(), 3);
        assert!(result.result_for(&bfs).unwrap().is_successful());
        assert_eq!(result.not_run().count(), 2);
        assert_eq!(result.completed().count(), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let bfs = benchmark(Algorithm::Bfs, "kgs");
        let first = completed(bfs.clone(), false);
        let second = completed(bfs.clone(), true);

        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();
        builder
            .with_benchmark_result(first)
            .unwrap()
            .with_benchmark_result(second.clone())
            .unwrap();

        let result = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();

        let entries: Vec<_> = result
            .benchmark_results()
            .iter()
            .filter(|r| r.benchmark() == &bfs)
            .collect();
        assert_eq!(entries, vec![&second]);
    }

    #[test]
    fn test_foreign_benchmark_rejected_without_trace() {
        let foreign = benchmark(Algorithm::Bfs, "wiki");
        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();

        let err = builder
            .with_benchmark_result(completed(foreign.clone(), true))
            .unwrap_err();
        assert!(matches!(
            err,
            GraphalyticsError::InvalidArgument(InvalidArgumentError::BenchmarkNotInSuite { .. })
        ));
        assert!(err.to_string().contains("outside the suite"));
        assert_eq!(builder.recorded(), 0);

        let result = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();
        assert_eq!(result.benchmark_results().len(), 3);
        assert!(result.result_for(&foreign).is_none());
        assert_eq!(result.not_run().count(), 3);
    }

    #[test]
    fn test_missing_result_rejected() {
        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();
        let err = builder.with_benchmark_result(None).unwrap_err();
        assert_eq!(missing_parameter(err), "benchmark_result");
        assert_eq!(builder.recorded(), 0);
    }

    #[test]
    fn test_missing_configuration_rejected_without_mutation() {
        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();

        let err = builder
            .build_from_configuration(None, PlatformConfiguration::empty())
            .unwrap_err();
        assert_eq!(missing_parameter(err), "system_configuration");

        let err = builder
            .build_from_configuration(SystemConfiguration::empty(), None)
            .unwrap_err();
        assert_eq!(missing_parameter(err), "platform_configuration");

        // System configuration is checked first.
        let err = builder.build_from_configuration(None, None).unwrap_err();
        assert_eq!(missing_parameter(err), "system_configuration");

        assert_eq!(builder.recorded(), 0);
    }

    #[test]
    fn test_finalize_twice_yields_equal_results() {
        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();
        builder
            .with_benchmark_result(completed(benchmark(Algorithm::Conn, "kgs"), false))
            .unwrap();

        let first = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();
        let second = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();

        assert_eq!(
            first.benchmark_results().len(),
            second.benchmark_results().len()
        );
        for r in first.benchmark_results() {
            assert_eq!(second.result_for(r.benchmark()), Some(r));
        }
    }

    #[test]
    fn test_record_after_finalize_replaces_placeholder() {
        let stats = benchmark(Algorithm::Stats, "kgs");
        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();

        let before = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();
        assert!(!before.result_for(&stats).unwrap().is_completed());

        builder
            .with_benchmark_result(completed(stats.clone(), true))
            .unwrap();
        let after = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap();

        assert!(after.result_for(&stats).unwrap().is_successful());
        assert_eq!(after.benchmark_results().len(), 3);
        // Earlier aggregates are unaffected.
        assert!(!before.result_for(&stats).unwrap().is_completed());
    }

    #[test]
    fn test_summary_counts() {
        let mut builder = BenchmarkSuiteResultBuilder::new(suite()).unwrap();
        builder
            .with_benchmark_result(completed(benchmark(Algorithm::Bfs, "kgs"), true))
            .unwrap()
            .with_benchmark_result(completed(benchmark(Algorithm::Conn, "kgs"), false))
            .unwrap();

        let summary = builder
            .build_from_configuration(SystemConfiguration::empty(), PlatformConfiguration::empty())
            .unwrap()
            .summary();

        assert_eq!(
            summary,
            SuiteSummary {
                total: 3,
                succeeded: 1,
                failed: 1,
                not_run: 1,
            }
        );
    }
}
