// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Per-benchmark results.
//!
//! A result is either a real outcome of executing the benchmark or the
//! "not run" sentinel created by [`BenchmarkResult::not_run`]. A benchmark that
//! ran and failed is a completed, unsuccessful result, never "not run".

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::benchmark::Benchmark;
use crate::error::InvalidArgumentError;

/// Outcome of a single benchmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BenchmarkOutcome {
    /// The benchmark was executed on the platform.
    Completed {
        successful: bool,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    },
    /// The benchmark never produced an outcome.
    NotRun,
}

impl BenchmarkOutcome {
    /// Short status label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Completed {
                successful: true, ..
            } => "success",
            Self::Completed {
                successful: false, ..
            } => "failure",
            Self::NotRun => "not run",
        }
    }
}

impl fmt::Display for BenchmarkOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of one benchmark, bound to that benchmark.
///
/// Deserialized results pass through [`BenchmarkResult::completed`], so a
/// payload finishing before it started is rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBenchmarkResult")]
pub struct BenchmarkResult {
    benchmark: Benchmark,
    outcome: BenchmarkOutcome,
    /// Platform-specific details, opaque to the aggregation layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    platform_result: Option<serde_json::Value>,
}

/// Serialized outcome, before timing validation.
#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum RawOutcome {
    Completed {
        successful: bool,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    },
    NotRun,
}

/// Serialized result, before timing validation.
#[derive(Debug, Deserialize)]
struct RawBenchmarkResult {
    benchmark: Benchmark,
    outcome: RawOutcome,
    #[serde(default)]
    platform_result: Option<serde_json::Value>,
}

impl TryFrom<RawBenchmarkResult> for BenchmarkResult {
    type Error = InvalidArgumentError;

    fn try_from(raw: RawBenchmarkResult) -> Result<Self, Self::Error> {
        let result = match raw.outcome {
            RawOutcome::Completed {
                successful,
                started_at,
                finished_at,
            } => Self::completed(raw.benchmark, successful, started_at, finished_at)?,
            RawOutcome::NotRun => Self::not_run(raw.benchmark),
        };

        Ok(Self {
            platform_result: raw.platform_result,
            ..result
        })
    }
}

impl BenchmarkResult {
    /// Placeholder for a benchmark that has no recorded outcome.
    pub fn not_run(benchmark: Benchmark) -> Self {
        Self {
            benchmark,
            outcome: BenchmarkOutcome::NotRun,
            platform_result: None,
        }
    }

    /// Result of a benchmark that was executed between the two timestamps.
    pub fn completed(
        benchmark: Benchmark,
        successful: bool,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
    ) -> Result<Self, InvalidArgumentError> {
        if finished_at < started_at {
            return Err(InvalidArgumentError::EndBeforeStart {
                benchmark: benchmark.to_string(),
            });
        }

        Ok(Self {
            benchmark,
            outcome: BenchmarkOutcome::Completed {
                successful,
                started_at,
                finished_at,
            },
            platform_result: None,
        })
    }

    /// Attach platform-specific details to a result.
    pub fn with_platform_result(mut self, platform_result: serde_json::Value) -> Self {
        self.platform_result = Some(platform_result);
        self
    }

    pub fn benchmark(&self) -> &Benchmark {
        &self.benchmark
    }

    pub fn outcome(&self) -> &BenchmarkOutcome {
        &self.outcome
    }

    pub fn platform_result(&self) -> Option<&serde_json::Value> {
        self.platform_result.as_ref()
    }

    /// Whether the benchmark was executed at all.
    pub fn is_completed(&self) -> bool {
        matches!(self.outcome, BenchmarkOutcome::Completed { .. })
    }

    /// Whether the benchmark was executed and succeeded.
    pub fn is_successful(&self) -> bool {
        matches!(
            self.outcome,
            BenchmarkOutcome::Completed {
                successful: true,
                ..
            }
        )
    }

    /// Wall-clock time spent executing the benchmark.
    pub fn elapsed(&self) -> Option<Duration> {
        match self.outcome {
            BenchmarkOutcome::Completed {
                started_at,
                finished_at,
                ..
            } => Some(finished_at - started_at),
            BenchmarkOutcome::NotRun => None,
        }
    }
}

/// Records the timing of a benchmark while it executes.
#[derive(Debug)]
pub struct BenchmarkResultBuilder {
    benchmark: Benchmark,
    started_at: Option<DateTime<Utc>>,
    finished_at: Option<DateTime<Utc>>,
    successful: bool,
    platform_result: Option<serde_json::Value>,
}

impl BenchmarkResultBuilder {
    pub fn new(benchmark: Benchmark) -> Self {
        Self {
            benchmark,
            started_at: None,
            finished_at: None,
            successful: false,
            platform_result: None,
        }
    }

    /// Mark the start of the benchmark at the current time.
    pub fn mark_start(&mut self) -> &mut Self {
        self.started_at = Some(Utc::now());
        self
    }

    /// Mark the end of the benchmark at the current time.
    pub fn mark_end(&mut self, successful: bool) -> &mut Self {
        self.finished_at = Some(Utc::now());
        self.successful = successful;
        self
    }

    pub fn with_platform_result(&mut self, platform_result: serde_json::Value) -> &mut Self {
        self.platform_result = Some(platform_result);
        self
    }

    /// Build the result. Both the start and the end must have been marked.
    pub fn build(&self) -> Result<BenchmarkResult, InvalidArgumentError> {
        let started_at = self
            .started_at
            .ok_or_else(|| InvalidArgumentError::IncompleteTiming {
                benchmark: self.benchmark.to_string(),
                missing: "started",
            })?;
        let finished_at = self
            .finished_at
            .ok_or_else(|| InvalidArgumentError::IncompleteTiming {
                benchmark: self.benchmark.to_string(),
                missing: "finished",
            })?;

        let result = BenchmarkResult::completed(
            self.benchmark.clone(),
            self.successful,
            started_at,
            finished_at,
        )?;

        Ok(match &self.platform_result {
            Some(platform_result) => result.with_platform_result(platform_result.clone()),
            None => result,
        })
    }
}
