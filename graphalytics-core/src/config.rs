// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! YAML configuration parser with strict schema validation.
//!
//! Loads the benchmark suite definition together with the system and platform
//! configuration, and the outcome files recorded while a suite executed.
//! Any invalid field results in a HardValidationError.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::benchmark::{Benchmark, BenchmarkSuite};
use crate::configuration::{PlatformConfiguration, SystemConfiguration};
use crate::error::{GraphalyticsError, GraphalyticsResult, HardValidationError};
use crate::result::BenchmarkResult;
use crate::types::{Algorithm, GraphName};

/// Raw suite definition as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawSuiteConfig {
    graphs: Vec<String>,
    algorithms: Vec<String>,
    #[serde(default)]
    parameters: HashMap<String, BTreeMap<String, String>>,
    #[serde(default)]
    output_required: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSystemConfig {
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawPlatformConfig {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

/// Raw root configuration file.
#[derive(Debug, Deserialize)]
struct RawConfig {
    suite: RawSuiteConfig,
    #[serde(default)]
    system: RawSystemConfig,
    #[serde(default)]
    platform: RawPlatformConfig,
}

/// Outcome status as written in a results file.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum RawStatus {
    Success,
    Failure,
}

/// One recorded outcome as parsed from YAML.
#[derive(Debug, Deserialize)]
struct RawRecordedResult {
    graph: String,
    algorithm: String,
    status: RawStatus,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    #[serde(default)]
    platform_result: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct RawResultsFile {
    #[serde(default)]
    results: Vec<RawRecordedResult>,
}

/// Complete validated configuration.
#[derive(Debug)]
pub struct Config {
    pub suite: BenchmarkSuite,
    pub system: SystemConfiguration,
    pub platform: PlatformConfiguration,
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> GraphalyticsResult<Config> {
        let content = read_file(path.as_ref(), "reading config file")?;
        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> GraphalyticsResult<Config> {
        let raw: RawConfig = parse_yaml(content)?;
        Self::validate(raw)
    }

    fn validate(raw: RawConfig) -> GraphalyticsResult<Config> {
        let suite = Self::validate_suite(raw.suite)?;

        Ok(Config {
            suite,
            system: SystemConfiguration::new(raw.system.properties),
            platform: PlatformConfiguration::new(raw.platform.name, raw.platform.properties),
        })
    }

    /// Validate the suite definition and expand it into graphs × algorithms.
    fn validate_suite(raw: RawSuiteConfig) -> GraphalyticsResult<BenchmarkSuite> {
        if raw.graphs.is_empty() {
            return Err(HardValidationError::SchemaValidation {
                message: "At least one graph must be defined".to_string(),
            }
            .into());
        }

        if raw.algorithms.is_empty() {
            return Err(HardValidationError::SchemaValidation {
                message: "At least one algorithm must be defined".to_string(),
            }
            .into());
        }

        let mut graphs = Vec::with_capacity(raw.graphs.len());
        let mut seen_graphs = BTreeSet::new();
        for name in raw.graphs {
            let graph = GraphName::new(name)?;
            if !seen_graphs.insert(graph.clone()) {
                return Err(HardValidationError::InvalidFieldValue {
                    field: "graphs",
                    value: graph.to_string(),
                    reason: "Graph is listed more than once".to_string(),
                }
                .into());
            }
            graphs.push(graph);
        }

        let mut algorithms = Vec::with_capacity(raw.algorithms.len());
        for name in &raw.algorithms {
            let algorithm: Algorithm = name.parse()?;
            if algorithms.contains(&algorithm) {
                return Err(HardValidationError::InvalidFieldValue {
                    field: "algorithms",
                    value: name.clone(),
                    reason: "Algorithm is listed more than once".to_string(),
                }
                .into());
            }
            algorithms.push(algorithm);
        }

        let mut parameters = HashMap::with_capacity(raw.parameters.len());
        for (name, values) in raw.parameters {
            let algorithm = Self::suite_algorithm(&name, &algorithms, "parameters")?;
            parameters.insert(algorithm, values);
        }

        let mut output_required = BTreeSet::new();
        for name in &raw.output_required {
            output_required.insert(Self::suite_algorithm(name, &algorithms, "output_required")?);
        }

        let (parameters, output_required) = (&parameters, &output_required);
        let benchmarks = graphs.iter().flat_map(|graph| {
            algorithms.iter().map(move |&algorithm| {
                Benchmark::new(algorithm, graph.clone())
                    .with_parameters(parameters.get(&algorithm).cloned().unwrap_or_default())
                    .with_output_required(output_required.contains(&algorithm))
            })
        });

        Ok(BenchmarkSuite::new(benchmarks)?)
    }

    /// Parse an algorithm referenced by a per-algorithm section.
    fn suite_algorithm(
        name: &str,
        algorithms: &[Algorithm],
        field: &'static str,
    ) -> GraphalyticsResult<Algorithm> {
        let algorithm: Algorithm = name.parse()?;
        if !algorithms.contains(&algorithm) {
            return Err(HardValidationError::InvalidFieldValue {
                field,
                value: name.to_string(),
                reason: "Algorithm is not part of the suite".to_string(),
            }
            .into());
        }
        Ok(algorithm)
    }
}

/// Loader for outcome files recorded while a suite executed.
pub struct ResultsLoader;

impl ResultsLoader {
    /// Load recorded outcomes from a YAML file.
    ///
    /// Benchmarks are resolved against `suite` where possible. Outcomes for
    /// benchmarks outside the suite are returned as-is so the aggregation layer
    /// can reject them.
    pub fn load_file(
        path: impl AsRef<Path>,
        suite: &BenchmarkSuite,
    ) -> GraphalyticsResult<Vec<BenchmarkResult>> {
        let content = read_file(path.as_ref(), "reading results file")?;
        Self::load_string(&content, suite)
    }

    /// Load recorded outcomes from a YAML string.
    pub fn load_string(
        content: &str,
        suite: &BenchmarkSuite,
    ) -> GraphalyticsResult<Vec<BenchmarkResult>> {
        let raw: RawResultsFile = parse_yaml(content)?;

        raw.results
            .into_iter()
            .map(|recorded| Self::validate_result(recorded, suite))
            .collect()
    }

    fn validate_result(
        raw: RawRecordedResult,
        suite: &BenchmarkSuite,
    ) -> GraphalyticsResult<BenchmarkResult> {
        let graph = GraphName::new(raw.graph)?;
        let algorithm: Algorithm = raw.algorithm.parse()?;

        let benchmark = suite
            .find(algorithm, &graph)
            .cloned()
            .unwrap_or_else(|| Benchmark::new(algorithm, graph));

        let successful = matches!(raw.status, RawStatus::Success);
        let result =
            BenchmarkResult::completed(benchmark, successful, raw.started_at, raw.finished_at)?;

        Ok(match raw.platform_result {
            Some(platform_result) => result.with_platform_result(platform_result),
            None => result,
        })
    }
}

fn read_file(path: &Path, context: &'static str) -> GraphalyticsResult<String> {
    if !path.exists() {
        return Err(GraphalyticsError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    std::fs::read_to_string(path).map_err(|e| GraphalyticsError::Io { context, source: e })
}

fn parse_yaml<T: serde::de::DeserializeOwned>(content: &str) -> GraphalyticsResult<T> {
    serde_yaml::from_str(content).map_err(|e| GraphalyticsError::ConfigParse {
        message: format!("YAML parse error: {}", e),
    })
}
