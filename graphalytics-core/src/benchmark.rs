// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark and benchmark suite definitions.
//!
//! A benchmark is identified by the (algorithm, graph) pair it runs. Algorithm
//! parameters and output flags travel with it but do not take part in identity.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgumentError;
use crate::types::{Algorithm, GraphName};

/// A single unit of work: one algorithm executed on one graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    algorithm: Algorithm,
    graph: GraphName,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    parameters: BTreeMap<String, String>,
    #[serde(default)]
    output_required: bool,
}

impl Benchmark {
    /// Create a benchmark with no algorithm parameters.
    pub fn new(algorithm: Algorithm, graph: GraphName) -> Self {
        Self {
            algorithm,
            graph,
            parameters: BTreeMap::new(),
            output_required: false,
        }
    }

    /// Attach algorithm parameters.
    pub fn with_parameters(mut self, parameters: BTreeMap<String, String>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Request that the platform keeps the algorithm output.
    pub fn with_output_required(mut self, required: bool) -> Self {
        self.output_required = required;
        self
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn graph(&self) -> &GraphName {
        &self.graph
    }

    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    pub fn is_output_required(&self) -> bool {
        self.output_required
    }
}

impl PartialEq for Benchmark {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm && self.graph == other.graph
    }
}

impl Eq for Benchmark {}

impl Hash for Benchmark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.algorithm.hash(state);
        self.graph.hash(state);
    }
}

impl PartialOrd for Benchmark {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Benchmark {
    // Graph first so that a suite iterates graph by graph.
    fn cmp(&self, other: &Self) -> Ordering {
        self.graph
            .cmp(&other.graph)
            .then_with(|| self.algorithm.cmp(&other.algorithm))
    }
}

impl fmt::Display for Benchmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.algorithm, self.graph)
    }
}

/// The fixed set of benchmarks executed together against one platform.
///
/// Non-empty and free of duplicate benchmarks by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkSuite {
    benchmarks: BTreeSet<Benchmark>,
}

impl BenchmarkSuite {
    /// Create a suite from an explicit list of benchmarks.
    ///
    /// Fails if the list is empty or names the same (algorithm, graph) twice.
    pub fn new(
        benchmarks: impl IntoIterator<Item = Benchmark>,
    ) -> Result<Self, InvalidArgumentError> {
        let mut set = BTreeSet::new();
        for benchmark in benchmarks {
            if set.contains(&benchmark) {
                return Err(InvalidArgumentError::DuplicateBenchmark {
                    algorithm: benchmark.algorithm,
                    graph: benchmark.graph,
                });
            }
            set.insert(benchmark);
        }

        if set.is_empty() {
            return Err(InvalidArgumentError::EmptySuite);
        }

        Ok(Self { benchmarks: set })
    }

    /// Create a suite running every algorithm on every graph.
    pub fn from_product(
        graphs: &[GraphName],
        algorithms: &[Algorithm],
    ) -> Result<Self, InvalidArgumentError> {
        Self::new(graphs.iter().flat_map(|graph| {
            algorithms
                .iter()
                .map(move |&algorithm| Benchmark::new(algorithm, graph.clone()))
        }))
    }

    /// Whether the benchmark is part of this suite.
    pub fn contains(&self, benchmark: &Benchmark) -> bool {
        self.benchmarks.contains(benchmark)
    }

    /// Iterate over all benchmarks, graph by graph.
    pub fn benchmarks(&self) -> impl Iterator<Item = &Benchmark> {
        self.benchmarks.iter()
    }

    /// Look up the suite's benchmark for an (algorithm, graph) pair.
    pub fn find(&self, algorithm: Algorithm, graph: &GraphName) -> Option<&Benchmark> {
        self.benchmarks.get(&Benchmark::new(algorithm, graph.clone()))
    }

    /// Distinct algorithms covered by the suite.
    pub fn algorithms(&self) -> BTreeSet<Algorithm> {
        self.benchmarks.iter().map(|b| b.algorithm).collect()
    }

    /// Distinct graphs covered by the suite.
    pub fn graphs(&self) -> BTreeSet<&GraphName> {
        self.benchmarks.iter().map(|b| &b.graph).collect()
    }

    /// Benchmarks that run on the given graph.
    pub fn subset_for_graph(&self, graph: &GraphName) -> Vec<&Benchmark> {
        self.benchmarks
            .iter()
            .filter(|b| &b.graph == graph)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.benchmarks.len()
    }

    /// Always false for a constructed suite.
    pub fn is_empty(&self) -> bool {
        self.benchmarks.is_empty()
    }
}
