//! Graphalytics Core Library
//!
//! Benchmark suite model and result aggregation for graph-processing platform
//! benchmarks. Provides the suite and benchmark definitions, per-benchmark
//! results, configuration loading, and the builder that turns incrementally
//! reported results into one complete suite result.

pub mod benchmark;
pub mod collector;
pub mod config;
pub mod configuration;
pub mod error;
pub mod result;
pub mod suite_result;
pub mod types;

// Re-export commonly used types
pub use benchmark::{Benchmark, BenchmarkSuite};
pub use collector::ResultCollector;
pub use config::{Config, ConfigLoader, ResultsLoader};
pub use configuration::{PlatformConfiguration, SystemConfiguration};
pub use error::{GraphalyticsError, GraphalyticsResult, HardValidationError, InvalidArgumentError};
pub use result::{BenchmarkOutcome, BenchmarkResult, BenchmarkResultBuilder};
pub use suite_result::{BenchmarkSuiteResult, BenchmarkSuiteResultBuilder, SuiteSummary};
pub use types::{Algorithm, GraphName};
