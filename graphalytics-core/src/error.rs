//! Custom error types for Graphalytics.
//!
//! Explicit enum error types only. No `Box<dyn Error>`, no `anyhow::Result`:
//! every failure a caller can observe is a named variant.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Algorithm, GraphName};

/// Top-level error type for the Graphalytics core library.
#[derive(Debug, Error)]
pub enum GraphalyticsError {
    // =========================================================================
    // Caller Input Errors - Rejected Before Any Mutation
    // =========================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgumentError),

    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Hard validation error: {0}")]
    HardValidation(#[from] HardValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl GraphalyticsError {
    /// Whether this error is an `InvalidArgument` rejection.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Rejections of caller-supplied arguments.
///
/// Every variant is detected eagerly at the offending call. The call that
/// produced it has not mutated any state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgumentError {
    #[error("Parameter \"{parameter}\" must not be null")]
    MissingParameter { parameter: &'static str },

    #[error("result refers to a benchmark outside the suite: {benchmark}")]
    BenchmarkNotInSuite { benchmark: String },

    #[error("A benchmark suite must contain at least one benchmark")]
    EmptySuite,

    #[error("Duplicate benchmark in suite: {algorithm} on {graph}")]
    DuplicateBenchmark { algorithm: Algorithm, graph: GraphName },

    #[error("Benchmark {benchmark} was never marked as {missing}")]
    IncompleteTiming {
        benchmark: String,
        missing: &'static str,
    },

    #[error("Benchmark {benchmark} finished before it started")]
    EndBeforeStart { benchmark: String },
}

/// Hard validation errors reject a configuration file as a whole.
#[derive(Debug, Error)]
pub enum HardValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Unknown algorithm: {name}")]
    UnknownAlgorithm { name: String },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// Result type alias using GraphalyticsError.
pub type GraphalyticsResult<T> = Result<T, GraphalyticsError>;
