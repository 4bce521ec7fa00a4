// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated benchmark identifiers.
//!
//! All types validate their invariants at creation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::HardValidationError;

/// Maximum length of a graph name.
const MAX_GRAPH_NAME_LEN: usize = 128;

/// Graph-processing algorithms covered by the benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Community detection
    Cd,
    /// Connected components
    Conn,
    /// Graph evolution
    Evo,
    /// Local clustering coefficient and graph statistics
    Stats,
}

impl Algorithm {
    /// All algorithms, in canonical order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Cd,
        Algorithm::Conn,
        Algorithm::Evo,
        Algorithm::Stats,
    ];

    /// Short lowercase acronym, as used in configuration files.
    pub const fn acronym(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::Cd => "cd",
            Self::Conn => "conn",
            Self::Evo => "evo",
            Self::Stats => "stats",
        }
    }

    /// Human-readable algorithm name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "Breadth first search",
            Self::Cd => "Community detection",
            Self::Conn => "Connected components",
            Self::Evo => "Graph evolution",
            Self::Stats => "Local clustering coefficient",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.acronym())
    }
}

impl FromStr for Algorithm {
    type Err = HardValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.acronym().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| HardValidationError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}

/// Validated graph name.
/// Must be non-empty, at most 128 chars, alphanumeric with `-`, `_` or `.`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraphName(String);

impl GraphName {
    /// Create a new GraphName with validation.
    pub fn new(name: impl Into<String>) -> Result<Self, HardValidationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(HardValidationError::InvalidFieldValue {
                field: "graph",
                value: name,
                reason: "Graph name cannot be empty".to_string(),
            });
        }

        let chars = name.chars().count();
        if chars > MAX_GRAPH_NAME_LEN {
            return Err(HardValidationError::InvalidFieldValue {
                field: "graph",
                value: name.clone(),
                reason: format!(
                    "Graph name too long: {} chars (max {})",
                    chars,
                    MAX_GRAPH_NAME_LEN
                ),
            });
        }

        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(HardValidationError::InvalidFieldValue {
                field: "graph",
                value: name,
                reason: "Graph name must contain only alphanumeric characters, hyphens, underscores, and dots".to_string(),
            });
        }

        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for GraphName {
    type Error = HardValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<GraphName> for String {
    fn from(name: GraphName) -> Self {
        name.0
    }
}
