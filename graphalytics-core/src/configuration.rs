// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! System and platform configuration payloads.
//!
//! Both are carried through result aggregation untouched.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Configuration of the system (cluster, machines) a suite was run on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfiguration {
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

impl SystemConfiguration {
    pub fn new(properties: BTreeMap<String, String>) -> Self {
        Self { properties }
    }

    /// A system configuration with no recorded properties.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}

/// Platform-specific options used while executing a suite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(default)]
    properties: BTreeMap<String, String>,
}

impl PlatformConfiguration {
    pub fn new(name: Option<String>, properties: BTreeMap<String, String>) -> Self {
        Self { name, properties }
    }

    /// A platform configuration with no recorded options.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Name of the platform, if known.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn properties(&self) -> &BTreeMap<String, String> {
        &self.properties
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }
}
