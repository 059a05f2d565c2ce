//! Store Configuration
//!
//! The node set is fixed at construction: how many nodes, how many units
//! each one holds, and what they are called.

use super::error::{StoreError, StoreResult};

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_NODE_COUNT: usize = 7;
pub const DEFAULT_CAPACITY: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StoreConfig {
    /// Number of nodes. A prime count gives double hashing its cleanest
    /// probe sequences.
    #[serde(default = "default_node_count")]
    pub node_count: usize,
    /// Units per node. Each item consumes exactly one unit.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Display names, one per node. Generated when empty.
    #[serde(default)]
    pub names: Vec<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::with_nodes(DEFAULT_NODE_COUNT, DEFAULT_CAPACITY)
    }
}

impl StoreConfig {
    /// `node_count` nodes named `Node A`, `Node B`, ... (then `Node 27`, ...).
    pub fn with_nodes(node_count: usize, capacity: usize) -> Self {
        Self {
            node_count,
            capacity,
            names: (0..node_count).map(default_name).collect(),
        }
    }

    pub fn with_names<S: Into<String>>(names: Vec<S>, capacity: usize) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        Self {
            node_count: names.len(),
            capacity,
            names,
        }
    }

    /// Builds the config from command-line choices. A config file defines the
    /// whole node set, so `--nodes`/`--capacity` next to it are reported and
    /// ignored.
    pub fn from_args(
        config_path: Option<&str>,
        node_count: Option<usize>,
        capacity: Option<usize>,
    ) -> anyhow::Result<Self> {
        match config_path {
            Some(path) => {
                if node_count.is_some() || capacity.is_some() {
                    tracing::warn!("Ignoring --nodes/--capacity: {} defines the node set", path);
                }
                tracing::info!("Loading node configuration from {}", path);
                Self::from_json_file(path)
            }
            None => {
                let config = Self::with_nodes(
                    node_count.unwrap_or(DEFAULT_NODE_COUNT),
                    capacity.unwrap_or(DEFAULT_CAPACITY),
                );
                config.validate()?;
                Ok(config)
            }
        }
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: StoreConfig = serde_json::from_str(&raw)?;
        if config.names.is_empty() {
            config.names = (0..config.node_count).map(default_name).collect();
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.node_count == 0 {
            return Err(StoreError::InvalidConfig(
                "node_count must be at least 1".to_string(),
            ));
        }
        if self.capacity == 0 {
            return Err(StoreError::InvalidConfig(
                "capacity must be at least 1".to_string(),
            ));
        }
        if self.names.len() != self.node_count {
            return Err(StoreError::InvalidConfig(format!(
                "expected {} node names, got {}",
                self.node_count,
                self.names.len()
            )));
        }
        if self.names.iter().any(|name| name.trim().is_empty()) {
            return Err(StoreError::InvalidConfig(
                "node names must not be blank".to_string(),
            ));
        }
        let unique: HashSet<&str> = self.names.iter().map(String::as_str).collect();
        if unique.len() != self.names.len() {
            return Err(StoreError::InvalidConfig(
                "node names must be unique".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_node_count() -> usize {
    DEFAULT_NODE_COUNT
}

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

fn default_name(index: usize) -> String {
    if index < 26 {
        format!("Node {}", (b'A' + index as u8) as char)
    } else {
        format!("Node {}", index + 1)
    }
}
