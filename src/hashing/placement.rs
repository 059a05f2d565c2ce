//! Collision Resolution Strategies
//!
//! Given a digest and a read-only view of the nodes, each strategy decides
//! where the next item goes. Resolution never mutates anything; the registry
//! applies the decision afterwards.

use super::hasher::{self, Digest};
use crate::storage::error::StoreError;
use crate::storage::types::{Slot, StorageNode};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CHAINING: &str = "chaining";
pub const LINEAR_PROBING: &str = "linear-probing";
pub const DOUBLE_HASHING: &str = "double-hashing";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionStrategy {
    /// Every item stays in its first-choice bucket; extra items join the chain.
    Chaining,
    /// Probe `original + i` until a node with free capacity is found.
    LinearProbing,
    /// Probe `original + i * step` with a per-content step.
    DoubleHashing,
}

impl CollisionStrategy {
    pub const ALL: [CollisionStrategy; 3] = [
        CollisionStrategy::Chaining,
        CollisionStrategy::LinearProbing,
        CollisionStrategy::DoubleHashing,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CollisionStrategy::Chaining => CHAINING,
            CollisionStrategy::LinearProbing => LINEAR_PROBING,
            CollisionStrategy::DoubleHashing => DOUBLE_HASHING,
        }
    }

    /// Decides the target node for `content` without touching the nodes.
    pub fn resolve(
        &self,
        digest: &Digest,
        content: &str,
        nodes: &[StorageNode],
    ) -> Result<PlacementDecision, StoreError> {
        let node_count = nodes.len();
        let original_index = digest.bucket(node_count);

        match self {
            CollisionStrategy::Chaining => {
                let is_collision = nodes[original_index].item_count() > 0;
                Ok(PlacementDecision {
                    target_index: original_index,
                    original_index,
                    is_collision,
                    slot: if is_collision { Slot::Chain } else { Slot::Primary },
                    probe: Probe::None,
                })
            }
            CollisionStrategy::LinearProbing => {
                let (target_index, sequence) =
                    probe_open_slot(nodes, original_index, 1, *self)?;
                Ok(PlacementDecision {
                    target_index,
                    original_index,
                    is_collision: target_index != original_index,
                    slot: Slot::Primary,
                    probe: Probe::Linear { sequence },
                })
            }
            CollisionStrategy::DoubleHashing => {
                let step_size = hasher::step_size(content, node_count);
                let (target_index, sequence) =
                    probe_open_slot(nodes, original_index, step_size, *self)?;
                Ok(PlacementDecision {
                    target_index,
                    original_index,
                    is_collision: target_index != original_index,
                    slot: Slot::Primary,
                    probe: Probe::Double {
                        step_size,
                        sequence,
                    },
                })
            }
        }
    }
}

/// Walks at most one full cycle of `nodes`, returning the first index with
/// free capacity together with every index visited (target included).
fn probe_open_slot(
    nodes: &[StorageNode],
    original_index: usize,
    step: usize,
    strategy: CollisionStrategy,
) -> Result<(usize, Vec<usize>), StoreError> {
    let node_count = nodes.len();
    let mut sequence = Vec::with_capacity(node_count);

    for i in 0..node_count {
        let index = (original_index + i * step) % node_count;
        sequence.push(index);
        if nodes[index].has_free_capacity() {
            return Ok((index, sequence));
        }
    }

    Err(StoreError::StorageFull {
        strategy: strategy.name().to_string(),
        probed: sequence.len(),
    })
}

impl fmt::Display for CollisionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CollisionStrategy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CHAINING => Ok(CollisionStrategy::Chaining),
            LINEAR_PROBING => Ok(CollisionStrategy::LinearProbing),
            DOUBLE_HASHING => Ok(CollisionStrategy::DoubleHashing),
            other => Err(StoreError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Probe bookkeeping, one case per strategy family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    None,
    Linear { sequence: Vec<usize> },
    Double { step_size: usize, sequence: Vec<usize> },
}

impl Probe {
    pub fn step_size(&self) -> Option<usize> {
        match self {
            Probe::Double { step_size, .. } => Some(*step_size),
            _ => None,
        }
    }

    pub fn sequence(&self) -> Option<&[usize]> {
        match self {
            Probe::None => None,
            Probe::Linear { sequence } | Probe::Double { sequence, .. } => {
                Some(sequence.as_slice())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementDecision {
    pub target_index: usize,
    /// `digest mod node_count`, whatever the strategy.
    pub original_index: usize,
    pub is_collision: bool,
    pub slot: Slot,
    pub probe: Probe,
}
