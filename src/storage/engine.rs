use super::config::StoreConfig;
use super::error::{StoreError, StoreResult};
use super::registry::NodeRegistry;
use super::types::*;
use crate::hashing::hasher;
use crate::hashing::placement::CollisionStrategy;

use parking_lot::RwLock;
use std::sync::Arc;

/// Front door of the store: hashes content, resolves a node and commits.
///
/// All state lives in one `NodeRegistry` behind one lock. Inserts and resets
/// hold the write lock for the whole resolve + commit; reads share the read
/// lock. Nothing inside the lock blocks on I/O.
pub struct StorageEngine {
    registry: RwLock<NodeRegistry>,
}

impl StorageEngine {
    pub fn new(config: &StoreConfig) -> StoreResult<Arc<Self>> {
        let registry = NodeRegistry::new(config)?;

        tracing::info!(
            "Storage engine ready: {} node(s), capacity {} each",
            registry.len(),
            config.capacity
        );

        Ok(Arc::new(Self {
            registry: RwLock::new(registry),
        }))
    }

    /// Inserts `content` using the strategy named `strategy_name`.
    ///
    /// # Returns
    /// * `Ok(HashResult)` describing where the item landed.
    /// * `Err(Validation)` for blank content, `Err(UnknownStrategy)` for an
    ///   unrecognised name, `Err(StorageFull)` when open addressing finds no
    ///   free node.
    pub fn insert(&self, content: &str, strategy_name: &str) -> StoreResult<HashResult> {
        validate_content(content)?;
        let strategy: CollisionStrategy = strategy_name.parse()?;
        self.place(content, strategy)
    }

    pub fn insert_with(
        &self,
        content: &str,
        strategy: CollisionStrategy,
    ) -> StoreResult<HashResult> {
        validate_content(content)?;
        self.place(content, strategy)
    }

    fn place(&self, content: &str, strategy: CollisionStrategy) -> StoreResult<HashResult> {
        let digest = hasher::hash(content);

        let mut registry = self.registry.write();

        let decision = match strategy.resolve(&digest, content, registry.snapshot()) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!("Insert of {} rejected: {}", digest.hex, e);
                return Err(e);
            }
        };

        let step_size = decision.probe.step_size();
        let probe_sequence = decision.probe.sequence().map(<[usize]>::to_vec);

        let details = CollisionDetails {
            is_collision: decision.is_collision,
            original_location: registry.name_of(decision.original_index).to_string(),
            collision_method: strategy.name().to_string(),
            step_size,
            probe_sequence: probe_sequence.as_ref().map(|sequence| {
                sequence
                    .iter()
                    .map(|&index| registry.name_of(index).to_string())
                    .collect()
            }),
        };

        let item = Item {
            id: digest.hex.clone(),
            content: content.to_string(),
            timestamp: now_ms(),
            original_location_index: decision.original_index,
            step_size,
            probe_sequence,
        };

        registry.commit(
            decision.target_index,
            item,
            decision.slot,
            decision.is_collision,
        )?;

        let location = registry.name_of(decision.target_index).to_string();

        if decision.is_collision {
            tracing::debug!(
                "Collision for {}: {} -> {} via {} ({:?})",
                digest.hex,
                details.original_location,
                location,
                strategy,
                decision.probe
            );
        }
        tracing::info!("Stored {} on {} using {}", digest.hex, location, strategy);

        Ok(HashResult {
            hash: digest.hex,
            location,
            details,
        })
    }

    pub fn list_nodes(&self) -> Vec<StorageNodeSummary> {
        self.registry.read().summaries()
    }

    pub fn get_node(&self, id: usize) -> StoreResult<StorageNodeDetail> {
        let registry = self.registry.read();
        registry
            .get_node(id)
            .map(|node| node.detail(registry.snapshot()))
    }

    /// Looks a node up by its textual id, as it arrives in a request path.
    /// Anything that is not an index in range is `NotFound`.
    pub fn get_node_by_key(&self, raw_id: &str) -> StoreResult<StorageNodeDetail> {
        match raw_id.trim().parse::<usize>() {
            Ok(id) => self.get_node(id),
            Err(_) => Err(StoreError::NotFound {
                id: raw_id.to_string(),
                node_count: self.registry.read().len(),
            }),
        }
    }

    pub fn stats(&self) -> EngineStats {
        self.registry.read().stats()
    }

    pub fn reset(&self) {
        self.registry.write().reset();
        tracing::info!("All storage nodes have been reset");
    }
}

fn validate_content(content: &str) -> StoreResult<()> {
    if content.trim().is_empty() {
        return Err(StoreError::Validation);
    }
    Ok(())
}
