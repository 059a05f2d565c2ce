use super::config::StoreConfig;
use super::error::{StoreError, StoreResult};
use super::types::{EngineStats, Item, Slot, StorageNode, StorageNodeSummary};

/// Owner of the fixed node array.
///
/// The registry itself is not synchronised; `StorageEngine` wraps it in a
/// single lock so that a resolve and its commit happen as one step.
#[derive(Debug)]
pub struct NodeRegistry {
    nodes: Vec<StorageNode>,
}

impl NodeRegistry {
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        config.validate()?;

        let nodes = config
            .names
            .iter()
            .enumerate()
            .map(|(id, name)| StorageNode::new(id, name.clone(), config.capacity))
            .collect();

        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Read-only view used by the strategies to look for free capacity.
    pub fn snapshot(&self) -> &[StorageNode] {
        &self.nodes
    }

    pub fn get_node(&self, id: usize) -> StoreResult<&StorageNode> {
        self.nodes.get(id).ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
            node_count: self.nodes.len(),
        })
    }

    pub fn name_of(&self, index: usize) -> &str {
        self.nodes
            .get(index)
            .map(|node| node.name.as_str())
            .unwrap_or_default()
    }

    /// Applies an already-resolved placement.
    pub fn commit(
        &mut self,
        index: usize,
        item: Item,
        slot: Slot,
        is_collision: bool,
    ) -> StoreResult<()> {
        let node_count = self.nodes.len();
        let node = self.nodes.get_mut(index).ok_or_else(|| StoreError::NotFound {
            id: index.to_string(),
            node_count,
        })?;

        match slot {
            Slot::Primary => node.primary_items.push(item),
            Slot::Chain => node.chain.push(item),
        }
        node.used_capacity += 1;
        if is_collision {
            node.collision_count += 1;
        }

        Ok(())
    }

    /// Clears contents and counters. Ids, names and capacities survive.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.clear();
        }
    }

    pub fn summaries(&self) -> Vec<StorageNodeSummary> {
        self.nodes.iter().map(StorageNode::summary).collect()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            node_count: self.nodes.len(),
            total_capacity: self.nodes.iter().map(|node| node.capacity).sum(),
            total_used: self.nodes.iter().map(|node| node.used_capacity).sum(),
            total_collisions: self.nodes.iter().map(|node| node.collision_count).sum(),
            total_chained: self.nodes.iter().map(|node| node.chain.len()).sum(),
        }
    }
}
