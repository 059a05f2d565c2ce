use serde::{Deserialize, Serialize};

/// One inserted piece of content.
///
/// Items are immutable once committed and only disappear on reset. `id` is
/// the content hash and is therefore shared by identical contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub content: String,
    /// Creation time (ms since the UNIX epoch).
    pub timestamp: u64,
    /// The bucket the digest mapped to before collision handling.
    pub original_location_index: usize,
    pub step_size: Option<usize>,
    pub probe_sequence: Option<Vec<usize>>,
}

/// Which list of a node an item lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primary,
    Chain,
}

/// One fixed bucket of the registry.
#[derive(Debug, Clone)]
pub struct StorageNode {
    pub id: usize,
    pub name: String,
    pub capacity: usize,
    pub used_capacity: usize,
    pub primary_items: Vec<Item>,
    /// Only populated under chaining.
    pub chain: Vec<Item>,
    /// Items placed here whose first choice was elsewhere, or which chained
    /// onto an occupied node.
    pub collision_count: usize,
}

impl StorageNode {
    pub fn new(id: usize, name: impl Into<String>, capacity: usize) -> Self {
        Self {
            id,
            name: name.into(),
            capacity,
            used_capacity: 0,
            primary_items: Vec::new(),
            chain: Vec::new(),
            collision_count: 0,
        }
    }

    pub fn item_count(&self) -> usize {
        self.primary_items.len() + self.chain.len()
    }

    pub fn has_free_capacity(&self) -> bool {
        self.used_capacity < self.capacity
    }

    pub fn clear(&mut self) {
        self.primary_items.clear();
        self.chain.clear();
        self.used_capacity = 0;
        self.collision_count = 0;
    }

    pub fn summary(&self) -> StorageNodeSummary {
        StorageNodeSummary {
            id: self.id,
            name: self.name.clone(),
            capacity: self.capacity,
            used_capacity: self.used_capacity,
            collision_count: self.collision_count,
        }
    }

    /// Full view of the node. `nodes` resolves original location indices to
    /// node names.
    pub fn detail(&self, nodes: &[StorageNode]) -> StorageNodeDetail {
        let view = |item: &Item| ItemView {
            id: item.id.clone(),
            content: item.content.clone(),
            timestamp: item.timestamp,
            original_location: nodes
                .get(item.original_location_index)
                .map(|node| node.name.clone())
                .unwrap_or_default(),
            step_size: item.step_size,
        };

        let primary_items: Vec<ItemView> = self.primary_items.iter().map(view).collect();
        let chain: Vec<ItemView> = self.chain.iter().map(view).collect();
        let stored_items = primary_items.iter().chain(chain.iter()).cloned().collect();

        StorageNodeDetail {
            id: self.id,
            name: self.name.clone(),
            capacity: self.capacity,
            used_capacity: self.used_capacity,
            collision_count: self.collision_count,
            primary_items,
            chain,
            stored_items,
        }
    }
}

/// List view of a node, without item contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageNodeSummary {
    pub id: usize,
    pub name: String,
    pub capacity: usize,
    pub used_capacity: usize,
    pub collision_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemView {
    pub id: String,
    pub content: String,
    pub timestamp: u64,
    pub original_location: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub step_size: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageNodeDetail {
    pub id: usize,
    pub name: String,
    pub capacity: usize,
    pub used_capacity: usize,
    pub collision_count: usize,
    pub primary_items: Vec<ItemView>,
    pub chain: Vec<ItemView>,
    /// Primary items followed by the chain, as the dashboard lists them.
    pub stored_items: Vec<ItemView>,
}

/// Outcome of a single insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashResult {
    pub hash: String,
    /// Name of the node the item was committed to.
    pub location: String,
    pub details: CollisionDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollisionDetails {
    pub is_collision: bool,
    pub original_location: String,
    pub collision_method: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub step_size: Option<usize>,
    /// Node names in the order they were probed.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub probe_sequence: Option<Vec<String>>,
}

/// Aggregate counters across all nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStats {
    pub node_count: usize,
    pub total_capacity: usize,
    pub total_used: usize,
    pub total_collisions: usize,
    pub total_chained: usize,
}

/// Helper to get the current system time in milliseconds.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
