//! Storage HTTP Protocol
//!
//! Defines the API endpoints and Data Transfer Objects (DTOs) the transport
//! layer exchanges with clients. Node and result payloads reuse the types in
//! `storage::types`.

use serde::{Deserialize, Serialize};

// --- API Endpoints ---

/// Hash some content and place it on a node.
pub const ENDPOINT_HASH: &str = "/api/hash";
/// List node summaries.
pub const ENDPOINT_STORAGE_NODES: &str = "/api/storage-nodes";
/// Full detail of one node (`/api/storage-nodes/:id`).
pub const ENDPOINT_STORAGE_NODE: &str = "/api/storage-nodes/:id";
/// Clear every node.
pub const ENDPOINT_RESET: &str = "/api/reset";
/// Aggregate counters.
pub const ENDPOINT_STATS: &str = "/api/stats";

// --- Data Transfer Objects ---

/// Client request to store a piece of content.
#[derive(Debug, Serialize, Deserialize)]
pub struct HashRequest {
    /// The raw content to hash.
    pub input: String,
    /// Strategy name: `chaining`, `linear-probing` or `double-hashing`.
    /// Defaults to chaining when omitted.
    #[serde(default = "default_method")]
    pub method: String,
}

fn default_method() -> String {
    crate::hashing::placement::CHAINING.to_string()
}

/// Acknowledgment for reset.
#[derive(Debug, Serialize, Deserialize)]
pub struct ResetResponse {
    pub success: bool,
}

/// Body returned with every non-2xx response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
