//! Hash Placement Store Library
//!
//! A fixed set of named storage nodes filled by hashing incoming content.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`hashing`**: The digest function and the three collision-resolution
//!   strategies (chaining, linear probing, double hashing).
//! - **`storage`**: The node registry, the engine that applies placements under a
//!   single lock, its configuration, and the HTTP handlers that expose it.

pub mod hashing;
pub mod storage;
