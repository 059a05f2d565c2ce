//! Hashing and Placement Module
//!
//! Turns raw content into a bucket decision.
//!
//! ## Core Concepts
//! - **Digest**: A deterministic 64-bit hash of the content plus its hex rendering,
//!   which doubles as the item id.
//! - **First choice**: `digest mod node_count` is the bucket an item belongs to
//!   before any collision handling.
//! - **Strategies**: `CollisionStrategy` resolves collisions by chaining, linear
//!   probing or double hashing. Resolution is read-only; committing is the
//!   registry's job.

pub mod hasher;
pub mod placement;
