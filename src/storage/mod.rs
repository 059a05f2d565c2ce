//! Storage Module
//!
//! Implements the fixed set of storage nodes and the engine that fills them.
//!
//! ## Core Concepts
//! - **Registry**: `NodeRegistry` owns the node array, its capacity accounting and
//!   the stored items. Its size never changes after construction.
//! - **Engine**: `StorageEngine` runs hash -> resolve -> commit for each insert
//!   under a single lock, so two concurrent inserts never claim the same free slot.
//! - **Access**: `handlers` expose the engine over HTTP; `protocol` holds the
//!   request and response shapes.

pub mod config;
pub mod engine;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod registry;
pub mod types;
