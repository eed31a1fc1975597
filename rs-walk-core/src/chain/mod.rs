//! Top-level module for the walk engine.
//!
//! This module groups the engine's components:
//! - The append-only node store (`NodeStore`)
//! - Per-node adjacency bookkeeping (`ChainNode`)
//! - The domain contract (`Domain`)
//! - The chain itself (`MarkovChain`)
//! - Weighted random walk generation (`walk`)

/// Caller-supplied strategies: equality, deep copy, terminal predicate,
/// emission sink. One implementation per item domain.
pub mod domain;

/// The chain: owns the store and the domain, performs deduplicated
/// insertion and transition-frequency accounting.
pub mod markov;

/// A single chain node: one owned item plus its adjacency list of
/// (successor, frequency) counters.
pub mod node;

/// Append-only, insertion-ordered node storage and the `NodeId` handle.
pub mod store;

/// Weighted random traversal and bounded sequence generation.
///
/// Implemented as additional methods on `MarkovChain`.
pub mod walk;
