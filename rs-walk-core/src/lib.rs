//! Weighted-graph walk engine.
//!
//! This crate provides a generic Markov-chain engine including:
//! - An insertion-ordered, append-only node store
//! - Deduplicated item insertion with transition-frequency accounting
//! - Weighted random traversal with bounded-length sequence emission
//! - A domain trait generalizing the engine across item types
//!
//! Items are opaque to the engine: a domain implementation supplies
//! equality, copying, the terminal predicate and the emission sink.
//! All randomness is drawn from a caller-injected generator, so output
//! is fully determined by the seed and the fill order.

/// Chain construction, bookkeeping and walk generation.
///
/// This module exposes the chain and its domain contract while keeping
/// internal node representations private.
pub mod chain;

pub use chain::domain::Domain;
pub use chain::markov::MarkovChain;
pub use chain::node::NextCounter;
pub use chain::store::NodeId;
