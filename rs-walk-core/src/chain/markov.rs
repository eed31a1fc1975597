use super::domain::Domain;
use super::node::{ChainNode, NextCounter};
use super::store::{NodeId, NodeStore};

/// A Markov chain over opaque items.
///
/// The chain owns an insertion-ordered [`NodeStore`] and one domain
/// instance supplying the caller strategies. Nodes are created only
/// through [`MarkovChain::get_or_create`] during the fill phase and
/// live until the whole chain is dropped.
///
/// # Responsibilities
/// - Deduplicate inserted items under the domain's equality strategy
/// - Account transition frequencies between nodes
/// - Resolve items back to their nodes
///
/// # Invariants
/// - No two stored nodes compare equal under the equality strategy
/// - Within one node, adjacency targets are pairwise distinct
/// - A node's `appearances` equals the sum of its adjacency frequencies
///
/// Dedup is a linear scan and the first-inserted match always wins.
/// This is part of the observable contract: with a fixed seed and a
/// stable fill order, construction and generation are reproducible.
pub struct MarkovChain<D: Domain> {
	pub(crate) store: NodeStore<D::Item>,
	pub(crate) domain: D,
}

impl<D: Domain> MarkovChain<D> {
	/// Creates an empty chain over the given domain.
	pub fn new(domain: D) -> Self {
		Self { store: NodeStore::new(), domain }
	}

	/// Number of distinct items inserted so far.
	pub fn size(&self) -> usize {
		self.store.len()
	}

	/// Returns `true` if nothing was inserted yet.
	pub fn is_empty(&self) -> bool {
		self.store.is_empty()
	}

	/// Id of the first-inserted node, `None` on an empty chain.
	pub fn first_id(&self) -> Option<NodeId> {
		self.store.first_id()
	}

	/// The item stored in the node behind `id`.
	pub fn item(&self, id: NodeId) -> &D::Item {
		self.store.get(id).item()
	}

	/// The adjacency list of the node behind `id`, in recording order.
	pub fn counters(&self, id: NodeId) -> &[NextCounter] {
		self.store.get(id).counters()
	}

	/// Total outgoing transitions recorded from the node behind `id`.
	pub fn appearances(&self, id: NodeId) -> u32 {
		self.store.get(id).appearances()
	}

	/// Applies the domain's terminal predicate to the node behind `id`.
	pub fn is_terminal(&self, id: NodeId) -> bool {
		self.domain.is_terminal(self.store.get(id).item())
	}

	/// Shared access to the domain.
	pub fn domain(&self) -> &D {
		&self.domain
	}

	/// Exclusive access to the domain (e.g. to reach its sink between
	/// generations).
	pub fn domain_mut(&mut self) -> &mut D {
		&mut self.domain
	}

	/// Returns the node holding an item equal to `item`, creating it
	/// if necessary.
	///
	/// Existing nodes are scanned linearly with the equality strategy;
	/// the first-inserted match wins. On a miss, the item is
	/// deep-copied through the domain and a new node with an empty
	/// adjacency list is appended.
	///
	/// # Errors
	/// Copy or allocation failure. Either is fatal to the fill phase:
	/// the caller must abort the fill and drop the chain rather than
	/// keep building on a partial graph.
	pub fn get_or_create(&mut self, item: &D::Item) -> Result<NodeId, String> {
		if let Some(id) = self.lookup(item) {
			return Ok(id);
		}

		let copy = self
			.domain
			.copy_item(item)
			.ok_or_else(|| "item copy failed".to_owned())?;
		self.store.append(ChainNode::new(copy))
	}

	/// Resolves a previously inserted item back to its node.
	///
	/// Same linear scan as [`MarkovChain::get_or_create`], but `None`
	/// is a normal "not found" outcome and nothing is created.
	pub fn lookup(&self, item: &D::Item) -> Option<NodeId> {
		self.store
			.iter()
			.find(|(_, node)| self.domain.items_equal(node.item(), item))
			.map(|(id, _)| id)
	}

	/// Records one observed transition from `from` to `to`.
	///
	/// A first transition out of `from` allocates a one-entry adjacency
	/// list; a repeat of a known successor increments its frequency;
	/// a new successor grows the list by exactly one slot. In every
	/// case the node's `appearances` counter is incremented.
	///
	/// Adjacency targets are node identities: since the chain holds at
	/// most one node per item, comparing ids is equivalent to running
	/// the equality strategy on the targets' items.
	///
	/// # Errors
	/// Allocation failure, fatal to the fill phase (same abort contract
	/// as [`MarkovChain::get_or_create`]).
	pub fn record_transition(&mut self, from: NodeId, to: NodeId) -> Result<(), String> {
		self.store.get_mut(from).record(to)
	}

	/// Consumes the chain, releasing the store, every node, every
	/// adjacency list and every item copy.
	///
	/// Dropping the chain is equivalent; this method only makes the
	/// end of its lifecycle explicit at call sites. Move semantics
	/// guarantee teardown happens exactly once and that no operation
	/// can reach a torn-down chain.
	pub fn teardown(self) {}

	/// Consumes the chain and hands back the domain, releasing
	/// everything else. Useful to recover a sink after generation.
	pub fn into_domain(self) -> D {
		self.domain
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Word items, '.'-terminated words are terminal, emissions are
	/// collected for inspection.
	struct TestDomain {
		emitted: Vec<String>,
	}

	impl TestDomain {
		fn new() -> Self {
			Self { emitted: Vec::new() }
		}
	}

	impl Domain for TestDomain {
		type Item = String;

		fn items_equal(&self, a: &String, b: &String) -> bool {
			a == b
		}

		fn copy_item(&self, item: &String) -> Option<String> {
			Some(item.clone())
		}

		fn is_terminal(&self, item: &String) -> bool {
			item.ends_with('.')
		}

		fn emit(&mut self, item: &String) {
			self.emitted.push(item.clone());
		}
	}

	fn chain() -> MarkovChain<TestDomain> {
		MarkovChain::new(TestDomain::new())
	}

	#[test]
	fn get_or_create_deduplicates() {
		let mut chain = chain();
		let a1 = chain.get_or_create(&"a".to_owned()).unwrap();
		let b = chain.get_or_create(&"b".to_owned()).unwrap();
		let a2 = chain.get_or_create(&"a".to_owned()).unwrap();

		assert_eq!(a1, a2);
		assert_ne!(a1, b);
		assert_eq!(chain.size(), 2);
	}

	#[test]
	fn first_inserted_match_wins() {
		let mut chain = chain();
		let first = chain.get_or_create(&"x".to_owned()).unwrap();
		for _ in 0..5 {
			assert_eq!(chain.get_or_create(&"x".to_owned()).unwrap(), first);
		}
		assert_eq!(chain.first_id(), Some(first));
	}

	#[test]
	fn lookup_does_not_create() {
		let mut chain = chain();
		assert_eq!(chain.lookup(&"a".to_owned()), None);
		let a = chain.get_or_create(&"a".to_owned()).unwrap();
		assert_eq!(chain.lookup(&"a".to_owned()), Some(a));
		assert_eq!(chain.lookup(&"b".to_owned()), None);
		assert_eq!(chain.size(), 1);
	}

	#[test]
	fn record_transition_counts_frequencies() {
		let mut chain = chain();
		let a = chain.get_or_create(&"a".to_owned()).unwrap();
		let b = chain.get_or_create(&"b".to_owned()).unwrap();
		let c = chain.get_or_create(&"c.".to_owned()).unwrap();

		chain.record_transition(a, b).unwrap();
		chain.record_transition(a, b).unwrap();
		chain.record_transition(a, c).unwrap();

		let counters = chain.counters(a);
		assert_eq!(counters.len(), 2);
		assert_eq!(counters[0].target, b);
		assert_eq!(counters[0].frequency, 2);
		assert_eq!(counters[1].target, c);
		assert_eq!(counters[1].frequency, 1);
		assert_eq!(chain.appearances(a), 3);
	}

	#[test]
	fn appearances_matches_frequency_sum() {
		let mut chain = chain();
		let ids: Vec<_> = ["a", "b", "c", "d"]
			.iter()
			.map(|w| chain.get_or_create(&(*w).to_owned()).unwrap())
			.collect();

		let pairs = [(0, 1), (0, 1), (0, 2), (1, 3), (1, 0), (1, 0), (2, 2)];
		for (from, to) in pairs {
			chain.record_transition(ids[from], ids[to]).unwrap();
		}

		for &id in &ids {
			let sum: u32 = chain.counters(id).iter().map(|c| c.frequency).sum();
			assert_eq!(chain.appearances(id), sum);

			let targets: Vec<_> = chain.counters(id).iter().map(|c| c.target).collect();
			for i in 0..targets.len() {
				for j in i + 1..targets.len() {
					assert_ne!(targets[i], targets[j], "duplicate adjacency target");
				}
			}
		}
	}

	#[test]
	fn terminal_predicate_is_applied_per_node() {
		let mut chain = chain();
		let a = chain.get_or_create(&"a".to_owned()).unwrap();
		let end = chain.get_or_create(&"end.".to_owned()).unwrap();
		assert!(!chain.is_terminal(a));
		assert!(chain.is_terminal(end));
	}
}
