use rand::Rng;

use super::domain::Domain;
use super::markov::MarkovChain;
use super::node::NextCounter;
use super::store::NodeId;

/// Selects the counter a uniform draw in `[0, appearances)` lands on.
///
/// Walks the entries in stored order, subtracting each frequency from
/// the draw until the remaining value falls inside the current entry.
/// Each successor is thus selected with probability proportional to its
/// observed frequency, in O(out-degree), without a cumulative table.
///
/// Returns `None` on an empty list or a draw past the frequency sum.
pub(crate) fn pick_counter(counters: &[NextCounter], mut draw: u32) -> Option<NodeId> {
	for counter in counters {
		if draw < counter.frequency {
			return Some(counter.target);
		}
		draw -= counter.frequency;
	}
	None
}

impl<D: Domain> MarkovChain<D> {
	/// Picks a uniformly random non-terminal node by rejection
	/// sampling: draw a position in `[0, size)`, retry while the drawn
	/// node is terminal.
	///
	/// Callers must guarantee at least one non-terminal node exists;
	/// otherwise this loops forever. Panics on an empty chain.
	pub fn first_random_node<R: Rng>(&self, rng: &mut R) -> NodeId {
		loop {
			let index = rng.random_range(0..self.store.len());
			// Should not panic, the index was drawn below len
			let id = self.store.id_at(index).expect("index in range");
			if !self.is_terminal(id) {
				return id;
			}
		}
	}

	/// Advances one step from `current` by weighted random selection
	/// over its adjacency list.
	///
	/// Returns `None` when `current` has no recorded successors; a walk
	/// reaching such a node simply ends there.
	pub fn next_random_node<R: Rng>(&self, current: NodeId, rng: &mut R) -> Option<NodeId> {
		let node = self.store.get(current);
		if node.appearances() == 0 {
			return None;
		}

		let draw = rng.random_range(0..node.appearances());
		pick_counter(node.counters(), draw)
	}

	/// Produces one random walk, emitting every visited item through
	/// the domain sink.
	///
	/// # Parameters
	/// - `start`: the first node, or `None` to pick one by rejection
	///   sampling (the non-terminal-node caller contract of
	///   [`MarkovChain::first_random_node`] then applies).
	/// - `max_length`: upper bound on emitted items. Zero emits
	///   nothing.
	///
	/// # Behavior
	/// Emits the start item, then, while the current node is not
	/// terminal and fewer than `max_length` items were emitted,
	/// advances by weighted selection and emits the new item. The
	/// terminal check gates continuation, not emission: a terminal
	/// node reached exactly at the `max_length`-th step is still
	/// emitted.
	pub fn generate<R: Rng>(&mut self, start: Option<NodeId>, max_length: usize, rng: &mut R) {
		if max_length == 0 {
			return;
		}

		let mut current = match start {
			Some(id) => id,
			None => self.first_random_node(rng),
		};

		let MarkovChain { store, domain } = self;
		domain.emit(store.get(current).item());
		let mut emitted = 1;

		while !domain.is_terminal(store.get(current).item()) && emitted < max_length {
			let node = store.get(current);
			if node.appearances() == 0 {
				break;
			}
			let draw = rng.random_range(0..node.appearances());
			current = match pick_counter(node.counters(), draw) {
				Some(id) => id,
				None => break,
			};
			domain.emit(store.get(current).item());
			emitted += 1;
		}
	}
}
