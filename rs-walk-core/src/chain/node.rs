use super::store::NodeId;

/// One adjacency entry: an observed successor and how many times the
/// transition to it was recorded.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NextCounter {
	/// The successor node.
	pub target: NodeId,
	/// Observation count, always >= 1.
	pub frequency: u32,
}

/// A node in the chain.
///
/// Holds exactly one owned copy of its item, the adjacency list of
/// `NextCounter` entries, and `appearances`, the total number of
/// recorded outgoing transitions.
///
/// # Invariants
/// - Adjacency targets are pairwise distinct
/// - `appearances` equals the sum of all adjacency frequencies
/// - Every frequency is >= 1
#[derive(Debug)]
pub struct ChainNode<T> {
	item: T,
	counters: Vec<NextCounter>,
	appearances: u32,
}

impl<T> ChainNode<T> {
	/// Creates a node with an empty adjacency list.
	pub(crate) fn new(item: T) -> Self {
		Self { item, counters: Vec::new(), appearances: 0 }
	}

	/// The item owned by this node.
	pub fn item(&self) -> &T {
		&self.item
	}

	/// The adjacency list, in recording order.
	pub fn counters(&self) -> &[NextCounter] {
		&self.counters
	}

	/// Total number of outgoing transitions recorded from this node.
	pub fn appearances(&self) -> u32 {
		self.appearances
	}

	/// Records one transition toward `target`.
	///
	/// - If `target` is already present, its frequency is incremented.
	/// - Otherwise the adjacency list grows by exactly one slot and a
	///   new entry with frequency 1 is appended. Datasets here are
	///   small and bounded, so no amortized over-allocation is used.
	///
	/// # Errors
	/// Allocation failure while growing the adjacency list. The caller
	/// must treat this as fatal to the fill phase.
	pub(crate) fn record(&mut self, target: NodeId) -> Result<(), String> {
		if let Some(counter) = self.counters.iter_mut().find(|c| c.target == target) {
			counter.frequency += 1;
			self.appearances += 1;
			return Ok(());
		}

		self.counters
			.try_reserve_exact(1)
			.map_err(|e| format!("counter list allocation failed: {e}"))?;
		self.counters.push(NextCounter { target, frequency: 1 });
		self.appearances += 1;

		Ok(())
	}
}
