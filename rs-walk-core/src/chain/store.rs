use super::node::ChainNode;

/// Handle to a node held by a chain's store.
///
/// Ids are minted only by the chain that owns the node and are
/// positional: the first appended node gets index 0, and so on.
/// Using an id with a chain other than the one that minted it is a
/// caller bug and may panic or address the wrong node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NodeId(pub(crate) usize);

/// Append-only, insertion-ordered collection of chain nodes.
///
/// # Responsibilities
/// - Keep nodes in insertion order, tail-append only
/// - Hand out positional `NodeId` handles
/// - Surface allocation failure on append as a distinct error
///
/// # Invariants
/// - No node is ever removed or reordered
/// - A `NodeId` stays valid for the lifetime of the store
///
/// The store performs no deduplication; that is the chain's job.
#[derive(Debug)]
pub struct NodeStore<T> {
	nodes: Vec<ChainNode<T>>,
}

impl<T> NodeStore<T> {
	/// Creates an empty store.
	pub fn new() -> Self {
		Self { nodes: Vec::new() }
	}

	/// Number of nodes currently held.
	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	/// Returns `true` if no node was appended yet.
	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	/// Appends a node at the tail and returns its id.
	///
	/// The only failure mode is allocation failure, reported as `Err`
	/// rather than aborting, so a fill phase can stop cleanly.
	pub fn append(&mut self, node: ChainNode<T>) -> Result<NodeId, String> {
		self.nodes
			.try_reserve(1)
			.map_err(|e| format!("node store allocation failed: {e}"))?;
		self.nodes.push(node);
		Ok(NodeId(self.nodes.len() - 1))
	}

	/// Id of the first-inserted node, `None` on an empty store.
	pub fn first_id(&self) -> Option<NodeId> {
		if self.nodes.is_empty() { None } else { Some(NodeId(0)) }
	}

	/// Id of the last-inserted node, `None` on an empty store.
	pub fn last_id(&self) -> Option<NodeId> {
		self.nodes.len().checked_sub(1).map(NodeId)
	}

	/// Id of the node at `index` in insertion order.
	pub fn id_at(&self, index: usize) -> Option<NodeId> {
		if index < self.nodes.len() { Some(NodeId(index)) } else { None }
	}

	/// The node behind `id`.
	pub fn get(&self, id: NodeId) -> &ChainNode<T> {
		&self.nodes[id.0]
	}

	pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut ChainNode<T> {
		&mut self.nodes[id.0]
	}

	/// Full forward traversal in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (NodeId, &ChainNode<T>)> {
		self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
	}
}

impl<T> Default for NodeStore<T> {
	fn default() -> Self {
		Self::new()
	}
}
