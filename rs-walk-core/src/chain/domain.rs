/// Caller-supplied strategies generalizing the engine across item
/// domains.
///
/// A domain is instantiated once, handed to the chain at construction,
/// and never replaced. It bundles the four strategies the engine needs:
/// equality, deep copy, the terminal predicate, and the emission sink.
/// Item release needs no strategy: nodes own their copies and drop them
/// when the chain is torn down.
///
/// # Notes
/// - Equality is a plain yes/no signal. The engine never infers any
///   ordering from it.
/// - `copy_item` may fail; `None` is fatal to an in-progress fill.
pub trait Domain {
	/// The item type this domain works with. Opaque to the engine.
	type Item;

	/// Equality strategy. Must be reflexive and symmetric.
	fn items_equal(&self, a: &Self::Item, b: &Self::Item) -> bool;

	/// Deep-copy strategy: an owned duplicate of `item`, or `None` if
	/// the copy cannot be made.
	fn copy_item(&self, item: &Self::Item) -> Option<Self::Item>;

	/// Terminal predicate: `true` for items after which a walk stops.
	fn is_terminal(&self, item: &Self::Item) -> bool;

	/// Emission sink, invoked once per item during generation.
	fn emit(&mut self, item: &Self::Item);
}
