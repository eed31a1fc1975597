//! Snakes-and-ladders walks over a fixed board chain.
//!
//! Builds a 100-cell linear board with the classic shortcut table,
//! wires die-roll transitions into a [`MarkovChain`], and renders
//! random play-throughs. Cell 100 is the sole terminal.

use std::error::Error;
use std::io::Write;

use log::debug;
use rand::Rng;
use rs_walk_core::{Domain, MarkovChain};

/// Number of cells on the board.
pub const BOARD_SIZE: u32 = 100;

/// The final cell; reaching it ends a walk.
pub const LAST_CELL: u32 = 100;

/// Highest die roll: cells without a shortcut fan out to the next
/// `DICE_MAX` cells.
pub const DICE_MAX: u32 = 6;

/// Maximum number of steps emitted per walk.
pub const MAX_WALK_LEN: usize = 60;

/// Shortcut pairs (from, to): a ladder when from < to, a snake when
/// from > to. A cell carries at most one shortcut.
const TRANSITIONS: [(u32, u32); 20] = [
	(13, 4), (85, 17), (95, 67), (97, 58), (66, 89),
	(87, 31), (57, 83), (91, 25), (28, 50), (35, 11),
	(8, 30), (41, 62), (81, 43), (69, 32), (20, 39),
	(33, 70), (79, 99), (23, 76), (15, 47), (61, 14),
];

/// One board cell. Equality is by `number` alone; the shortcut fields
/// only drive board wiring and rendering.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cell {
	pub number: u32,
	pub ladder_to: Option<u32>,
	pub snake_to: Option<u32>,
}

impl Cell {
	/// A plain cell with no shortcut, handy for lookups.
	pub fn plain(number: u32) -> Self {
		Self { number, ladder_to: None, snake_to: None }
	}
}

/// The 100 cells in board order, shortcuts applied.
fn build_board() -> Vec<Cell> {
	let mut cells: Vec<Cell> = (1..=BOARD_SIZE).map(Cell::plain).collect();

	for (from, to) in TRANSITIONS {
		let cell = &mut cells[(from - 1) as usize];
		if from < to {
			cell.ladder_to = Some(to);
		} else {
			cell.snake_to = Some(to);
		}
	}

	cells
}

/// Board domain: cells compare by number, cell 100 is terminal, and
/// the sink renders each step the way the game narrates it.
pub struct CellDomain<W: Write> {
	out: W,
}

impl<W: Write> CellDomain<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	/// Consumes the domain and hands back its writer.
	pub fn into_writer(self) -> W {
		self.out
	}
}

impl<W: Write> Domain for CellDomain<W> {
	type Item = Cell;

	fn items_equal(&self, a: &Cell, b: &Cell) -> bool {
		a.number == b.number
	}

	fn copy_item(&self, item: &Cell) -> Option<Cell> {
		Some(*item)
	}

	fn is_terminal(&self, item: &Cell) -> bool {
		item.number == LAST_CELL
	}

	fn emit(&mut self, item: &Cell) {
		// The sink has no error channel; a failed write drops the step.
		let _ = if let Some(to) = item.ladder_to {
			write!(self.out, "[{}]-ladder to {} -> ", item.number, to)
		} else if let Some(to) = item.snake_to {
			write!(self.out, "[{}]-snake to {} -> ", item.number, to)
		} else if item.number == LAST_CELL {
			write!(self.out, "[{}]", item.number)
		} else {
			write!(self.out, "[{}] -> ", item.number)
		};
	}
}

/// Builds the board and fills the chain with its topology.
///
/// Cells 1..=100 are inserted in board order, then each cell is
/// resolved back through `lookup` and wired: a cell with a shortcut
/// gets exactly one edge to its destination (a ladder takes precedence
/// over a snake), every other cell gets one edge per die roll, stopping
/// at the board edge. Cell 100 ends up with no outgoing edges.
///
/// # Errors
/// Copy or allocation failure from the chain; fatal to the fill.
pub fn fill_board<W: Write>(chain: &mut MarkovChain<CellDomain<W>>) -> Result<(), Box<dyn Error>> {
	let cells = build_board();

	for cell in &cells {
		chain.get_or_create(cell)?;
	}

	for cell in &cells {
		let from = chain.lookup(cell).ok_or("cell missing from the chain")?;

		if let Some(to_number) = cell.ladder_to.or(cell.snake_to) {
			let to = chain
				.lookup(&cells[(to_number - 1) as usize])
				.ok_or("shortcut destination missing from the chain")?;
			chain.record_transition(from, to)?;
		} else {
			for roll in 1..=DICE_MAX {
				let target = cell.number + roll;
				if target > BOARD_SIZE {
					break;
				}
				let to = chain
					.lookup(&cells[(target - 1) as usize])
					.ok_or("roll destination missing from the chain")?;
				chain.record_transition(from, to)?;
			}
		}
	}

	debug!("board filled: {} cells", chain.size());
	Ok(())
}

/// Writes `count` play-throughs to the domain's sink.
///
/// Every walk starts at cell 1 (the chain's first node) and emits at
/// most [`MAX_WALK_LEN`] steps, ending early on cell 100.
pub fn write_walks<W, R>(
	chain: &mut MarkovChain<CellDomain<W>>,
	count: usize,
	rng: &mut R,
) -> Result<(), Box<dyn Error>>
where
	W: Write,
	R: Rng,
{
	for i in 0..count {
		write!(chain.domain_mut().out, "Random Walk {}: ", i + 1)?;
		let start = chain.first_id().ok_or("the board chain is empty")?;
		chain.generate(Some(start), MAX_WALK_LEN, rng);
		writeln!(chain.domain_mut().out)?;
	}
	Ok(())
}
