//! Board topology and walk scenarios.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_walk_board::{BOARD_SIZE, Cell, CellDomain, MAX_WALK_LEN, fill_board, write_walks};
use rs_walk_core::{MarkovChain, NodeId};

fn board_chain() -> MarkovChain<CellDomain<Vec<u8>>> {
	let mut chain = MarkovChain::new(CellDomain::new(Vec::new()));
	fill_board(&mut chain).unwrap();
	chain
}

fn cell_id(chain: &MarkovChain<CellDomain<Vec<u8>>>, number: u32) -> NodeId {
	chain.lookup(&Cell::plain(number)).unwrap()
}

#[test]
fn board_has_one_node_per_cell() {
	let chain = board_chain();
	assert_eq!(chain.size(), BOARD_SIZE as usize);
	// Cells were inserted in board order, so cell 1 is the first node
	assert_eq!(chain.first_id(), Some(cell_id(&chain, 1)));
}

#[test]
fn ladder_cell_has_a_single_forced_edge() {
	let chain = board_chain();
	let from = cell_id(&chain, 13);
	let counters = chain.counters(from);

	assert_eq!(counters.len(), 1);
	assert_eq!(counters[0].target, cell_id(&chain, 4));
	assert_eq!(counters[0].frequency, 1);
	assert_eq!(chain.appearances(from), 1);
}

#[test]
fn snake_cell_slides_down() {
	let chain = board_chain();
	let from = cell_id(&chain, 95);
	let counters = chain.counters(from);

	assert_eq!(counters.len(), 1);
	assert_eq!(counters[0].target, cell_id(&chain, 67));
}

#[test]
fn plain_cell_fans_out_over_die_rolls() {
	let chain = board_chain();
	let from = cell_id(&chain, 1);
	let counters = chain.counters(from);

	assert_eq!(counters.len(), 6);
	for (i, counter) in counters.iter().enumerate() {
		assert_eq!(counter.target, cell_id(&chain, 2 + i as u32));
		assert_eq!(counter.frequency, 1);
	}
	assert_eq!(chain.appearances(from), 6);
}

#[test]
fn fan_out_stops_at_the_board_edge() {
	let chain = board_chain();
	let from = cell_id(&chain, 99);
	let counters = chain.counters(from);

	assert_eq!(counters.len(), 1);
	assert_eq!(counters[0].target, cell_id(&chain, 100));
}

#[test]
fn last_cell_is_terminal_with_no_edges() {
	let chain = board_chain();
	let last = cell_id(&chain, 100);
	assert!(chain.is_terminal(last));
	assert!(chain.counters(last).is_empty());
}

#[test]
fn walk_from_the_ladder_cell_always_lands_on_four() {
	let chain = board_chain();
	let from = cell_id(&chain, 13);
	let four = cell_id(&chain, 4);

	let mut rng = StdRng::seed_from_u64(5);
	for _ in 0..100 {
		assert_eq!(chain.next_random_node(from, &mut rng), Some(four));
	}
}

#[test]
fn step_rendering_matches_the_game_narration() {
	use rs_walk_core::Domain;

	let mut domain = CellDomain::new(Vec::new());
	let board_13 = Cell { number: 13, ladder_to: Some(4), snake_to: None };
	let board_97 = Cell { number: 97, ladder_to: None, snake_to: Some(58) };
	domain.emit(&board_13);
	domain.emit(&board_97);
	domain.emit(&Cell::plain(5));
	domain.emit(&Cell::plain(100));

	let out = String::from_utf8(domain.into_writer()).unwrap();
	assert_eq!(out, "[13]-ladder to 4 -> [97]-snake to 58 -> [5] -> [100]");
}

#[test]
fn walks_are_bounded_and_stop_on_the_last_cell() {
	let mut chain = board_chain();
	let mut rng = StdRng::seed_from_u64(21);
	write_walks(&mut chain, 5, &mut rng).unwrap();

	let out = String::from_utf8(chain.into_domain().into_writer()).unwrap();
	let lines: Vec<&str> = out.lines().collect();
	assert_eq!(lines.len(), 5);
	for (i, line) in lines.iter().enumerate() {
		assert!(line.starts_with(&format!("Random Walk {}: [1]", i + 1)), "walk must start at cell 1");

		let steps = line.matches('[').count();
		assert!(steps <= MAX_WALK_LEN);
		if steps < MAX_WALK_LEN {
			// Anything shorter than the cap must have won the game
			assert!(line.ends_with("[100]"), "short walk did not end on 100: {line:?}");
		}
	}
}
