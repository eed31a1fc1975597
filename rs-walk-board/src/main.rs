use std::error::Error;
use std::io;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_walk_board::{CellDomain, fill_board, write_walks};
use rs_walk_core::MarkovChain;

/// Simulate snakes-and-ladders play-throughs as random walks.
#[derive(Parser)]
struct Args {
    /// Seed for the random generator
    seed: u64,

    /// Number of walks to generate
    walk_count: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut chain = MarkovChain::new(CellDomain::new(io::stdout().lock()));
    if let Err(e) = fill_board(&mut chain) {
        // A failed fill leaves a partial graph; release it and stop.
        chain.teardown();
        return Err(e);
    }

    write_walks(&mut chain, args.walk_count, &mut rng)?;
    chain.teardown();

    Ok(())
}
