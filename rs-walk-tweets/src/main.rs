use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_walk_core::MarkovChain;
use rs_walk_tweets::{WordDomain, fill_from_reader, write_tweets};

/// Generate pseudo-random tweets from a text corpus.
#[derive(Parser)]
struct Args {
    /// Seed for the random generator
    seed: u64,

    /// Number of tweets to generate
    tweet_count: usize,

    /// Path to the corpus file
    corpus: PathBuf,

    /// Read at most this many words from the corpus (default: all)
    #[arg(long)]
    max_words: Option<usize>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let corpus = BufReader::new(File::open(&args.corpus)?);

    let mut chain = MarkovChain::new(WordDomain::new(io::stdout().lock()));
    if let Err(e) = fill_from_reader(&mut chain, corpus, args.max_words) {
        // A failed fill leaves a partial graph; release it and stop.
        chain.teardown();
        return Err(e);
    }

    write_tweets(&mut chain, args.tweet_count, &mut rng)?;
    chain.teardown();

    Ok(())
}
