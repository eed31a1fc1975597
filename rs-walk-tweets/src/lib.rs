//! Tweet generation over a word chain.
//!
//! Feeds whitespace-separated tokens from a text corpus into a
//! [`MarkovChain`], treating any token ending in `'.'` as terminal,
//! then renders bounded random walks as tweets.

use std::error::Error;
use std::io::{self, BufRead, Write};

use log::debug;
use rand::Rng;
use rs_walk_core::{Domain, MarkovChain, NodeId};

/// Maximum number of words emitted per tweet.
pub const MAX_TWEET_LEN: usize = 20;

/// Word domain: items are owned tokens, a trailing `'.'` marks the end
/// of a sentence, and the sink writes each word with a leading space.
///
/// Generic over the output writer so tests can capture emissions.
pub struct WordDomain<W: Write> {
	out: W,
}

impl<W: Write> WordDomain<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}

	/// Consumes the domain and hands back its writer.
	pub fn into_writer(self) -> W {
		self.out
	}
}

impl<W: Write> Domain for WordDomain<W> {
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
		// The sink has no error channel; a failed write drops the word.
		let _ = write!(self.out, " {item}");
	}
}

/// Fills the chain from a line-oriented text source.
///
/// Tokens are taken in stream order, split on whitespace. Each token is
/// inserted through `get_or_create`; a transition is recorded from the
/// previous token whenever one exists and is not terminal. The previous
/// token persists across line boundaries.
///
/// `max_words` bounds how many tokens are read; `None` reads the whole
/// source.
///
/// # Errors
/// I/O failure on the source, or a copy/allocation failure from the
/// chain. Either aborts the fill; the caller should drop the chain
/// rather than generate from a partially built graph.
pub fn fill_from_reader<R, W>(
	chain: &mut MarkovChain<WordDomain<W>>,
	reader: R,
	max_words: Option<usize>,
) -> Result<(), Box<dyn Error>>
where
	R: BufRead,
	W: Write,
{
	let mut words_read: usize = 0;
	let mut prev: Option<NodeId> = None;

	for line in reader.lines() {
		let line = line?;
		for token in line.split_whitespace() {
			if max_words.is_some_and(|limit| words_read >= limit) {
				debug!("word cap of {words_read} reached, stopping the fill");
				return Ok(());
			}

			let word = token.to_owned();
			let curr = chain.get_or_create(&word)?;
			if let Some(prev_id) = prev {
				if !chain.is_terminal(prev_id) {
					chain.record_transition(prev_id, curr)?;
				}
			}

			prev = Some(curr);
			words_read += 1;
		}
	}

	debug!("corpus fill complete: {} words read, {} distinct", words_read, chain.size());
	Ok(())
}

/// Writes `count` tweets to the domain's sink.
///
/// Each tweet gets a `Tweet {n}:` header, a start word picked by
/// rejection sampling, and a walk of at most [`MAX_TWEET_LEN`] words.
///
/// The chain must hold at least one non-terminal word.
pub fn write_tweets<W, R>(
	chain: &mut MarkovChain<WordDomain<W>>,
	count: usize,
	rng: &mut R,
) -> io::Result<()>
where
	W: Write,
	R: Rng,
{
	for i in 0..count {
		write!(chain.domain_mut().out, "Tweet {}:", i + 1)?;
		let start = chain.first_random_node(rng);
		chain.generate(Some(start), MAX_TWEET_LEN, rng);
		writeln!(chain.domain_mut().out)?;
	}
	Ok(())
}
