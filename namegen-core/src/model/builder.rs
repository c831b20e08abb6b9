use std::iter;
use std::sync::mpsc;
use std::thread;

use log::debug;

use super::table::{ConditionalDistributionTable, NGramObservation};
use super::{PADDING, TERMINATOR};
use crate::error::{NameGenError, Result};

/// Builds a [`ConditionalDistributionTable`] from a corpus of names.
///
/// # Responsibilities
/// - Normalize each name (lower-case, left padding, terminator suffix)
/// - Slide a window of `context_size + 1` characters over it
/// - Collect every window as an (context, next) observation, in corpus order
///
/// # Invariants
/// - `context_size >= 1`
/// - Every produced observation has a context of exactly `context_size` chars
///
/// Windows are taken over `char`s (Unicode scalar values), never bytes.
#[derive(Clone, Debug)]
pub struct ModelBuilder {
	context_size: usize,
	parallel_threshold: usize,
}

impl ModelBuilder {
	/// Creates a builder for the given context size.
	///
	/// # Errors
	/// Returns [`NameGenError::InvalidArgument`] if `context_size == 0`.
	pub fn new(context_size: usize) -> Result<Self> {
		if context_size == 0 {
			return Err(NameGenError::InvalidArgument("context_size must be >= 1".to_owned()));
		}
		Ok(Self { context_size, parallel_threshold: usize::MAX })
	}

	/// Corpora with at least `threshold` names are windowed on several threads.
	///
	/// The result does not depend on this setting.
	pub fn parallel_threshold(mut self, threshold: usize) -> Self {
		self.parallel_threshold = threshold.max(1);
		self
	}

	pub fn context_size(&self) -> usize {
		self.context_size
	}

	/// Windows the whole corpus and returns the resulting table.
	///
	/// An empty corpus gives an empty table.
	pub fn build<S>(&self, corpus: &[S]) -> ConditionalDistributionTable
	where
		S: AsRef<str> + Sync,
	{
		let observations = if corpus.len() >= self.parallel_threshold {
			self.observe_parallel(corpus)
		} else {
			let mut observations = Vec::new();
			for name in corpus {
				self.observe(name.as_ref(), &mut observations);
			}
			observations
		};

		debug!(
			"built table: {} names, {} observations, context size {}",
			corpus.len(),
			observations.len(),
			self.context_size
		);
		ConditionalDistributionTable::new(self.context_size, observations)
	}

	/// Appends the observations of a single name to `out`.
	///
	/// `"ann"` with a context size of 2 is padded to `"  ann#"` and gives
	/// `("  ", 'a')`, `(" a", 'n')`, `("an", 'n')`, `("nn", '#')`.
	fn observe(&self, name: &str, out: &mut Vec<NGramObservation>) {
		let padded: Vec<char> = iter::repeat_n(PADDING, self.context_size)
			.chain(name.chars().flat_map(char::to_lowercase))
			.chain(iter::once(TERMINATOR))
			.collect();

		// windows() yields nothing when the window is wider than the input
		for window in padded.windows(self.context_size + 1) {
			out.push(NGramObservation::new(
				window[..self.context_size].iter().collect(),
				window[self.context_size],
			));
		}
	}

	/// Splits the corpus into chunks, windows each chunk on its own thread,
	/// then concatenates the partial results in chunk order.
	///
	/// # Notes
	/// - Chunk count is based on the number of CPUs (times a factor).
	/// - Partial results are tagged with their chunk index and re-ordered,
	///   so the output is identical to a sequential build.
	fn observe_parallel<S>(&self, corpus: &[S]) -> Vec<NGramObservation>
	where
		S: AsRef<str> + Sync,
	{
		let cpus = num_cpus::get();
		let factor = 8;
		let chunks = cpus * factor;
		let chunk_size = corpus.len().div_ceil(chunks).max(1);

		let mut partials: Vec<(usize, Vec<NGramObservation>)> = thread::scope(|scope| {
			let (tx, rx) = mpsc::channel();
			for (index, chunk) in corpus.chunks(chunk_size).enumerate() {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial = Vec::new();
					for name in chunk {
						self.observe(name.as_ref(), &mut partial);
					}
					// The receiver outlives every worker of this scope
					let _ = tx.send((index, partial));
				});
			}
			drop(tx);
			rx.iter().collect()
		});

		partials.sort_by_key(|(index, _)| *index);
		debug!("windowed {} chunks of up to {} names", partials.len(), chunk_size);
		partials.into_iter().flat_map(|(_, partial)| partial).collect()
	}
}
