use std::sync::Arc;

use super::probability::{ProbabilityCache, ProbabilityRow};

/// One (context, next character) pair extracted from a training name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NGramObservation {
	context: String,
	next: char,
}

impl NGramObservation {
	pub(crate) fn new(context: String, next: char) -> Self {
		Self { context, next }
	}

	pub fn context(&self) -> &str {
		&self.context
	}

	pub fn next(&self) -> char {
		self.next
	}
}

/// Every observation of a corpus, queried on demand per context.
///
/// The observations are stored as produced by the builder and are never
/// aggregated up front: the probability row of a context is computed by a
/// full scan the first time that context is looked up, then served from the
/// [`ProbabilityCache`] for the lifetime of the table.
///
/// # Invariants
/// - Observations are immutable once the table is built
/// - Every observation context is `context_size` characters long
#[derive(Debug)]
pub struct ConditionalDistributionTable {
	context_size: usize,
	observations: Vec<NGramObservation>,
	cache: ProbabilityCache,
}

impl ConditionalDistributionTable {
	pub(crate) fn new(context_size: usize, observations: Vec<NGramObservation>) -> Self {
		Self {
			context_size,
			observations,
			cache: ProbabilityCache::new(),
		}
	}

	pub fn context_size(&self) -> usize {
		self.context_size
	}

	pub fn observations(&self) -> &[NGramObservation] {
		&self.observations
	}

	pub fn len(&self) -> usize {
		self.observations.len()
	}

	pub fn is_empty(&self) -> bool {
		self.observations.is_empty()
	}

	/// Number of contexts whose row has been resolved and cached.
	pub fn cached_contexts(&self) -> usize {
		self.cache.len()
	}

	/// Returns the probability row of `context`.
	///
	/// - First access scans all observations (O(table size)) and caches the row.
	/// - Later accesses return the cached row itself, not a recomputation.
	/// - An unknown context resolves to an empty row (also cached).
	pub fn lookup_probabilities(&self, context: &str) -> Arc<ProbabilityRow> {
		self.cache.get_or_compute(context, || {
			ProbabilityRow::from_transitions(
				self.observations
					.iter()
					.filter(|observation| observation.context == context)
					.map(|observation| observation.next),
			)
		})
	}
}
