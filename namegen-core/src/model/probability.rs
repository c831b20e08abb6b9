use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

/// One outgoing transition of a context and its empirical probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityEntry {
	pub next: char,
	pub probability: f64,
}

/// Normalized distribution over the characters observed after one context.
///
/// ## Invariants
/// - Each character appears at most once
/// - Entries are sorted by ascending probability; equal probabilities keep
///   the order in which their character was first observed
/// - Probabilities sum to 1.0 (up to floating-point error), unless the row is empty
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProbabilityRow {
	entries: Vec<ProbabilityEntry>,
}

impl ProbabilityRow {
	/// Aggregates a sequence of observed next characters into a row.
	///
	/// Counts are kept in first-seen order, converted to probabilities by
	/// dividing by the number of observations, then stably sorted.
	pub fn from_transitions<I>(transitions: I) -> Self
	where
		I: IntoIterator<Item = char>,
	{
		let mut counts: Vec<(char, usize)> = Vec::new();
		let mut total: usize = 0;
		for next in transitions {
			total += 1;
			match counts.iter_mut().find(|(c, _)| *c == next) {
				Some((_, count)) => *count += 1,
				None => counts.push((next, 1)),
			}
		}

		let mut entries: Vec<ProbabilityEntry> = counts
			.into_iter()
			.map(|(next, count)| ProbabilityEntry {
				next,
				probability: count as f64 / total as f64,
			})
			.collect();
		// sort_by is stable
		entries.sort_by(|a, b| a.probability.total_cmp(&b.probability));

		Self { entries }
	}

	pub fn entries(&self) -> &[ProbabilityEntry] {
		&self.entries
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Probability of `next`, `0.0` if it was never observed after this context.
	pub fn probability_of(&self, next: char) -> f64 {
		self.entries
			.iter()
			.find(|entry| entry.next == next)
			.map_or(0.0, |entry| entry.probability)
	}

	/// Sum of all probabilities (1.0 for a non-empty row, 0.0 otherwise).
	pub fn total(&self) -> f64 {
		self.entries.iter().map(|entry| entry.probability).sum()
	}
}

/// Per-context memo of computed [`ProbabilityRow`]s.
///
/// Rows are shared through `Arc`, so every lookup of a context returns the
/// same allocation. The lookup-then-insert sequence runs under one lock,
/// which makes it atomic per key when the cache is shared between threads.
/// The cache only grows; rows are never invalidated.
#[derive(Debug, Default)]
pub struct ProbabilityCache {
	rows: Mutex<HashMap<String, Arc<ProbabilityRow>>>,
}

impl ProbabilityCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the cached row for `context`, computing it with `compute` on first access.
	pub fn get_or_compute<F>(&self, context: &str, compute: F) -> Arc<ProbabilityRow>
	where
		F: FnOnce() -> ProbabilityRow,
	{
		// A panic inside `compute` leaves the map untouched, so a poisoned lock is still consistent
		let mut rows = self.rows.lock().unwrap_or_else(PoisonError::into_inner);
		if let Some(row) = rows.get(context) {
			return Arc::clone(row);
		}

		let row = Arc::new(compute());
		debug!("cached row for context {:?} ({} entries)", context, row.len());
		rows.insert(context.to_owned(), Arc::clone(&row));
		row
	}

	/// Number of contexts resolved so far.
	pub fn len(&self) -> usize {
		self.rows.lock().unwrap_or_else(PoisonError::into_inner).len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
