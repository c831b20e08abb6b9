use log::warn;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::probability::ProbabilityRow;
use super::table::ConditionalDistributionTable;
use super::{PADDING, TERMINATOR};

/// Source of uniform draws in `[0, 1)`, resolved against probability rows.
///
/// Generation only ever reaches randomness through this trait, so a
/// deterministic implementation makes generation reproducible.
pub trait UniformSource {
	/// Returns a draw in `[0, 1)`.
	fn next_uniform(&mut self) -> f64;

	/// Picks a character of `row` by weighted random selection.
	///
	/// Draws `u` and returns the entry whose cumulative probability interval
	/// contains it. If rounding leaves `u` past the last boundary, the last
	/// entry is returned.
	///
	/// Returns `None` if the row is empty.
	fn pick(&mut self, row: &ProbabilityRow) -> Option<char> {
		let last = row.entries().last()?;
		let draw = self.next_uniform();

		let mut cumulative = 0.0;
		for entry in row.entries() {
			cumulative += entry.probability;
			if draw < cumulative {
				return Some(entry.next);
			}
		}
		Some(last.next)
	}
}

/// [`UniformSource`] backed by a `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R: Rng> {
	rng: R,
}

impl<R: Rng> RngSource<R> {
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RngSource<ThreadRng> {
	/// Thread-local generator, seeded by the OS.
	pub fn thread() -> Self {
		Self::new(rand::rng())
	}
}

impl RngSource<StdRng> {
	/// Reproducible generator: the same seed gives the same draws.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> UniformSource for RngSource<R> {
	fn next_uniform(&mut self) -> f64 {
		self.rng.random::<f64>()
	}
}

/// [`UniformSource`] replaying a fixed list of draws, cycling when exhausted.
///
/// Draws are clamped into `[0, 1)`. An empty list always draws `0.0`.
#[derive(Clone, Debug)]
pub struct FixedDraws {
	draws: Vec<f64>,
	position: usize,
}

impl FixedDraws {
	pub fn new(draws: Vec<f64>) -> Self {
		Self { draws, position: 0 }
	}
}

impl UniformSource for FixedDraws {
	fn next_uniform(&mut self) -> f64 {
		if self.draws.is_empty() {
			return 0.0;
		}
		let draw = self.draws[self.position % self.draws.len()];
		self.position += 1;
		draw.clamp(0.0, 1.0 - f64::EPSILON)
	}
}

/// Walks a [`ConditionalDistributionTable`] to produce names.
///
/// Starting from `context_size` padding characters, the sampler repeatedly
/// looks up the row of the trailing context, draws the next character and
/// appends it, until the terminator is drawn or the context has no
/// continuation.
///
/// # Termination
/// Every training name ends with the terminator, so every context seen at
/// the end of a training name can reach it. This makes generation halt in
/// practice but is not a proof; `max_length` bounds the number of drawn
/// characters regardless.
#[derive(Debug)]
pub struct Sampler<'a> {
	table: &'a ConditionalDistributionTable,
	max_length: usize,
}

impl<'a> Sampler<'a> {
	pub fn new(table: &'a ConditionalDistributionTable, max_length: usize) -> Self {
		Self { table, max_length }
	}

	/// Generates one name, cleaned and title-cased.
	pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> String {
		let context_size = self.table.context_size();
		let mut chars: Vec<char> = vec![PADDING; context_size];

		loop {
			if chars.len() - context_size >= self.max_length {
				warn!("name reached the maximum length of {} characters", self.max_length);
				break;
			}

			let context: String = chars[chars.len() - context_size..].iter().collect();
			let row = self.table.lookup_probabilities(&context);
			// An empty row has no continuation: same as drawing the terminator
			match source.pick(&row) {
				Some(c) if c != TERMINATOR => chars.push(c),
				_ => break,
			}
		}

		title_case(chars.iter().collect::<String>().trim_matches(PADDING).trim())
	}
}

/// Upper-cases the first letter of every word.
///
/// A word starts at any alphanumeric character that does not follow another
/// alphanumeric character or an underscore, so `"jean-luc"` becomes
/// `"Jean-Luc"`.
pub(crate) fn title_case(s: &str) -> String {
	let mut result = String::with_capacity(s.len());
	let mut previous: Option<char> = None;
	for c in s.chars() {
		let starts_word = previous.is_none_or(|p| !(p.is_alphanumeric() || p == '_'));
		if starts_word {
			result.extend(c.to_uppercase());
		} else {
			result.push(c);
		}
		previous = Some(c);
	}
	result
}
