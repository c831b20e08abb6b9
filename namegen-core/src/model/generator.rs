use std::collections::HashSet;
use std::path::Path;

use log::{debug, warn};

use super::builder::ModelBuilder;
use super::sampler::{RngSource, Sampler, UniformSource};
use super::table::ConditionalDistributionTable;
use crate::config::GeneratorConfig;
use crate::error::{NameGenError, Result};
use crate::io;

/// High-level name generator.
///
/// # Responsibilities
/// - Train a [`ConditionalDistributionTable`] once from a corpus
/// - Generate names from it, as many times as needed
/// - Optionally retry names that already exist in the corpus (`nb_try`)
///
/// The generator is a plain value: it owns its table and probability
/// cache, and can be shared between threads (`Send + Sync`).
#[derive(Debug)]
pub struct NameGenerator {
	config: GeneratorConfig,
	/// Lower-cased training names, used to detect generated duplicates.
	names: HashSet<String>,
	table: ConditionalDistributionTable,
}

impl NameGenerator {
	/// Trains a generator on an in-memory corpus.
	///
	/// An empty corpus is accepted: the table is empty and every generated
	/// name is `""`.
	///
	/// # Errors
	/// Returns [`NameGenError::InvalidArgument`] if the configuration is invalid.
	pub fn new<S>(corpus: &[S], config: GeneratorConfig) -> Result<Self>
	where
		S: AsRef<str> + Sync,
	{
		config.validate()?;
		if corpus.is_empty() {
			warn!("training on an empty corpus, every generated name will be empty");
		}

		let table = ModelBuilder::new(config.context_size)?
			.parallel_threshold(config.parallel_threshold)
			.build(corpus);
		let names = corpus.iter().map(|name| name.as_ref().to_lowercase()).collect();

		Ok(Self { config, names, table })
	}

	/// Trains a generator on a file holding one name per line.
	///
	/// Blank lines are ignored.
	///
	/// # Errors
	/// - [`NameGenError::Io`] if the file cannot be read.
	/// - [`NameGenError::Configuration`] if it holds no name.
	/// - [`NameGenError::InvalidArgument`] if the configuration is invalid.
	pub fn from_file<P: AsRef<Path>>(path: P, config: GeneratorConfig) -> Result<Self> {
		let path = path.as_ref();
		let corpus = io::read_lines(path)?;
		if corpus.is_empty() {
			return Err(NameGenError::Configuration(format!(
				"empty training corpus: {}",
				path.display()
			)));
		}
		debug!("loaded {} names from {}", corpus.len(), path.display());
		Self::new(&corpus, config)
	}

	pub fn config(&self) -> &GeneratorConfig {
		&self.config
	}

	pub fn table(&self) -> &ConditionalDistributionTable {
		&self.table
	}

	/// Number of distinct training names (case-insensitive).
	pub fn corpus_len(&self) -> usize {
		self.names.len()
	}

	/// Checks whether `name` is part of the training corpus (case-insensitive).
	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(&name.to_lowercase())
	}

	/// Generates a name using the thread-local random generator.
	pub fn generate(&self) -> String {
		self.generate_with(&mut RngSource::thread())
	}

	/// Generates a name drawing from `source`.
	///
	/// # Behavior
	/// - Samples a name from the table.
	/// - While it already exists in the corpus, samples again, up to `nb_try` times.
	/// - Returns the first new name, or the last attempt if all of them exist.
	pub fn generate_with<S: UniformSource + ?Sized>(&self, source: &mut S) -> String {
		let sampler = Sampler::new(&self.table, self.config.max_length);
		let mut name = sampler.sample(source);

		let mut nb_try = self.config.nb_try;
		while nb_try > 0 && self.contains(&name) {
			name = sampler.sample(source);
			nb_try -= 1;
		}
		name
	}
}
