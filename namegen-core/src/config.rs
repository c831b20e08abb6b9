use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NameGenError, Result};
use crate::io::read_to_string;

/// Generation settings for a [`NameGenerator`](crate::model::generator::NameGenerator).
///
/// Every field has a default, so a TOML file only needs to list what it
/// overrides:
///
/// ```toml
/// context_size = 2
/// nb_try = 20
/// ```
///
/// # Invariants (checked by [`GeneratorConfig::validate`])
/// - `context_size >= 1`
/// - `max_length >= 1`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
	/// Number of characters used as the lookup context.
	pub context_size: usize,

	/// Maximum number of characters drawn for a single name.
	/// Generation stops here even if the terminator was never drawn.
	pub max_length: usize,

	/// Number of retries when the generated name already exists in the corpus.
	/// `0` returns the first generated name.
	pub nb_try: usize,

	/// Corpus size (in names) from which the table is built on several threads.
	pub parallel_threshold: usize,
}

impl Default for GeneratorConfig {
	fn default() -> Self {
		Self {
			context_size: 3,
			max_length: 32,
			nb_try: 0,
			parallel_threshold: 10_000,
		}
	}
}

impl GeneratorConfig {
	/// Default settings with a specific context size.
	pub fn with_context_size(context_size: usize) -> Self {
		Self { context_size, ..Self::default() }
	}

	/// Parses and validates a TOML document.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Reads, parses and validates a TOML file.
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		Self::from_toml_str(&read_to_string(path)?)
	}

	/// Checks the invariants listed on the type.
	///
	/// # Errors
	/// Returns [`NameGenError::InvalidArgument`] on the first violated invariant.
	pub fn validate(&self) -> Result<()> {
		if self.context_size == 0 {
			return Err(NameGenError::InvalidArgument("context_size must be >= 1".to_owned()));
		}
		if self.max_length == 0 {
			return Err(NameGenError::InvalidArgument("max_length must be >= 1".to_owned()));
		}
		Ok(())
	}
}
