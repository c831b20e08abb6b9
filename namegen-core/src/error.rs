use std::io;

/// Errors raised while configuring, training or loading a name generator.
#[derive(Debug, thiserror::Error)]
pub enum NameGenError {
	/// A parameter is outside its valid domain (ex. `context_size == 0`).
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// The generator cannot be built from what it was given
	/// (ex. an empty training corpus read from disk).
	#[error("Configuration error: {0}")]
	Configuration(String),

	#[error("I/O error: {0}")]
	Io(#[from] io::Error),

	#[error("TOML deserialization error: {0}")]
	Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, NameGenError>;
