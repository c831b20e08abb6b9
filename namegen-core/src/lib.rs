//! Character-level n-gram name generator.
//!
//! This crate learns which character tends to follow each short context in a
//! corpus of example names, then samples new names from those statistics:
//! - Corpus windowing into (context, next character) observations
//! - Lazily computed, cached per-context probability rows
//! - Weighted random sampling with an injectable draw source
//! - TOML configuration and file loading
//!
//! ```no_run
//! use namegen_core::{GeneratorConfig, NameGenerator};
//!
//! let generator = NameGenerator::from_file("data/names.txt", GeneratorConfig::default())?;
//! println!("{}", generator.generate());
//! # Ok::<(), namegen_core::NameGenError>(())
//! ```

/// Generation settings and their TOML loading.
pub mod config;

/// Crate error type.
pub mod error;

/// Core n-gram model, sampling and generation logic.
pub mod model;

/// I/O utilities (file loading).
///
/// Not exposed
pub(crate) mod io;

pub use config::GeneratorConfig;
pub use error::{NameGenError, Result};
pub use model::generator::NameGenerator;
