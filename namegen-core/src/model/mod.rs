//! Top-level module for the name generation system.
//!
//! The pipeline has three stages:
//! - `ModelBuilder` windows the training corpus into n-gram observations
//! - `ConditionalDistributionTable` stores those observations and resolves
//!   (and caches) the probability row of a context on first access
//! - `Sampler` walks the table from a padded start context until the
//!   terminator is drawn
//!
//! `NameGenerator` ties them together behind a two-call API:
//! construct once, then `generate()` as many times as needed.

/// Reserved character appended to every training name.
/// Drawing it ends the generation of a name.
pub const TERMINATOR: char = '#';

/// Character used to left-pad training names and to seed generation.
pub const PADDING: char = ' ';

/// Corpus windowing (training step).
pub mod builder;

/// Observation storage and memoized probability lookup.
pub mod table;

/// Probability rows and their per-context cache.
pub mod probability;

/// Weighted sampling loop and the injectable uniform draw source.
pub mod sampler;

/// High-level interface: training from a corpus and generating names.
pub mod generator;
