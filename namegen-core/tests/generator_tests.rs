use std::io::Write;
use std::sync::Arc;
use std::thread;

use namegen_core::model::sampler::{FixedDraws, RngSource};
use namegen_core::model::{PADDING, TERMINATOR};
use namegen_core::{GeneratorConfig, NameGenError, NameGenerator};

const CORPUS: &[&str] = &[
	"Aaron", "Abigail", "Adeline", "Adrian", "Agathe", "Albert", "Alice", "Amandine", "Ambre",
	"Anatole", "Anna", "Antoine", "Apolline", "Armand", "Arthur", "Aurore", "Baptiste", "Basile",
	"Bastien", "Benoit", "Blanche", "Camille", "Capucine", "Charlotte", "Clement", "Colette",
	"Damien", "Delphine", "Eloise", "Emile", "Jean-Luc", "Mary Ann",
];

fn corpus_file(lines: &[&str]) -> tempfile::NamedTempFile {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	for line in lines {
		writeln!(file, "{}", line).unwrap();
	}
	file
}

#[test]
fn from_file_trains_on_every_line() {
	let file = corpus_file(CORPUS);
	let generator = NameGenerator::from_file(file.path(), GeneratorConfig::default()).unwrap();

	assert_eq!(generator.corpus_len(), CORPUS.len());
	assert!(generator.contains("jean-luc"));
}

#[test]
fn from_file_rejects_empty_corpus() {
	let file = corpus_file(&["", "   "]);
	let err = NameGenerator::from_file(file.path(), GeneratorConfig::default()).unwrap_err();
	assert!(matches!(err, NameGenError::Configuration(_)));
}

#[test]
fn from_file_surfaces_io_errors() {
	let dir = tempfile::tempdir().unwrap();
	let err = NameGenerator::from_file(dir.path().join("nope.txt"), GeneratorConfig::default())
		.unwrap_err();
	assert!(matches!(err, NameGenError::Io(_)));
}

#[test]
fn config_from_toml_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "context_size = 2\nmax_length = 12\nnb_try = 5").unwrap();

	let config = GeneratorConfig::from_file(file.path()).unwrap();
	assert_eq!(config.context_size, 2);
	assert_eq!(config.max_length, 12);
	assert_eq!(config.nb_try, 5);
}

#[test]
fn single_name_corpus_regenerates_it() {
	let generator = NameGenerator::new(&["ann"], GeneratorConfig::with_context_size(2)).unwrap();

	let row = generator.table().lookup_probabilities("an");
	assert_eq!(row.entries().len(), 1);
	assert_eq!(row.probability_of('n'), 1.0);

	assert_eq!(generator.generate_with(&mut FixedDraws::new(vec![0.0])), "Ann");
}

#[test]
fn start_row_holds_first_letters_by_frequency() {
	let corpus = ["bob", "bea", "ben", "bill"];
	let generator = NameGenerator::new(&corpus, GeneratorConfig::with_context_size(3)).unwrap();

	let start: String = std::iter::repeat_n(PADDING, 3).collect();
	let row = generator.table().lookup_probabilities(&start);
	assert_eq!(row.entries().len(), 1);
	assert_eq!(row.probability_of('b'), 1.0);

	let corpus = ["bob", "alice", "bea", "ben"];
	let generator = NameGenerator::new(&corpus, GeneratorConfig::with_context_size(3)).unwrap();
	let row = generator.table().lookup_probabilities(&start);
	assert!((row.probability_of('b') - 0.75).abs() < 1e-12);
	assert!((row.probability_of('a') - 0.25).abs() < 1e-12);
}

#[test]
fn generated_names_are_clean() {
	let generator = NameGenerator::new(CORPUS, GeneratorConfig::with_context_size(2)).unwrap();
	let mut source = RngSource::seeded(42);

	for _ in 0..500 {
		let name = generator.generate_with(&mut source);
		assert!(!name.contains(TERMINATOR), "{:?}", name);
		assert_eq!(name.trim(), name, "{:?}", name);
		assert!(name.chars().count() <= generator.config().max_length);
		if let Some(first) = name.chars().next() {
			assert!(!first.is_lowercase(), "{:?}", name);
		}
	}
}

#[test]
fn every_reached_row_sums_to_one() {
	let generator = NameGenerator::new(CORPUS, GeneratorConfig::with_context_size(3)).unwrap();
	let contexts: Vec<String> =
		generator.table().observations().iter().map(|o| o.context().to_owned()).collect();

	for context in contexts {
		let total = generator.table().lookup_probabilities(&context).total();
		assert!((total - 1.0).abs() < 1e-9, "{:?} sums to {}", context, total);
	}
}

#[test]
fn empty_corpus_generates_empty_names() {
	let corpus: Vec<String> = Vec::new();
	let generator = NameGenerator::new(&corpus, GeneratorConfig::default()).unwrap();

	assert_eq!(generator.generate(), "");
	assert!(generator.table().lookup_probabilities("   ").is_empty());
	assert!(generator.table().lookup_probabilities("abc").is_empty());
}

#[test]
fn same_draws_give_same_names() {
	let generator = NameGenerator::new(CORPUS, GeneratorConfig::with_context_size(2)).unwrap();

	let run = |seed: u64| -> Vec<String> {
		let mut source = RngSource::seeded(seed);
		(0..20).map(|_| generator.generate_with(&mut source)).collect()
	};
	assert_eq!(run(3), run(3));

	let draws = vec![0.12, 0.87, 0.45, 0.33, 0.99, 0.01];
	let first = generator.generate_with(&mut FixedDraws::new(draws.clone()));
	let second = generator.generate_with(&mut FixedDraws::new(draws));
	assert_eq!(first, second);
}

#[test]
fn generator_is_shared_between_threads() {
	let generator = Arc::new(NameGenerator::new(CORPUS, GeneratorConfig::default()).unwrap());

	let handles: Vec<_> = (0..4)
		.map(|seed| {
			let generator = Arc::clone(&generator);
			thread::spawn(move || {
				let mut source = RngSource::seeded(seed);
				(0..50).map(|_| generator.generate_with(&mut source)).collect::<Vec<_>>()
			})
		})
		.collect();

	for handle in handles {
		for name in handle.join().unwrap() {
			assert!(!name.contains(TERMINATOR));
		}
	}
	assert!(generator.table().cached_contexts() > 0);
}

#[test]
fn retries_avoid_known_names_when_possible() {
	let config = GeneratorConfig { context_size: 2, nb_try: 50, ..GeneratorConfig::default() };
	let generator = NameGenerator::new(CORPUS, config).unwrap();
	let mut source = RngSource::seeded(11);

	let novel = (0..50)
		.map(|_| generator.generate_with(&mut source))
		.filter(|name| !generator.contains(name))
		.count();
	assert!(novel > 40, "only {} novel names out of 50", novel);
}
