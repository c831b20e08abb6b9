use std::path::Path;

use log::info;
use namegen_core::{GeneratorConfig, NameGenerator};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows table building and cache activity
    env_logger::init();

    // Settings come from "namegen.toml" when present, defaults otherwise
    let config_path = Path::new("./namegen.toml");
    let config = if config_path.exists() {
        GeneratorConfig::from_file(config_path)?
    } else {
        GeneratorConfig::default()
    };
    info!("using {:?}", config);

    // One name per line; blank lines are skipped
    let generator = NameGenerator::from_file("./data/names.txt", config)?;

    // Invalid settings are rejected before any training happens
    match NameGenerator::new(&["ann"], GeneratorConfig::with_context_size(0)) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Context size 0 is invalid: {}", e),
    }

    // The probability row of the start context gives the first-letter distribution
    let start = " ".repeat(generator.config().context_size);
    for entry in generator.table().lookup_probabilities(&start).entries().iter().rev().take(5) {
        println!("'{}' starts {:.1}% of the names", entry.next, entry.probability * 100.0);
    }

    // Generate 10 names; with nb_try > 0 names already in the corpus are retried
    for i in 0..10 {
        println!("Generated name {}: {}", i + 1, generator.generate());
    }

    Ok(())
}
