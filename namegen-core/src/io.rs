use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::Result;

/// Reads a whole text file into memory.
pub(crate) fn read_to_string<P: AsRef<Path>>(filename: P) -> Result<String> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents)
}

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Blank lines are dropped, they carry no name
pub(crate) fn read_lines<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	Ok(read_to_string(filename)?
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(str::to_owned)
		.collect())
}
