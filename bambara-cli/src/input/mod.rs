//! Input handling: pattern resolution and file reading

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;

/// Read every input source into one text buffer.
///
/// `-` reads standard input; anything else is treated as a glob pattern.
/// A newline is kept between sources so tokens never run together.
pub fn read_all(inputs: &[String]) -> Result<String> {
    let mut buffer = String::new();

    for input in inputs {
        if input == "-" {
            buffer.push_str(&FileReader::read_stdin()?);
        } else {
            for path in resolve_patterns(std::slice::from_ref(input))? {
                buffer.push_str(&FileReader::read_text(&path)?);
            }
        }

        if !buffer.ends_with('\n') {
            buffer.push('\n');
        }
    }

    Ok(buffer)
}
