use std::{fs, io::Read, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SequenceError {
    #[error("invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },
    #[error("could not read {location}")]
    Unreadable {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a sequence of numbers from raw tokens. Each token may itself be
/// a comma- or whitespace-separated list, so `2 7 11 15`, `2,7,11,15`
/// and a whole file read into one string all parse the same way.
///
/// An empty token list is a valid (empty) sequence, not an error.
pub fn parse_sequence(tokens: &[String]) -> Result<Vec<i64>, SequenceError> {
    let mut values = Vec::new();

    for token in tokens {
        for piece in token.split(|c: char| c == ',' || c.is_whitespace()) {
            if piece.is_empty() {
                continue;
            }
            let value = piece
                .parse::<i64>()
                .map_err(|_| SequenceError::InvalidNumber {
                    token: piece.to_string(),
                    position: values.len(),
                })?;
            values.push(value);
        }
    }

    Ok(values)
}

/// Read a sequence from a plain text file of separated numbers.
pub fn sequence_from_file(path: &Path) -> Result<Vec<i64>, SequenceError> {
    let text = fs::read_to_string(path).map_err(|e| SequenceError::Unreadable {
        location: path.display().to_string(),
        source: e,
    })?;
    parse_sequence(&[text])
}

/// Read a sequence from standard input until EOF.
pub fn sequence_from_stdin() -> Result<Vec<i64>, SequenceError> {
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|e| SequenceError::Unreadable {
            location: "stdin".to_string(),
            source: e,
        })?;
    parse_sequence(&[text])
}
