// File Operations for RSA Encryption/Decryption
// Handles reading and writing plaintext and ciphertext files

use std::fs;
use std::io;
use std::path::Path;

use num_bigint::BigUint;

/// Errors that can occur during file operations
#[derive(thiserror::Error, Debug)]
pub enum FileError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A ciphertext file token that does not parse as a decimal integer
    #[error("invalid ciphertext token {0:?}")]
    InvalidToken(String),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Read an entire UTF-8 text file
pub fn read_plaintext(path: &Path) -> FileResult<String> {
    Ok(fs::read_to_string(path)?)
}

/// Write a UTF-8 text file
pub fn write_plaintext(path: &Path, data: &str) -> FileResult<()> {
    Ok(fs::write(path, data)?)
}

/// Render ciphertext in its boundary format: whitespace-separated decimals
pub fn format_ciphertext(values: &[BigUint]) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse the whitespace-separated decimal ciphertext format
pub fn parse_ciphertext(text: &str) -> FileResult<Vec<BigUint>> {
    text.split_whitespace()
        .map(|token| {
            token
                .parse::<BigUint>()
                .map_err(|_| FileError::InvalidToken(token.to_string()))
        })
        .collect()
}

/// Write ciphertext to a file in the boundary format
pub fn write_ciphertext(path: &Path, values: &[BigUint]) -> FileResult<()> {
    write_plaintext(path, &format_ciphertext(values))
}

/// Read and parse a ciphertext file
pub fn read_ciphertext(path: &Path) -> FileResult<Vec<BigUint>> {
    parse_ciphertext(&read_plaintext(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(raw: &[u64]) -> Vec<BigUint> {
        raw.iter().map(|&v| BigUint::from(v)).collect()
    }

    #[test]
    fn test_format_ciphertext() {
        assert_eq!(format_ciphertext(&values(&[2790, 65, 3232])), "2790 65 3232");
        assert_eq!(format_ciphertext(&[]), "");
    }

    #[test]
    fn test_parse_ciphertext() {
        assert_eq!(parse_ciphertext("2790 65 3232").unwrap(), values(&[2790, 65, 3232]));
        // Any whitespace separates tokens
        assert_eq!(parse_ciphertext(" 1\n2\t3 ").unwrap(), values(&[1, 2, 3]));
        assert_eq!(parse_ciphertext("").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_rejects_junk_tokens() {
        assert!(matches!(
            parse_ciphertext("12 thirteen 14"),
            Err(FileError::InvalidToken(token)) if token == "thirteen"
        ));
        assert!(parse_ciphertext("-5").is_err());
    }

    #[test]
    fn test_format_parse_roundtrip() {
        let original = values(&[0, 1, 2790, 9999999999]);
        let text = format_ciphertext(&original);
        assert_eq!(parse_ciphertext(&text).unwrap(), original);
    }
}
