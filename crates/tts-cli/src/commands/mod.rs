//! CLI command implementations.

use anyhow::{Context, Result};

pub mod encode;
pub mod info;
pub mod normalize;
pub mod segment;
pub mod vocab;

/// Resolve a text argument; `@path` reads the text from a file.
pub fn read_input(input: &str) -> Result<String> {
    match input.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {path}")),
        None => Ok(input.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_input_literal() {
        assert_eq!(read_input("hello").unwrap(), "hello");
    }

    #[test]
    fn test_read_input_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "from a file").unwrap();

        let arg = format!("@{}", file.path().display());
        assert_eq!(read_input(&arg).unwrap(), "from a file");
        assert!(read_input("@/definitely/missing.txt").is_err());
    }
}
