//! Input handling module

use crate::error::CliError;
use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Read buffer used for file input
const FILE_BUFFER_SIZE: usize = 256 * 1024;

/// Where input lines come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input
    Stdin,
    /// A file on disk
    File(PathBuf),
}

impl InputSource {
    /// Interpret a command-line argument; `-` means standard input
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(arg))
        }
    }

    /// Open the source for buffered reading
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            InputSource::Stdin => Ok(Box::new(io::stdin().lock())),
            InputSource::File(path) => {
                if !path.exists() {
                    return Err(CliError::FileNotFound(path.display().to_string()).into());
                }
                let file = File::open(path)
                    .with_context(|| format!("Failed to open file: {}", path.display()))?;
                Ok(Box::new(BufReader::with_capacity(FILE_BUFFER_SIZE, file)))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("-"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_arg() {
        assert_eq!(InputSource::from_arg("-"), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg("corpus.txt"),
            InputSource::File(PathBuf::from("corpus.txt"))
        );
    }

    #[test]
    fn test_open_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "first\nsecond\n").unwrap();

        let reader = InputSource::File(path).open().unwrap();
        let lines: Vec<String> = reader.lines().collect::<io::Result<_>>().unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_open_missing_file() {
        let source = InputSource::from_arg("/nonexistent/input.txt");
        let error = source.open().err().unwrap();
        assert!(matches!(
            error.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(InputSource::Stdin.to_string(), "-");
        assert_eq!(InputSource::from_arg("a.txt").to_string(), "a.txt");
    }
}
