//! Error types for perft suites and their configuration.

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::board::FenError;

/// Error type for reading and parsing a perft suite
#[derive(Debug)]
pub enum SuiteError {
    /// The suite file could not be read
    Io { path: PathBuf, source: io::Error },
    /// The FEN field of a line was rejected
    InvalidFen { line: usize, source: FenError },
    /// A depth entry is not of the form `D<depth> <count>`
    MalformedDepth { line: usize, entry: String },
    /// A line has a FEN but no depth entries
    NoDepths { line: usize },
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuiteError::Io { path, source } => {
                write!(f, "Cannot read suite '{}': {source}", path.display())
            }
            SuiteError::InvalidFen { line, source } => write!(f, "Line {line}: {source}"),
            SuiteError::MalformedDepth { line, entry } => {
                write!(f, "Line {line}: malformed depth entry '{entry}', expected 'D<depth> <count>'")
            }
            SuiteError::NoDepths { line } => write!(f, "Line {line}: no depth entries"),
        }
    }
}

impl std::error::Error for SuiteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuiteError::Io { source, .. } => Some(source),
            SuiteError::InvalidFen { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Error type for command-line configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag that takes a value was last on the command line
    MissingValue { flag: String },
    /// A flag value did not parse or is out of range
    InvalidValue { flag: String, value: String },
    /// Unrecognised `--flag`
    UnknownFlag { flag: String },
    /// More than one suite path was given
    UnexpectedArgument { arg: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue { flag } => write!(f, "Missing value for {flag}"),
            ConfigError::InvalidValue { flag, value } => {
                write!(f, "Invalid value '{value}' for {flag}")
            }
            ConfigError::UnknownFlag { flag } => write!(f, "Unknown option {flag}"),
            ConfigError::UnexpectedArgument { arg } => write!(f, "Unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_fen_error_is_source() {
        let err = SuiteError::InvalidFen {
            line: 3,
            source: FenError::IncompletePlacement { index: 7 },
        };
        assert!(err.to_string().starts_with("Line 3: Malformed FEN"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_depth_error_message() {
        let err = SuiteError::MalformedDepth {
            line: 12,
            entry: "X1 20".to_string(),
        };
        assert!(err.to_string().contains("'X1 20'"));
        assert!(err.source().is_none());
    }

    #[test]
    fn test_config_error_message() {
        let err = ConfigError::InvalidValue {
            flag: "--depth".to_string(),
            value: "deep".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value 'deep' for --depth");
    }
}
