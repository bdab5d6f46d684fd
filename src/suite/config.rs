use std::path::PathBuf;

use crate::board::FenMode;

use super::error::ConfigError;

/// Default suite file, relative to the working directory.
pub const DEFAULT_SUITE_PATH: &str = "data/perftsuite.epd";

/// How the perft driver walks the move tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Discipline {
    /// Make and undo on a single board
    #[default]
    UndoStack,
    /// Recurse on a copy of the board for every child
    Copying,
}

/// Settings for a suite run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteConfig {
    pub path: PathBuf,
    /// Depth entries deeper than this are skipped
    pub max_depth: usize,
    /// Worker threads evaluating suite lines; 1 runs on the calling thread
    pub threads: usize,
    pub fen_mode: FenMode,
    /// Evaluate every depth of a line even after one fails
    pub keep_going: bool,
    pub discipline: Discipline,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        SuiteConfig {
            path: PathBuf::from(DEFAULT_SUITE_PATH),
            max_depth: 4,
            threads: 1,
            fen_mode: FenMode::Strict,
            keep_going: false,
            discipline: Discipline::UndoStack,
        }
    }
}

impl SuiteConfig {
    /// Build a configuration from command-line arguments, program name
    /// excluded.
    ///
    /// Recognises `--depth N`, `--threads N`, `--lenient`, `--copy`,
    /// `--keep-going` and at most one positional suite path.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = SuiteConfig::default();
        let mut path_seen = false;
        let mut args = args.into_iter().map(Into::<String>::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--depth" => config.max_depth = positive_value(&arg, args.next())?,
                "--threads" => config.threads = positive_value(&arg, args.next())?,
                "--lenient" => config.fen_mode = FenMode::Lenient,
                "--copy" => config.discipline = Discipline::Copying,
                "--keep-going" => config.keep_going = true,
                flag if flag.starts_with("--") => {
                    return Err(ConfigError::UnknownFlag {
                        flag: flag.to_string(),
                    })
                }
                _ if path_seen => return Err(ConfigError::UnexpectedArgument { arg: arg.clone() }),
                _ => {
                    config.path = PathBuf::from(&arg);
                    path_seen = true;
                }
            }
        }
        Ok(config)
    }
}

fn positive_value(flag: &str, value: Option<String>) -> Result<usize, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue {
        flag: flag.to_string(),
    })?;
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SuiteConfig::from_args(Vec::<String>::new()).unwrap();
        assert_eq!(config, SuiteConfig::default());
        assert_eq!(config.path, PathBuf::from(DEFAULT_SUITE_PATH));
        assert_eq!(config.max_depth, 4);
    }

    #[test]
    fn test_all_flags() {
        let config = SuiteConfig::from_args([
            "--depth",
            "3",
            "--threads",
            "8",
            "--lenient",
            "--copy",
            "--keep-going",
            "suite.epd",
        ])
        .unwrap();
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.threads, 8);
        assert_eq!(config.fen_mode, FenMode::Lenient);
        assert_eq!(config.discipline, Discipline::Copying);
        assert!(config.keep_going);
        assert_eq!(config.path, PathBuf::from("suite.epd"));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            SuiteConfig::from_args(["--depth"]),
            Err(ConfigError::MissingValue {
                flag: "--depth".to_string()
            })
        );
        assert_eq!(
            SuiteConfig::from_args(["--threads", "0"]),
            Err(ConfigError::InvalidValue {
                flag: "--threads".to_string(),
                value: "0".to_string()
            })
        );
        assert_eq!(
            SuiteConfig::from_args(["--fast"]),
            Err(ConfigError::UnknownFlag {
                flag: "--fast".to_string()
            })
        );
        assert_eq!(
            SuiteConfig::from_args(["a.epd", "b.epd"]),
            Err(ConfigError::UnexpectedArgument {
                arg: "b.epd".to_string()
            })
        );
    }
}
