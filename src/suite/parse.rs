use std::fs;
use std::path::Path;

use crate::board::{Board, FenMode};

use super::error::SuiteError;

/// One position of a perft suite with its expected leaf counts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuiteEntry {
    /// 1-based line number in the suite file
    pub line: usize,
    pub fen: String,
    pub board: Board,
    /// `(depth, expected leaf count)` in file order
    pub depths: Vec<(usize, u64)>,
}

/// Parse one suite line of the form `<fen>;D1 <count>;D2 <count>;...`.
///
/// Blank lines and lines starting with `#` yield `Ok(None)`.
pub fn parse_suite_line(
    text: &str,
    line: usize,
    mode: FenMode,
) -> Result<Option<SuiteEntry>, SuiteError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let mut fields = text.split(';');
    let fen = fields.next().unwrap_or_default().trim();
    let board = Board::try_from_fen_with(fen, mode)
        .map_err(|source| SuiteError::InvalidFen { line, source })?;

    let depths = fields
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| parse_depth(entry, line))
        .collect::<Result<Vec<_>, _>>()?;
    if depths.is_empty() {
        return Err(SuiteError::NoDepths { line });
    }

    Ok(Some(SuiteEntry {
        line,
        fen: fen.to_string(),
        board,
        depths,
    }))
}

fn parse_depth(entry: &str, line: usize) -> Result<(usize, u64), SuiteError> {
    let malformed = || SuiteError::MalformedDepth {
        line,
        entry: entry.to_string(),
    };
    let rest = entry.strip_prefix('D').ok_or_else(malformed)?;
    let mut parts = rest.split_whitespace();
    let (Some(depth), Some(count), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };
    let depth = depth.parse().map_err(|_| malformed())?;
    let count = count.parse().map_err(|_| malformed())?;
    Ok((depth, count))
}

/// Parse every line of a suite held in memory.
pub fn parse_suite(text: &str, mode: FenMode) -> Result<Vec<SuiteEntry>, SuiteError> {
    let mut entries = Vec::new();
    for (index, line) in text.lines().enumerate() {
        if let Some(entry) = parse_suite_line(line, index + 1, mode)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Read and parse a suite file.
pub fn load_suite(path: &Path, mode: FenMode) -> Result<Vec<SuiteEntry>, SuiteError> {
    let text = fs::read_to_string(path).map_err(|source| SuiteError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_suite(&text, mode)
}
