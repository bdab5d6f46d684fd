use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use log::{info, warn};
use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::{Discipline, SuiteConfig};
use super::parse::SuiteEntry;

/// Outcome of one depth entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DepthResult {
    pub depth: usize,
    pub expected: u64,
    pub actual: u64,
    pub passed: bool,
}

/// Outcomes for one suite line, in the order they were evaluated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineResult {
    pub line: usize,
    pub fen: String,
    pub depth_results: Vec<DepthResult>,
}

impl LineResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.depth_results.iter().all(|r| r.passed)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SuiteReport {
    pub lines: Vec<LineResult>,
}

impl SuiteReport {
    /// Number of depth entries whose count matched.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.depth_results().filter(|r| r.passed).count()
    }

    /// Number of depth entries whose count did not match.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.depth_results().filter(|r| !r.passed).count()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    fn depth_results(&self) -> impl Iterator<Item = &DepthResult> {
        self.lines.iter().flat_map(|line| line.depth_results.iter())
    }
}

/// Evaluate one suite line.
///
/// Depths above `config.max_depth` are skipped. Evaluation stops at the first
/// mismatch unless `config.keep_going` is set.
#[must_use]
pub fn run_line(entry: &SuiteEntry, config: &SuiteConfig) -> LineResult {
    let mut board = entry.board.clone();
    let mut depth_results = Vec::with_capacity(entry.depths.len());

    for &(depth, expected) in &entry.depths {
        if depth > config.max_depth {
            continue;
        }
        let actual = match config.discipline {
            Discipline::UndoStack => board.perft(depth),
            Discipline::Copying => board.perft_copying(depth),
        };
        let passed = actual == expected;
        depth_results.push(DepthResult {
            depth,
            expected,
            actual,
            passed,
        });

        if passed {
            info!("PASS: {}. Moves {actual}, depth {depth}", entry.fen);
        } else {
            warn!(
                "FAIL: {}. Moves {actual}, expected {expected}, depth {depth}",
                entry.fen
            );
            if !config.keep_going {
                break;
            }
        }
    }

    LineResult {
        line: entry.line,
        fen: entry.fen.clone(),
        depth_results,
    }
}

/// Evaluate every entry, on up to `config.threads` threads.
///
/// Each worker owns the boards it searches; lines are handed out one at a
/// time and the report keeps the order of `entries`.
#[must_use]
pub fn run_suite(entries: &[SuiteEntry], config: &SuiteConfig) -> SuiteReport {
    let threads = config.threads.clamp(1, entries.len().max(1));

    let lines = if threads == 1 {
        entries.iter().map(|entry| run_line(entry, config)).collect()
    } else {
        let next = AtomicUsize::new(0);
        let results: Mutex<Vec<Option<LineResult>>> =
            Mutex::new((0..entries.len()).map(|_| None).collect());

        let worker = || loop {
            let index = next.fetch_add(1, Ordering::Relaxed);
            let Some(entry) = entries.get(index) else {
                break;
            };
            let result = run_line(entry, config);
            results.lock()[index] = Some(result);
        };

        thread::scope(|scope| {
            for id in 1..threads {
                let spawned = thread::Builder::new()
                    .name(format!("suite-worker-{id}"))
                    .spawn_scoped(scope, worker);
                if let Err(err) = spawned {
                    warn!("failed to spawn suite worker {id}: {err}");
                }
            }
            worker();
        });

        results.into_inner().into_iter().flatten().collect()
    };

    let report = SuiteReport { lines };
    info!("Passed: {}", report.passed());
    info!("Failed: {}", report.failed());
    report
}
