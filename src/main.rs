use std::env;
use std::process::ExitCode;

use mailbox_chess::suite::{load_suite, run_suite, SuiteConfig};

fn main() -> ExitCode {
    let config = match SuiteConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            eprintln!(
                "usage: mailbox_chess [--depth N] [--threads N] [--lenient] [--copy] [--keep-going] [SUITE]"
            );
            return ExitCode::from(2);
        }
    };

    let entries = match load_suite(&config.path, config.fen_mode) {
        Ok(entries) => entries,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let report = run_suite(&entries, &config);
    for line in &report.lines {
        for result in &line.depth_results {
            let status = if result.passed { "PASS" } else { "FAIL" };
            println!(
                "{status}: {}. Moves {}, depth {}",
                line.fen, result.actual, result.depth
            );
        }
    }
    println!("Passed: {}", report.passed());
    println!("Failed: {}", report.failed());

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
