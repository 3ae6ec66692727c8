// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Sum the calibration values of a document, first with digits only, then with spelled-out digits

use aoc23::calibration::{CalibrationError, Calibrator, Mode};
use aoc23::input::{Source, read_input};
use aoc23::logging;
use aoc23::report::report_calibration_err;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str = "File containing the calibration document\nuses stdin if unset or set to '-'";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Trebuchet calibration value summation", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_once('\n').map_or(INPUT_HELP, |(short, _)| short))]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "Skip lines without any digits instead of failing")]
    #[arg(long)]
    skip_invalid: bool,
    #[arg(help = "Increase log verbosity (may be repeated)")]
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn solve(calibrator: Calibrator, source: &Source) -> Result<u64, ExitCode> {
    match calibrator.sum(&source.text) {
        Ok(sum) => {
            if sum.skipped > 0 {
                tracing::warn!(
                    skipped = sum.skipped,
                    mode = ?calibrator.mode(),
                    "some lines had no calibration value"
                );
            }
            Ok(sum.total)
        }
        Err(e @ CalibrationError::NoDigitFound { .. }) => {
            if let Err(io_err) = report_calibration_err(&e, &source.name, &source.text) {
                eprintln!("{e} ({io_err} while reporting it)");
            }
            Err(ExitCode::FAILURE)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(env!("CARGO_CRATE_NAME"), args.verbose);

    let source = match read_input(args.input.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            let file = args
                .input
                .as_deref()
                .map_or_else(|| "stdin".into(), |p| p.to_string_lossy());
            eprintln!("Failed to read calibration document from {file}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let [digits, words] = [Mode::Digits, Mode::Words]
        .map(|mode| Calibrator::new(mode).skip_invalid(args.skip_invalid));

    let problem1 = match solve(digits, &source) {
        Ok(n) => n,
        Err(code) => return code,
    };
    let problem2 = match solve(words, &source) {
        Ok(n) => n,
        Err(code) => return code,
    };

    println!("Problem 1 solution: {problem1}");
    println!("Problem 2 solution: {problem2}");
    ExitCode::SUCCESS
}
