// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Score a pile of scratchcards, then count the copies won by playing them

use aoc23::cards::{Card, OverflowPolicy, Scoring, parse_cards, total_copies};
use aoc23::input::read_input;
use aoc23::logging;
use aoc23::report::report_card_err;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

const VERSION: &str = concat!(env!("CARGO_CRATE_NAME"), '-', env!("CARGO_PKG_VERSION"));

const INPUT_HELP: &str = "File containing the scratchcards\nuses stdin if unset or set to '-'";
const STRICT_HELP: &str = "Fail if a card wins copies of cards past the end of the table\n\
    By default, those copies are dropped";

#[derive(Parser)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_version = VERSION)]
#[command(about = "Scratchcard scoring", long_about = None)]
struct Args {
    #[arg(help = INPUT_HELP.split_once('\n').map_or(INPUT_HELP, |(short, _)| short))]
    #[arg(long_help = INPUT_HELP)]
    input: Option<PathBuf>,
    #[arg(help = "How each card is scored for problem 1")]
    #[arg(short, long)]
    #[arg(default_value = "matches")]
    scoring: Scoring,
    #[arg(help = STRICT_HELP.split_once('\n').map_or(STRICT_HELP, |(short, _)| short))]
    #[arg(long_help = STRICT_HELP)]
    #[arg(long)]
    strict_bonus: bool,
    #[arg(help = "Increase log verbosity (may be repeated)")]
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
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
            eprintln!("Failed to read scratchcards from {file}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let cards = match parse_cards(&source.text) {
        Ok(cards) => cards,
        Err(e) => {
            if let Err(io_err) = report_card_err(&e, &source.name, &source.text) {
                eprintln!("{e} ({io_err} while reporting it)");
            }
            return ExitCode::FAILURE;
        }
    };

    let problem1 = args.scoring.total(&cards);

    let policy = if args.strict_bonus {
        OverflowPolicy::Strict
    } else {
        OverflowPolicy::Clip
    };
    let matches: Vec<usize> = cards.iter().map(Card::matches).collect();
    let problem2 = match total_copies(&matches, policy) {
        Ok(n) => n,
        Err(e) => {
            let id = cards[e.card()].id;
            eprintln!("Card {id}: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Problem1: {problem1}");
    println!("Problem2: {problem2}");
    ExitCode::SUCCESS
}
