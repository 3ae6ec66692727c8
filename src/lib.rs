// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD
#![warn(missing_docs)]

//! Library providing solvers for two [Advent of Code 2023] puzzles
//!
//! [Day 1] recovers "calibration values" from lines of text, and [Day 4] scores scratchcards.
//! Both read their puzzle input line by line, and both come with a small command-line front end
//! (`calibrate` and `scratchcards`) when the `cli` feature is enabled.
//!
//! # Example
//!
//! ```rust
//! use aoc23::prelude::*;
//!
//! let calibrator = Calibrator::new(Mode::Words);
//! let sum = calibrator.sum("two1nine\neightwothree\n").unwrap();
//! assert_eq!(sum.total, 29 + 83);
//!
//! let cards = parse_cards("Card 1: 41 48 | 48 83\nCard 2: 1 | 2\n").unwrap();
//! let matches: Vec<usize> = cards.iter().map(Card::matches).collect();
//! assert_eq!(matches, vec![1, 0]);
//! assert_eq!(total_copies(&matches, OverflowPolicy::Clip).unwrap(), 3);
//! ```
//!
//! [Advent of Code 2023]: https://adventofcode.com/2023
//! [Day 1]: https://adventofcode.com/2023/day/1
//! [Day 4]: https://adventofcode.com/2023/day/4

pub mod calibration;
pub mod cards;
pub mod input;

#[cfg(feature = "cli")]
pub mod logging;

#[cfg(feature = "cli")]
pub mod report;

/// A small module that re-exports the items needed to solve either puzzle
pub mod prelude {
    pub use crate::calibration::{CalibrationError, CalibrationSum, Calibrator, Mode};
    pub use crate::cards::{
        Card, CardParseError, CopyError, OverflowPolicy, Scoring, copy_counts, parse_card,
        parse_cards, total_copies,
    };
    pub use crate::input::{Line, Source, lines, read_input};
}
