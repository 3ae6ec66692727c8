// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Recovery of calibration values, as described in [Day 1]
//!
//! Each line of the calibration document hides a two-digit number: its first digit followed by
//! its last digit. In [Mode::Words], digits may also be spelled out, and spelled-out digits may
//! share letters, so `"oneight"` contains both a `1` and an `8`.
//!
//! ```
//! use aoc23::calibration::{Mode, calibration_value};
//! assert_eq!(calibration_value("a1b2c3d4e5f", Mode::Digits), Some(15));
//! assert_eq!(calibration_value("eightwothree", Mode::Words), Some(83));
//! assert_eq!(calibration_value("eightwothree", Mode::Digits), None);
//! ```
//!
//! [Day 1]: https://adventofcode.com/2023/day/1

use std::error::Error;
use std::fmt::{self, Display};
use std::ops::Range;

use crate::input::lines;

/// Spelled-out digits, indexed by their value minus one
const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Which tokens count as digits when scanning a line
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Mode {
    /// Only the ASCII digits `0` through `9`
    Digits,
    /// ASCII digits, as well as the words `one` through `nine`
    Words,
}

/// The digit whose spelling or ASCII character starts at the beginning of `rest`, if any
fn digit_at(rest: &str, mode: Mode) -> Option<u8> {
    let first = rest.as_bytes().first()?;
    if first.is_ascii_digit() {
        return Some(first - b'0');
    }
    match mode {
        Mode::Digits => None,
        Mode::Words => WORDS
            .iter()
            .position(|word| rest.starts_with(word))
            .map(|i| i as u8 + 1),
    }
}

/// Yield every digit in `line`, in order, including those that overlap.
///
/// Every position is checked for the start of a digit, and a match never causes later positions
/// to be skipped.
///
/// ```
/// use aoc23::calibration::{Mode, scan};
/// assert_eq!(scan("oneight2", Mode::Words).collect::<Vec<_>>(), vec![1, 8, 2]);
/// assert_eq!(scan("oneight2", Mode::Digits).collect::<Vec<_>>(), vec![2]);
/// ```
pub fn scan(line: &str, mode: Mode) -> impl Iterator<Item = u8> + '_ {
    line.char_indices()
        .filter_map(move |(i, _)| digit_at(&line[i..], mode))
}

/// The calibration value of `line`, or [None] if it contains no digits
pub fn calibration_value(line: &str, mode: Mode) -> Option<u32> {
    let mut digits = scan(line, mode);
    let first = digits.next()?;
    let last = digits.last().unwrap_or(first);
    Some(u32::from(first) * 10 + u32::from(last))
}

/// An error encountered while summing calibration values
#[derive(Debug, PartialEq, Clone)]
pub enum CalibrationError {
    /// A line contained nothing that could be read as a digit
    NoDigitFound {
        /// 1-based line number
        line: usize,
        /// Byte offsets of the line within the input
        span: Range<usize>,
    },
}

impl Display for CalibrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalibrationError::NoDigitFound { line, .. } => {
                write!(f, "no digit found on line {line}")
            }
        }
    }
}

impl Error for CalibrationError {}

/// The result of summing a calibration document
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct CalibrationSum {
    /// Sum of all calibration values
    pub total: u64,
    /// Number of lines which contributed to `total`
    pub counted: usize,
    /// Number of lines without any digits that were skipped
    pub skipped: usize,
}

/// Sums the calibration values of each line in a document
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Calibrator {
    mode: Mode,
    skip_invalid: bool,
}

impl Calibrator {
    /// Create a new calibrator which fails on the first line without a digit
    pub const fn new(mode: Mode) -> Self {
        Self {
            mode,
            skip_invalid: false,
        }
    }

    /// Set whether lines without digits are skipped (and logged) rather than treated as errors
    pub const fn skip_invalid(self, skip_invalid: bool) -> Self {
        Self {
            skip_invalid,
            ..self
        }
    }

    /// The scanning mode in use
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Sum the calibration values of every line in `text`
    pub fn sum(&self, text: &str) -> Result<CalibrationSum, CalibrationError> {
        let mut sum = CalibrationSum::default();
        for line in lines(text) {
            match calibration_value(line.text, self.mode) {
                Some(value) => {
                    tracing::debug!(line = line.number, value, "calibration value");
                    sum.total += u64::from(value);
                    sum.counted += 1;
                }
                None if self.skip_invalid => {
                    tracing::warn!(line = line.number, "skipping line with no digits");
                    sum.skipped += 1;
                }
                None => {
                    return Err(CalibrationError::NoDigitFound {
                        line: line.number,
                        span: line.span,
                    });
                }
            }
        }
        tracing::info!(mode = ?self.mode, ?sum, "summed calibration document");
        Ok(sum)
    }
}
