//! Test that examples from Advent of Code problem descriptions behave as described.
// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use aoc23::prelude::*;
use itertools::Itertools;

// first, the example inputs, copied from the problem descriptions

const DAY1_PART1: &str = "\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

const DAY1_PART2: &str = "\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

const DAY4: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

/// Check each line's calibration value, then the total
fn check_calibration(text: &str, mode: Mode, expected: &[u32], total: u64) {
    lines(text)
        .zip_eq(expected)
        .for_each(|(line, &value)| {
            assert_eq!(
                aoc23::calibration::calibration_value(line.text, mode),
                Some(value),
                "line {}: {:?}",
                line.number,
                line.text
            )
        });
    let sum = Calibrator::new(mode).sum(text).unwrap();
    assert_eq!(sum.total, total);
    assert_eq!(sum.counted, expected.len());
}

fn day4_cards() -> Vec<Card> {
    parse_cards(DAY4).unwrap()
}

mod day1_examples {
    mod part1 {
        use crate::*;

        /// > the calibration values of these four lines are 12, 38, 15, and 77. Adding these
        /// > together produces 142.
        #[test]
        fn calibration_values() {
            check_calibration(DAY1_PART1, Mode::Digits, &[12, 38, 15, 77], 142);
        }

        /// Spelled-out digits are not digits yet
        #[test]
        fn words_are_not_digits() {
            assert_eq!(
                Calibrator::new(Mode::Digits).sum("two1nine\neightwothree\n"),
                Err(CalibrationError::NoDigitFound {
                    line: 2,
                    span: 9..21
                })
            );
        }
    }

    mod part2 {
        use crate::*;

        /// > the calibration values are 29, 83, 13, 24, 42, 14, and 76. Adding these together
        /// > produces 281.
        #[test]
        fn calibration_values() {
            check_calibration(
                DAY1_PART2,
                Mode::Words,
                &[29, 83, 13, 24, 42, 14, 76],
                281,
            );
        }

        /// Part 1's example has no spelled-out digits, so both modes agree on it
        #[test]
        fn part1_example_unchanged() {
            check_calibration(DAY1_PART1, Mode::Words, &[12, 38, 15, 77], 142);
        }
    }
}

mod day4_examples {
    mod part1 {
        use crate::*;

        #[test]
        fn match_counts() {
            let cards = day4_cards();
            assert_eq!(
                cards.iter().map(|c| c.id).collect::<Vec<_>>(),
                vec![1, 2, 3, 4, 5, 6]
            );
            assert_eq!(
                cards.iter().map(Card::matches).collect::<Vec<_>>(),
                vec![4, 2, 2, 1, 0, 0]
            );
            assert_eq!(Scoring::Matches.total(&cards), 9);
        }

        /// > So, in this example, the Elf's pile of scratchcards is worth 13 points.
        #[test]
        fn points() {
            let cards = day4_cards();
            cards
                .iter()
                .map(Card::points)
                .zip_eq([8, 2, 2, 1, 0, 0])
                .for_each(|(found, expected)| assert_eq!(found, expected));
            assert_eq!(Scoring::Points.total(&cards), 13);
        }
    }

    mod part2 {
        use crate::*;

        /// > Once all of the originals and copies have been processed, you end up with 1
        /// > instance of card 1, 2 instances of card 2, 4 instances of card 3, 8 instances of
        /// > card 4, 14 instances of card 5, and 1 instance of card 6. In total, this example
        /// > pile of scratchcards causes you to ultimately have 30 scratchcards!
        #[test]
        fn copies() {
            let matches: Vec<usize> = day4_cards().iter().map(Card::matches).collect();
            for policy in [OverflowPolicy::Clip, OverflowPolicy::Strict] {
                assert_eq!(
                    copy_counts(&matches, policy).unwrap(),
                    vec![1, 2, 4, 8, 14, 1]
                );
                assert_eq!(total_copies(&matches, policy).unwrap(), 30);
            }
        }

        /// With only the first four cards, card 1 wins a copy of a card 5 that isn't there
        #[test]
        fn truncated_table() {
            let matches: Vec<usize> = day4_cards()
                .iter()
                .take(4)
                .map(Card::matches)
                .collect();
            assert_eq!(
                total_copies(&matches, OverflowPolicy::Strict),
                Err(CopyError::PastLastCard {
                    card: 0,
                    reach: 4,
                    cards: 4
                })
            );
            assert_eq!(total_copies(&matches, OverflowPolicy::Clip).unwrap(), 15);
        }
    }

    #[test]
    fn malformed_line_is_located() {
        use crate::*;
        let text = DAY4.replacen("Card 3:", "Card 3 ", 1);
        let Err(CardParseError(errs)) = parse_cards(&text) else {
            panic!("parsed malformed input");
        };
        let third_line = lines(&text).nth(2).unwrap();
        assert!(
            errs.iter()
                .all(|e| third_line.span.contains(&e.span().into_range().start)),
            "{errs:?}"
        );
    }
}
