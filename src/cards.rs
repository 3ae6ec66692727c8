// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Scratchcard scoring, as described in [Day 4]
//!
//! Each card has a set of winning numbers and a set of numbers the player owns. A card's
//! [matches](Card::matches) are the owned numbers which are also winning numbers.
//!
//! For part 2, a card with `n` matches wins one copy of each of the next `n` cards, and every
//! copy of a card wins its own copies in turn. [copy_counts] works this out in a single pass.
//!
//! [Day 4]: https://adventofcode.com/2023/day/4

use chumsky::{Parser, error::Rich};
use itertools::Itertools;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{self, Display};

mod parsers;

/// A single scratchcard
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Card {
    /// The number written after `Card`
    pub id: u32,
    /// Numbers to the left of the `|`
    pub winning: BTreeSet<u32>,
    /// Numbers to the right of the `|`
    pub owned: BTreeSet<u32>,
}

impl Card {
    /// Number of owned numbers that are also winning numbers
    ///
    /// ```
    /// use aoc23::cards::parse_card;
    /// let card = parse_card("Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53").unwrap();
    /// assert_eq!(card.matches(), 4);
    /// ```
    pub fn matches(&self) -> usize {
        self.winning.intersection(&self.owned).count()
    }

    /// Point value of the card: one point for the first match, doubled for each match after.
    ///
    /// Saturates at [u64::MAX].
    pub fn points(&self) -> u64 {
        match self.matches() {
            0 => 0,
            n => u32::try_from(n - 1)
                .ok()
                .and_then(|shift| 1u64.checked_shl(shift))
                .unwrap_or(u64::MAX),
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Card {}: {} | {}",
            self.id,
            self.winning.iter().format(" "),
            self.owned.iter().format(" ")
        )
    }
}

/// A failure to parse scratchcards, wrapping the errors reported by the parser.
///
/// Spans within the errors are byte offsets into the parsed text.
#[derive(Debug)]
pub struct CardParseError<'a>(pub Vec<Rich<'a, char>>);

impl Display for CardParseError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed card")?;
        if let Some(err) = self.0.first() {
            write!(f, " at {:?}: {err}", err.span().into_range())?;
        }
        Ok(())
    }
}

impl Error for CardParseError<'_> {}

/// Parse a single line of the form `Card <id>: <winning numbers> | <owned numbers>`
pub fn parse_card(line: &str) -> Result<Card, CardParseError<'_>> {
    parsers::card()
        .parse(line)
        .into_result()
        .map_err(CardParseError)
}

/// Parse every card in `text`, one per line, in order
pub fn parse_cards(text: &str) -> Result<Vec<Card>, CardParseError<'_>> {
    let cards = parsers::grammar()
        .parse(text)
        .into_result()
        .map_err(CardParseError)?;
    tracing::debug!(cards = cards.len(), "parsed scratchcards");
    Ok(cards)
}

/// How problem 1 scores each card
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Scoring {
    /// Each card is worth its number of matches
    #[default]
    Matches,
    /// Each card is worth its [points](Card::points)
    Points,
}

impl Scoring {
    /// Score a single card
    pub fn score(self, card: &Card) -> u64 {
        match self {
            Scoring::Matches => card.matches() as u64,
            Scoring::Points => card.points(),
        }
    }

    /// Sum the scores of all `cards`, saturating at [u64::MAX]
    pub fn total<'c>(self, cards: impl IntoIterator<Item = &'c Card>) -> u64 {
        cards
            .into_iter()
            .map(|card| self.score(card))
            .fold(0, u64::saturating_add)
    }
}

/// What to do when a card would win copies of cards past the end of the table
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OverflowPolicy {
    /// Drop the copies that would go past the last card
    #[default]
    Clip,
    /// Fail with [CopyError::PastLastCard]
    Strict,
}

/// A failure to work out how many copies of each card are held
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CopyError {
    /// A card won copies of cards past the end of the table, under [OverflowPolicy::Strict]
    PastLastCard {
        /// 0-based index of the offending card
        card: usize,
        /// 0-based index of the last card it would win a copy of
        reach: usize,
        /// Total number of cards
        cards: usize,
    },
    /// The number of copies held no longer fits in a [u64]
    CountOverflow {
        /// 0-based index of the card whose copies could not be counted
        card: usize,
    },
}

impl CopyError {
    /// 0-based index of the card being processed when the error occurred
    pub const fn card(&self) -> usize {
        match self {
            CopyError::PastLastCard { card, .. } | CopyError::CountOverflow { card } => *card,
        }
    }
}

impl Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyError::PastLastCard { card, reach, cards } => write!(
                f,
                "card at index {card} wins copies up to index {reach}, but there are only {cards} cards"
            ),
            CopyError::CountOverflow { card } => {
                write!(f, "copies of card at index {card} overflow a 64-bit count")
            }
        }
    }
}

impl Error for CopyError {}

/// Work out how many copies of each card end up being held, given each card's match count.
///
/// Every card starts with a single copy. Cards are visited in order, and each copy of card `i`
/// with `m` matches adds one copy to each of cards `i+1` through `i+m`.
///
/// ```
/// use aoc23::cards::{OverflowPolicy, copy_counts};
/// assert_eq!(
///     copy_counts(&[4, 2, 2, 1, 0, 0], OverflowPolicy::Strict).unwrap(),
///     vec![1, 2, 4, 8, 14, 1]
/// );
/// ```
pub fn copy_counts(matches: &[usize], policy: OverflowPolicy) -> Result<Vec<u64>, CopyError> {
    let mut counts = vec![1u64; matches.len()];
    for (i, &won) in matches.iter().enumerate() {
        let current = counts[i];
        let reach = i.saturating_add(won);
        if reach >= matches.len() && policy == OverflowPolicy::Strict {
            return Err(CopyError::PastLastCard {
                card: i,
                reach,
                cards: matches.len(),
            });
        }
        let bonus = &mut counts[i + 1..=reach.min(matches.len() - 1)];
        for (j, count) in (i + 1..).zip(bonus.iter_mut()) {
            *count = count
                .checked_add(current)
                .ok_or(CopyError::CountOverflow { card: j })?;
        }
        tracing::trace!(card = i, matches = won, copies = current, ?bonus, "propagated bonus");
    }
    Ok(counts)
}

/// Total number of cards held once all bonus copies are won
pub fn total_copies(matches: &[usize], policy: OverflowPolicy) -> Result<u64, CopyError> {
    copy_counts(matches, policy)?
        .into_iter()
        .enumerate()
        .try_fold(0u64, |total, (card, count)| {
            total
                .checked_add(count)
                .ok_or(CopyError::CountOverflow { card })
        })
}
