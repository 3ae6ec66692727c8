// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

use super::Card;
use chumsky::prelude::*;
use std::collections::BTreeSet;

macro_rules! padded {
    ($inner: expr) => {{ $inner.padded_by(text::inline_whitespace()) }};
}

pub(super) type RichErr<'a> = chumsky::extra::Err<Rich<'a, char>>;

fn number<'a>() -> impl Parser<'a, &'a str, u32, RichErr<'a>> + Clone {
    text::digits(10)
        .to_slice()
        .try_map(|s: &str, span| {
            s.parse::<u32>()
                .map_err(|e| Rich::custom(span, format!("error parsing {s} as u32: {e}")))
        })
        .labelled("number")
}

/// A run of numbers separated by any amount of inline whitespace
fn numbers<'a>() -> impl Parser<'a, &'a str, BTreeSet<u32>, RichErr<'a>> + Clone {
    padded!(number())
        .repeated()
        .collect::<Vec<_>>()
        .map(BTreeSet::from_iter)
}

fn header<'a>() -> impl Parser<'a, &'a str, u32, RichErr<'a>> + Clone {
    just("Card")
        .labelled("\"Card\"")
        .ignore_then(text::inline_whitespace().at_least(1))
        .ignore_then(number().labelled("card number"))
        .then_ignore(padded!(just(':')).labelled("colon"))
        .labelled("card header")
        .as_context()
}

pub(super) fn card<'a>() -> impl Parser<'a, &'a str, Card, RichErr<'a>> + Clone {
    padded!(
        header()
            .then(numbers().labelled("winning numbers"))
            .then_ignore(just('|').labelled("'|' separator"))
            .then(numbers().labelled("owned numbers"))
    )
    .map(|((id, winning), owned)| Card { id, winning, owned })
    .labelled("card")
}

/// Cards separated by newlines, followed by any number of blank lines
pub(super) fn grammar<'a>() -> impl Parser<'a, &'a str, Vec<Card>, RichErr<'a>> {
    card()
        .separated_by(text::newline().labelled("newline"))
        .allow_trailing()
        .collect()
        .then_ignore(text::whitespace())
        .then_ignore(end())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set<const N: usize>(nums: [u32; N]) -> BTreeSet<u32> {
        BTreeSet::from(nums)
    }

    #[test]
    fn parse_irregular_spacing() {
        assert_eq!(
            card()
                .parse("Card   3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1")
                .unwrap(),
            Card {
                id: 3,
                winning: set([1, 21, 53, 59, 44]),
                owned: set([69, 82, 63, 72, 16, 21, 14, 1]),
            }
        );
    }

    #[test]
    fn parse_tabs_and_no_padding() {
        assert_eq!(
            card().parse("\tCard\t12:5\t6|7 ").unwrap(),
            Card {
                id: 12,
                winning: set([5, 6]),
                owned: set([7]),
            }
        );
    }

    #[test]
    fn duplicates_collapse() {
        let parsed = card().parse("Card 1: 5 5 5 | 5").unwrap();
        assert_eq!(parsed.winning, set([5]));
    }

    #[test]
    fn reject_malformed() {
        for line in [
            "",
            "Card: 1 | 2",
            "Card1: 1 | 2",
            "Card 1 1 2 | 3",
            "Card 1: 1 2 3",
            "Card 1: 1 | 2 | 3",
            "Card 1: a | 2",
            "Game 1: 1 | 2",
            "Card 1: 99999999999 | 2",
        ] {
            assert!(card().parse(line).has_errors(), "{line:?} parsed");
        }
    }

    #[test]
    fn grammar_allows_trailing_blank_lines() {
        let cards = grammar()
            .parse("Card 1: 1 | 1\r\nCard 2: 2 | 3\n\n\n")
            .unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].id, 2);
        assert!(grammar().parse("").unwrap().is_empty());
    }
}
