// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Reading puzzle input and splitting it into numbered lines

use std::borrow::Cow;
use std::fs::read_to_string;
use std::io;
use std::ops::Range;
use std::path::Path;

/// Puzzle input that has been read fully into memory, along with a name to use in diagnostics
#[derive(Debug, PartialEq, Clone)]
pub struct Source {
    /// The file name, or `stdin`
    pub name: Cow<'static, str>,
    /// The full contents
    pub text: String,
}

/// Read the puzzle input from `path`, or from stdin if `path` is [None] or `-`
pub fn read_input(path: Option<&Path>) -> io::Result<Source> {
    match path {
        Some(path) if path != Path::new("-") => {
            let text = read_to_string(path)?;
            tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
            Ok(Source {
                name: Cow::Owned(path.to_string_lossy().into_owned()),
                text,
            })
        }
        _ => {
            let text = io::read_to_string(io::stdin())?;
            tracing::debug!(bytes = text.len(), "read input from stdin");
            Ok(Source {
                name: Cow::Borrowed("stdin"),
                text,
            })
        }
    }
}

/// A single line of puzzle input
#[derive(Debug, PartialEq, Clone)]
pub struct Line<'a> {
    /// 1-based line number
    pub number: usize,
    /// Byte offsets of `text` within the full input
    pub span: Range<usize>,
    /// The line's contents, without the line terminator
    pub text: &'a str,
}

/// Split `text` into [Line]s, tracking each one's position so errors can point back into it.
///
/// Both `\n` and `\r\n` terminators are stripped. As with [str::lines], a final terminator does
/// not produce an extra empty line.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split_inclusive('\n')
        .scan(0, |offset, raw| {
            let start = *offset;
            *offset += raw.len();
            Some((start, raw))
        })
        .enumerate()
        .map(|(i, (start, raw))| {
            let text = raw.strip_suffix('\n').unwrap_or(raw);
            let text = text.strip_suffix('\r').unwrap_or(text);
            Line {
                number: i + 1,
                span: start..start + text.len(),
                text,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_point_into_source() {
        let text = "abc\r\n\nde\n";
        let found: Vec<_> = lines(text).collect();
        assert_eq!(found.len(), 3);
        for line in &found {
            assert_eq!(&text[line.span.clone()], line.text);
        }
        assert_eq!(
            found[2],
            Line {
                number: 3,
                span: 6..8,
                text: "de"
            }
        );
    }

    #[test]
    fn missing_final_newline() {
        let found: Vec<_> = lines("1\n2").map(|l| l.text).collect();
        assert_eq!(found, ["1", "2"]);
        assert_eq!(lines("").count(), 0);
    }
}
