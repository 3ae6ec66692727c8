// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Pretty-printed diagnostics for malformed puzzle input, rendered to stderr with [ariadne]

use ariadne::{Color, Fmt, Label, Report, ReportKind, Source};
use chumsky::error::{Rich, RichPattern};
use std::io;

use crate::calibration::CalibrationError;
use crate::cards::CardParseError;

fn report_parse_err(err: &Rich<'_, char>, file: &str, source: &str) -> io::Result<()> {
    use std::fmt::Write;

    let mut builder = Report::build(ReportKind::Error, (file, err.span().into_range()))
        .with_message(format!("Malformed scratchcard in {}", file.fg(Color::Red)));

    if let Some(found) = err.found() {
        builder = builder.with_label(
            Label::new((file, err.span().into_range()))
                .with_message(format!(
                    "Found \'{}\'",
                    found.escape_default().fg(Color::Cyan)
                ))
                .with_color(Color::Yellow),
        );
    } else {
        builder = builder.with_label(
            Label::new((file, err.span().into_range()))
                .with_message("Found end of input")
                .with_color(Color::Yellow),
        );
    }

    let mut expected: Vec<_> = err.expected().collect();
    expected.retain(|pat| !matches!(pat, RichPattern::Label(s) if *s == "inline whitespace"));

    match &expected[..] {
        &[] => (),
        &[pat] => {
            builder = builder.with_note(format!("Expected {}", pat.fg(Color::Blue)));
        }
        pats => {
            let mut note = String::from("Expected one of the following:\n");
            for pat in pats {
                writeln!(&mut note, "- {}", pat.fg(Color::Blue)).expect("can write to &mut String");
            }
            builder = builder.with_note(note);
        }
    }

    builder.finish().eprint((file, Source::from(source)))
}

/// Report every error within `err` against `source`, which is the text that failed to parse
pub fn report_card_err(err: &CardParseError<'_>, file: &str, source: &str) -> io::Result<()> {
    for e in &err.0 {
        report_parse_err(e, file, source)?;
    }
    Ok(())
}

/// Report a line of a calibration document that could not be read
pub fn report_calibration_err(err: &CalibrationError, file: &str, source: &str) -> io::Result<()> {
    match err {
        CalibrationError::NoDigitFound { line, span } => {
            Report::build(ReportKind::Error, (file, span.clone()))
                .with_message(format!(
                    "No calibration value on line {}",
                    line.fg(Color::Red)
                ))
                .with_label(
                    Label::new((file, span.clone()))
                        .with_message("this line contains no digits")
                        .with_color(Color::Yellow),
                )
                .with_note(format!(
                    "pass {} to skip lines like this one",
                    "--skip-invalid".fg(Color::Blue)
                ))
        }
    }
    .finish()
    .eprint((file, Source::from(source)))
}
