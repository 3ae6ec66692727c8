// SPDX-FileCopyrightText: 2026 Eli Array Minkoff
//
// SPDX-License-Identifier: 0BSD

//! Log setup shared by the binaries

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Level used for each `-v` given on the command line, saturating at the last
const LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Filter directives enabling both the library and the binary named `bin` at `verbosity`
fn directives(bin: &str, verbosity: u8) -> String {
    let level = LEVELS[usize::from(verbosity).min(LEVELS.len() - 1)];
    format!("aoc23={level},{bin}={level}")
}

/// Install a global subscriber which logs to stderr, leaving stdout for the answers.
///
/// `bin` is the calling binary's crate name, so that its own events pass the filter.
/// `RUST_LOG` takes priority over `verbosity` when it is set.
pub fn init(bin: &str, verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(bin, verbosity)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}
