//! Terminal presentation: banner, voice listing and summaries.

use std::io::{self, Write};
use std::path::Path;

use crate::session::RunSummary;
use crate::voice::VoiceCatalog;

const RULE_WIDTH: usize = 60;
const LIST_RULE_WIDTH: usize = 40;

/// Horizontal rule of `=` characters.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Welcome banner shown once at start-up.
pub fn print_banner(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", rule())?;
    writeln!(out, "🐱 KittenTTS Interactive Demo 🐱")?;
    writeln!(out, "{}", rule())?;
    writeln!(out, "Welcome to KittenTTS - Ultra-lightweight Text-to-Speech!")?;
    writeln!(out, "Features: 15M parameters • CPU-optimized • High quality")?;
    writeln!(out, "{}", rule())?;
    writeln!(out)
}

/// Numbered voice listing, marking the default voice.
pub fn print_voices(out: &mut impl Write, catalog: &VoiceCatalog) -> io::Result<()> {
    writeln!(out, "🎵 Available Voices:")?;
    writeln!(out, "{}", "-".repeat(LIST_RULE_WIDTH))?;

    for (number, voice) in catalog.voices().iter().enumerate() {
        let marker = if catalog.is_default(voice) {
            " (default)"
        } else {
            ""
        };
        writeln!(
            out,
            "{:2}. {:<15} - {}{}",
            number + 1,
            voice.id,
            voice.description,
            marker
        )?;
    }

    writeln!(out, "{}", "-".repeat(LIST_RULE_WIDTH))?;
    writeln!(out)
}

/// Format a byte count with thousands separators, e.g. `1,234,567`.
pub fn format_bytes(bytes: u64) -> String {
    let digits = bytes.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Closing summary printed when the operator stops.
pub fn print_summary(out: &mut impl Write, summary: &RunSummary, output_dir: &Path) -> io::Result<()> {
    let location = std::path::absolute(output_dir).unwrap_or_else(|_| output_dir.to_path_buf());

    writeln!(
        out,
        "\n👋 Demo completed! Generated {} audio file(s) in {} session(s).",
        summary.succeeded, summary.sessions
    )?;
    writeln!(out, "Audio files saved in: {}", location.display())
}
