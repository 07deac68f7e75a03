//! Validation and sanitisation rules for operator input.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Extension every output file must carry.
pub const AUDIO_EXTENSION: &str = ".wav";

pub const MIN_SPEED: f32 = 0.5;
pub const MAX_SPEED: f32 = 2.0;
pub const DEFAULT_SPEED: f32 = 1.0;

/// Number of leading characters of the text used for the filename slug.
const SLUG_SOURCE_CHARS: usize = 20;

/// Errors that can occur when parsing a speed setting.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpeedError {
    #[error("Speed must be between 0.5 and 2.0")]
    OutOfRange,

    #[error("Please enter a valid number.")]
    NotANumber,
}

/// Accumulates multi-line text until the operator enters a blank line.
#[derive(Debug, Default)]
pub struct TextBuffer {
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no line has been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Feed one line. Returns `true` once the block is complete: a blank
    /// line entered after at least one accumulated line.
    pub fn push(&mut self, line: &str) -> bool {
        if line.trim().is_empty() && !self.lines.is_empty() {
            return true;
        }
        self.lines.push(line.to_string());
        false
    }

    /// Join the block with newlines and trim it. `None` if nothing but
    /// whitespace was entered.
    pub fn finish(self) -> Option<String> {
        let text = self.lines.join("\n").trim().to_string();
        (!text.is_empty()).then_some(text)
    }
}

/// Parse a speed multiplier. An empty answer selects [`DEFAULT_SPEED`].
pub fn parse_speed(input: &str) -> Result<f32, SpeedError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(DEFAULT_SPEED);
    }

    // Range check happens before narrowing so values just outside the
    // bounds cannot round onto them.
    let speed: f64 = input.parse().map_err(|_| SpeedError::NotANumber)?;
    if (f64::from(MIN_SPEED)..=f64::from(MAX_SPEED)).contains(&speed) {
        Ok(speed as f32)
    } else {
        Err(SpeedError::OutOfRange)
    }
}

/// Whether `speed` lies within the accepted range.
pub fn speed_in_range(speed: f32) -> bool {
    (MIN_SPEED..=MAX_SPEED).contains(&speed)
}

/// Build a filename-safe slug from the start of `text`.
///
/// Keeps alphanumerics, spaces, hyphens and underscores from the first 20
/// characters, then collapses whitespace runs into single underscores.
pub fn slugify(text: &str) -> String {
    let kept: String = text
        .chars()
        .take(SLUG_SOURCE_CHARS)
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Default output filename: `tts_<timestamp>_<slug>.wav`.
pub fn default_filename(text: &str, timestamp: NaiveDateTime) -> String {
    let stamp = timestamp.format("%Y%m%d_%H%M%S");
    let slug = slugify(text);

    if slug.is_empty() {
        format!("tts_{stamp}{AUDIO_EXTENSION}")
    } else {
        format!("tts_{stamp}_{slug}{AUDIO_EXTENSION}")
    }
}

/// Append [`AUDIO_EXTENSION`] unless `name` already ends with it.
pub fn ensure_extension(name: &str) -> String {
    if name.ends_with(AUDIO_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}{AUDIO_EXTENSION}")
    }
}

/// `y` or `yes`, case-insensitive.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// `n` or `no`, case-insensitive.
pub fn is_negative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "n" | "no")
}

/// First `max_chars` characters of `text`, with `...` when truncated.
pub fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
