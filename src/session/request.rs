//! Validated synthesis request and per-session outcome.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::voice::Voice;

use super::input::{AUDIO_EXTENSION, speed_in_range};

/// Reasons a synthesis request cannot be built.
#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Speed {0} is outside 0.5..=2.0")]
    SpeedOutOfRange(f32),

    #[error("Output path must end with .wav: {}", .0.display())]
    BadExtension(PathBuf),
}

/// A fully validated request, ready for the model.
///
/// Fields are private so a request can only exist once every input rule has
/// been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    text: String,
    voice: &'static Voice,
    speed: f32,
    output_path: PathBuf,
}

impl SynthesisRequest {
    pub fn new(
        text: impl Into<String>,
        voice: &'static Voice,
        speed: f32,
        output_path: impl Into<PathBuf>,
    ) -> Result<Self, RequestError> {
        let text = text.into();
        let output_path = output_path.into();

        if text.trim().is_empty() {
            return Err(RequestError::EmptyText);
        }

        if !speed_in_range(speed) {
            return Err(RequestError::SpeedOutOfRange(speed));
        }

        let has_extension = output_path
            .to_str()
            .is_some_and(|p| p.ends_with(AUDIO_EXTENSION));
        if !has_extension {
            return Err(RequestError::BadExtension(output_path));
        }

        Ok(Self {
            text,
            voice,
            speed,
            output_path,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn voice(&self) -> &'static Voice {
        self.voice
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Result of one session's synthesis attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionOutcome {
    pub succeeded: bool,
    pub output_path: PathBuf,
    /// Size of the written file, when the session succeeded.
    pub byte_size: Option<u64>,
    /// Audio length read from the WAV header, when readable.
    pub duration_secs: Option<f32>,
}

impl SessionOutcome {
    pub fn failed(output_path: impl Into<PathBuf>) -> Self {
        Self {
            succeeded: false,
            output_path: output_path.into(),
            byte_size: None,
            duration_secs: None,
        }
    }
}

/// Totals reported when the session loop ends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Sessions that reached the synthesis step.
    pub sessions: u32,
    /// Sessions whose audio file was written.
    pub succeeded: u32,
    /// Whether the loop ended on the operator's abort signal.
    pub aborted: bool,
}
