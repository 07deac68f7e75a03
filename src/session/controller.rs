//! Interactive session loop.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::backend::Backend;
use crate::cli::{format_bytes, print_voices, rule};
use crate::voice::{Voice, VoiceCatalog};

use super::input::{
    TextBuffer, default_filename, ensure_extension, is_affirmative, is_negative, parse_speed,
    preview,
};
use super::prompt::{Prompt, PromptError};
use super::request::{RequestError, RunSummary, SessionOutcome, SynthesisRequest};

/// Characters of text echoed back after entry.
const TEXT_PREVIEW_CHARS: usize = 100;
/// Characters of text shown in the generation summary.
const GENERATION_PREVIEW_CHARS: usize = 50;

/// Errors that end the session loop.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Aborted by operator")]
    Aborted,

    #[error("Input error: {0}")]
    Input(String),

    #[error("Invalid request: {0}")]
    Request(#[from] RequestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<PromptError> for SessionError {
    fn from(err: PromptError) -> Self {
        match err {
            err if err.is_abort() => SessionError::Aborted,
            PromptError::Io(msg) => SessionError::Input(msg),
            other => SessionError::Input(other.to_string()),
        }
    }
}

/// Drives repeated synthesis sessions until the operator stops.
pub struct SessionController<B: Backend, P: Prompt, W: Write> {
    backend: B,
    prompt: P,
    out: W,
    catalog: VoiceCatalog,
    output_dir: PathBuf,
    summary: RunSummary,
}

impl<B: Backend, P: Prompt, W: Write> SessionController<B, P, W> {
    /// Create a controller writing audio under `output_dir`.
    pub fn new(backend: B, prompt: P, out: W, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            backend,
            prompt,
            out,
            catalog: VoiceCatalog::kitten(),
            output_dir: output_dir.into(),
            summary: RunSummary::default(),
        }
    }

    /// Everything written to the terminal so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// Run sessions until the operator declines to continue or aborts.
    ///
    /// An abort is reported through [`RunSummary::aborted`], not as an error.
    pub fn run(&mut self) -> Result<RunSummary, SessionError> {
        match self.run_loop() {
            Ok(()) => Ok(self.summary.clone()),
            Err(SessionError::Aborted) => {
                info!("Operator aborted after {} session(s)", self.summary.sessions);
                self.summary.aborted = true;
                Ok(self.summary.clone())
            }
            Err(e) => Err(e),
        }
    }

    fn run_loop(&mut self) -> Result<(), SessionError> {
        loop {
            let number = self.summary.sessions + 1;
            writeln!(self.out, "\n{} Session {} {}", "=".repeat(20), number, "=".repeat(20))?;

            let outcome = self.run_session()?;
            self.summary.sessions = number;

            if outcome.succeeded {
                self.summary.succeeded += 1;
                writeln!(self.out, "\n🎉 Session {number} completed!")?;
            } else {
                writeln!(self.out, "\n😞 Session {number} failed.")?;
            }

            if !self.ask_continue()? {
                return Ok(());
            }
        }
    }

    /// One full session: collect inputs, synthesize, report.
    pub fn run_session(&mut self) -> Result<SessionOutcome, SessionError> {
        let text = self.collect_text()?;
        writeln!(self.out, "\n📋 Text: {}", preview(&text, TEXT_PREVIEW_CHARS))?;

        print_voices(&mut self.out, &self.catalog)?;
        let voice = self.collect_voice()?;
        let speed = self.collect_speed()?;
        let output_path = self.collect_output_path(&text)?;

        let request = SynthesisRequest::new(text, voice, speed, output_path)?;
        self.synthesize(&request)
    }

    /// Read lines until a blank line follows some text.
    ///
    /// Re-prompts from scratch when only whitespace was entered.
    pub fn collect_text(&mut self) -> Result<String, SessionError> {
        loop {
            writeln!(self.out, "📝 Text Input:")?;
            writeln!(self.out, "Enter the text you want to convert to speech:")?;
            writeln!(self.out, "(Press Enter twice when done, or Ctrl+C to exit)")?;
            writeln!(self.out)?;

            let mut buffer = TextBuffer::new();
            loop {
                let marker = if buffer.is_empty() { "> " } else { "  " };
                let line = self.prompt.read_line(marker)?;
                if buffer.push(&line) {
                    break;
                }
            }

            match buffer.finish() {
                Some(text) => return Ok(text),
                None => writeln!(self.out, "❌ No text entered. Please try again.")?,
            }
        }
    }

    /// Ask for a voice number; empty selects the catalog default.
    pub fn collect_voice(&mut self) -> Result<&'static Voice, SessionError> {
        writeln!(self.out, "🎭 Voice Selection:")?;
        let question = format!(
            "Choose voice (1-{}, or Enter for default): ",
            self.catalog.len()
        );

        loop {
            let answer = self.prompt.read_line(&question)?;
            match self.catalog.parse_selection(&answer) {
                Ok(voice) => {
                    if !answer.trim().is_empty() {
                        writeln!(self.out, "Selected: {}", voice.id)?;
                    }
                    return Ok(voice);
                }
                Err(e) => writeln!(self.out, "❌ {e}")?,
            }
        }
    }

    /// Ask for a speed multiplier; empty selects 1.0.
    pub fn collect_speed(&mut self) -> Result<f32, SessionError> {
        writeln!(self.out, "\n⚡ Speed Setting:")?;

        loop {
            let answer = self
                .prompt
                .read_line("Speech speed (0.5-2.0, or Enter for 1.0): ")?;
            match parse_speed(&answer) {
                Ok(speed) => return Ok(speed),
                Err(e) => writeln!(self.out, "❌ {e}")?,
            }
        }
    }

    /// Resolve the output file, asking before overwriting an existing one.
    ///
    /// Declining an overwrite asks for another name. This does not give up
    /// on its own.
    pub fn collect_output_path(&mut self, text: &str) -> Result<PathBuf, SessionError> {
        fs::create_dir_all(&self.output_dir)?;

        let default_path = self
            .output_dir
            .join(default_filename(text, Local::now().naive_local()));

        writeln!(self.out, "\n💾 Output File:")?;
        writeln!(self.out, "Default: {}", default_path.display())?;

        loop {
            let answer = self
                .prompt
                .read_line("Custom filename (or Enter for default): ")?;
            let answer = answer.trim();

            let path = if answer.is_empty() {
                default_path.clone()
            } else {
                self.output_dir.join(ensure_extension(answer))
            };

            if path.exists() {
                let confirm = self.prompt.read_line("File exists. Overwrite? (y/N): ")?;
                if !is_affirmative(&confirm) {
                    debug!("Declined overwrite of {}", path.display());
                    continue;
                }
            }

            return Ok(path);
        }
    }

    /// Hand the request to the model and report what happened.
    pub fn synthesize(&mut self, request: &SynthesisRequest) -> Result<SessionOutcome, SessionError> {
        let path = request.output_path();

        writeln!(self.out, "\n🎙️  Generating speech...")?;
        writeln!(
            self.out,
            "   Text: {}",
            preview(request.text(), GENERATION_PREVIEW_CHARS)
        )?;
        writeln!(self.out, "   Voice: {}", request.voice().id)?;
        writeln!(self.out, "   Speed: {:?}x", request.speed())?;
        writeln!(self.out, "   Output: {}", path.display())?;
        writeln!(self.out)?;

        info!(
            "Synthesizing {} chars with {} at {}x to {}",
            request.text().chars().count(),
            request.voice().id,
            request.speed(),
            path.display()
        );

        if let Err(e) = self.backend.generate_to_file(request) {
            error!("Synthesis failed for {}: {e}", path.display());
            writeln!(self.out, "❌ Error generating audio. See the log for details.")?;
            return Ok(SessionOutcome::failed(path));
        }

        let Ok(metadata) = fs::metadata(path) else {
            warn!("Model reported success but {} is missing", path.display());
            writeln!(self.out, "❌ Error: Output file was not created.")?;
            return Ok(SessionOutcome::failed(path));
        };

        let byte_size = metadata.len();
        let duration_secs = wav_duration(path);

        writeln!(self.out, "✅ Audio generated successfully!")?;
        writeln!(self.out, "   File: {}", path.display())?;
        writeln!(self.out, "   Size: {} bytes", format_bytes(byte_size))?;
        if let Some(secs) = duration_secs {
            writeln!(self.out, "   Duration: {secs:.2}s")?;
        }

        info!("Wrote {byte_size} bytes to {}", path.display());

        Ok(SessionOutcome {
            succeeded: true,
            output_path: path.to_path_buf(),
            byte_size: Some(byte_size),
            duration_secs,
        })
    }

    /// Anything other than an explicit no continues.
    pub fn ask_continue(&mut self) -> Result<bool, SessionError> {
        writeln!(self.out, "\n{}", rule())?;
        let answer = self.prompt.read_line("Generate another audio file? (Y/n): ")?;
        Ok(!is_negative(&answer))
    }
}

/// Length of a WAV file in seconds, if its header can be read.
fn wav_duration(path: &Path) -> Option<f32> {
    let reader = hound::WavReader::open(path).ok()?;
    let sample_rate = reader.spec().sample_rate;
    if sample_rate == 0 {
        return None;
    }
    Some(reader.duration() as f32 / sample_rate as f32)
}
