//! CLI argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Default model identifier requested from the synthesis service.
pub const DEFAULT_MODEL: &str = "KittenML/kitten-tts-nano-0.1";

/// Default directory for generated audio.
pub const DEFAULT_OUTPUT_DIR: &str = "generated_audio";

/// Interactive text-to-speech with KittenTTS.
#[derive(Parser, Debug, Clone)]
#[command(name = "kitten-tts-cli")]
#[command(about = "Interactive text-to-speech generation with KittenTTS")]
#[command(version)]
pub struct Args {
    /// Synthesis service host address
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// Synthesis service port
    #[arg(long, default_value_t = 8010)]
    pub port: u16,

    /// Model to request from the synthesis service
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Directory where generated audio files are written
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 120)]
    pub timeout: u64,

    /// List available voices and exit
    #[arg(long)]
    pub list_voices: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Base URL of the synthesis service.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}
