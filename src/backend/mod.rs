//! Boundary to the external KittenTTS model.
//!
//! The model runs in a separate synthesis service; this module provides the
//! trait the session loop depends on and the HTTP implementation that talks
//! to the service.

mod client;
mod types;

pub use client::{BackendConfig, HttpBackend};
pub use types::{BackendError, HealthResponse, LoadError, SynthesizeBody};

use crate::cli::Args;
use crate::session::SynthesisRequest;

/// A loaded text-to-speech model.
///
/// This trait abstracts the synthesis service, allowing the session loop to
/// run against mock implementations in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Backend {
    /// Render `request.text()` and write a playable audio file to
    /// `request.output_path()`.
    fn generate_to_file(&self, request: &SynthesisRequest) -> Result<(), BackendError>;
}

/// Connect to the synthesis service described by `args` and check that the
/// model is ready.
pub fn load_backend(args: &Args) -> Result<HttpBackend, LoadError> {
    HttpBackend::load(BackendConfig::from_args(args))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    use clap::Parser;

    use crate::voice::VoiceCatalog;

    fn request() -> SynthesisRequest {
        let catalog = VoiceCatalog::kitten();
        SynthesisRequest::new(
            "Hello world",
            catalog.default_voice(),
            1.0,
            PathBuf::from("generated_audio/hello.wav"),
        )
        .unwrap()
    }

    // ===========================================
    // Backend trait tests with mocks
    // ===========================================

    #[test]
    fn test_mock_backend_generate_success() {
        let mut mock = MockBackend::new();

        mock.expect_generate_to_file()
            .withf(|req| req.text() == "Hello world" && req.voice().id == "expr-voice-2-f")
            .times(1)
            .returning(|_| Ok(()));

        assert!(mock.generate_to_file(&request()).is_ok());
    }

    #[test]
    fn test_mock_backend_generate_failure() {
        let mut mock = MockBackend::new();

        mock.expect_generate_to_file().times(1).returning(|_| {
            Err(BackendError::ConnectionFailed(
                "Connection refused".to_string(),
            ))
        });

        let result = mock.generate_to_file(&request());
        assert!(matches!(
            result.unwrap_err(),
            BackendError::ConnectionFailed(_)
        ));
    }

    // ===========================================
    // Config-to-backend mapping tests
    // ===========================================

    #[test]
    fn test_backend_config_from_default_args() {
        let args = Args::parse_from(["kitten-tts-cli"]);
        let config = BackendConfig::from_args(&args);

        assert_eq!(config.base_url, "http://localhost:8010");
        assert_eq!(config.model, "KittenML/kitten-tts-nano-0.1");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }
}
