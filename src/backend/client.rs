//! HTTP client for the KittenTTS synthesis service.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::cli::Args;
use crate::session::SynthesisRequest;

use super::Backend;
use super::types::{BackendError, HealthResponse, LoadError, SynthesizeBody};

/// Connection settings for the synthesis service.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl BackendConfig {
    pub fn from_args(args: &Args) -> Self {
        Self {
            base_url: args.base_url(),
            model: args.model.clone(),
            timeout: Duration::from_secs(args.timeout),
        }
    }
}

/// HTTP-based backend client.
pub struct HttpBackend {
    config: BackendConfig,
    client: reqwest::blocking::Client,
    voices: Vec<String>,
}

impl HttpBackend {
    /// Connect to the service and wait for its health check to report the
    /// model as ready.
    pub fn load(config: BackendConfig) -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LoadError::BackendUnavailable {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        let url = format!("{}/health", config.base_url);
        debug!("Checking synthesis service health at {url}");

        let response = client
            .get(&url)
            .send()
            .map_err(|e| LoadError::BackendUnavailable {
                url: config.base_url.clone(),
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(LoadError::ModelUnavailable {
                model: config.model.clone(),
                reason: format!("Status: {}", response.status()),
            });
        }

        let health: HealthResponse =
            response.json().map_err(|e| LoadError::ModelUnavailable {
                model: config.model.clone(),
                reason: format!("Invalid health response: {e}"),
            })?;

        if !health.is_ready() {
            return Err(LoadError::ModelUnavailable {
                model: config.model.clone(),
                reason: format!("status: {}", health.status),
            });
        }

        if health.model != config.model {
            warn!(
                "Service reports model '{}', requested '{}'",
                health.model, config.model
            );
        }

        info!(
            "Synthesis service ready at {} (model {})",
            config.base_url, health.model
        );

        Ok(Self {
            config,
            client,
            voices: health.voices,
        })
    }

    /// Download the rendered audio for `request`.
    fn fetch_audio(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        let url = format!("{}/synthesize", self.config.base_url);

        let body = SynthesizeBody {
            text: request.text().to_string(),
            voice: request.voice().id.to_string(),
            speed: request.speed(),
            model: self.config.model.clone(),
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| BackendError::ConnectionFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BackendError::RequestFailed(format!(
                "Status: {}",
                response.status()
            )));
        }

        let audio = response
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        if audio.is_empty() {
            return Err(BackendError::InvalidResponse(
                "Empty audio payload".to_string(),
            ));
        }

        Ok(audio)
    }
}

impl Backend for HttpBackend {
    fn generate_to_file(&self, request: &SynthesisRequest) -> Result<(), BackendError> {
        let voice = request.voice().id;
        if !self.voices.is_empty() && !self.voices.iter().any(|v| v == voice) {
            warn!("Voice '{voice}' is not advertised by the synthesis service");
        }

        let audio = self.fetch_audio(request)?;
        std::fs::write(request.output_path(), &audio)?;

        debug!(
            "Wrote {} bytes to {}",
            audio.len(),
            request.output_path().display()
        );
        Ok(())
    }
}
