//! Backend request/response types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while bringing the model up, before any session runs.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Synthesis service unreachable at {url}: {reason}")]
    BackendUnavailable { url: String, reason: String },

    #[error("Model '{model}' is not available: {reason}")]
    ModelUnavailable { model: String, reason: String },
}

impl LoadError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            LoadError::BackendUnavailable { .. } => 2,
            LoadError::ModelUnavailable { .. } => 1,
        }
    }
}

/// Errors that can occur while synthesizing a single request.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Failed to write audio: {0}")]
    Io(#[from] std::io::Error),
}

/// Health check response from the synthesis service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
    #[serde(default)]
    pub voices: Vec<String>,
}

impl HealthResponse {
    /// Whether the service reports the model as ready.
    pub fn is_ready(&self) -> bool {
        matches!(self.status.as_str(), "ok" | "healthy" | "ready")
    }
}

/// Body of a synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesizeBody {
    pub text: String,
    pub voice: String,
    pub speed: f32,
    pub model: String,
}
