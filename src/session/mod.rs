//! Interactive synthesis sessions.
//!
//! This module provides the controller that collects and validates operator
//! input, hands it to the model, and reports the outcome of each session.

mod controller;
pub mod input;
mod prompt;
mod request;

pub use controller::{SessionController, SessionError};
pub use prompt::{LinePrompt, Prompt, PromptError, ScriptedPrompt};
pub use request::{RequestError, RunSummary, SessionOutcome, SynthesisRequest};
