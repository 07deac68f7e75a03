//! kitten-tts-cli: Interactive text-to-speech front-end for KittenTTS.
//!
//! This crate collects text, a voice, a speech rate and an output path from
//! an operator, validates them, and hands them to a KittenTTS synthesis
//! service that renders the audio file.

pub mod backend;
pub mod cli;
pub mod session;
pub mod voice;
