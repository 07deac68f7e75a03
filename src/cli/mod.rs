//! CLI argument parsing and terminal presentation.

mod args;
mod display;

pub use args::{Args, DEFAULT_MODEL, DEFAULT_OUTPUT_DIR};
pub use display::{format_bytes, print_banner, print_summary, print_voices, rule};
