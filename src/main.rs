//! kitten-tts-cli entry point.

use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use kitten_tts_cli::backend::{HttpBackend, load_backend};
use kitten_tts_cli::cli::{Args, print_banner, print_summary, print_voices};
use kitten_tts_cli::session::{LinePrompt, SessionController};
use kitten_tts_cli::voice::VoiceCatalog;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_tracing(args.verbose) {
        eprintln!("Logging disabled: {e:#}");
    }

    if args.list_voices {
        return exit_on(print_voices(&mut io::stdout(), &VoiceCatalog::kitten()).map_err(Into::into));
    }

    if let Err(e) = print_banner(&mut io::stdout()) {
        return exit_on(Err(e.into()));
    }

    println!("🔄 Loading KittenTTS model...");
    println!("   (Connecting to the synthesis service at {})", args.base_url());

    let backend = match load_backend(&args) {
        Ok(backend) => backend,
        Err(e) => {
            error!("Model load failed: {e}");
            println!("❌ Error loading model: {e}");
            println!("Please check that the synthesis service is running and try again.");
            return ExitCode::from(e.exit_code());
        }
    };

    println!("✅ Model loaded successfully!");
    println!();

    exit_on(run_sessions(backend, &args))
}

fn run_sessions(backend: HttpBackend, args: &Args) -> Result<()> {
    let prompt = LinePrompt::new().context("Failed to open terminal input")?;
    let mut controller = SessionController::new(backend, prompt, io::stdout(), &args.output_dir);

    let summary = controller.run().context("Session loop failed")?;
    info!(
        "Finished: {} session(s), {} succeeded, aborted={}",
        summary.sessions, summary.succeeded, summary.aborted
    );

    if summary.aborted {
        println!("\n👋 Goodbye!");
    } else {
        print_summary(&mut io::stdout(), &summary, &args.output_dir)?;
    }

    Ok(())
}

fn exit_on(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Send tracing output to a log file so it does not interleave with prompts.
fn setup_tracing(verbose: bool) -> Result<()> {
    let log_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join(".kitten-tts-cli")
        .join("logs");
    fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let log_file = log_dir.join("kitten-tts-cli.log");
    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Failed to open log file: {}", log_file.display()))?;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    info!("Tracing initialized to {:?}", log_file);
    Ok(())
}
