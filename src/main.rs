//! Scripta - OCR transcription helper
//!
//! Paste a screenshot, send it to a remote OCR service and get back editable
//! text coloured by how confident the service was about each word.

mod annotate;
mod app;
mod clipboard;
mod config;
mod dashboard;
mod shared;
mod storage;
mod transcript;
mod vision;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::app::{Transcriber, Transcript};
use crate::shared::SessionState;
use crate::vision::GoogleVisionClient;

/// Scripta - OCR transcription helper
#[derive(Parser, Debug)]
#[command(name = "scripta")]
#[command(about = "Paste an image, get confidence-coloured editable text")]
struct Args {
    /// Path of the configuration file (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run OCR on an image file and print the text instead of opening the window
    #[arg(long, value_name = "FILE")]
    image: Option<PathBuf>,

    /// With --image, print one word per line prefixed by its confidence tier
    #[arg(long, requires = "image")]
    show_confidence: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = args
        .config
        .clone()
        .unwrap_or_else(storage::default_config_path);
    let session = SessionState::load(config_path);

    let transcriber = Transcriber::new(GoogleVisionClient::new()?);

    if let Some(image_path) = args.image.as_deref() {
        return run_headless(&transcriber, &session, image_path, args.show_confidence);
    }

    info!("Scripta starting...");
    if let Err(e) = dashboard::run_window(session, transcriber) {
        tracing::error!("Window error: {}", e);
    }
    info!("Scripta shutdown complete");

    Ok(())
}

/// Transcribe an image file and print the result to stdout
fn run_headless(
    transcriber: &Transcriber<GoogleVisionClient>,
    session: &SessionState,
    image_path: &Path,
    show_confidence: bool,
) -> Result<()> {
    let image = image::open(image_path)
        .with_context(|| format!("Failed to open image {}", image_path.display()))?;
    let transcript = transcriber.transcribe(&image, session.credential.as_ref())?;
    println!("{}", format_transcript(&transcript, show_confidence));
    Ok(())
}

fn format_transcript(transcript: &Transcript, show_confidence: bool) -> String {
    if !show_confidence {
        return transcript.plain_text();
    }

    transcript
        .spans
        .iter()
        .map(|span| {
            let word = span
                .rendered_text
                .strip_prefix(' ')
                .unwrap_or(&span.rendered_text);
            format!("{}\t{}", span.class.tag(), word)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::{annotate, WordRecord};

    fn transcript() -> Transcript {
        Transcript {
            spans: annotate(&[
                WordRecord::new("Hi", 0.99),
                WordRecord::new(",", 0.9),
                WordRecord::new("there", 0.2),
            ]),
            source_size: (10, 10),
        }
    }

    #[test]
    fn test_format_plain() {
        assert_eq!(format_transcript(&transcript(), false), "Hi, there");
    }

    #[test]
    fn test_format_with_confidence() {
        assert_eq!(
            format_transcript(&transcript(), true),
            "high\tHi\nmedium\t,\nlow\tthere"
        );
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["scripta", "--image", "shot.png", "--show-confidence"]).unwrap();
        assert_eq!(args.image.as_deref(), Some(Path::new("shot.png")));
        assert!(args.show_confidence);
        assert!(Args::try_parse_from(["scripta", "--show-confidence"]).is_err());
    }
}
