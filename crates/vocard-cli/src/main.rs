//! Command-line tool that turns a CSV word list into Anki vocabulary cards.
//!
//! For each word, card content is generated with Gemini and the note is
//! added to a deck over AnkiConnect. Words that already have a note in the
//! deck are skipped.

use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use vocard_engine::{read_words, AnkiClient, GeminiClient, Generator, Pipeline, RunConfig};

/// Generate Anki vocabulary cards from a CSV word list.
#[derive(Parser, Debug)]
#[command(name = "vocard")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with one word per row (first column is used)
    csv: PathBuf,

    /// Gemini API key (falls back to GEMINI_API_KEY, then GOOGLE_API_KEY)
    #[arg(long)]
    api_key: Option<String>,

    /// Anki deck to add notes to
    #[arg(long, default_value = "EnglishAI")]
    deck: String,

    /// Anki note type (model) for new notes
    #[arg(long, default_value = "EnglishAI")]
    model: String,

    /// Gemini model used for generation
    #[arg(long, default_value = "gemini-2.5-flash")]
    gemini_model: String,

    /// AnkiConnect URL
    #[arg(long, default_value = "http://localhost:8765")]
    anki_url: String,

    /// Generate and log cards without adding them to Anki
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// The Gemini API key from the CLI flag or the environment.
fn resolve_api_key(flag: Option<String>) -> Option<String> {
    flag.filter(|key| !key.is_empty())
        .or_else(|| std::env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()))
        .or_else(|| std::env::var("GOOGLE_API_KEY").ok().filter(|key| !key.is_empty()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let api_key = resolve_api_key(args.api_key);
    if api_key.is_none() {
        warn!("no Gemini API key given, generation requests will likely be rejected");
    }

    let anki = AnkiClient::builder().url(&args.anki_url).build();
    match anki.misc().version().await {
        Ok(version) => info!(version, "connected to AnkiConnect"),
        Err(e) => warn!(error = %e, "could not reach AnkiConnect, continuing anyway"),
    }

    let mut gemini = GeminiClient::builder().model(&args.gemini_model);
    if let Some(key) = api_key {
        gemini = gemini.api_key(key);
    }
    let generator = Generator::new(gemini.build());

    let words = read_words(&args.csv)?;
    info!(count = words.len(), file = %args.csv.display(), "loaded word list");

    let config = RunConfig {
        deck: args.deck,
        note_type: args.model,
        dry_run: args.dry_run,
        ..RunConfig::default()
    };

    let pipeline = Pipeline::new(anki, generator, config);
    let report = pipeline.run(&words).await;

    info!(
        added = report.added,
        skipped = report.skipped,
        previewed = report.previewed,
        failed = report.failed,
        "run complete"
    );
    for failure in &report.failures {
        warn!(
            word = %failure.word,
            row = failure.row,
            reason = %failure.reason,
            "word was not added"
        );
    }

    Ok(())
}
