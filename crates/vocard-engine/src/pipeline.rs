//! The word-to-note pipeline.
//!
//! Words are processed strictly in input order, one at a time. Each word
//! goes through a duplicate check, content generation, field mapping, and
//! insertion before the next word starts. A failure is recorded in the run
//! report and never aborts the rest of the run.

use tracing::{error, info, warn};

use vocard_anki::{AnkiClient, Note, NoteBuilder, NoteQuery};
use vocard_gen::{Generator, LexicalRecord, TextGenerator};

use crate::config::RunConfig;
use crate::error::Result;
use crate::words::WordEntry;

/// Tag attached to every generated note.
pub const GENERATED_TAG: &str = "generated_by_gemini";

/// Note field that holds the word itself; also the duplicate-check key.
pub const WORD_FIELD: &str = "Word";

/// Longest field value echoed into the log before truncation.
const LOG_PREVIEW_CHARS: usize = 80;

/// Terminal state of a single word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    /// A note for the word already existed in the target deck.
    Skipped,

    /// A note was created, with this note ID.
    Added(i64),

    /// Dry run: the note was logged but not sent.
    Previewed,
}

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Notes created.
    pub added: usize,

    /// Words skipped because a note already existed.
    pub skipped: usize,

    /// Words previewed without insertion (dry run).
    pub previewed: usize,

    /// Words that failed to generate or insert.
    pub failed: usize,

    /// Details for each failed word, in input order.
    pub failures: Vec<WordFailure>,
}

/// One failed word.
#[derive(Debug, Clone)]
pub struct WordFailure {
    /// The word that failed.
    pub word: String,

    /// CSV line the word came from.
    pub row: u64,

    /// Rendered cause of the failure.
    pub reason: String,
}

/// Sequential CSV-to-Anki card pipeline.
#[derive(Debug)]
pub struct Pipeline<B> {
    anki: AnkiClient,
    generator: Generator<B>,
    config: RunConfig,
}

impl<B: TextGenerator> Pipeline<B> {
    /// Create a pipeline from its two clients and a run configuration.
    pub fn new(anki: AnkiClient, generator: Generator<B>, config: RunConfig) -> Self {
        Self {
            anki,
            generator,
            config,
        }
    }

    /// Process every word in order and return a summary of the run.
    ///
    /// After each word that reached generation the pipeline pauses for
    /// [`RunConfig::pause`] to space out backend requests. Skipped words
    /// do not pause.
    pub async fn run(&self, entries: &[WordEntry]) -> RunReport {
        let mut report = RunReport::default();

        for entry in entries {
            match self.process_word(entry).await {
                Ok(WordOutcome::Skipped) => {
                    report.skipped += 1;
                    continue;
                }
                Ok(WordOutcome::Added(_)) => report.added += 1,
                Ok(WordOutcome::Previewed) => report.previewed += 1,
                Err(e) => {
                    error!(
                        word = %entry.word,
                        row = entry.row,
                        error = %e,
                        "failed to process word"
                    );
                    report.failed += 1;
                    report.failures.push(WordFailure {
                        word: entry.word.clone(),
                        row: entry.row,
                        reason: e.to_string(),
                    });
                }
            }

            tokio::time::sleep(self.config.pause).await;
        }

        report
    }

    /// Run one word through the full check-generate-insert sequence.
    async fn process_word(&self, entry: &WordEntry) -> Result<WordOutcome> {
        if self.note_exists(&entry.word).await {
            info!(
                word = %entry.word,
                deck = %self.config.deck,
                "skipping word, note already exists"
            );
            return Ok(WordOutcome::Skipped);
        }

        info!(row = entry.row, word = %entry.word, "processing word");
        let record = self.generator.generate(&entry.word).await?;
        info!(
            word = %entry.word,
            meaning = %preview(&record.meaning),
            translation = %preview(&record.translation),
            meaning_translation = %preview(&record.meaning_translation),
            example_phrase = %preview(&record.example_phrase),
            phrase_translation = %preview(&record.phrase_translation),
            "generated fields"
        );

        if self.config.dry_run {
            info!(word = %entry.word, "dry run, not adding the note");
            return Ok(WordOutcome::Previewed);
        }

        let note = self.build_note(&entry.word, &record);
        let note_id = self.anki.notes().add(note).await?;
        info!(word = %entry.word, note_id, "added note");
        Ok(WordOutcome::Added(note_id))
    }

    /// Check whether the deck already has a note for this word.
    ///
    /// The check is advisory: a failed query is logged and treated as "not
    /// found" so the word still gets a chance to be added. It is also not
    /// atomic with the insertion that follows; a note created in between
    /// surfaces as an insertion error for this word instead.
    async fn note_exists(&self, word: &str) -> bool {
        let query = NoteQuery::new(&self.config.deck, &self.config.note_type)
            .field(WORD_FIELD, word)
            .build();

        match self.anki.notes().find(&query).await {
            Ok(note_ids) => !note_ids.is_empty(),
            Err(e) => {
                warn!(word, error = %e, "duplicate check failed, assuming word is new");
                false
            }
        }
    }

    /// Map a generated record onto the note type's fields.
    ///
    /// The field names are the note type's external contract, uneven
    /// capitalization included, and are reproduced here verbatim.
    fn build_note(&self, word: &str, record: &LexicalRecord) -> Note {
        NoteBuilder::new(&self.config.deck, &self.config.note_type)
            .field(WORD_FIELD, word)
            .field("Meaning", &record.meaning)
            .field("translation", &record.translation)
            .field("Meaning Translation", &record.meaning_translation)
            .field("example phrase", &record.example_phrase)
            .field("phrase translation", &record.phrase_translation)
            .tag(GENERATED_TAG)
            .build()
    }
}

/// Shorten a field value for log output.
fn preview(value: &str) -> String {
    if value.chars().count() <= LOG_PREVIEW_CHARS {
        value.to_string()
    } else {
        let head: String = value.chars().take(LOG_PREVIEW_CHARS).collect();
        format!("{head}...")
    }
}
