//! Command handlers dispatched from `main`
//!
//! Each handler loads what it needs, does its work, persists, and reports
//! through the given `Display`. Input and output are passed in so the
//! handlers run the same against a terminal or a test buffer.

use crate::cli::display::Display;
use crate::cli::input::InputHandler;
use crate::config::Config;
use crate::error::{AppError, ValidationError};
use crate::session::{FlashcardSession, ReviewMode, SessionSummary};
use crate::storage::{NewWord, Progress, Tally, Vocabulary};
use crossterm::style::Color;
use std::io::{BufRead, Write};
use tracing::info;

/// Run a flashcard session and save progress afterwards
pub fn study<R: BufRead, W: Write>(
    config: &Config,
    review: ReviewMode,
    limit: usize,
    input: &mut InputHandler<R>,
    display: &mut Display<W>,
) -> Result<SessionSummary, AppError> {
    let vocab = Vocabulary::load(&config.vocab_path)?;
    let mut progress = Progress::load(&config.progress_path)?;

    let summary = FlashcardSession::new(&vocab, &mut progress, input, display)
        .with_review(review)
        .with_limit(limit)
        .run()?;

    progress.save(&config.progress_path)?;
    display.recap(&summary)?;
    Ok(summary)
}

/// Print known/unknown/unseen counts
pub fn stats<W: Write>(config: &Config, display: &mut Display<W>) -> Result<Tally, AppError> {
    let vocab = Vocabulary::load(&config.vocab_path)?;
    let progress = Progress::load(&config.progress_path)?;

    let tally = progress.tally(&vocab);
    display.stats(&tally)?;
    Ok(tally)
}

/// Clear all progress after confirmation. Returns whether it was reset.
pub fn reset<R: BufRead, W: Write>(
    config: &Config,
    assume_yes: bool,
    input: &mut InputHandler<R>,
    display: &mut Display<W>,
) -> Result<bool, AppError> {
    if !assume_yes {
        display.warning_prompt("Are you sure you want to reset your progress? [y/N]: ")?;
        if !input.confirm() {
            display.info("Reset canceled.")?;
            return Ok(false);
        }
    }

    Progress::new().save(&config.progress_path)?;
    info!(path = %config.progress_path.display(), "progress reset");
    display.success("Progress has been reset.")?;
    Ok(true)
}

/// Add a word to the vocabulary file
pub fn add<W: Write>(
    config: &Config,
    new_word: &NewWord,
    display: &mut Display<W>,
) -> Result<(), AppError> {
    let (word, entry) = new_word.validate()?;

    display.blank()?;
    display.header("Adding New Word")?;
    display.separator()?;
    display.field("Word:", &word, Color::Magenta)?;
    display.field("Part of speech:", &entry.part_of_speech, Color::DarkYellow)?;
    display.field("Definition:", &entry.definition, Color::Blue)?;
    display.field("Example:", &entry.example_sentence, Color::Green)?;
    display.blank()?;

    let mut vocab = Vocabulary::load(&config.vocab_path)?;
    vocab.add(&word, entry)?;
    vocab.save(&config.vocab_path)?;

    info!(%word, "word added");
    display.success(&format!("Added word '{word}' to vocab"))?;
    Ok(())
}

/// Remove a word from the vocabulary file and drop its progress
pub fn remove<W: Write>(
    config: &Config,
    word: &str,
    display: &mut Display<W>,
) -> Result<(), AppError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ValidationError::MissingField("word").into());
    }

    display.blank()?;
    display.header("Removing Word")?;
    display.separator()?;
    display.field("Word to remove:", word, Color::Red)?;
    display.blank()?;

    let mut vocab = Vocabulary::load(&config.vocab_path)?;
    vocab.remove(word)?;
    vocab.save(&config.vocab_path)?;

    let mut progress = Progress::load(&config.progress_path)?;
    if progress.forget(word) {
        progress.save(&config.progress_path)?;
    }

    info!(%word, "word removed");
    display.success(&format!("Removed word '{word}' from vocab"))?;
    Ok(())
}
