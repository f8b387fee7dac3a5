//! Flashcard session: select, shuffle, then drive the prompt/response loop
//!
//! The session borrows the progress map mutably for the length of `run` and
//! only ever changes it on a `y` or `n` answer. Persisting it is the caller's
//! job.

use crate::cli::display::Display;
use crate::cli::input::InputHandler;
use crate::session::selector::{self, ReviewMode};
use crate::session::shuffle::{RngShuffler, Shuffler};
use crate::session::state::{Answer, CardState, Flip};
use crate::session::summary::{SessionOutcome, SessionSummary};
use crate::storage::{Progress, Status, Vocabulary};
use rand::rngs::StdRng;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

const FLIP_PROMPT: &str = "Press [q]uit to exit or [Enter] to flip the card... ";
const ANSWER_PROMPT: &str = "Did you know this word? [y]es / [n]o / [q]uit: ";

/// One interactive study run
pub struct FlashcardSession<'a, R, W: Write, S = RngShuffler<StdRng>> {
    vocab: &'a Vocabulary,
    progress: &'a mut Progress,
    review: ReviewMode,
    limit: usize,
    input: &'a mut InputHandler<R>,
    display: &'a mut Display<W>,
    shuffler: S,
}

impl<'a, R: BufRead, W: Write> FlashcardSession<'a, R, W> {
    /// Session over every non-known word, unlimited, shuffled from entropy
    pub fn new(
        vocab: &'a Vocabulary,
        progress: &'a mut Progress,
        input: &'a mut InputHandler<R>,
        display: &'a mut Display<W>,
    ) -> Self {
        FlashcardSession {
            vocab,
            progress,
            review: ReviewMode::All,
            limit: 0,
            input,
            display,
            shuffler: RngShuffler::from_entropy(),
        }
    }
}

impl<'a, R: BufRead, W: Write, S: Shuffler> FlashcardSession<'a, R, W, S> {
    pub fn with_review(mut self, review: ReviewMode) -> Self {
        self.review = review;
        self
    }

    /// Cap the working set; 0 means no cap
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Replace the shuffler
    pub fn with_shuffler<T: Shuffler>(self, shuffler: T) -> FlashcardSession<'a, R, W, T> {
        FlashcardSession {
            vocab: self.vocab,
            progress: self.progress,
            review: self.review,
            limit: self.limit,
            input: self.input,
            display: self.display,
            shuffler,
        }
    }

    /// Run the session to completion or quit.
    ///
    /// Only terminal output failures are errors; quitting is a normal end.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        let mut words = selector::select(self.vocab, self.progress, self.review, self.limit);
        self.shuffler.shuffle(&mut words);
        info!(
            review = ?self.review,
            limit = self.limit,
            cards = words.len(),
            "starting flashcard session"
        );

        if words.is_empty() {
            self.display
                .celebration("You've marked all the words as known. Great job!")?;
            return Ok(SessionSummary::all_known());
        }

        self.display.header("Vocabulary Study Session")?;
        self.display.separator()?;

        let vocab = self.vocab;
        let mut summary = SessionSummary::new(words.len());
        let mut state = CardState::AwaitingFlip(0);

        loop {
            state = match state {
                CardState::AwaitingFlip(i) => {
                    let word = &words[i];
                    let Some(entry) = vocab.get(word) else {
                        warn!(%word, "selected word missing from vocabulary, skipping");
                        summary.skipped += 1;
                        state = CardState::Advancing(i);
                        continue;
                    };
                    self.display.card_front(i + 1, words.len(), word, entry)?;
                    summary.presented += 1;
                    self.display.prompt(FLIP_PROMPT)?;
                    CardState::after_flip(i, Flip::parse(&self.input.read_response()))
                }
                CardState::AwaitingAnswer(i) => {
                    let word = &words[i];
                    if let Some(entry) = vocab.get(word) {
                        self.display.card_back(entry)?;
                    }
                    self.display.prompt(ANSWER_PROMPT)?;
                    let answer = Answer::parse(&self.input.read_response());
                    self.record(word, answer, &mut summary)?;
                    CardState::after_answer(i, answer)
                }
                CardState::Advancing(i) => {
                    let next = CardState::after_advance(i, words.len());
                    if !next.is_finished() {
                        self.display.blank()?;
                        self.display.separator()?;
                    }
                    next
                }
                CardState::Finished(outcome) => {
                    summary.outcome = outcome;
                    match outcome {
                        SessionOutcome::Quit => self
                            .display
                            .info("Exiting session. Your progress has been saved.")?,
                        _ => {
                            self.display.blank()?;
                            self.display.success("End of session! Progress saved.")?;
                        }
                    }
                    info!(
                        presented = summary.presented,
                        known = summary.known,
                        unknown = summary.unknown,
                        skipped = summary.skipped,
                        "flashcard session finished"
                    );
                    return Ok(summary);
                }
            };
        }
    }

    /// Apply an answer to progress and give feedback
    fn record(
        &mut self,
        word: &str,
        answer: Answer,
        summary: &mut SessionSummary,
    ) -> io::Result<()> {
        match answer {
            Answer::Known => {
                self.progress.set(word, Status::Known);
                summary.known += 1;
                debug!(%word, status = %Status::Known, "answer recorded");
                self.display.success("Marked as known!")
            }
            Answer::Unknown => {
                self.progress.set(word, Status::Unknown);
                summary.unknown += 1;
                debug!(%word, status = %Status::Unknown, "answer recorded");
                self.display.warning("Marked for review.")
            }
            Answer::Invalid => {
                summary.skipped += 1;
                self.display.error("Invalid input. Skipping word.")
            }
            Answer::Quit => Ok(()),
        }
    }
}
