//! Flashcard loop state machine
//!
//! Per card:
//! - `AwaitingFlip`: front shown, `q` quits, anything else flips
//! - `AwaitingAnswer`: back shown, `y`/`n` record, `q` quits, anything else skips
//! - `Advancing`: next card or finish
//! - `Finished`: terminal

use crate::session::summary::SessionOutcome;

/// Where the loop currently is; indices point into the working set
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardState {
    AwaitingFlip(usize),
    AwaitingAnswer(usize),
    Advancing(usize),
    Finished(SessionOutcome),
}

/// Response at the flip prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flip {
    Reveal,
    Quit,
}

impl Flip {
    /// `q` quits; every other line, including an empty one, flips the card
    pub fn parse(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("q") {
            Flip::Quit
        } else {
            Flip::Reveal
        }
    }
}

/// Response at the answer prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Answer {
    Known,
    Unknown,
    Quit,
    Invalid,
}

impl Answer {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "y" => Answer::Known,
            "n" => Answer::Unknown,
            "q" => Answer::Quit,
            _ => Answer::Invalid,
        }
    }
}

impl CardState {
    /// Transition out of `AwaitingFlip`
    pub fn after_flip(index: usize, flip: Flip) -> Self {
        match flip {
            Flip::Reveal => CardState::AwaitingAnswer(index),
            Flip::Quit => CardState::Finished(SessionOutcome::Quit),
        }
    }

    /// Transition out of `AwaitingAnswer`
    pub fn after_answer(index: usize, answer: Answer) -> Self {
        match answer {
            Answer::Quit => CardState::Finished(SessionOutcome::Quit),
            Answer::Known | Answer::Unknown | Answer::Invalid => CardState::Advancing(index),
        }
    }

    /// Transition out of `Advancing` for a working set of `total` cards
    pub fn after_advance(index: usize, total: usize) -> Self {
        if index + 1 < total {
            CardState::AwaitingFlip(index + 1)
        } else {
            CardState::Finished(SessionOutcome::Completed)
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, CardState::Finished(_))
    }
}
