//! Session Management: working-set selection, shuffling and the flashcard loop
//!
//! # Components
//! - `selector.rs`: Review-mode filtering and limit
//! - `shuffle.rs`: Injectable shuffling (`Shuffler`)
//! - `state.rs`: Card state machine and response parsing
//! - `flashcard.rs`: `FlashcardSession`, the interactive loop
//! - `summary.rs`: Result of a run

pub mod flashcard;
pub mod selector;
pub mod shuffle;
pub mod state;
pub mod summary;

pub use flashcard::FlashcardSession;
pub use selector::ReviewMode;
pub use summary::{SessionOutcome, SessionSummary};
