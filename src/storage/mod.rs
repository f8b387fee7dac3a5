//! Storage: JSON-backed vocabulary and progress files
//!
//! # Components
//! - `vocab.rs`: Vocabulary store and validated add/remove
//! - `progress.rs`: Progress store and the tri-state `Status`

pub mod progress;
pub mod vocab;

pub use progress::{Progress, Status, Tally};
pub use vocab::{NewWord, VocabEntry, Vocabulary};
