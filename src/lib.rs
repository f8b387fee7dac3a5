//! Vocabulary study library: stores, flashcard session and CLI handlers
//!
//! The `vocab` binary is a thin clap front end over `cli::commands`.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;
pub mod storage;
