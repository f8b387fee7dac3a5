//! Runtime configuration resolved from flags and environment

use std::path::PathBuf;

pub const DEFAULT_VOCAB_PATH: &str = "vocab.json";
pub const DEFAULT_PROGRESS_PATH: &str = "progress.json";

/// Where the data files live and how loud logging is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vocab_path: PathBuf,
    pub progress_path: PathBuf,
    pub debug: bool,
}

impl Config {
    pub fn new(vocab_path: impl Into<PathBuf>, progress_path: impl Into<PathBuf>) -> Self {
        Config {
            vocab_path: vocab_path.into(),
            progress_path: progress_path.into(),
            debug: false,
        }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        if self.debug {
            "debug"
        } else {
            "warn"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_VOCAB_PATH, DEFAULT_PROGRESS_PATH)
    }
}
