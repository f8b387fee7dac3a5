//! Progress store: per-word study status
//!
//! Maintains:
//! - The tri-state `Status` (Known, Unknown, Unseen)
//! - A word → status map where Unseen is simply an absent key
//! - JSON load/save of `{"word": "known" | "unknown"}`
//! - Tallies for the `stats` command

use crate::error::StorageError;
use crate::storage::vocab::Vocabulary;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Study status of a single word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// Answered `y`
    Known,
    /// Answered `n`
    Unknown,
    /// Never answered (absent from the progress file)
    #[default]
    Unseen,
}

impl Status {
    /// Parse a persisted status string, ignoring ASCII case and surrounding
    /// whitespace. Empty means Unseen; anything else unrecognised yields `None`.
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "known" => Some(Status::Known),
            "unknown" => Some(Status::Unknown),
            "" => Some(Status::Unseen),
            _ => None,
        }
    }

    /// String written to the progress file (`None` for Unseen, which is not stored)
    pub fn as_persisted(self) -> Option<&'static str> {
        match self {
            Status::Known => Some("known"),
            Status::Unknown => Some("unknown"),
            Status::Unseen => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_persisted().unwrap_or("unseen"))
    }
}

/// Word → status map owned by the CLI and lent to a session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    statuses: BTreeMap<String, Status>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load progress; a missing file yields an empty map
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            debug!(path = %path.display(), "no progress file, starting fresh");
            return Ok(Progress::new());
        }

        let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut progress = Progress::new();
        for (word, value) in raw {
            match Status::from_persisted(&value) {
                Some(status) => progress.set(&word, status),
                None => warn!(
                    %word,
                    %value,
                    "unrecognised progress status, treating as unseen; it will be dropped on the next save"
                ),
            }
        }

        debug!(path = %path.display(), entries = progress.len(), "progress loaded");
        Ok(progress)
    }

    /// Save progress as pretty JSON; Unseen words are omitted
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let raw: BTreeMap<&str, &'static str> = self
            .statuses
            .iter()
            .filter_map(|(word, status)| status.as_persisted().map(|s| (word.as_str(), s)))
            .collect();
        let json = serde_json::to_string_pretty(&raw).map_err(|source| StorageError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), entries = raw.len(), "progress saved");
        Ok(())
    }

    /// Current status of a word (Unseen if never recorded)
    pub fn status(&self, word: &str) -> Status {
        self.statuses.get(word).copied().unwrap_or_default()
    }

    /// Record a status; setting Unseen forgets the word
    pub fn set(&mut self, word: &str, status: Status) {
        match status {
            Status::Unseen => {
                self.statuses.remove(word);
            }
            _ => {
                self.statuses.insert(word.to_string(), status);
            }
        }
    }

    /// Drop a word's entry entirely
    pub fn forget(&mut self, word: &str) -> bool {
        self.statuses.remove(word).is_some()
    }

    /// Recorded (non-Unseen) entries
    pub fn iter(&self) -> impl Iterator<Item = (&str, Status)> {
        self.statuses.iter().map(|(w, s)| (w.as_str(), *s))
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    /// Count statuses over the words present in the vocabulary
    pub fn tally(&self, vocab: &Vocabulary) -> Tally {
        let mut tally = Tally {
            total: vocab.len(),
            ..Tally::default()
        };
        for word in vocab.words() {
            match self.status(word) {
                Status::Known => tally.known += 1,
                Status::Unknown => tally.unknown += 1,
                Status::Unseen => tally.unseen += 1,
            }
        }
        tally
    }
}

impl<S: Into<String>> FromIterator<(S, Status)> for Progress {
    fn from_iter<I: IntoIterator<Item = (S, Status)>>(iter: I) -> Self {
        let mut progress = Progress::new();
        for (word, status) in iter {
            let word: String = word.into();
            progress.set(&word, status);
        }
        progress
    }
}

/// Status counts for the `stats` command
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub total: usize,
    pub known: usize,
    pub unknown: usize,
    pub unseen: usize,
}

impl Tally {
    /// Share of known words in percent (0.0 for an empty vocabulary)
    pub fn percent_known(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.known as f64 / self.total as f64 * 100.0
        }
    }
}
