//! Vocabulary store: word → part of speech, definition, example
//!
//! Handles:
//! - Loading the flat JSON object keyed by word
//! - Saving it back with keys in sorted order
//! - Validated add/remove edits

use crate::error::{StorageError, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One dictionary entry, immutable for the length of a session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub part_of_speech: String,
    pub definition: String,
    pub example_sentence: String,
}

impl VocabEntry {
    pub fn new(
        part_of_speech: impl Into<String>,
        definition: impl Into<String>,
        example_sentence: impl Into<String>,
    ) -> Self {
        VocabEntry {
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            example_sentence: example_sentence.into(),
        }
    }
}

/// Word-keyed dictionary.
///
/// Keys are case-sensitive. Iteration order is whatever the hash map yields
/// and differs between processes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    entries: HashMap<String, VocabEntry>,
}

impl Vocabulary {
    /// Load vocabulary from a JSON file; a missing file is an error
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        let content = fs::read_to_string(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let vocab: Vocabulary =
            serde_json::from_str(&content).map_err(|source| StorageError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), words = vocab.len(), "vocabulary loaded");
        Ok(vocab)
    }

    /// Save vocabulary as pretty JSON with sorted keys
    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        let sorted: BTreeMap<&String, &VocabEntry> = self.entries.iter().collect();
        let json = serde_json::to_string_pretty(&sorted).map_err(|source| StorageError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), words = self.len(), "vocabulary saved");
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<&VocabEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Words in map order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a new word, refusing duplicates
    pub fn add(&mut self, word: &str, entry: VocabEntry) -> Result<(), ValidationError> {
        if self.entries.contains_key(word) {
            return Err(ValidationError::AlreadyExists(word.to_string()));
        }
        self.entries.insert(word.to_string(), entry);
        Ok(())
    }

    /// Remove a word, returning its entry
    pub fn remove(&mut self, word: &str) -> Result<VocabEntry, ValidationError> {
        self.entries
            .remove(word)
            .ok_or_else(|| ValidationError::NotFound(word.to_string()))
    }
}

impl<S: Into<String>> FromIterator<(S, VocabEntry)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (S, VocabEntry)>>(iter: I) -> Self {
        Vocabulary {
            entries: iter.into_iter().map(|(w, e)| (w.into(), e)).collect(),
        }
    }
}

/// Fields of an `add` request before validation
#[derive(Clone, Debug, Default)]
pub struct NewWord {
    pub word: String,
    pub part_of_speech: String,
    pub definition: String,
    pub example_sentence: String,
}

impl NewWord {
    /// Check every field is non-blank; returns the trimmed word and its entry
    pub fn validate(&self) -> Result<(String, VocabEntry), ValidationError> {
        let fields = [
            ("word", &self.word),
            ("pos", &self.part_of_speech),
            ("definition", &self.definition),
            ("example", &self.example_sentence),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ValidationError::MissingField(*name));
        }

        Ok((
            self.word.trim().to_string(),
            VocabEntry::new(
                self.part_of_speech.trim(),
                self.definition.trim(),
                self.example_sentence.trim(),
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vocabulary {
        [
            (
                "ebullient",
                VocabEntry::new("adjective", "cheerful and full of energy", "She was ebullient."),
            ),
            (
                "précis",
                VocabEntry::new("noun", "a summary", "Read the précis."),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_load_reads_original_field_names() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(
            &path,
            r#"{"laconic": {"part_of_speech": "adjective", "definition": "using few words", "example_sentence": "A laconic reply."}}"#,
        )
        .unwrap();

        let vocab = Vocabulary::load(&path).unwrap();
        assert_eq!(vocab.len(), 1);
        let entry = vocab.get("laconic").unwrap();
        assert_eq!(entry.part_of_speech, "adjective");
        assert_eq!(entry.example_sentence, "A laconic reply.");
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = Vocabulary::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StorageError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = Vocabulary::load(&path).unwrap_err();
        assert!(matches!(err, StorageError::Parse { .. }));
    }

    #[test]
    fn test_save_then_load_keeps_entries_and_sorts_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vocab.json");
        let vocab = sample();
        vocab.save(&path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.find("ebullient").unwrap() < text.find("précis").unwrap());
        assert_eq!(Vocabulary::load(&path).unwrap(), vocab);
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut vocab = sample();
        let err = vocab
            .add("ebullient", VocabEntry::new("a", "b", "c"))
            .unwrap_err();
        assert_eq!(err, ValidationError::AlreadyExists("ebullient".into()));
        assert_eq!(vocab.len(), 2);
    }

    #[test]
    fn test_words_are_case_sensitive() {
        let mut vocab = sample();
        vocab.add("Ebullient", VocabEntry::new("a", "b", "c")).unwrap();
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_remove_unknown_word() {
        let mut vocab = sample();
        assert_eq!(
            vocab.remove("missing").unwrap_err(),
            ValidationError::NotFound("missing".into())
        );
        assert!(vocab.remove("précis").is_ok());
        assert!(!vocab.contains("précis"));
    }

    #[test]
    fn test_new_word_validation_names_first_blank_field() {
        let new_word = NewWord {
            word: "taciturn".into(),
            part_of_speech: "adjective".into(),
            definition: "   ".into(),
            example_sentence: String::new(),
        };
        assert_eq!(
            new_word.validate().unwrap_err(),
            ValidationError::MissingField("definition")
        );

        let ok = NewWord {
            word: " taciturn ".into(),
            part_of_speech: "adjective".into(),
            definition: "reserved".into(),
            example_sentence: "He was taciturn.".into(),
        };
        let (word, entry) = ok.validate().unwrap();
        assert_eq!(word, "taciturn");
        assert_eq!(entry.definition, "reserved");
    }
}
