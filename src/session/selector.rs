//! Working-set selection
//!
//! Picks the words eligible for a session by review mode, optionally capped.
//! Vocabulary iteration order is unordered, so when a limit truncates a larger
//! matching set the chosen words vary from run to run.

use crate::storage::{Progress, Status, Vocabulary};

/// Which words a session reviews
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReviewMode {
    /// Everything not yet known
    #[default]
    All,
    /// Only words answered `n`
    UnknownOnly,
    /// Only words never answered
    UnseenOnly,
}

impl ReviewMode {
    /// Map a mode name to a mode. Unrecognised names fall back to `All`.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "unknown" => ReviewMode::UnknownOnly,
            "unseen" => ReviewMode::UnseenOnly,
            _ => ReviewMode::All,
        }
    }

    /// Whether a word with this status belongs in the working set
    pub fn admits(self, status: Status) -> bool {
        match self {
            ReviewMode::All => status != Status::Known,
            ReviewMode::UnknownOnly => status == Status::Unknown,
            ReviewMode::UnseenOnly => status == Status::Unseen,
        }
    }
}

/// Collect matching words, stopping once `limit` are gathered (0 = no limit).
/// The result is not shuffled.
pub fn select(
    vocab: &Vocabulary,
    progress: &Progress,
    mode: ReviewMode,
    limit: usize,
) -> Vec<String> {
    let cap = if limit == 0 { usize::MAX } else { limit };

    vocab
        .words()
        .filter(|word| mode.admits(progress.status(word)))
        .take(cap)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::VocabEntry;

    fn vocab_of(words: &[&str]) -> Vocabulary {
        words
            .iter()
            .map(|w| (*w, VocabEntry::new("noun", "def", "ex")))
            .collect()
    }

    /// 2 known, 3 unknown, 4 unseen
    fn fixture() -> (Vocabulary, Progress) {
        let vocab = vocab_of(&["k1", "k2", "u1", "u2", "u3", "s1", "s2", "s3", "s4"]);
        let progress: Progress = [
            ("k1", Status::Known),
            ("k2", Status::Known),
            ("u1", Status::Unknown),
            ("u2", Status::Unknown),
            ("u3", Status::Unknown),
        ]
        .into_iter()
        .collect();
        (vocab, progress)
    }

    fn sorted(mut words: Vec<String>) -> Vec<String> {
        words.sort();
        words
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(ReviewMode::from_name("all"), ReviewMode::All);
        assert_eq!(ReviewMode::from_name("unknown"), ReviewMode::UnknownOnly);
        assert_eq!(ReviewMode::from_name("Unseen"), ReviewMode::UnseenOnly);
        assert_eq!(ReviewMode::from_name("bogus"), ReviewMode::All);
        assert_eq!(ReviewMode::from_name(""), ReviewMode::All);
    }

    #[test]
    fn test_all_mode_excludes_known() {
        let (vocab, progress) = fixture();
        let words = select(&vocab, &progress, ReviewMode::All, 0);
        assert_eq!(
            sorted(words),
            vec!["s1", "s2", "s3", "s4", "u1", "u2", "u3"]
        );
    }

    #[test]
    fn test_unknown_mode_is_exact() {
        let (vocab, progress) = fixture();
        let words = select(&vocab, &progress, ReviewMode::UnknownOnly, 0);
        assert_eq!(sorted(words), vec!["u1", "u2", "u3"]);
    }

    #[test]
    fn test_unseen_mode_skips_any_recorded_status() {
        let (vocab, progress) = fixture();
        let words = select(&vocab, &progress, ReviewMode::UnseenOnly, 0);
        assert_eq!(sorted(words.clone()), vec!["s1", "s2", "s3", "s4"]);
        assert!(words
            .iter()
            .all(|w| progress.status(w) == Status::Unseen));
    }

    #[test]
    fn test_unrecognised_mode_behaves_like_all() {
        let (vocab, progress) = fixture();
        let fallback = select(&vocab, &progress, ReviewMode::from_name("whatever"), 0);
        let all = select(&vocab, &progress, ReviewMode::All, 0);
        assert_eq!(sorted(fallback), sorted(all));
    }

    // Which words survive truncation depends on map order, so only the size
    // and the filter predicate are asserted here.
    #[test]
    fn test_limit_caps_size_and_keeps_predicate() {
        let (vocab, progress) = fixture();
        for mode in [ReviewMode::All, ReviewMode::UnknownOnly, ReviewMode::UnseenOnly] {
            let words = select(&vocab, &progress, mode, 2);
            assert_eq!(words.len(), 2, "{mode:?}");
            assert!(words.iter().all(|w| mode.admits(progress.status(w))));
            assert!(words.iter().all(|w| vocab.contains(w)));
        }
    }

    #[test]
    fn test_limit_larger_than_matches_returns_all_matches() {
        let (vocab, progress) = fixture();
        let words = select(&vocab, &progress, ReviewMode::UnknownOnly, 50);
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_everything_known_yields_empty_set() {
        let vocab = vocab_of(&["a", "b", "c"]);
        let progress: Progress = ["a", "b", "c"]
            .into_iter()
            .map(|w| (w, Status::Known))
            .collect();
        assert!(select(&vocab, &progress, ReviewMode::All, 0).is_empty());
    }

    #[test]
    fn test_progress_for_words_outside_vocab_is_ignored() {
        let vocab = vocab_of(&["a"]);
        let progress: Progress = [("ghost", Status::Unknown)].into_iter().collect();
        assert!(select(&vocab, &progress, ReviewMode::UnknownOnly, 0).is_empty());
        assert_eq!(select(&vocab, &progress, ReviewMode::All, 0), vec!["a"]);
    }
}
