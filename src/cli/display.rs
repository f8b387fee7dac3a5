//! Terminal display and UI rendering
//!
//! Features:
//! - Flashcard front/back rendering with color coding
//! - Themed feedback lines (success, warning, error, info)
//! - Vocabulary stats with a progress bar
//!
//! Everything is queued through crossterm onto any `io::Write`, so tests can
//! render into a `Vec<u8>`.

use crate::session::{SessionOutcome, SessionSummary};
use crate::storage::{Tally, VocabEntry};
use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::{self, Stderr, Stdout, Write};

/// Width of the stats progress bar in cells
pub const PROGRESS_BAR_WIDTH: usize = 20;

const SEPARATOR: &str = "────────────────────────────────────────";

/// Terminal display manager
pub struct Display<W: Write> {
    out: W,
}

impl Display<Stdout> {
    pub fn stdout() -> Self {
        Display::new(io::stdout())
    }
}

impl Display<Stderr> {
    pub fn stderr() -> Self {
        Display::new(io::stderr())
    }
}

impl<W: Write> Display<W> {
    pub fn new(out: W) -> Self {
        Display { out }
    }

    /// Give back the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Colored text followed by a newline
    fn line(&mut self, color: Color, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(color),
            Print(text),
            ResetColor,
            Print("\n")
        )?;
        self.out.flush()
    }

    /// Dimmed label followed by a colored value
    pub fn field(&mut self, label: &str, value: &str, color: Color) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Dim),
            Print(label),
            SetAttribute(Attribute::Reset),
            Print(" "),
            SetForegroundColor(color),
            Print(value),
            ResetColor,
            Print("\n")
        )?;
        self.out.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\n"))?;
        self.out.flush()
    }

    /// Bold section title
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Cyan),
            Print(format!("📚 {title}")),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
        self.out.flush()
    }

    pub fn separator(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            SetAttribute(Attribute::Dim),
            SetForegroundColor(Color::Blue),
            Print(SEPARATOR),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n")
        )?;
        self.out.flush()
    }

    /// Prompt text without a trailing newline
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::DarkCyan),
            Print(text),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Yellow confirmation prompt, left on the same line as the answer
    pub fn warning_prompt(&mut self, text: &str) -> io::Result<()> {
        queue!(
            self.out,
            SetForegroundColor(Color::Yellow),
            Print(format!("⚠️  {text}")),
            ResetColor
        )?;
        self.out.flush()
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.line(Color::Green, &format!("✅ {text}"))
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.line(Color::Yellow, &format!("⚠️  {text}"))
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.line(Color::Red, &format!("❌ {text}"))
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        self.line(Color::Blue, &format!("💡 {text}"))
    }

    pub fn celebration(&mut self, text: &str) -> io::Result<()> {
        self.line(Color::Yellow, &format!("🎉 {text}"))
    }

    /// Front of a card: position, word and part of speech
    pub fn card_front(
        &mut self,
        position: usize,
        total: usize,
        word: &str,
        entry: &VocabEntry,
    ) -> io::Result<()> {
        queue!(
            self.out,
            Print("\n"),
            SetAttribute(Attribute::Dim),
            Print(format!("Card {position} of {total}")),
            SetAttribute(Attribute::Reset),
            Print("\n\n"),
            SetAttribute(Attribute::Bold),
            SetForegroundColor(Color::Magenta),
            Print(format!("🔷 {word}")),
            ResetColor,
            SetAttribute(Attribute::Reset),
            Print("\n  ")
        )?;
        self.field("Part of Speech:", &entry.part_of_speech, Color::DarkYellow)?;
        self.blank()
    }

    /// Back of a card: definition and example
    pub fn card_back(&mut self, entry: &VocabEntry) -> io::Result<()> {
        self.separator()?;
        queue!(
            self.out,
            SetForegroundColor(Color::Blue),
            Print(format!("  📖 {}\n", entry.definition)),
            SetForegroundColor(Color::Green),
            Print(format!("  💬 {}\n\n", entry.example_sentence)),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Vocabulary stats block
    pub fn stats(&mut self, tally: &Tally) -> io::Result<()> {
        self.blank()?;
        self.line(Color::Cyan, "📊 Vocabulary Stats")?;
        self.separator()?;
        self.field("Total words:", &tally.total.to_string(), Color::White)?;
        self.field("Known:", &tally.known.to_string(), Color::Green)?;
        self.field("Unknown:", &tally.unknown.to_string(), Color::Red)?;
        self.field("Unseen:", &tally.unseen.to_string(), Color::Yellow)?;
        self.blank()?;

        if tally.total == 0 {
            self.warning("No words in vocabulary.")?;
        } else {
            let percent = tally.percent_known();
            let filled = filled_cells(percent, PROGRESS_BAR_WIDTH);
            queue!(
                self.out,
                SetForegroundColor(Color::Blue),
                Print("💡 Progress:"),
                ResetColor,
                Print(format!(" {percent:.1}% [")),
                SetForegroundColor(Color::Green),
                Print("█".repeat(filled)),
                ResetColor,
                SetAttribute(Attribute::Dim),
                Print("░".repeat(PROGRESS_BAR_WIDTH - filled)),
                SetAttribute(Attribute::Reset),
                Print("]\n")
            )?;
        }
        self.blank()
    }

    /// One-line recap after a session
    pub fn recap(&mut self, summary: &SessionSummary) -> io::Result<()> {
        if summary.outcome == SessionOutcome::AllKnown {
            return Ok(());
        }
        queue!(
            self.out,
            SetAttribute(Attribute::Dim),
            Print(format!(
                "Reviewed {} of {} | known {} | review {} | skipped {}\n",
                summary.presented, summary.total, summary.known, summary.unknown, summary.skipped
            )),
            SetAttribute(Attribute::Reset)
        )?;
        self.out.flush()
    }
}

/// Number of filled cells for a percentage, rounded down and clamped
pub fn filled_cells(percent: f64, width: usize) -> usize {
    let cells = (percent / 100.0 * width as f64).floor();
    if cells <= 0.0 {
        0
    } else {
        (cells as usize).min(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut Display<Vec<u8>>) -> io::Result<()>) -> String {
        let mut display = Display::new(Vec::new());
        f(&mut display).unwrap();
        String::from_utf8(display.into_inner()).unwrap()
    }

    #[test]
    fn test_filled_cells() {
        assert_eq!(filled_cells(0.0, 20), 0);
        assert_eq!(filled_cells(4.9, 20), 0);
        assert_eq!(filled_cells(5.0, 20), 1);
        assert_eq!(filled_cells(66.7, 20), 13);
        assert_eq!(filled_cells(100.0, 20), 20);
        assert_eq!(filled_cells(150.0, 20), 20);
    }

    #[test]
    fn test_card_front_shows_position_word_and_pos() {
        let entry = VocabEntry::new("adjective", "cheerful", "She was ebullient.");
        let out = rendered(|d| d.card_front(2, 5, "ebullient", &entry));
        assert!(out.contains("Card 2 of 5"));
        assert!(out.contains("ebullient"));
        assert!(out.contains("Part of Speech:"));
        assert!(out.contains("adjective"));
        assert!(!out.contains("cheerful"));
    }

    #[test]
    fn test_card_back_shows_definition_and_example() {
        let entry = VocabEntry::new("adjective", "cheerful", "She was ebullient.");
        let out = rendered(|d| d.card_back(&entry));
        assert!(out.contains("📖 cheerful"));
        assert!(out.contains("💬 She was ebullient."));
    }

    #[test]
    fn test_stats_block() {
        let tally = Tally {
            total: 4,
            known: 1,
            unknown: 1,
            unseen: 2,
        };
        let out = rendered(|d| d.stats(&tally));
        assert!(out.contains("Vocabulary Stats"));
        assert!(out.contains("Total words:"));
        assert!(out.contains("25.0%"));
        assert!(out.contains(&"█".repeat(5)));
        assert!(out.contains(&"░".repeat(15)));
    }

    #[test]
    fn test_stats_empty_vocab_warns() {
        let out = rendered(|d| d.stats(&Tally::default()));
        assert!(out.contains("No words in vocabulary."));
        assert!(!out.contains("Progress:"));
    }

    #[test]
    fn test_themed_lines() {
        let out = rendered(|d| {
            d.success("Marked as known!")?;
            d.error("boom")
        });
        assert!(out.contains("✅ Marked as known!"));
        assert!(out.contains("❌ boom"));
    }

    #[test]
    fn test_warning_prompt_stays_on_line() {
        let out = rendered(|d| d.warning_prompt("Reset? [y/N]: "));
        assert!(out.contains("⚠️  Reset? [y/N]: "));
        assert!(!out.ends_with('\n'));
    }
}
