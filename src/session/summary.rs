//! Session result assembly

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Working set was empty; the loop never ran
    AllKnown,
    /// Every card in the working set was shown
    Completed,
    /// User typed `q`
    Quit,
}

/// What happened during one `run`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Size of the working set
    pub total: usize,
    /// Cards whose front was shown
    pub presented: usize,
    pub known: usize,
    pub unknown: usize,
    /// Cards answered with something other than y/n/q
    pub skipped: usize,
    pub outcome: SessionOutcome,
}

impl SessionSummary {
    pub fn new(total: usize) -> Self {
        SessionSummary {
            total,
            presented: 0,
            known: 0,
            unknown: 0,
            skipped: 0,
            outcome: SessionOutcome::Completed,
        }
    }

    pub fn all_known() -> Self {
        SessionSummary {
            outcome: SessionOutcome::AllKnown,
            ..Self::new(0)
        }
    }

    /// Number of status changes recorded
    pub fn answered(&self) -> usize {
        self.known + self.unknown
    }
}
