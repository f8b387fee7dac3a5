//! Line-oriented input handling
//!
//! Features:
//! - Reads one response per prompt from any `BufRead`
//! - Trims and lower-cases responses
//! - End of input and read failures come back as an empty line

use std::io::{self, BufRead, StdinLock};
use tracing::debug;

/// Reads user responses from a terminal or a scripted source
pub struct InputHandler<R> {
    reader: R,
}

impl InputHandler<StdinLock<'static>> {
    /// Handler over the process's standard input
    pub fn stdin() -> Self {
        InputHandler::new(io::stdin().lock())
    }
}

impl<R: BufRead> InputHandler<R> {
    pub fn new(reader: R) -> Self {
        InputHandler { reader }
    }

    /// Read one line, normalised for matching.
    /// Never fails: EOF or an unreadable line yields `""`.
    pub fn read_response(&mut self) -> String {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => {
                debug!("end of input, treating as empty line");
                String::new()
            }
            Ok(_) => line.trim().to_lowercase(),
            Err(e) => {
                debug!(error = %e, "unreadable input line, treating as empty");
                String::new()
            }
        }
    }

    /// Ask a yes/no question answered by `y`; anything else is no
    pub fn confirm(&mut self) -> bool {
        self.read_response() == "y"
    }
}
