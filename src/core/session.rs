//! Terminal session state
//!
//! Holds the scrollback lines, the input buffer and the command history of
//! one run. All mutation goes through the methods here; the reducer in
//! [`super::update`] decides which ones a given event is allowed to reach.

use tracing::debug;

use super::interpreter::{self, Resolution};
use crate::content::ContentStore;

/// Reveal progress of an output line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Every sub-line is shown
    Visible,
    /// `shown` of `total` sub-lines are shown
    Revealing { shown: usize, total: usize },
}

/// A scrollback entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Echo of a submitted command
    Input(String),
    /// Command output
    Output { text: String, reveal: Reveal },
}

impl Line {
    /// Output line that starts hidden and reveals sub-line by sub-line
    pub fn revealing(text: String) -> Self {
        let total = sub_line_count(&text);
        Line::Output {
            text,
            reveal: Reveal::Revealing { shown: 0, total },
        }
    }

    /// Output line shown in full immediately
    pub fn visible(text: impl Into<String>) -> Self {
        Line::Output {
            text: text.into(),
            reveal: Reveal::Visible,
        }
    }

    pub fn is_revealing(&self) -> bool {
        matches!(
            self,
            Line::Output {
                reveal: Reveal::Revealing { .. },
                ..
            }
        )
    }

    /// The text currently shown for this line
    pub fn visible_text(&self) -> String {
        match self {
            Line::Input(text) => text.clone(),
            Line::Output { text, reveal } => match reveal {
                Reveal::Visible => text.clone(),
                Reveal::Revealing { shown, .. } => text
                    .split('\n')
                    .take(*shown)
                    .collect::<Vec<_>>()
                    .join("\n"),
            },
        }
    }

    /// Advance one sub-line. Returns true if anything changed.
    fn advance(&mut self) -> bool {
        if let Line::Output { reveal, .. } = self {
            if let Reveal::Revealing { shown, total } = *reveal {
                let shown = (shown + 1).min(total);
                *reveal = if shown >= total {
                    Reveal::Visible
                } else {
                    Reveal::Revealing { shown, total }
                };
                return true;
            }
        }
        false
    }

    fn finish(&mut self) -> bool {
        if let Line::Output { reveal, .. } = self {
            if matches!(reveal, Reveal::Revealing { .. }) {
                *reveal = Reveal::Visible;
                return true;
            }
        }
        false
    }
}

/// Number of `\n`-separated sub-lines in `text` (an empty string has one)
pub fn sub_line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Result of a submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Blank input or a reveal in progress
    Rejected,
    /// Scrollback was cleared
    Cleared,
    /// Input and output lines were appended
    Appended,
}

/// One terminal session
#[derive(Debug, Clone, Default)]
pub struct Session {
    lines: Vec<Line>,
    /// Uncommitted input text
    pub input: String,
    /// Submitted commands, newest first
    history: Vec<String>,
    history_cursor: Option<usize>,
}

impl Session {
    /// Empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Session seeded with the content's welcome lines
    pub fn with_banner(content: &ContentStore) -> Self {
        let mut session = Self::new();
        session
            .lines
            .extend(content.banner().iter().map(|text| Line::visible(*text)));
        session
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Whether an output line is mid-reveal
    pub fn is_revealing(&self) -> bool {
        self.lines.iter().any(Line::is_revealing)
    }

    /// Run a command.
    ///
    /// `raw` is stored verbatim as the input line and history entry; lookup
    /// uses its trimmed, lower-cased form.
    pub fn submit(&mut self, raw: &str, content: &ContentStore) -> Submission {
        if raw.trim().is_empty() || self.is_revealing() {
            return Submission::Rejected;
        }

        match interpreter::resolve(raw, content) {
            Resolution::Clear => {
                debug!("Clearing {} lines", self.lines.len());
                self.lines.clear();
                Submission::Cleared
            }
            Resolution::Output(text) => {
                self.lines.push(Line::Input(raw.to_string()));
                self.lines.push(Line::revealing(text));
                self.history.insert(0, raw.to_string());
                self.history_cursor = None;
                Submission::Appended
            }
        }
    }

    /// Advance the active reveal by one sub-line
    pub fn tick(&mut self) -> bool {
        match self.lines.iter_mut().find(|l| l.is_revealing()) {
            Some(line) => line.advance(),
            None => false,
        }
    }

    /// Complete the active reveal at once
    pub fn fast_forward(&mut self) -> bool {
        match self.lines.iter_mut().find(|l| l.is_revealing()) {
            Some(line) => line.finish(),
            None => false,
        }
    }

    /// Recall the next older history entry
    pub fn history_back(&mut self) -> bool {
        if self.is_revealing() || self.history.is_empty() {
            return false;
        }
        let last = self.history.len() - 1;
        let index = match self.history_cursor {
            Some(i) => (i + 1).min(last),
            None => 0,
        };
        self.history_cursor = Some(index);
        self.input = self.history[index].clone();
        true
    }

    /// Recall the next newer history entry, or an empty buffer past the newest
    pub fn history_forward(&mut self) -> bool {
        if self.is_revealing() {
            return false;
        }
        match self.history_cursor {
            Some(i) if i > 0 => {
                self.history_cursor = Some(i - 1);
                self.input = self.history[i - 1].clone();
                true
            }
            cursor => {
                let changed = cursor.is_some() || !self.input.is_empty();
                self.history_cursor = None;
                self.input.clear();
                changed
            }
        }
    }

    /// Current autocomplete suggestion for the input buffer
    pub fn suggestion(&self) -> Option<&'static str> {
        interpreter::suggest(&self.input)
    }

    /// Replace the input buffer with the current suggestion
    pub fn accept_suggestion(&mut self) -> bool {
        match self.suggestion() {
            Some(suggestion) => {
                self.input = suggestion.to_string();
                true
            }
            None => false,
        }
    }
}
