//! Core terminal logic, independent of any rendering backend.
//!
//! - **session**: scrollback lines, input buffer, command history
//! - **interpreter**: command resolution and autocomplete
//! - **clock**: reveal tick scheduling for the host loop
//!
//! # Architecture
//!
//! ```text
//! key event ─┐
//!            ├─> Event ─> update(&mut Session, &ContentStore) ─> redraw?
//! clock ─────┘
//! ```

pub mod clock;
pub mod interpreter;
pub mod session;

pub use clock::RevealClock;
pub use session::{Line, Reveal, Session, Submission};

use crate::content::ContentStore;

/// Everything that can change a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Type a character into the input buffer
    Insert(char),
    /// Delete the last character of the input buffer
    Backspace,
    /// Empty the input buffer
    ClearInput,
    /// Run the input buffer as a command
    Submit,
    /// Replace the input buffer with the autocomplete suggestion
    AcceptSuggestion,
    /// Recall an older command
    HistoryBack,
    /// Recall a newer command
    HistoryForward,
    /// Reveal one more sub-line of the active output
    Tick,
    /// Show the active output in full
    FastForward,
}

/// Apply one event. Returns true if the session changed.
pub fn update(session: &mut Session, content: &ContentStore, event: Event) -> bool {
    match event {
        Event::Insert(ch) => {
            session.input.push(ch);
            true
        }
        Event::Backspace => session.input.pop().is_some(),
        Event::ClearInput => {
            let changed = !session.input.is_empty();
            session.input.clear();
            changed
        }
        Event::Submit => {
            let command = session.input.trim().to_string();
            match session.submit(&command, content) {
                Submission::Rejected => false,
                Submission::Cleared | Submission::Appended => {
                    session.input.clear();
                    true
                }
            }
        }
        Event::AcceptSuggestion => session.accept_suggestion(),
        Event::HistoryBack => session.history_back(),
        Event::HistoryForward => session.history_forward(),
        Event::Tick => session.tick(),
        Event::FastForward => session.fast_forward(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(session: &mut Session, content: &ContentStore, text: &str) {
        for ch in text.chars() {
            update(session, content, Event::Insert(ch));
        }
    }

    fn run(session: &mut Session, content: &ContentStore, text: &str) {
        type_str(session, content, text);
        assert!(update(session, content, Event::Submit));
        while update(session, content, Event::Tick) {}
    }

    #[test]
    fn test_submit_uses_trimmed_buffer() {
        let content = ContentStore::builtin();
        let mut session = Session::new();
        type_str(&mut session, &content, "  Help ");
        assert!(update(&mut session, &content, Event::Submit));

        assert_eq!(session.lines()[0], Line::Input("Help".to_string()));
        assert_eq!(session.history(), ["Help".to_string()]);
        assert!(session.input.is_empty());
    }

    #[test]
    fn test_rejected_submit_keeps_buffer() {
        let content = ContentStore::builtin();
        let mut session = Session::new();
        run(&mut session, &content, "help");
        update(&mut session, &content, Event::HistoryBack);
        update(&mut session, &content, Event::Submit);
        assert!(session.is_revealing());

        type_str(&mut session, &content, "about");
        assert!(!update(&mut session, &content, Event::Submit));
        assert_eq!(session.input, "about");
        assert_eq!(session.lines().len(), 4);
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_history_navigation_events() {
        let content = ContentStore::builtin();
        let mut session = Session::new();
        run(&mut session, &content, "a");
        run(&mut session, &content, "b");

        update(&mut session, &content, Event::HistoryBack);
        update(&mut session, &content, Event::HistoryBack);
        assert_eq!(session.input, "a");
        update(&mut session, &content, Event::HistoryForward);
        update(&mut session, &content, Event::HistoryForward);
        assert_eq!(session.input, "");
    }

    #[test]
    fn test_editing_events() {
        let content = ContentStore::builtin();
        let mut session = Session::new();
        type_str(&mut session, &content, "ski");
        assert!(update(&mut session, &content, Event::AcceptSuggestion));
        assert_eq!(session.input, "skills");
        assert!(update(&mut session, &content, Event::Backspace));
        assert_eq!(session.input, "skill");
        assert!(update(&mut session, &content, Event::ClearInput));
        assert!(!update(&mut session, &content, Event::ClearInput));
        assert!(!update(&mut session, &content, Event::Backspace));
    }

    #[test]
    fn test_clear_event_resets_buffer() {
        let content = ContentStore::builtin();
        let mut session = Session::with_banner(&content);
        type_str(&mut session, &content, "clear");
        assert!(update(&mut session, &content, Event::Submit));
        assert!(session.lines().is_empty());
        assert!(session.input.is_empty());
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_fast_forward_event() {
        let content = ContentStore::builtin();
        let mut session = Session::new();
        type_str(&mut session, &content, "experience");
        update(&mut session, &content, Event::Submit);
        assert!(update(&mut session, &content, Event::FastForward));
        assert!(!session.is_revealing());
        assert!(!update(&mut session, &content, Event::FastForward));
        assert!(!update(&mut session, &content, Event::Tick));
    }
}
