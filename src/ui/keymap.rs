//! Key mapping for terminal input
//!
//! Converts crossterm key events into application actions. Two keymaps
//! exist: the command line, and the contact form overlay.

use bitflags::bitflags;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::Event;

bitflags! {
    /// Modifier keys
    #[derive(Clone, Copy, Debug, Default, PartialEq)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        let mut result = Modifiers::empty();
        if mods.contains(KeyModifiers::SHIFT) {
            result |= Modifiers::SHIFT;
        }
        if mods.contains(KeyModifiers::CONTROL) {
            result |= Modifiers::CTRL;
        }
        if mods.contains(KeyModifiers::ALT) {
            result |= Modifiers::ALT;
        }
        result
    }
}

/// Contact form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Char(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    Close,
}

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Feed an event to the session reducer
    Session(Event),
    /// Scroll the scrollback by a page
    ScrollUp,
    ScrollDown,
    /// Open the contact form overlay
    OpenForm,
    Form(FormAction),
    Quit,
}

/// Key mapper for converting key events to actions
pub struct KeyMapper;

impl KeyMapper {
    /// Map a key press. `form_open` selects the contact form keymap.
    pub fn map(event: &KeyEvent, form_open: bool) -> Option<Action> {
        let mods = Modifiers::from(event.modifiers);

        // Quit works everywhere
        if mods.contains(Modifiers::CTRL) {
            if let KeyCode::Char('c' | 'C' | 'd' | 'D') = event.code {
                return Some(Action::Quit);
            }
        }

        if form_open {
            Self::map_form(event, mods)
        } else {
            Self::map_prompt(event, mods)
        }
    }

    fn map_prompt(event: &KeyEvent, mods: Modifiers) -> Option<Action> {
        let session = |e| Some(Action::Session(e));

        match event.code {
            KeyCode::Char('u' | 'U') if mods.contains(Modifiers::CTRL) => session(Event::ClearInput),
            KeyCode::Char(_) if mods.intersects(Modifiers::CTRL | Modifiers::ALT) => None,
            KeyCode::Char(ch) => session(Event::Insert(ch)),
            KeyCode::Enter => session(Event::Submit),
            KeyCode::Backspace => session(Event::Backspace),
            KeyCode::Tab | KeyCode::Right => session(Event::AcceptSuggestion),
            KeyCode::Up => session(Event::HistoryBack),
            KeyCode::Down => session(Event::HistoryForward),
            KeyCode::Esc => session(Event::FastForward),
            KeyCode::PageUp => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::ScrollDown),
            KeyCode::F(2) => Some(Action::OpenForm),
            _ => None,
        }
    }

    fn map_form(event: &KeyEvent, mods: Modifiers) -> Option<Action> {
        let form = |a| Some(Action::Form(a));

        match event.code {
            KeyCode::Char(_) if mods.intersects(Modifiers::CTRL | Modifiers::ALT) => None,
            KeyCode::Char(ch) => form(FormAction::Char(ch)),
            KeyCode::Backspace => form(FormAction::Backspace),
            KeyCode::Tab if mods.contains(Modifiers::SHIFT) => form(FormAction::PrevField),
            KeyCode::Tab | KeyCode::Down => form(FormAction::NextField),
            KeyCode::BackTab | KeyCode::Up => form(FormAction::PrevField),
            KeyCode::Enter => form(FormAction::Submit),
            KeyCode::Esc | KeyCode::F(2) => form(FormAction::Close),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    fn prompt(code: KeyCode) -> Option<Action> {
        KeyMapper::map(&key(code, KeyModifiers::NONE), false)
    }

    #[test]
    fn test_prompt_keys() {
        assert_eq!(prompt(KeyCode::Char('a')), Some(Action::Session(Event::Insert('a'))));
        assert_eq!(prompt(KeyCode::Enter), Some(Action::Session(Event::Submit)));
        assert_eq!(prompt(KeyCode::Tab), Some(Action::Session(Event::AcceptSuggestion)));
        assert_eq!(prompt(KeyCode::Right), Some(Action::Session(Event::AcceptSuggestion)));
        assert_eq!(prompt(KeyCode::Up), Some(Action::Session(Event::HistoryBack)));
        assert_eq!(prompt(KeyCode::Down), Some(Action::Session(Event::HistoryForward)));
        assert_eq!(prompt(KeyCode::Esc), Some(Action::Session(Event::FastForward)));
        assert_eq!(prompt(KeyCode::PageUp), Some(Action::ScrollUp));
        assert_eq!(prompt(KeyCode::F(2)), Some(Action::OpenForm));
        assert_eq!(prompt(KeyCode::Insert), None);
    }

    #[test]
    fn test_shifted_chars_are_text() {
        let event = key(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(KeyMapper::map(&event, false), Some(Action::Session(Event::Insert('H'))));
    }

    #[test]
    fn test_ctrl_keys() {
        let ctrl = KeyModifiers::CONTROL;
        assert_eq!(KeyMapper::map(&key(KeyCode::Char('c'), ctrl), false), Some(Action::Quit));
        assert_eq!(KeyMapper::map(&key(KeyCode::Char('d'), ctrl), true), Some(Action::Quit));
        assert_eq!(
            KeyMapper::map(&key(KeyCode::Char('u'), ctrl), false),
            Some(Action::Session(Event::ClearInput))
        );
        assert_eq!(KeyMapper::map(&key(KeyCode::Char('x'), ctrl), false), None);
        assert_eq!(KeyMapper::map(&key(KeyCode::Char('x'), KeyModifiers::ALT), true), None);
    }

    #[test]
    fn test_form_keys() {
        let form = |code, mods| KeyMapper::map(&key(code, mods), true);
        let none = KeyModifiers::NONE;
        assert_eq!(form(KeyCode::Char('z'), none), Some(Action::Form(FormAction::Char('z'))));
        assert_eq!(form(KeyCode::Tab, none), Some(Action::Form(FormAction::NextField)));
        assert_eq!(form(KeyCode::Tab, KeyModifiers::SHIFT), Some(Action::Form(FormAction::PrevField)));
        assert_eq!(form(KeyCode::BackTab, KeyModifiers::SHIFT), Some(Action::Form(FormAction::PrevField)));
        assert_eq!(form(KeyCode::Enter, none), Some(Action::Form(FormAction::Submit)));
        assert_eq!(form(KeyCode::Esc, none), Some(Action::Form(FormAction::Close)));
        assert_eq!(form(KeyCode::PageUp, none), None);
    }
}
