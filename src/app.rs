//! Application state
//!
//! Ties the session, the reveal clock and the contact form together and
//! routes key actions to them. Nothing here touches the terminal, so the
//! event loop in `main` is the only I/O-bound piece.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::config::{ColorScheme, Config};
use crate::contact::{ContactForm, FormSubmitter, OutboxSubmitter};
use crate::content::ContentStore;
use crate::core::{self, Event, RevealClock, Session};
use crate::ui::renderer::CHROME_ROWS;
use crate::ui::{layout, Action, FormAction, View};

/// Longest the event loop blocks when no reveal is running
pub const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct App {
    pub session: Session,
    pub content: ContentStore,
    pub form: ContactForm,
    pub clock: RevealClock,
    pub scheme: ColorScheme,
    pub prompt: String,
    submitter: Box<dyn FormSubmitter>,
    /// Rows scrolled up from the tail
    scroll: usize,
    /// Rows available to the scrollback
    page: usize,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let outbox = config
            .contact
            .outbox
            .clone()
            .unwrap_or_else(OutboxSubmitter::default_path);
        Self::with_submitter(config, Box::new(OutboxSubmitter::new(outbox)))
    }

    pub fn with_submitter(config: &Config, submitter: Box<dyn FormSubmitter>) -> Self {
        let content = ContentStore::builtin();
        let session = if config.banner {
            Session::with_banner(&content)
        } else {
            Session::new()
        };
        Self {
            session,
            content,
            form: ContactForm::new(),
            clock: RevealClock::new(config.tick_interval()),
            scheme: config.get_color_scheme(),
            prompt: config.prompt.clone(),
            submitter,
            scroll: 0,
            page: 10,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Record the scrollback height after a resize
    pub fn set_page(&mut self, rows: usize) {
        self.page = rows.max(1);
    }

    /// Keep the scroll offset within the laid-out scrollback
    pub fn clamp_scroll(&mut self, cols: u16, rows: u16) {
        let height = rows.saturating_sub(CHROME_ROWS) as usize;
        let total = layout::scrollback_rows(self.session.lines(), cols as usize).len();
        self.scroll = self.scroll.min(layout::max_scroll(total, height));
    }

    pub fn view(&self) -> View<'_> {
        View {
            session: &self.session,
            profile: &self.content.profile,
            form: &self.form,
            scheme: &self.scheme,
            prompt: &self.prompt,
            scroll: self.scroll,
        }
    }

    /// Feed one event to the session and keep the clock in step.
    /// Returns true if a redraw is needed.
    pub fn dispatch(&mut self, event: Event, now: Instant) -> bool {
        let committed = self.session.history().len();
        let changed = core::update(&mut self.session, &self.content, event);
        match event {
            Event::Submit if changed => {
                // New output or a cleared screen: jump back to the tail
                self.scroll = 0;
                match self.committed_since(committed) {
                    Some(command) => info!("Command: {}", command),
                    None => info!("Terminal cleared"),
                }
            }
            Event::HistoryBack | Event::HistoryForward if changed => {
                debug!("History cursor: {:?}", self.session.history_cursor());
            }
            _ => {}
        }
        self.clock.sync(self.session.is_revealing(), now);
        changed
    }

    /// Command added to history since it held `before` entries
    fn committed_since(&self, before: usize) -> Option<&str> {
        let history = self.session.history();
        if history.len() > before {
            history.first().map(String::as_str)
        } else {
            None
        }
    }

    /// Apply a key action. Returns true if a redraw is needed.
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => {
                self.should_quit = true;
                false
            }
            Action::Session(event) => self.dispatch(event, now),
            Action::ScrollUp => {
                self.scroll += self.page;
                true
            }
            Action::ScrollDown => {
                let before = self.scroll;
                self.scroll = self.scroll.saturating_sub(self.page);
                before != self.scroll
            }
            Action::OpenForm => {
                debug!("Opening contact form");
                self.form.show();
                true
            }
            Action::Form(action) => {
                self.handle_form(action, now);
                true
            }
        }
    }

    fn handle_form(&mut self, action: FormAction, now: Instant) {
        match action {
            FormAction::Char(ch) => self.form.input_char(ch),
            FormAction::Backspace => self.form.backspace(),
            FormAction::NextField => self.form.focus_next(),
            FormAction::PrevField => self.form.focus_prev(),
            FormAction::Submit => {
                self.form.submit(self.submitter.as_mut(), now);
            }
            FormAction::Close => self.form.hide(),
        }
    }

    /// Timer work: reveal ticks and status expiry. Returns true if a redraw
    /// is needed.
    pub fn on_timer(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.clock.fire(now) {
            changed |= self.dispatch(Event::Tick, now);
        }
        changed |= self.form.expire(now);
        changed
    }

    /// How long to wait for input before [`App::on_timer`] has work
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.clock.poll_timeout(now, IDLE_POLL)
    }

    /// Stop the reveal clock at teardown
    pub fn shutdown(&mut self) {
        if self.clock.is_armed() {
            debug!("Reveal interrupted at shutdown");
        }
        self.clock.disarm();
        info!(
            "Session closed after {} commands",
            self.session.history().len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::{ContactError, ContactMessage, FormStatus};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Shared(Rc<RefCell<Vec<ContactMessage>>>);

    impl FormSubmitter for Shared {
        fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError> {
            self.0.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    fn app() -> (App, Rc<RefCell<Vec<ContactMessage>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        let config = Config {
            banner: false,
            ..Config::default()
        };
        (App::with_submitter(&config, Box::new(Shared(sent.clone()))), sent)
    }

    fn type_command(app: &mut App, text: &str, now: Instant) {
        for ch in text.chars() {
            app.handle(Action::Session(Event::Insert(ch)), now);
        }
        app.handle(Action::Session(Event::Submit), now);
    }

    #[test]
    fn test_clock_runs_only_while_revealing() {
        let (mut app, _) = app();
        let start = Instant::now();
        assert!(!app.clock.is_armed());

        type_command(&mut app, "contact", start);
        assert!(app.clock.is_armed());

        let interval = app.clock.interval();
        let mut now = start;
        let mut ticks = 0;
        while app.session.is_revealing() {
            now += interval;
            assert!(app.on_timer(now));
            ticks += 1;
        }
        assert_eq!(ticks, 4);
        assert!(!app.clock.is_armed());
        assert_eq!(app.poll_timeout(now), IDLE_POLL);
    }

    #[test]
    fn test_clear_disarms_clock() {
        let (mut app, _) = app();
        let now = Instant::now();
        type_command(&mut app, "help", now);
        app.handle(Action::Session(Event::FastForward), now);
        assert!(!app.clock.is_armed());

        type_command(&mut app, "clear", now);
        assert!(app.session.lines().is_empty());
        assert!(!app.clock.is_armed());
    }

    #[test]
    fn test_timer_without_reveal_is_quiet() {
        let (mut app, _) = app();
        let now = Instant::now();
        assert!(!app.on_timer(now + Duration::from_secs(10)));
    }

    #[test]
    fn test_scroll_resets_on_new_output() {
        let (mut app, _) = app();
        let now = Instant::now();
        app.set_page(5);
        app.handle(Action::ScrollUp, now);
        app.handle(Action::ScrollUp, now);
        assert_eq!(app.scroll, 10);
        app.handle(Action::ScrollDown, now);
        assert_eq!(app.scroll, 5);

        app.clamp_scroll(80, 24);
        assert_eq!(app.scroll, 0);
        app.handle(Action::ScrollUp, now);

        type_command(&mut app, "about", now);
        assert_eq!(app.scroll, 0);
        assert!(!app.handle(Action::ScrollDown, now));
    }

    #[test]
    fn test_clear_commits_no_command() {
        let (mut app, _) = app();
        let now = Instant::now();
        let before = app.session.history().len();
        type_command(&mut app, "help", now);
        assert_eq!(app.committed_since(before), Some("help"));
        app.handle(Action::Session(Event::FastForward), now);

        let before = app.session.history().len();
        app.set_page(5);
        app.handle(Action::ScrollUp, now);
        type_command(&mut app, "clear", now);
        assert!(app.session.lines().is_empty());
        assert_eq!(app.scroll, 0);
        assert_eq!(app.committed_since(before), None);
        assert_eq!(app.session.history(), ["help".to_string()]);
    }

    #[test]
    fn test_contact_form_flow() {
        let (mut app, sent) = app();
        let now = Instant::now();
        app.handle(Action::OpenForm, now);
        assert!(app.form.visible);

        for (i, value) in ["Ana", "ana@example.com", "Hi!"].iter().enumerate() {
            if i > 0 {
                app.handle(Action::Form(FormAction::NextField), now);
            }
            for ch in value.chars() {
                app.handle(Action::Form(FormAction::Char(ch)), now);
            }
        }
        app.handle(Action::Form(FormAction::Submit), now);

        assert_eq!(sent.borrow().len(), 1);
        assert_eq!(sent.borrow()[0].email, "ana@example.com");
        assert!(matches!(app.form.status, FormStatus::Sent { .. }));

        assert!(app.on_timer(now + Duration::from_secs(3)));
        assert_eq!(app.form.status, FormStatus::Idle);

        app.handle(Action::Form(FormAction::Close), now);
        assert!(!app.form.visible);
        assert!(app.session.lines().is_empty());
    }

    #[test]
    fn test_quit() {
        let (mut app, _) = app();
        assert!(!app.should_quit());
        app.handle(Action::Quit, Instant::now());
        assert!(app.should_quit());
    }
}
