//! Contact form
//!
//! Form state, validation and the submission boundary. Messages are handed
//! to a [`FormSubmitter`]; the shipped implementation appends them to a
//! local TOML outbox (`~/.termfolio/outbox.toml`).

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// How long the "sent" confirmation stays up
pub const SENT_DISPLAY: Duration = Duration::from_secs(3);

#[derive(Error, Debug)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Failed to write outbox: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to serialize message: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A message left through the form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Check required fields and the email shape
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(ContactError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField("message"));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.trim().to_string()));
        }
        Ok(())
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && !email.contains(char::is_whitespace)
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

/// Destination for contact messages
pub trait FormSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError>;
}

#[derive(Serialize)]
struct OutboxEntry<'a> {
    timestamp: u64,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

#[derive(Serialize)]
struct OutboxChunk<'a> {
    message: Vec<OutboxEntry<'a>>,
}

/// Appends messages to a TOML file as `[[message]]` tables
#[derive(Debug, Clone)]
pub struct OutboxSubmitter {
    path: PathBuf,
}

impl OutboxSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Outbox under `~/.termfolio`, or the working directory without a home
    pub fn default_path() -> PathBuf {
        crate::config::data_dir()
            .map(|dir| dir.join("outbox.toml"))
            .unwrap_or_else(|| PathBuf::from("outbox.toml"))
    }
}

impl FormSubmitter for OutboxSubmitter {
    fn submit(&mut self, message: &ContactMessage) -> Result<(), ContactError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let chunk = OutboxChunk {
            message: vec![OutboxEntry {
                timestamp,
                name: &message.name,
                email: &message.email,
                message: &message.message,
            }],
        };
        let content = toml::to_string(&chunk)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", content)?;

        info!("Contact message from {} saved to {}", message.email, self.path.display());
        Ok(())
    }
}

/// Submission status shown on the form's button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sent { at: Instant },
    Failed(String),
}

impl FormStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "> send_message()",
            FormStatus::Sent { .. } => "✓ Message sent!",
            FormStatus::Failed(_) => "✗ Error — try again",
        }
    }
}

/// Which input has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            Field::Name => Field::Message,
            Field::Email => Field::Name,
            Field::Message => Field::Email,
        }
    }
}

/// Contact form overlay state
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub draft: ContactMessage,
    pub focus: Field,
    pub status: FormStatus,
    /// Whether the overlay is shown
    pub visible: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            draft: ContactMessage::default(),
            focus: Field::Name,
            status: FormStatus::Idle,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
        self.focus = Field::Name;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.draft.name,
            Field::Email => &self.draft.email,
            Field::Message => &self.draft.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.draft.name,
            Field::Email => &mut self.draft.email,
            Field::Message => &mut self.draft.message,
        }
    }

    pub fn input_char(&mut self, ch: char) {
        let focus = self.focus;
        self.value_mut(focus).push(ch);
    }

    pub fn backspace(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Validate and hand the draft to `submitter`. Fields are cleared only
    /// on success. Failures are not retried.
    pub fn submit(&mut self, submitter: &mut dyn FormSubmitter, now: Instant) -> &FormStatus {
        let result = self
            .draft
            .validate()
            .and_then(|()| submitter.submit(&self.draft));

        self.status = match result {
            Ok(()) => {
                self.draft = ContactMessage::default();
                self.focus = Field::Name;
                FormStatus::Sent { at: now }
            }
            Err(e) => {
                warn!("Contact form submission failed: {}", e);
                FormStatus::Failed(e.to_string())
            }
        };
        &self.status
    }

    /// Drop the "sent" confirmation once it has been shown long enough.
    /// Returns true if the status changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        if let FormStatus::Sent { at } = self.status {
            if now.duration_since(at) >= SENT_DISPLAY {
                self.status = FormStatus::Idle;
                return true;
            }
        }
        false
    }
}
