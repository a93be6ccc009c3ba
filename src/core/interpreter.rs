//! Command resolution and autocomplete
//!
//! Maps a submitted command to its output text. Matching works on the
//! trimmed, lower-cased input; the raw text is only echoed back in the
//! "not found" message.

use tracing::debug;

use crate::content::{self, ContentStore};

/// Top-level commands offered by autocomplete, in suggestion order
pub const AVAILABLE_COMMANDS: &[&str] = &[
    "help",
    "about",
    "skills",
    "experience",
    "projects",
    "education",
    "contact",
    "social",
    "clear",
];

const CLEAR: &str = "clear";
const PROJECT_PREFIX: &str = "project ";

/// What a command turns into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Wipe the scrollback
    Clear,
    /// Append this output text
    Output(String),
}

/// Trim and lower-case for matching
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Resolve a raw command against the content store
pub fn resolve(raw: &str, content: &ContentStore) -> Resolution {
    let command = normalize(raw);

    if command == CLEAR {
        return Resolution::Clear;
    }

    let output = if let Some(text) = content.command(&command) {
        text.to_string()
    } else if let Some(name) = command.strip_prefix(PROJECT_PREFIX) {
        project_detail(name, content)
    } else if command == "experience" {
        content::render_experience(content.experience)
    } else if command == "projects" {
        content::render_projects(content.projects)
    } else {
        debug!("Unknown command: {:?}", raw);
        format!(
            "Command not found: \"{}\". Type \"help\" for available commands.",
            raw
        )
    };

    Resolution::Output(output)
}

fn project_detail(name: &str, content: &ContentStore) -> String {
    let name = name.trim();
    match content.find_project(name) {
        Some(project) => content::render_project_detail(project),
        None => format!(
            "Project \"{}\" not found. Try: {}",
            name,
            content.project_keys()
        ),
    }
}

/// First command that extends `input`, if any.
///
/// An exact match yields nothing, so a completed command stops suggesting
/// itself.
pub fn suggest(input: &str) -> Option<&'static str> {
    let needle = normalize(input);
    if needle.is_empty() {
        return None;
    }
    AVAILABLE_COMMANDS
        .iter()
        .copied()
        .find(|c| c.starts_with(&needle) && *c != needle)
}
