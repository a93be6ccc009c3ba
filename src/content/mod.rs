//! Read-only portfolio content.
//!
//! This module provides:
//! - The record types for the profile, experience and projects
//! - [`ContentStore`], the lookup surface the interpreter reads from
//! - Renderings of the experience and project collections
//!
//! # Layout
//!
//! ```text
//! ContentStore
//! ├── commands  (name -> pre-rendered text)
//! ├── experience / projects (rendered on demand)
//! └── profile (contact details)
//! ```

mod data;
mod render;

pub use render::{render_experience, render_project_detail, render_projects};

/// Owner's profile card
#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub linkedin: &'static str,
}

/// A position held
#[derive(Debug, Clone, Copy)]
pub struct Experience {
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub highlights: &'static [&'static str],
}

/// A showcased project
#[derive(Debug, Clone, Copy)]
pub struct Project {
    /// Short key typed after `project` (e.g. `pis`)
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    pub full_name: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
}

/// Immutable content tables consulted by the interpreter
#[derive(Debug, Clone, Copy)]
pub struct ContentStore {
    pub profile: Profile,
    pub experience: &'static [Experience],
    pub projects: &'static [Project],
    commands: &'static [(&'static str, &'static str)],
    banner: &'static [&'static str],
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentStore {
    /// The portfolio shipped with the binary
    pub const fn builtin() -> Self {
        Self {
            profile: data::PROFILE,
            experience: data::EXPERIENCE,
            projects: data::PROJECTS,
            commands: data::COMMANDS,
            banner: data::BANNER,
        }
    }

    /// Look up a static command by its lower-case name
    pub fn command(&self, name: &str) -> Option<&'static str> {
        self.commands
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, text)| *text)
    }

    /// Welcome lines for a fresh session
    pub fn banner(&self) -> &'static [&'static str] {
        self.banner
    }

    /// Find a project by name.
    ///
    /// Passes, first hit wins: exact key or display name, then substring of
    /// the full name, then substring of the display name. All comparisons
    /// are case-insensitive.
    pub fn find_project(&self, query: &str) -> Option<&'static Project> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let projects = self.projects;
        projects
            .iter()
            .find(|p| p.key == needle || p.name.to_lowercase() == needle)
            .or_else(|| {
                projects
                    .iter()
                    .find(|p| p.full_name.to_lowercase().contains(&needle))
            })
            .or_else(|| {
                projects
                    .iter()
                    .find(|p| p.name.to_lowercase().contains(&needle))
            })
    }

    /// Comma-separated project keys, used in "not found" hints
    pub fn project_keys(&self) -> String {
        self.projects
            .iter()
            .map(|p| p.key)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_commands_present() {
        let store = ContentStore::builtin();
        for name in ["help", "about", "skills", "education", "social", "contact"] {
            assert!(store.command(name).is_some(), "missing {}", name);
        }
        assert!(store.command("experience").is_none());
        assert!(store.command("HELP").is_none());
    }

    #[test]
    fn test_find_project_by_key_and_name() {
        let store = ContentStore::builtin();
        assert_eq!(store.find_project("pis").unwrap().full_name, "Payroll Information System");
        assert_eq!(store.find_project("POS").unwrap().key, "pos");
        assert_eq!(store.find_project("advocase ai").unwrap().key, "advocase");
    }

    #[test]
    fn test_find_project_by_substring() {
        let store = ContentStore::builtin();
        // Full name first
        assert_eq!(store.find_project("speech").unwrap().key, "asr");
        assert_eq!(store.find_project("school").unwrap().key, "school");
        // Display name as last resort
        assert_eq!(store.find_project("asr plat").unwrap().key, "asr");
        assert!(store.find_project("nope").is_none());
        assert!(store.find_project("   ").is_none());
    }

    #[test]
    fn test_project_keys() {
        let store = ContentStore::builtin();
        assert_eq!(store.project_keys(), "pis, advocase, asr, school, pos");
    }

    #[test]
    fn test_phone_literals_preserved() {
        let store = ContentStore::builtin();
        assert_eq!(store.profile.phone, "+91-7438850195");
        assert!(store.command("social").unwrap().contains("+91-7438850195"));
        assert!(store.command("contact").unwrap().contains("+91-9304480737"));
    }
}
