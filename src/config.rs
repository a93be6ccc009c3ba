//! Configuration and color scheme management for termfolio.
//!
//! This module provides:
//! - TOML configuration file loading from `~/.termfolio/config.toml`
//! - Built-in color schemes (neon, dracula, nord, tokyo-night, gruvbox-dark)
//!
//! # Configuration File
//!
//! ```toml
//! # Color scheme: neon, dracula, nord, tokyo-night, gruvbox-dark
//! color_scheme = "neon"
//!
//! # Milliseconds between revealed output lines
//! tick_ms = 50
//!
//! # Show the welcome lines at start-up
//! banner = true
//!
//! # Title bar prompt
//! prompt = "amulya@portfolio:~$"
//!
//! [contact]
//! outbox = "/home/me/.termfolio/outbox.toml"
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Color scheme name
    pub color_scheme: String,
    /// Reveal interval in milliseconds
    pub tick_ms: u64,
    /// Show the welcome banner
    pub banner: bool,
    /// Prompt shown in the title bar
    pub prompt: String,
    /// Contact form settings
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_scheme: "neon".to_string(),
            tick_ms: 50,
            banner: true,
            prompt: "amulya@portfolio:~$".to_string(),
            contact: ContactConfig::default(),
        }
    }
}

/// Contact form configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    /// Outbox file (defaults to `~/.termfolio/outbox.toml`)
    pub outbox: Option<PathBuf>,
}

impl Config {
    /// Load configuration from `~/.termfolio/config.toml`.
    ///
    /// A missing file yields defaults; an unreadable or invalid one is
    /// logged and also yields defaults.
    pub fn load() -> Self {
        let Some(path) = Self::get_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file: {}", e);
                Self::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Get config file path
    fn get_config_path() -> Option<PathBuf> {
        data_dir().map(|dir| dir.join("config.toml"))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    /// Get the color scheme
    pub fn get_color_scheme(&self) -> ColorScheme {
        ColorScheme::by_name(&self.color_scheme)
    }
}

/// Color definition (RGB)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to crossterm Color
    pub fn to_crossterm(&self) -> crossterm::style::Color {
        crossterm::style::Color::Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Color scheme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub name: String,

    pub background: Color,

    // Window chrome
    pub chrome_bg: Color,
    pub chrome_fg: Color,
    pub dots: [Color; 3],

    // Scrollback
    pub prompt: Color,
    pub input: Color,
    pub output: Color,
    pub suggestion: Color,

    // Contact form overlay
    pub form_bg: Color,
    pub form_fg: Color,
    pub form_label: Color,
    pub form_focus: Color,
    pub form_border: Color,
    pub status_ok: Color,
    pub status_err: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::neon()
    }
}

impl ColorScheme {
    /// Cyan and green on near-black
    pub fn neon() -> Self {
        Self {
            name: "neon".to_string(),

            background: Color::new(8, 12, 20),

            chrome_bg: Color::new(20, 27, 40),
            chrome_fg: Color::new(120, 134, 156),
            dots: [
                Color::new(190, 60, 70),
                Color::new(40, 160, 90),
                Color::new(0, 150, 170),
            ],

            prompt: Color::new(57, 255, 20),
            input: Color::new(0, 229, 255),
            output: Color::new(150, 165, 185),
            suggestion: Color::new(60, 72, 90),

            form_bg: Color::new(20, 27, 40),
            form_fg: Color::new(220, 230, 240),
            form_label: Color::new(57, 255, 20),
            form_focus: Color::new(0, 229, 255),
            form_border: Color::new(0, 120, 140),
            status_ok: Color::new(57, 255, 20),
            status_err: Color::new(255, 85, 85),
        }
    }

    /// Dracula scheme
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),

            background: Color::new(40, 42, 54),

            chrome_bg: Color::new(68, 71, 90),
            chrome_fg: Color::new(98, 114, 164),
            dots: [
                Color::new(255, 85, 85),
                Color::new(80, 250, 123),
                Color::new(139, 233, 253),
            ],

            prompt: Color::new(80, 250, 123),
            input: Color::new(189, 147, 249),
            output: Color::new(248, 248, 242),
            suggestion: Color::new(98, 114, 164),

            form_bg: Color::new(68, 71, 90),
            form_fg: Color::new(248, 248, 242),
            form_label: Color::new(80, 250, 123),
            form_focus: Color::new(189, 147, 249),
            form_border: Color::new(189, 147, 249),
            status_ok: Color::new(80, 250, 123),
            status_err: Color::new(255, 85, 85),
        }
    }

    /// Nord scheme
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),

            background: Color::new(46, 52, 64),

            chrome_bg: Color::new(59, 66, 82),
            chrome_fg: Color::new(147, 161, 181),
            dots: [
                Color::new(191, 97, 106),
                Color::new(163, 190, 140),
                Color::new(136, 192, 208),
            ],

            prompt: Color::new(163, 190, 140),
            input: Color::new(136, 192, 208),
            output: Color::new(216, 222, 233),
            suggestion: Color::new(76, 86, 106),

            form_bg: Color::new(59, 66, 82),
            form_fg: Color::new(236, 239, 244),
            form_label: Color::new(163, 190, 140),
            form_focus: Color::new(136, 192, 208),
            form_border: Color::new(136, 192, 208),
            status_ok: Color::new(163, 190, 140),
            status_err: Color::new(191, 97, 106),
        }
    }

    /// Tokyo Night scheme
    pub fn tokyo_night() -> Self {
        Self {
            name: "tokyo-night".to_string(),

            background: Color::new(26, 27, 38),

            chrome_bg: Color::new(36, 40, 59),
            chrome_fg: Color::new(86, 95, 137),
            dots: [
                Color::new(247, 118, 142),
                Color::new(158, 206, 106),
                Color::new(122, 162, 247),
            ],

            prompt: Color::new(158, 206, 106),
            input: Color::new(122, 162, 247),
            output: Color::new(169, 177, 214),
            suggestion: Color::new(65, 72, 104),

            form_bg: Color::new(36, 40, 59),
            form_fg: Color::new(192, 202, 245),
            form_label: Color::new(158, 206, 106),
            form_focus: Color::new(122, 162, 247),
            form_border: Color::new(122, 162, 247),
            status_ok: Color::new(158, 206, 106),
            status_err: Color::new(247, 118, 142),
        }
    }

    /// Gruvbox Dark scheme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "gruvbox-dark".to_string(),

            background: Color::new(40, 40, 40),

            chrome_bg: Color::new(60, 56, 54),
            chrome_fg: Color::new(168, 153, 132),
            dots: [
                Color::new(251, 73, 52),
                Color::new(184, 187, 38),
                Color::new(131, 165, 152),
            ],

            prompt: Color::new(184, 187, 38),
            input: Color::new(250, 189, 47),
            output: Color::new(235, 219, 178),
            suggestion: Color::new(102, 92, 84),

            form_bg: Color::new(60, 56, 54),
            form_fg: Color::new(235, 219, 178),
            form_label: Color::new(184, 187, 38),
            form_focus: Color::new(250, 189, 47),
            form_border: Color::new(215, 153, 33),
            status_ok: Color::new(184, 187, 38),
            status_err: Color::new(251, 73, 52),
        }
    }

    /// Get scheme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "tokyo-night" | "tokyo_night" | "tokyonight" => Self::tokyo_night(),
            "gruvbox-dark" | "gruvbox_dark" | "gruvbox" => Self::gruvbox_dark(),
            _ => Self::neon(),
        }
    }

    /// List available schemes
    pub fn list() -> Vec<&'static str> {
        vec!["neon", "dracula", "nord", "tokyo-night", "gruvbox-dark"]
    }
}

/// `~/.termfolio`, created on first use
pub fn data_dir() -> Option<PathBuf> {
    let dir = home_dir()?.join(".termfolio");
    if !dir.exists() {
        let _ = fs::create_dir_all(&dir);
    }
    Some(dir)
}

// Get home directory
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("USERPROFILE")
        .or_else(|| std::env::var_os("HOME"))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse("color_scheme = \"nord\"\ntick_ms = 20\n").unwrap();
        assert_eq!(config.color_scheme, "nord");
        assert_eq!(config.tick_interval(), Duration::from_millis(20));
        assert!(config.banner);
        assert_eq!(config.prompt, "amulya@portfolio:~$");
        assert_eq!(config.contact.outbox, None);
    }

    #[test]
    fn test_contact_section() {
        let config = Config::parse("[contact]\noutbox = \"/tmp/out.toml\"\n").unwrap();
        assert_eq!(config.contact.outbox, Some(PathBuf::from("/tmp/out.toml")));
    }

    #[test]
    fn test_invalid_file_is_error() {
        assert!(matches!(Config::parse("tick_ms = \"fast\""), Err(ConfigError::Parse(_))));
        let missing = Path::new("/nonexistent/termfolio/config.toml");
        assert!(matches!(Config::load_from(missing), Err(ConfigError::Read { .. })));
    }

    #[test]
    fn test_zero_tick_is_clamped() {
        let config = Config::parse("tick_ms = 0").unwrap();
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_scheme_lookup() {
        for name in ColorScheme::list() {
            assert_eq!(ColorScheme::by_name(name).name, name);
        }
        assert_eq!(ColorScheme::by_name("Gruvbox").name, "gruvbox-dark");
        assert_eq!(ColorScheme::by_name("unknown").name, "neon");
    }
}
