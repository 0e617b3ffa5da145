//! Theme preference model and the persistence collaborator trait

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the visitor asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the OS/browser color scheme (default until the visitor chooses)
    #[default]
    System,
}

/// The scheme actually rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedTheme {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn resolve(self, system: ResolvedTheme) -> ResolvedTheme {
        match self {
            ThemePreference::Light => ResolvedTheme::Light,
            ThemePreference::Dark => ResolvedTheme::Dark,
            ThemePreference::System => system,
        }
    }

    /// Explicit preference showing the opposite of what is rendered now.
    /// Never yields `System`.
    pub fn toggled(self, system: ResolvedTheme) -> ThemePreference {
        match self.resolve(system) {
            ResolvedTheme::Light => ThemePreference::Dark,
            ResolvedTheme::Dark => ThemePreference::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(CoreError::UnknownTheme {
                value: s.to_string(),
            }),
        }
    }
}

impl ResolvedTheme {
    /// CSS class toggled on `<html>` (Tailwind `darkMode: 'class'`)
    pub fn html_class(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "light",
            ResolvedTheme::Dark => "dark",
        }
    }

    /// Icon for the toggle button: the scheme a click switches to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "🌙",
            ResolvedTheme::Dark => "☀️",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            ResolvedTheme::Light => "Switch to dark mode",
            ResolvedTheme::Dark => "Switch to light mode",
        }
    }
}

/// Where the theme preference lives between page loads.
///
/// The header reads and writes only through this trait; it never touches the
/// storage mechanism itself.
pub trait ThemeStore {
    /// Stored preference, `System` when nothing was stored
    fn preference(&self) -> ThemePreference;

    fn set_preference(&mut self, preference: ThemePreference) -> Result<()>;

    /// Scheme reported by the OS/browser, used to resolve `System`
    fn system_theme(&self) -> ResolvedTheme;

    fn resolved(&self) -> ResolvedTheme {
        self.preference().resolve(self.system_theme())
    }
}

/// In-memory store, for tests and server-side rendering
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    preference: ThemePreference,
    system: ResolvedTheme,
    writes: usize,
}

impl MemoryThemeStore {
    pub fn new(preference: ThemePreference, system: ResolvedTheme) -> Self {
        Self {
            preference,
            system,
            writes: 0,
        }
    }

    /// Number of successful `set_preference` calls
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl ThemeStore for MemoryThemeStore {
    fn preference(&self) -> ThemePreference {
        self.preference
    }

    fn set_preference(&mut self, preference: ThemePreference) -> Result<()> {
        self.preference = preference;
        self.writes += 1;
        Ok(())
    }

    fn system_theme(&self) -> ResolvedTheme {
        self.system
    }
}
