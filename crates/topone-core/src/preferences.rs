//! Site preferences persistence
//!
//! Stores the default theme in `<cache_dir>/topone-preferences.json`. The
//! server uses it to pick the `<html>` class of the served shell; the CLI
//! reads and writes it.

use crate::error::{CoreError, Result};
use crate::theme::{ResolvedTheme, ThemePreference, ThemeStore};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "topone-preferences.json";

/// Persisted site preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SitePreferences {
    /// Theme preference (light / dark / system)
    #[serde(default)]
    pub theme: ThemePreference,
}

impl SitePreferences {
    pub fn path(cache_dir: &Path) -> PathBuf {
        cache_dir.join(PREFERENCES_FILE)
    }

    /// Load preferences from `<cache_dir>/topone-preferences.json`.
    /// Returns defaults on any I/O or parse error (graceful degradation).
    pub fn load(cache_dir: &Path) -> Self {
        match Self::try_load(cache_dir) {
            Ok(prefs) => prefs,
            Err(e) => {
                tracing::debug!(error = %e, "Using default preferences");
                Self::default()
            }
        }
    }

    /// Strict variant of [`SitePreferences::load`]
    pub fn try_load(cache_dir: &Path) -> Result<Self> {
        let path = Self::path(cache_dir);
        let content = std::fs::read_to_string(&path).map_err(|source| {
            CoreError::PreferencesRead {
                path: path.clone(),
                source,
            }
        })?;
        serde_json::from_str(&content).map_err(|source| CoreError::PreferencesParse { path, source })
    }

    /// Persist preferences to `<cache_dir>/topone-preferences.json`.
    pub fn save(&self, cache_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(cache_dir).map_err(|source| CoreError::PreferencesWrite {
            path: cache_dir.to_path_buf(),
            source,
        })?;
        let path = Self::path(cache_dir);
        let content = serde_json::to_string_pretty(self)
            .map_err(|source| CoreError::PreferencesParse {
                path: path.clone(),
                source,
            })?;
        std::fs::write(&path, content).map_err(|source| CoreError::PreferencesWrite { path, source })
    }
}

/// [`ThemeStore`] backed by the preferences file.
///
/// There is no OS scheme to query on the server, so `System` resolves to
/// the configured fallback.
#[derive(Debug, Clone)]
pub struct FileThemeStore {
    cache_dir: PathBuf,
    prefs: SitePreferences,
    system: ResolvedTheme,
}

impl FileThemeStore {
    pub fn open(cache_dir: impl Into<PathBuf>) -> Self {
        let cache_dir = cache_dir.into();
        let prefs = SitePreferences::load(&cache_dir);
        Self {
            cache_dir,
            prefs,
            system: ResolvedTheme::Light,
        }
    }

    pub fn with_system_theme(mut self, system: ResolvedTheme) -> Self {
        self.system = system;
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }
}

impl ThemeStore for FileThemeStore {
    fn preference(&self) -> ThemePreference {
        self.prefs.theme
    }

    fn set_preference(&mut self, preference: ThemePreference) -> Result<()> {
        let mut next = self.prefs.clone();
        next.theme = preference;
        next.save(&self.cache_dir)?;
        self.prefs = next;
        Ok(())
    }

    fn system_theme(&self) -> ResolvedTheme {
        self.system
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(SitePreferences::load(dir.path()), SitePreferences::default());
        assert!(matches!(
            SitePreferences::try_load(dir.path()),
            Err(CoreError::PreferencesRead { .. })
        ));
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(SitePreferences::path(dir.path()), "{ theme: ").unwrap();
        assert_eq!(SitePreferences::load(dir.path()).theme, ThemePreference::System);
        assert!(matches!(
            SitePreferences::try_load(dir.path()),
            Err(CoreError::PreferencesParse { .. })
        ));
    }

    #[test]
    fn test_save_creates_cache_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let prefs = SitePreferences {
            theme: ThemePreference::Dark,
        };
        prefs.save(&nested).unwrap();
        assert_eq!(SitePreferences::load(&nested), prefs);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileThemeStore::open(dir.path());
        assert_eq!(store.preference(), ThemePreference::System);

        store.set_preference(ThemePreference::Light).unwrap();

        let reopened = FileThemeStore::open(dir.path()).with_system_theme(ResolvedTheme::Dark);
        assert_eq!(reopened.preference(), ThemePreference::Light);
        assert_eq!(reopened.resolved(), ResolvedTheme::Light);
    }

    #[test]
    fn test_file_store_system_uses_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileThemeStore::open(dir.path()).with_system_theme(ResolvedTheme::Dark);
        assert_eq!(store.resolved(), ResolvedTheme::Dark);
    }
}
