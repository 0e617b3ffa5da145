//! Error types for topone-core
//!
//! The header itself never fails; these cover loading navigation data and
//! persisting the theme preference.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for topone operations
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================
    // Navigation Errors
    // ===================
    #[error("Invalid navigation tree: {reason}")]
    InvalidNavigation { reason: String },

    #[error("Failed to parse navigation JSON: {source}")]
    NavJsonParse {
        #[source]
        source: serde_json::Error,
    },

    // ===================
    // Theme Errors
    // ===================
    #[error("Unknown theme preference: {value} (expected light, dark or system)")]
    UnknownTheme { value: String },

    #[error("Theme storage unavailable: {reason}")]
    StorageUnavailable { reason: String },

    // ===================
    // Preferences File Errors
    // ===================
    #[error("Failed to read preferences: {path}")]
    PreferencesRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write preferences: {path}")]
    PreferencesWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preferences in {path}: {source}")]
    PreferencesParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CoreError {
    pub(crate) fn invalid_nav(reason: impl Into<String>) -> Self {
        Self::InvalidNavigation {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_message_lists_choices() {
        let err = CoreError::UnknownTheme {
            value: "sepia".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown theme preference: sepia (expected light, dark or system)"
        );
    }

    #[test]
    fn test_preferences_write_keeps_io_source() {
        use std::error::Error as _;

        let err = CoreError::PreferencesWrite {
            path: PathBuf::from("/tmp/prefs.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/tmp/prefs.json"));
        assert!(err.source().is_some());
    }
}
