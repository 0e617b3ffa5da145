//! Browser implementations of the header collaborators
//!
//! Only reached from event handlers and component setup, which run in the
//! browser.

use leptos::prelude::{document, window};
use topone_core::{CoreError, ResolvedTheme, ScrollSurface, ThemePreference, ThemeStore};

/// localStorage key for the theme preference
pub const THEME_STORAGE_KEY: &str = "theme";

const MENU_OPEN_CLASS: &str = "menu-open";

/// `<body>` scroll suppression: `overflow: hidden` plus the `menu-open` class
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyScrollSurface;

impl BodyScrollSurface {
    fn set_locked(locked: bool) {
        let Some(body) = document().body() else {
            return;
        };
        let overflow = if locked { "hidden" } else { "auto" };
        if let Err(e) = body.style().set_property("overflow", overflow) {
            leptos::logging::warn!("Failed to set body overflow: {:?}", e);
        }
        let classes = body.class_list();
        let result = if locked {
            classes.add_1(MENU_OPEN_CLASS)
        } else {
            classes.remove_1(MENU_OPEN_CLASS)
        };
        if let Err(e) = result {
            leptos::logging::warn!("Failed to toggle body class: {:?}", e);
        }
    }
}

impl ScrollSurface for BodyScrollSurface {
    fn lock(&mut self) {
        Self::set_locked(true);
    }

    fn unlock(&mut self) {
        Self::set_locked(false);
    }
}

/// Theme preference in `localStorage`, applied as a class on `<html>`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    /// Put `light`/`dark` on `<html>` and sync `color-scheme`
    pub fn apply(theme: ResolvedTheme) {
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        if let Err(e) = classes.remove_2(
            ResolvedTheme::Light.html_class(),
            ResolvedTheme::Dark.html_class(),
        ) {
            leptos::logging::warn!("Failed to clear theme class: {:?}", e);
        }
        if let Err(e) = classes.add_1(theme.html_class()) {
            leptos::logging::warn!("Failed to set theme class: {:?}", e);
        }
        let style = format!("color-scheme: {}", theme.html_class());
        if let Err(e) = root.set_attribute("style", &style) {
            leptos::logging::warn!("Failed to set color-scheme: {:?}", e);
        }
    }

    fn storage() -> Option<web_sys::Storage> {
        window().local_storage().ok().flatten()
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn preference(&self) -> ThemePreference {
        Self::storage()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    fn set_preference(&mut self, preference: ThemePreference) -> Result<(), CoreError> {
        Self::apply(preference.resolve(self.system_theme()));

        let storage = Self::storage().ok_or_else(|| CoreError::StorageUnavailable {
            reason: "localStorage is not available".to_string(),
        })?;
        storage
            .set_item(THEME_STORAGE_KEY, preference.as_str())
            .map_err(|e| CoreError::StorageUnavailable {
                reason: format!("{:?}", e),
            })
    }

    fn system_theme(&self) -> ResolvedTheme {
        let prefers_dark = window()
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        if prefers_dark {
            ResolvedTheme::Dark
        } else {
            ResolvedTheme::Light
        }
    }
}
