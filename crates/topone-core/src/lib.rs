//! topone-core - Core library for the Top One Plus site
//!
//! Navigation data, the header interaction state machine, the scroll-lock
//! guard and theme preferences. No DOM access: the browser adapters live in
//! `topone-web`.

pub mod error;
pub mod header;
pub mod nav;
pub mod preferences;
pub mod scroll_lock;
pub mod theme;

pub use error::CoreError;
pub use header::{
    Effect, HeaderController, HeaderEvent, HeaderState, Navigator, SCROLL_THRESHOLD_PX,
};
pub use nav::{NavItem, NavTree};
pub use preferences::{FileThemeStore, SitePreferences};
pub use scroll_lock::{NoopSurface, ScrollLock, ScrollSurface};
pub use theme::{MemoryThemeStore, ResolvedTheme, ThemePreference, ThemeStore};
