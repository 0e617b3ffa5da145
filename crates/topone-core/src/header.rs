//! Navigation header interaction state
//!
//! All desktop and mobile interactions funnel through
//! [`HeaderState::apply`], the single transition function. It mutates the
//! state and returns the side effects to run; [`HeaderController`] owns the
//! collaborators (scroll surface, theme store, router) and runs them.

use crate::nav::NavTree;
use crate::scroll_lock::{ScrollLock, ScrollSurface};
use crate::theme::{ResolvedTheme, ThemePreference, ThemeStore};
use std::sync::Arc;
use tracing::{debug, warn};

/// Scroll offset (px) past which the header is elevated
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Transient header UI state, reset on every page load
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderState {
    /// Mobile drawer open
    pub menu_open: bool,
    /// Label of the open dropdown; always a top-level item with children
    pub active_dropdown: Option<String>,
    /// Page scrolled past [`SCROLL_THRESHOLD_PX`]
    pub scrolled: bool,
    pub theme: ThemePreference,
}

/// Input to the header
#[derive(Debug, Clone, PartialEq)]
pub enum HeaderEvent {
    ViewportScrolled { offset: f64 },
    PointerEntered(String),
    PointerLeft(String),
    /// Click/tap anywhere on the page; `within_dropdown` when the target is
    /// inside a dropdown container
    OutsideInteraction { within_dropdown: bool },
    MobileMenuToggled,
    MobileDropdownToggled(String),
    TargetSelected(String),
    ThemeToggled { system: ResolvedTheme },
    /// Header removed from the page
    TornDown,
}

/// Side effect requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LockScroll,
    UnlockScroll,
    Navigate(String),
    PersistTheme(ThemePreference),
}

impl HeaderState {
    /// Fresh page-load state with the stored theme preference
    pub fn new(theme: ThemePreference) -> Self {
        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn is_dropdown_open(&self, label: &str) -> bool {
        self.active_dropdown.as_deref() == Some(label)
    }

    /// Apply one event and return the effects it requires
    pub fn apply(&mut self, nav: &NavTree, event: HeaderEvent) -> Vec<Effect> {
        let mut effects = Vec::new();

        match event {
            HeaderEvent::ViewportScrolled { offset } => {
                self.scrolled = offset > SCROLL_THRESHOLD_PX;
            }
            HeaderEvent::PointerEntered(label) => {
                if nav.dropdown(&label).is_some() {
                    self.active_dropdown = Some(label);
                }
            }
            HeaderEvent::PointerLeft(label) => {
                // Desktop only: the drawer handles its own accordion.
                if !self.menu_open && self.is_dropdown_open(&label) {
                    self.active_dropdown = None;
                }
            }
            HeaderEvent::OutsideInteraction { within_dropdown } => {
                if !self.menu_open && !within_dropdown {
                    self.active_dropdown = None;
                }
            }
            HeaderEvent::MobileMenuToggled => {
                if self.menu_open {
                    self.close_drawer(&mut effects);
                } else {
                    self.menu_open = true;
                    effects.push(Effect::LockScroll);
                }
            }
            HeaderEvent::MobileDropdownToggled(label) => {
                if self.menu_open && nav.dropdown(&label).is_some() {
                    if self.is_dropdown_open(&label) {
                        self.active_dropdown = None;
                    } else {
                        self.active_dropdown = Some(label);
                    }
                }
            }
            HeaderEvent::TargetSelected(path) => {
                effects.push(Effect::Navigate(path));
                if self.menu_open {
                    self.close_drawer(&mut effects);
                }
            }
            HeaderEvent::ThemeToggled { system } => {
                self.theme = self.theme.toggled(system);
                effects.push(Effect::PersistTheme(self.theme));
            }
            HeaderEvent::TornDown => {
                // Unlock unconditionally; the lock may outlive a stale state.
                self.close_drawer(&mut effects);
            }
        }

        effects
    }

    fn close_drawer(&mut self, effects: &mut Vec<Effect>) {
        self.menu_open = false;
        self.active_dropdown = None;
        effects.push(Effect::UnlockScroll);
    }
}

/// Routing collaborator; the header never manages history itself
pub trait Navigator {
    fn navigate_to(&mut self, path: &str);
}

impl<F: FnMut(&str)> Navigator for F {
    fn navigate_to(&mut self, path: &str) {
        self(path)
    }
}

/// Header state plus the collaborators its effects act on
pub struct HeaderController<S: ScrollSurface, T: ThemeStore, N: Navigator> {
    nav: Arc<NavTree>,
    state: HeaderState,
    scroll_lock: ScrollLock<S>,
    themes: T,
    navigator: N,
}

impl<S: ScrollSurface, T: ThemeStore, N: Navigator> HeaderController<S, T, N> {
    pub fn new(nav: Arc<NavTree>, surface: S, themes: T, navigator: N) -> Self {
        let state = HeaderState::new(themes.preference());
        Self {
            nav,
            state,
            scroll_lock: ScrollLock::new(surface),
            themes,
            navigator,
        }
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.state.theme.resolve(self.themes.system_theme())
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_held()
    }

    pub fn theme_store(&self) -> &T {
        &self.themes
    }

    /// Apply an event and run its effects
    pub fn dispatch(&mut self, event: HeaderEvent) -> &HeaderState {
        debug!(?event, "header event");
        let effects = self.state.apply(&self.nav, event);
        for effect in effects {
            self.run(effect);
        }
        &self.state
    }

    pub fn on_viewport_scroll(&mut self, offset: f64) -> &HeaderState {
        self.dispatch(HeaderEvent::ViewportScrolled { offset })
    }

    pub fn on_pointer_enter(&mut self, label: &str) -> &HeaderState {
        self.dispatch(HeaderEvent::PointerEntered(label.to_string()))
    }

    pub fn on_pointer_leave(&mut self, label: &str) -> &HeaderState {
        self.dispatch(HeaderEvent::PointerLeft(label.to_string()))
    }

    pub fn on_outside_interaction(&mut self, within_dropdown: bool) -> &HeaderState {
        self.dispatch(HeaderEvent::OutsideInteraction { within_dropdown })
    }

    pub fn on_toggle_mobile_menu(&mut self) -> &HeaderState {
        self.dispatch(HeaderEvent::MobileMenuToggled)
    }

    pub fn on_toggle_mobile_dropdown(&mut self, label: &str) -> &HeaderState {
        self.dispatch(HeaderEvent::MobileDropdownToggled(label.to_string()))
    }

    pub fn on_select_target(&mut self, path: &str) -> &HeaderState {
        self.dispatch(HeaderEvent::TargetSelected(path.to_string()))
    }

    pub fn on_toggle_theme(&mut self) -> &HeaderState {
        let system = self.themes.system_theme();
        self.dispatch(HeaderEvent::ThemeToggled { system })
    }

    /// Component removed from the page: close the drawer and release the
    /// scroll lock whatever the last drawer state was. Safe to call twice.
    pub fn teardown(&mut self) {
        self.dispatch(HeaderEvent::TornDown);
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::LockScroll => {
                self.scroll_lock.acquire();
            }
            Effect::UnlockScroll => {
                if self.scroll_lock.release() {
                    debug!("scroll lock released");
                }
            }
            Effect::Navigate(path) => self.navigator.navigate_to(&path),
            Effect::PersistTheme(preference) => {
                if let Err(e) = self.themes.set_preference(preference) {
                    warn!(error = %e, %preference, "Failed to persist theme preference");
                }
            }
        }
    }
}
