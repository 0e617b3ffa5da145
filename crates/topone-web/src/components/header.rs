//! Site header: logo, desktop dropdown nav, theme toggle and mobile drawer

use std::sync::Arc;

use leptos::ev;
use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use topone_core::{HeaderController, HeaderEvent, HeaderState, NavItem, NavTree, ResolvedTheme};
use wasm_bindgen::JsCast;

use crate::dom::{BodyScrollSurface, LocalStorageThemeStore};

/// Desktop dropdown boundary for outside-click detection
const DROPDOWN_SELECTOR: &str = ".dropdown-container";

type WebHeader = HeaderController<BodyScrollSurface, LocalStorageThemeStore, Box<dyn FnMut(&str)>>;

/// Who carries out the navigation for a click on a header link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LinkClick {
    /// Modified or non-primary click (new tab, download): the browser's
    Browser,
    /// `<Router>` already routed it; the header only updates its state
    Routed,
    /// The header's navigator routes it
    Navigate,
}

impl LinkClick {
    fn classify(default_prevented: bool, button: i16, modified: bool) -> Self {
        if button != 0 || modified {
            LinkClick::Browser
        } else if default_prevented {
            LinkClick::Routed
        } else {
            LinkClick::Navigate
        }
    }

    fn of(ev: &ev::MouseEvent) -> Self {
        let modified = ev.meta_key() || ev.ctrl_key() || ev.shift_key() || ev.alt_key();
        Self::classify(ev.default_prevented(), ev.button(), modified)
    }
}

/// Reactive handle over the header controller.
///
/// The controller holds browser objects, so it lives in local storage; the
/// signals mirror its state for rendering.
#[derive(Clone, Copy)]
struct HeaderHandle {
    controller: StoredValue<WebHeader, LocalStorage>,
    state: RwSignal<HeaderState>,
    theme: RwSignal<ResolvedTheme>,
    /// Set while dispatching a click the router has already routed
    routed: StoredValue<bool>,
}

impl HeaderHandle {
    fn new(controller: WebHeader, routed: StoredValue<bool>) -> Self {
        let state = RwSignal::new(controller.state().clone());
        let theme = RwSignal::new(controller.resolved_theme());
        Self {
            controller: StoredValue::new_local(controller),
            state,
            theme,
            routed,
        }
    }

    fn update(self, f: impl FnOnce(&mut WebHeader)) {
        self.controller.update_value(|ctrl| {
            f(ctrl);
            self.state.set(ctrl.state().clone());
            self.theme.set(ctrl.resolved_theme());
        });
    }

    fn dispatch(self, event: HeaderEvent) {
        self.update(|ctrl| {
            ctrl.dispatch(event);
        });
    }

    fn toggle_theme(self) {
        self.update(|ctrl| {
            ctrl.on_toggle_theme();
        });
    }

    fn teardown(self) {
        self.controller.try_update_value(|ctrl| ctrl.teardown());
    }

    fn menu_open(self) -> bool {
        self.state.with(|s| s.menu_open)
    }

    fn is_open(self, label: &str) -> bool {
        self.state.with(|s| s.is_dropdown_open(label))
    }

    /// Click handler for links: route through the header, not the browser
    fn select(self, path: String) -> impl Fn(ev::MouseEvent) + Copy + 'static {
        let path = StoredValue::new(path);
        move |ev: ev::MouseEvent| {
            let click = LinkClick::of(&ev);
            if click == LinkClick::Browser {
                return;
            }
            ev.prevent_default();
            self.routed.set_value(click == LinkClick::Routed);
            self.dispatch(HeaderEvent::TargetSelected(path.get_value()));
            self.routed.set_value(false);
        }
    }
}

/// Header with logo, navigation, theme toggle and mobile drawer
#[component]
pub fn Header(
    /// Static navigation tree
    nav: Arc<NavTree>,
) -> impl IntoView {
    let navigate = use_navigate();
    let routed = StoredValue::new(false);
    let navigator: Box<dyn FnMut(&str)> = Box::new(move |path: &str| {
        if !routed.get_value() {
            navigate(path, NavigateOptions::default());
        }
    });
    let controller = HeaderController::new(
        Arc::clone(&nav),
        BodyScrollSurface,
        LocalStorageThemeStore,
        navigator,
    );
    LocalStorageThemeStore::apply(controller.resolved_theme());
    let header = HeaderHandle::new(controller, routed);

    let scroll = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        header.dispatch(HeaderEvent::ViewportScrolled { offset });
    });
    let click = window_event_listener(ev::click, move |ev| {
        let within_dropdown = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(DROPDOWN_SELECTOR).ok().flatten())
            .is_some();
        header.dispatch(HeaderEvent::OutsideInteraction { within_dropdown });
    });
    on_cleanup(move || {
        scroll.remove();
        click.remove();
        header.teardown();
    });

    let desktop_items = nav
        .items()
        .iter()
        .cloned()
        .map(|item| view! { <DesktopNavItem item header /> })
        .collect_view();
    let drawer_nav = Arc::clone(&nav);

    view! {
        <header
            class="site-header"
            class:site-header-scrolled=move || header.state.with(|s| s.scrolled)
        >
            <div class="header-bar">
                <a href="/" class="logo" on:click=header.select("/".to_string())>
                    <span class="logo-mark">"🌱"</span>
                    <span class="logo-text">"Top One Plus"</span>
                </a>

                <nav class="desktop-nav">
                    <ul class="desktop-nav-list">{desktop_items}</ul>
                </nav>

                <div class="header-actions">
                    <button
                        class="theme-toggle"
                        on:click=move |_| header.toggle_theme()
                        aria-label=move || header.theme.get().toggle_label()
                    >
                        {move || header.theme.get().toggle_icon()}
                    </button>

                    <button
                        class="menu-toggle"
                        on:click=move |_| header.dispatch(HeaderEvent::MobileMenuToggled)
                        aria-label=move || if header.menu_open() { "Close menu" } else { "Open menu" }
                        aria-expanded=move || header.menu_open().to_string()
                    >
                        {move || if header.menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || header.menu_open()>
                <div
                    class="drawer-overlay"
                    on:click=move |_| header.dispatch(HeaderEvent::MobileMenuToggled)
                ></div>
                <div class="drawer">
                    <button
                        class="drawer-close"
                        on:click=move |_| header.dispatch(HeaderEvent::MobileMenuToggled)
                        aria-label="Close menu"
                    >
                        "✕"
                    </button>
                    <nav>
                        <ul class="drawer-list">
                            {drawer_nav
                                .items()
                                .iter()
                                .cloned()
                                .map(|item| view! { <MobileNavItem item header /> })
                                .collect_view()}
                        </ul>
                    </nav>
                </div>
            </Show>
        </header>
    }
}

/// Top-level desktop entry; items with children open on hover
#[component]
fn DesktopNavItem(item: NavItem, header: HeaderHandle) -> impl IntoView {
    let has_children = item.has_children();
    let label = StoredValue::new(item.label.clone());

    let children = StoredValue::new(item.children.clone());

    view! {
        <li
            class="dropdown-container nav-item"
            on:mouseenter=move |_| header.dispatch(HeaderEvent::PointerEntered(label.get_value()))
            on:mouseleave=move |_| header.dispatch(HeaderEvent::PointerLeft(label.get_value()))
        >
            <div class="nav-item-row">
                <a href=item.path.clone() class="nav-link" on:click=header.select(item.path.clone())>
                    {item.label.clone()}
                </a>
                {has_children.then(|| view! {
                    <span
                        class="dropdown-caret"
                        class:dropdown-caret-open=move || label.with_value(|l| header.is_open(l))
                    >
                        "▼"
                    </span>
                })}
            </div>
            {has_children.then(move || view! {
                <Show when=move || label.with_value(|l| header.is_open(l))>
                    <ul class="dropdown-menu">{sub_links(children.get_value(), header, "dropdown-item")}</ul>
                </Show>
            })}
        </li>
    }
}

/// Drawer entry with an accordion toggle for items with children
#[component]
fn MobileNavItem(item: NavItem, header: HeaderHandle) -> impl IntoView {
    let has_children = item.has_children();
    let label = StoredValue::new(item.label.clone());
    let toggle_label = format!("Toggle {} submenu", item.label);

    let children = StoredValue::new(item.children.clone());

    view! {
        <li class="drawer-item">
            <div class="drawer-item-row">
                <a href=item.path.clone() class="drawer-link" on:click=header.select(item.path.clone())>
                    {item.label.clone()}
                </a>
                {has_children.then(|| view! {
                    <button
                        class="drawer-toggle"
                        aria-label=toggle_label
                        on:click=move |_| {
                            header.dispatch(HeaderEvent::MobileDropdownToggled(label.get_value()))
                        }
                    >
                        {move || if label.with_value(|l| header.is_open(l)) { "−" } else { "+" }}
                    </button>
                })}
            </div>
            {has_children.then(move || view! {
                <Show when=move || label.with_value(|l| header.is_open(l))>
                    <ul class="drawer-sublist">{sub_links(children.get_value(), header, "drawer-subitem")}</ul>
                </Show>
            })}
        </li>
    }
}

fn sub_links(items: Vec<NavItem>, header: HeaderHandle, class: &'static str) -> impl IntoView {
    items
        .into_iter()
        .map(|child| {
            let select = header.select(child.path.clone());
            view! {
                <li class=class>
                    <a href=child.path on:click=select>{child.label}</a>
                </li>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_click_is_routed_by_header() {
        assert_eq!(LinkClick::classify(false, 0, false), LinkClick::Navigate);
    }

    #[test]
    fn test_click_already_routed_does_not_navigate_again() {
        assert_eq!(LinkClick::classify(true, 0, false), LinkClick::Routed);
    }

    #[test]
    fn test_modified_or_secondary_click_left_to_browser() {
        assert_eq!(LinkClick::classify(false, 0, true), LinkClick::Browser);
        assert_eq!(LinkClick::classify(false, 1, false), LinkClick::Browser);
        assert_eq!(LinkClick::classify(true, 0, true), LinkClick::Browser);
    }
}
