//! Main Leptos App component with SPA router

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use topone_core::NavTree;

use crate::components::Header;
use crate::pages::{Home, SectionPage};
use crate::NAV_DATA_ID;

/// Navigation tree embedded in the page by the server, or the built-in one
fn initial_nav() -> NavTree {
    document()
        .get_element_by_id(NAV_DATA_ID)
        .and_then(|el| el.text_content())
        .and_then(|json| match NavTree::from_json(&json) {
            Ok(nav) => Some(nav),
            Err(e) => {
                leptos::logging::warn!("Ignoring embedded navigation: {}", e);
                None
            }
        })
        .unwrap_or_else(NavTree::site)
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    let nav = Arc::new(initial_nav());
    provide_context(Arc::clone(&nav));

    view! {
        <Router>
            <div class="app">
                <Header nav />
                <main class="content">
                    <Routes fallback=|| view! { <SectionPage /> }>
                        <Route path=path!("/") view=Home />
                        <Route path=path!("/:section") view=SectionPage />
                        <Route path=path!("/:section/:page") view=SectionPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
