//! Placeholder page for product and application sections

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use topone_core::NavTree;

/// Section page titled after the navigation entry for the current path
#[component]
pub fn SectionPage() -> impl IntoView {
    let nav = use_context::<Arc<NavTree>>().unwrap_or_else(|| Arc::new(NavTree::site()));
    let pathname = use_location().pathname;

    let title = move || {
        let path = pathname.get();
        nav.label_for_path(&path)
            .map(str::to_string)
            .unwrap_or_else(|| "Not found".to_string())
    };

    view! {
        <div class="page section-page">
            <div class="container">
                <h2 class="section-title">{title}</h2>
                <p class="hint">"Details coming soon."</p>
            </div>
        </div>
    }
}
