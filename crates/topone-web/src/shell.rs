//! HTML shell served for every page route
//!
//! The server injects the theme class and the navigation tree into the
//! frontend's `index.html` so first paint matches the stored preference and
//! the client renders the same menu the server was configured with.

use topone_core::{NavTree, ResolvedTheme};

use crate::NAV_DATA_ID;

pub const SITE_TITLE: &str = "Top One Plus | Organic Fertilizer";
pub const SITE_DESCRIPTION: &str = "Boost crop yields by 100% with seaweed-based fertilizer";

/// Page served when `dist/` has not been built
pub fn placeholder_template() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <meta name="description" content="{SITE_DESCRIPTION}">
    <title>{SITE_TITLE}</title>
    <style>
        * {{ margin: 0; padding: 0; box-sizing: border-box; }}
        body {{
            font-family: system-ui, -apple-system, sans-serif;
            background: #f0fdf4;
            display: flex;
            justify-content: center;
            align-items: center;
            height: 100vh;
        }}
        html.dark body {{ background: #2a1728; color: #e5e7eb; }}
        .setup-message {{ max-width: 600px; padding: 2rem; line-height: 1.6; }}
        code {{ background: rgba(0,0,0,0.08); padding: 0.25rem 0.5rem; border-radius: 4px; }}
    </style>
</head>
<body>
    <div class="setup-message">
        <h1>🌱 Top One Plus - Build Required</h1>
        <p>The Leptos WASM frontend needs to be compiled before the site can be displayed.</p>
        <ol style="margin-left: 1.5rem; margin-top: 0.5rem;">
            <li>Install Trunk: <code>cargo install trunk</code></li>
            <li>Add WASM target: <code>rustup target add wasm32-unknown-unknown</code></li>
            <li>Build frontend: <code>cd crates/topone-web && trunk build --release</code></li>
            <li>Restart server: <code>cargo run -- web</code></li>
        </ol>
    </div>
</body>
</html>"#
    )
}

/// Inject the theme class on `<html>` and the navigation JSON before `</head>`
pub fn render_shell(template: &str, nav: &NavTree, theme: ResolvedTheme) -> String {
    let mut html = match template.find("<html") {
        Some(idx) => {
            let insert_at = idx + "<html".len();
            let mut out = String::with_capacity(template.len() + 256);
            out.push_str(&template[..insert_at]);
            out.push_str(&format!(r#" class="{}""#, theme.html_class()));
            out.push_str(&template[insert_at..]);
            out
        }
        None => template.to_string(),
    };

    let script = nav_script(nav);
    match html.find("</head>") {
        Some(idx) => html.insert_str(idx, &script),
        None => html.insert_str(0, &script),
    }
    html
}

fn nav_script(nav: &NavTree) -> String {
    // `</` inside JSON would end the script element early
    let json = serde_json::to_string(nav)
        .unwrap_or_else(|_| "[]".to_string())
        .replace("</", "<\\/");
    format!(r#"<script id="{NAV_DATA_ID}" type="application/json">{json}</script>"#)
}
