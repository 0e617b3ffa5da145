//! Web router using Axum

use axum::{
    extract::State,
    response::Html,
    routing::{get, MethodRouter},
    Json, Router,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use topone_core::{NavTree, ResolvedTheme, ThemePreference};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::{debug, warn};

use crate::shell::{placeholder_template, render_shell};

/// Everything the server needs to answer requests
#[derive(Debug, Clone)]
pub struct SiteState {
    pub nav: Arc<NavTree>,
    /// Default theme for first paint, before the client reads its own storage
    pub theme: ThemePreference,
    /// Compiled frontend (`trunk build` output), if present
    pub dist_dir: Option<PathBuf>,
}

impl SiteState {
    pub fn new(nav: Arc<NavTree>, theme: ThemePreference) -> Self {
        Self {
            nav,
            theme,
            dist_dir: None,
        }
    }

    /// Serve the frontend from `dir` if it contains an `index.html`
    pub fn with_dist_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        if dir.join("index.html").exists() {
            self.dist_dir = Some(dir);
        } else {
            warn!("No index.html in {}, serving placeholder page", dir.display());
        }
        self
    }
}

/// Shared handler state: the site plus the pre-rendered shell
struct AppState {
    site: SiteState,
    shell: String,
}

fn load_template(dist_dir: Option<&Path>) -> String {
    let Some(dir) = dist_dir else {
        return placeholder_template();
    };
    let index = dir.join("index.html");
    match std::fs::read_to_string(&index) {
        Ok(template) => template,
        Err(e) => {
            warn!(error = %e, "Failed to read {}", index.display());
            placeholder_template()
        }
    }
}

/// Create the web router
pub fn create_router(site: SiteState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // No OS scheme on the server: `system` renders light until the client resolves it
    let first_paint = site.theme.resolve(ResolvedTheme::Light);
    let shell = render_shell(
        &load_template(site.dist_dir.as_deref()),
        &site.nav,
        first_paint,
    );
    let dist_dir = site.dist_dir.clone();
    let state = Arc::new(AppState { site, shell });

    let router = Router::new()
        .route("/", get(shell_handler))
        .route("/api/health", get(health_handler))
        .route("/api/nav", get(nav_handler));

    let router = match dist_dir {
        Some(dir) => {
            debug!("Serving static assets from {}", dir.display());
            let pages: MethodRouter = get(shell_handler).with_state(Arc::clone(&state));
            router.fallback_service(ServeDir::new(dir).fallback(pages))
        }
        None => router.fallback(get(shell_handler)),
    };

    router.layer(cors).with_state(state)
}

async fn shell_handler(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.shell.clone())
}

async fn nav_handler(State(state): State<Arc<AppState>>) -> Json<NavTree> {
    Json(state.site.nav.as_ref().clone())
}

async fn health_handler(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "nav_items": state.site.nav.items().len(),
        "routes": state.site.nav.paths(),
        "frontend_built": state.site.dist_dir.is_some(),
        "theme": state.site.theme,
    }))
}
