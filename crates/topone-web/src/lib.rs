//! topone-web - Web frontend for the Top One Plus site using Leptos + Axum

#![recursion_limit = "1024"]

pub mod app;
pub mod components;
pub mod dom;
pub mod pages;

#[cfg(feature = "ssr")]
pub mod router;
#[cfg(feature = "ssr")]
pub mod shell;

pub use app::App;
#[cfg(feature = "ssr")]
pub use router::{create_router, SiteState};

/// Id of the `<script>` element carrying the navigation tree as JSON
pub const NAV_DATA_ID: &str = "topone-nav";

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use super::{create_router, SiteState};
    use anyhow::{Context, Result};
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tracing::info;

    /// Run the web server
    pub async fn run(site: SiteState, port: u16) -> Result<()> {
        let router = create_router(site);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!("Web server listening on http://{}", addr);

        axum::serve(listener, router).await?;

        Ok(())
    }
}
