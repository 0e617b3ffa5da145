//! topone - Top One Plus site server and tooling

mod cli;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use topone_core::SitePreferences;
use topone_web::SiteState;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "topone",
    version,
    args_conflicts_with_subcommands = true,
    about = "Top One Plus organic fertilizer website",
    long_about = "Serves the Top One Plus marketing site and manages its settings.\n\
                  \n\
                  Examples:\n\
                    topone                           # Run web server (default)\n\
                    topone web --port 8080           # Custom port\n\
                    topone nav                       # Print the navigation tree\n\
                    topone nav --json                # Navigation as JSON\n\
                    topone theme                     # Show default theme\n\
                    topone theme dark                # Set default theme\n\
                  \n\
                  Web Frontend Workflow:\n\
                    cd crates/topone-web && trunk build --release\n\
                    topone web --dist crates/topone-web/dist\n\
                  \n\
                  Environment Variables:\n\
                    TOPONE_PORT                      # Web server port\n\
                    TOPONE_DIST                      # Compiled frontend directory\n\
                    TOPONE_NAV                       # Navigation JSON file\n\
                    TOPONE_CACHE_DIR                 # Preferences directory\n\
                    TOPONE_NO_COLOR                  # Disable ANSI colors\n\
                    RUST_LOG                         # Log filter (default: info)"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Web server options when no subcommand is given
    #[command(flatten)]
    web: WebArgs,

    /// Directory holding topone-preferences.json (default: <cache>/topone)
    #[arg(long, env = "TOPONE_CACHE_DIR", global = true)]
    cache_dir: Option<PathBuf>,

    /// Navigation tree as JSON (default: built-in site navigation)
    #[arg(long, env = "TOPONE_NAV", global = true)]
    nav: Option<PathBuf>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "TOPONE_NO_COLOR", global = true)]
    no_color: bool,
}

#[derive(Args)]
struct WebArgs {
    /// Port for web server
    #[arg(long, env = "TOPONE_PORT", default_value = "3000")]
    port: u16,

    /// Compiled frontend directory
    #[arg(long, env = "TOPONE_DIST", default_value = "crates/topone-web/dist")]
    dist: PathBuf,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server (default)
    Web(WebArgs),
    /// Print the navigation tree and exit
    Nav {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or set the default theme (light, dark, system)
    Theme {
        /// New default theme
        value: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.no_color);

    let cache_dir = cli
        .cache_dir
        .or_else(|| dirs::cache_dir().map(|c: PathBuf| c.join("topone")))
        .context("Could not determine cache directory")?;
    let nav = cli::load_nav(cli.nav.as_deref())?;

    let mode = cli.mode.unwrap_or(Mode::Web(cli.web));

    match mode {
        Mode::Web(WebArgs { port, dist }) => {
            let prefs = SitePreferences::load(&cache_dir);
            let site = SiteState::new(Arc::new(nav), prefs.theme).with_dist_dir(dist);
            if site.dist_dir.is_none() {
                println!("💡 Run 'trunk build' in crates/topone-web to compile the frontend");
            }
            println!("🌐 http://localhost:{}", port);
            topone_web::run(site, port).await?;
        }
        Mode::Nav { json } => {
            println!("{}", cli::format_nav(&nav, json, cli.no_color));
        }
        Mode::Theme { value } => {
            println!("{}", cli::theme_command(&cache_dir, value.as_deref())?);
        }
    }

    Ok(())
}

fn init_tracing(no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();
}
