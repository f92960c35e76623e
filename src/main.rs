// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::application::banner_editor::BannerEditor;
use crate::application::console::Console;
use crate::application::console_actor::ConsoleHandle;
use crate::application::metrics_presenter::MetricsPresenter;
use crate::infrastructure::config::load_console_config;
use crate::infrastructure::editor::{DisabledEditor, LocalBannerEditor};
use crate::infrastructure::seed::load_seed;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration and seed data
    let config = load_console_config()?;
    let seed = load_seed(&config.content.seed_path)?;

    // Collaborators (infrastructure layer)
    let editor: Arc<dyn BannerEditor> = if config.editor.enabled {
        Arc::new(LocalBannerEditor::new(&seed.banners))
    } else {
        Arc::new(DisabledEditor)
    };
    let presenter = match config.metrics.rng_seed {
        Some(rng_seed) => MetricsPresenter::seeded(rng_seed),
        None => MetricsPresenter::from_entropy(),
    };

    // Mount the console on its own task (application layer)
    let console = ConsoleHandle::spawn(Console::mount(seed, presenter, editor));

    let state = Arc::new(AppState {
        console,
        site_url: config.server.site_url,
        require_login: config.auth.require_login,
        login_url: config.auth.login_url,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = config
        .server
        .bind_addr
        .parse()
        .with_context(|| format!("Invalid bind address {}", config.server.bind_addr))?;
    tracing::info!("Starting content-console on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
