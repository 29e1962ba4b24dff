// Framework bootstrap for the scoreboard server runtime.

use crate::frameworks::config;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;
use crate::use_cases::{GameEngine, QuestionCatalog};

use std::io::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

fn init_runtime() {
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    let address = listener.local_addr()?;
    let state = build_state();
    let app = routes::app(state);

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    init_runtime();

    let address = SocketAddr::from(([127, 0, 0, 1], config::http_port()));

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener).await
}

fn build_state() -> Arc<AppState> {
    let path = config::questions_path();
    let catalog = match QuestionCatalog::load(Path::new(&path)) {
        Ok(catalog) => {
            tracing::info!(%path, count = catalog.len(), "question bank loaded");
            catalog
        }
        Err(error) => {
            // A broken bank never blocks startup; the built-in board keeps
            // the game playable.
            tracing::warn!(%path, %error, "failed to load question bank; using built-in question");
            QuestionCatalog::new(Vec::new())
        }
    };
    if catalog.is_empty() {
        tracing::info!("question bank is empty; opening on the built-in question");
    }

    Arc::new(AppState::new(GameEngine::new(catalog)))
}
