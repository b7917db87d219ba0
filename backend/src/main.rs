mod config;
mod error;
mod game;
mod lexicon;
mod models;
mod routes;
mod utils;
mod websocket;

use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use config::Config;
use dashmap::DashMap;
use game::GameSession;
use lexicon::Lexicon;
use rand::{rngs::StdRng, SeedableRng};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    pub lexicon: Lexicon,
    /// Live game per WebSocket connection, keyed by connection id
    pub sessions: DashMap<Uuid, GameSession>,
}

impl AppState {
    pub fn new(config: Config, lexicon: Lexicon) -> Self {
        Self {
            config,
            lexicon,
            sessions: DashMap::new(),
        }
    }

    /// Random source for one connection. Seeded from config when set so
    /// grids can be reproduced.
    pub fn new_rng(&self) -> StdRng {
        match self.config.game.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_search_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting word search backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load lexicon
    let lexicon = match &config.game.lexicon_path {
        Some(path) => match Lexicon::load(path).await {
            Ok(lexicon) => lexicon,
            Err(e) => {
                tracing::warn!("Failed to load lexicon: {:#}. Using built-in categories.", e);
                Lexicon::builtin()
            }
        },
        None => Lexicon::builtin(),
    };
    tracing::info!(
        "Lexicon ready with {} categories: {}",
        lexicon.len(),
        lexicon.categories().join(", ")
    );

    for letter in lexicon.missing_letters(&config.game.alphabet) {
        tracing::warn!("Letter '{}' is used by the lexicon but missing from the fill alphabet", letter);
    }

    let addr = config.server_addr();
    let state = Arc::new(AppState::new(config, lexicon));
    let app = build_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("WebSocket endpoint: ws://{}/ws", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Game frontend: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve frontend static files
    let frontend_service = ServeDir::new(&state.config.server.frontend_dir);

    Router::new()
        // WebSocket endpoint
        .route("/ws", get(websocket::handle_websocket))
        // API routes
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
