use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use tripsync_planner::TripPlanner;
use tripsync_store::{
    InMemoryPersonalityStore, InMemoryTripStore, InMemoryUserStore, PersonalityStoreRef,
    TripStoreRef, UserStoreRef,
};

use crate::auth::JwtKeys;
use crate::config::AppConfig;
use crate::handlers;

/// Application state shared with all routes
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub jwt: JwtKeys,
    pub users: UserStoreRef,
    pub trips: TripStoreRef,
    pub personality: PersonalityStoreRef,
    pub planner: Arc<TripPlanner>,
}

impl AppState {
    /// Build the state with in-memory stores and a planner configured from
    /// the app config.
    pub fn new(config: AppConfig) -> Self {
        let jwt = JwtKeys::from_secret(config.jwt_secret.as_bytes());
        let planner = Arc::new(TripPlanner::new(config.gemini.clone()));

        Self {
            config: Arc::new(config),
            jwt,
            users: Arc::new(InMemoryUserStore::new()),
            trips: Arc::new(InMemoryTripStore::new()),
            personality: Arc::new(InMemoryPersonalityStore::new()),
            planner,
        }
    }
}

/// Build the full axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/maps-key", get(handlers::maps_key))
        .route("/api/auth/signup", post(handlers::signup))
        .route("/api/auth/login", post(handlers::login))
        .route("/api/generate-trip", post(handlers::generate_trip))
        .route("/api/save-trip", post(handlers::save_trip))
        .route("/api/trips", get(handlers::list_trips))
        .route(
            "/api/trips/:id",
            get(handlers::get_trip).delete(handlers::delete_trip),
        )
        .route(
            "/api/personality",
            post(handlers::submit_personality).get(handlers::get_personality),
        )
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting HTTP server on {}", addr);

    let app = build_router(state);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))
}
