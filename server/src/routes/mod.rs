//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the whole scaffold: the server-rendered home
//! page at `/`, the people API under `/api`, and bundled assets under
//! the configured public path. There is no push channel and no session
//! layer; every route is a plain request/response handler over
//! `AppState`.

pub mod pages;
pub mod people;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::env::ServerConfig;
use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(pages::home_page))
        .route("/api/people", get(people::list_people))
        .route("/healthz", get(healthz))
        .nest_service(
            statics_route(&config.public_path),
            ServeDir::new(config.statics_dir()),
        )
        .layer(cors)
        .with_state(state)
}

/// Mount path for bundled assets: the public path without its trailing
/// slash, which is the form Axum route paths take.
fn statics_route(public_path: &str) -> &str {
    public_path.trim_end_matches('/')
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
