mod assets;
mod env;
mod people;
mod routes;
mod state;
mod tmpl;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = env::ServerConfig::from_env();

    let assets = assets::AssetService::new(
        config.mode,
        config.dist_dir.clone(),
        config.public_path.clone(),
    )
    .expect("build stats required outside development; run the bundler first");

    let state = state::AppState::new(config.mode, assets, Arc::new(people::SeedPeople::new()));

    let app = routes::app(state, &config);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, mode = config.mode.as_str(), "rolodex listening");
    axum::serve(listener, app).await.expect("server failed");
}
