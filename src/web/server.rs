//! Axum server setup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::Config;

use super::routes::api_router;
use super::state::AppState;

/// Run the web server
pub async fn run_server(config: Config, bind: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let static_dir = config.server.static_dir.clone();

    // Create shared state
    let state = Arc::new(AppState::new(config)?);

    // CORS layer for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = Router::new()
        // REST API
        .merge(api_router())
        // Static files (the single-page lab UI)
        .nest_service(
            "/",
            ServeDir::new(static_dir).append_index_html_on_directories(true),
        )
        .layer(cors)
        .with_state(state);

    log::info!("Starting web server on http://{}", bind);
    println!("Pea lab available at http://{}", bind);

    // Create listener and serve
    let listener = tokio::net::TcpListener::bind(bind).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
