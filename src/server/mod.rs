//! Web server module
//!
//! Serves the portfolio as a single HTML page plus a small JSON API and
//! the downloadable CV asset.

pub mod http;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::profile::{self, Profile};

/// Shared server state
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub profile: Arc<Profile>,
}

/// Build the application router.
pub fn app(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(http::page_handler))
        .route("/api/status", get(http::status_handler))
        .route("/api/profile", get(http::profile_handler))
        .route("/api/skills/{panel}", get(http::skills_handler))
        .route("/api/contact", post(http::contact_handler))
        .route("/cv", get(http::cv_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the web server
pub async fn start(host: &str, port: u16) -> Result<()> {
    let config = Config::load()?;
    let state = ServerState {
        config: Arc::new(config),
        profile: Arc::new(profile::builtin().clone()),
    };

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let app = app(state);

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("     Portfolio Server Starting");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!();
    println!("✓ Server binding to: {}", addr);
    println!("✓ Sections: {}", crate::types::SectionId::all().len());
    println!();
    println!("🚀 Listening on http://{}", addr);
    println!();

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
