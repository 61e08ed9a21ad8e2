mod routes;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::sync::RwLock;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::feed::FeedComposer;
use crate::source::SeedData;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub data: Arc<RwLock<SeedData>>,
    pub config: Arc<Config>,
    pub composer: FeedComposer,
    next_post_id: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, seed: SeedData) -> Self {
        Self {
            composer: FeedComposer::new(config.ranking),
            data: Arc::new(RwLock::new(seed)),
            config: Arc::new(config),
            next_post_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Id for a newly published post.
    fn allocate_post_id(&self) -> String {
        let n = self.next_post_id.fetch_add(1, Ordering::Relaxed);
        format!("local-{n}")
    }
}

/// Start the web server and run it until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address is invalid or the server fails to start.
pub async fn serve<F>(config: Config, seed: SeedData, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(AppState::new(config, seed));

    info!(addr = %addr, "Starting HTTP web server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(routes::router())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
