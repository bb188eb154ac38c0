//! HTTP service exposing an unauthenticated health check and a
//! token-gated secure endpoint.
//!
//! Both routes answer CORS pre-flight requests themselves and stamp
//! `Access-Control-Allow-Origin: *` on every other response.

pub mod config;
pub mod env_file;
pub mod error;
pub mod response;
pub mod routes;

use std::future::Future;

use axum::Router;
use axum::routing::any;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

pub use config::{AuthToken, Config};
pub use error::StartupError;

use routes::secure::SecureState;

/// Creates the Axum application router.
///
/// Routes accept any method; `OPTIONS` is handled by the response writer.
pub fn create_app(auth_token: AuthToken) -> Router {
    let secure_router = Router::new()
        .route("/secure", any(routes::secure::check))
        .with_state(SecureState::new(auth_token));

    Router::new()
        .route("/health", any(routes::health::check))
        .merge(secure_router)
        .layer(TraceLayer::new_for_http())
}

/// Reads configuration through `lookup`, then binds and serves until
/// `shutdown` resolves. A missing token fails before anything is bound.
pub async fn start<L, F>(lookup: L, shutdown: F) -> error::Result<()>
where
    L: Fn(&str) -> Option<String>,
    F: Future<Output = ()> + Send + 'static,
{
    let config = Config::from_lookup(lookup)?;
    run(config, shutdown).await
}

/// Binds the configured address and serves until `shutdown` resolves.
pub async fn run<F>(config: Config, shutdown: F) -> error::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind {
            addr: addr.clone(),
            source,
        })?;
    tracing::info!(%addr, "starting server");

    serve(listener, create_app(config.auth_token), shutdown).await
}

/// Serves `app` on an already bound listener.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> error::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(StartupError::Serve)
}
