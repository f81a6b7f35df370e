//! Router construction and server entry point.

use std::{future::Future, sync::Arc};

use axum::{Router, routing::get};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::ServerConfig,
    error::ServerError,
    infrastructure::repository::InMemoryRoomRepository,
    ui::{
        handler::{get_room_detail, get_stats, health_check, websocket_handler},
        signal::shutdown_signal,
        state::AppState,
    },
};

/// Build the application router.
///
/// WebSocket clients may connect on `/` or `/ws`.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(websocket_handler))
        .route("/ws", get(websocket_handler))
        .route("/api/health", get(health_check))
        .route("/api/stats", get(get_stats))
        .route("/api/rooms/{room_id}", get(get_room_detail))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind the configured address and serve until a shutdown signal arrives.
pub async fn run(config: &ServerConfig) -> Result<(), ServerError> {
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    let state = Arc::new(AppState::new(Arc::new(InMemoryRoomRepository::new())));
    serve(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr().map_err(ServerError::Serve)?;
    tracing::info!("WebSocket server is listening at ws://{}", local_addr);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(ServerError::Serve)?;

    tracing::info!("WebSocket server closed");
    Ok(())
}
