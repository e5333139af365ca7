use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use core_engine::engine::EngineFactory;
use core_instance::store::InstanceStore;

use crate::router;
use crate::state::AppState;

#[must_use]
pub fn make_app(
    instance_store: Arc<dyn InstanceStore>,
    engines: Arc<dyn EngineFactory>,
) -> Router {
    let app_state = AppState::new(instance_store, engines);
    Router::new().nest("/api/v1", router::create_router().with_state(app_state))
}

#[allow(clippy::unwrap_used)]
pub async fn run_test_server(
    instance_store: Arc<dyn InstanceStore>,
    engines: Arc<dyn EngineFactory>,
) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("0.0.0.0:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = make_app(instance_store, engines);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}
