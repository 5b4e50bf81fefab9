//! The resource service: one generic read-only router over a [`RecordStore`],
//! instantiated per entity type. Each binary runs one instance, so the two
//! services stay independently deployable.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::store::RecordStore;

/// Static identity of a service instance.
#[derive(Debug, Clone, Copy)]
pub struct ServiceInfo {
    /// Path segment under `/api`, e.g. `"products"`.
    pub resource: &'static str,
    /// Name reported by `/health`, e.g. `"products-api"`.
    pub name: &'static str,
    /// Banner returned by `GET /`.
    pub title: &'static str,
}

struct ServiceState<S> {
    info: ServiceInfo,
    store: Arc<S>,
}

impl<S> Clone for ServiceState<S> {
    fn clone(&self) -> Self {
        Self {
            info: self.info,
            store: Arc::clone(&self.store),
        }
    }
}

pub fn router<S: RecordStore>(info: ServiceInfo, store: Arc<S>) -> Router {
    let state = ServiceState { info, store };

    Router::new()
        .route("/", get(root::<S>))
        .route("/health", get(health::<S>))
        .route(&format!("/api/{}", info.resource), get(list::<S>))
        .route(&format!("/api/{}/:id", info.resource), get(get_one::<S>))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve<S: RecordStore>(
    info: ServiceInfo,
    store: Arc<S>,
    addr: &str,
) -> anyhow::Result<()> {
    let app = router(info, store);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("{} listening on http://{}", info.name, addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root<S: RecordStore>(State(state): State<ServiceState<S>>) -> Json<serde_json::Value> {
    Json(json!({ "message": state.info.title, "status": "running" }))
}

// Health never touches the store; it reports liveness, not readiness.
async fn health<S: RecordStore>(
    State(state): State<ServiceState<S>>,
) -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "healthy", "service": state.info.name })),
    )
}

async fn list<S: RecordStore>(
    State(state): State<ServiceState<S>>,
) -> AppResult<Json<Vec<S::Entity>>> {
    let rows = state.store.list_all().await?;
    info!("Retrieved {} {}", rows.len(), state.info.resource);
    Ok(Json(rows))
}

async fn get_one<S: RecordStore>(
    State(state): State<ServiceState<S>>,
    Path(id): Path<i32>,
) -> AppResult<Json<S::Entity>> {
    let row = state
        .store
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("{} {}", state.info.resource, id)))?;
    info!("Retrieved {} {}", state.info.resource, id);
    Ok(Json(row))
}
