use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::engine::StorageEngine;
use super::error::StoreError;
use super::protocol::{ErrorResponse, HashRequest, ResetResponse};
use super::types::{EngineStats, StorageNodeSummary};

impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn handle_hash(
    Extension(engine): Extension<Arc<StorageEngine>>,
    Json(req): Json<HashRequest>,
) -> Response {
    match engine.insert(&req.input, &req.method) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!("Failed to store content: {}", e);
            e.into_response()
        }
    }
}

pub async fn handle_list_nodes(
    Extension(engine): Extension<Arc<StorageEngine>>,
) -> (StatusCode, Json<Vec<StorageNodeSummary>>) {
    (StatusCode::OK, Json(engine.list_nodes()))
}

pub async fn handle_get_node(
    Extension(engine): Extension<Arc<StorageEngine>>,
    Path(id): Path<String>,
) -> Response {
    match engine.get_node_by_key(&id) {
        Ok(detail) => (StatusCode::OK, Json(detail)).into_response(),
        Err(e) => {
            tracing::error!("Failed to fetch node: {}", e);
            e.into_response()
        }
    }
}

pub async fn handle_reset(
    Extension(engine): Extension<Arc<StorageEngine>>,
) -> (StatusCode, Json<ResetResponse>) {
    engine.reset();
    (StatusCode::OK, Json(ResetResponse { success: true }))
}

pub async fn handle_stats(
    Extension(engine): Extension<Arc<StorageEngine>>,
) -> (StatusCode, Json<EngineStats>) {
    (StatusCode::OK, Json(engine.stats()))
}
