use axum::{
    Json,
    extract::{Query, State},
};
use std::sync::Arc;

use durable_viewer_core::{DurableObject, Namespace};

use crate::api_error::ApiError;
use crate::query_types::ObjectsQuery;
use crate::{AppState, Session};

pub async fn list_namespaces(
    State(state): State<Arc<AppState>>,
    Session(creds): Session,
) -> Result<Json<Vec<Namespace>>, ApiError> {
    state
        .client
        .fetch_all_namespaces(&creds)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_listing("Failed to fetch namespaces", e))
}

pub async fn list_objects(
    State(state): State<Arc<AppState>>,
    Session(creds): Session,
    Query(query): Query<ObjectsQuery>,
) -> Result<Json<Vec<DurableObject>>, ApiError> {
    let namespace_id = query
        .namespace_id()
        .ok_or_else(|| ApiError::BadRequest("Missing namespace ID".to_owned()))?;
    state
        .client
        .list_objects(&creds, namespace_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_listing("Failed to fetch objects", e))
}
