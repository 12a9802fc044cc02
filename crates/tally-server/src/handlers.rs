//! HTTP handlers: the thin plumbing around the core.
//!
//! The handlers do no validation or scoring themselves; they decode the
//! body, call into `tally-core`, and translate errors into the generic
//! client responses defined in [`crate::error`].

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tally_core::{calculate_points, RawReceipt, Receipt};
use tally_store::{InsertResult, PointsStore};

use crate::error::{ApiError, Result};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PointsStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PointsStore>) -> Self {
        Self { store }
    }
}

/// Response body for `POST /receipts/process`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response body for `GET /receipts/{id}/points`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// `POST /receipts/process`: validate, score, and store a receipt.
pub async fn process_receipt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>> {
    let raw: RawReceipt = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!(error = %err, "rejecting receipt: not a valid document");
        ApiError::InvalidReceipt
    })?;

    let receipt = Receipt::parse(&raw).map_err(|err| {
        tracing::warn!(field = err.field(), error = %err, "rejecting receipt");
        ApiError::InvalidReceipt
    })?;

    let points = calculate_points(&receipt);
    let id = Uuid::new_v4().to_string();

    match state.store.insert(&id, points).await? {
        InsertResult::Inserted => {}
        InsertResult::AlreadyExists => {
            tracing::error!(id = %id, "generated identifier already present in store");
            return Err(ApiError::IdCollision(id));
        }
    }

    tracing::info!(id = %id, points, retailer = receipt.retailer(), "processed receipt");
    Ok(Json(ProcessResponse { id }))
}

/// `GET /receipts/{id}/points`: look up a previously stored score.
pub async fn get_points(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    match state.store.get(&id).await? {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            tracing::debug!(id = %id, "points lookup miss");
            Err(ApiError::NotFound)
        }
    }
}
