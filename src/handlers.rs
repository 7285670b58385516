//! HTTP handlers.

use crate::models::{GenerationRequest, GenerationResponse};
use crate::relay::Relay;
use crate::{Error, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

/// `POST /api/generate`
pub async fn generate(
    State(relay): State<Arc<Relay>>,
    payload: std::result::Result<Json<GenerationRequest>, JsonRejection>,
) -> Result<Json<GenerationResponse>> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        Error::MalformedRequest(rejection.body_text())
    })?;

    relay.handle_generate(&request).await.map(Json)
}

pub async fn health_check() -> &'static str {
    "OK"
}
