//! Local Development Routes
//!
//! HTTP front for running the handlers without the Lambda host:
//! - Home: static welcome message
//! - Health: liveness probe
//! - Events: runs the publish handler
//! - Trigger: runs the acknowledge-only handler

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::PublishError;
use crate::handlers::{handle_publish, handle_trigger, PublishRequest, TriggerResponse};
use crate::publisher::EventPublisher;

/// Shared state for the local server
#[derive(Clone, Debug)]
pub struct AppState {
    pub publisher: EventPublisher,
}

/// Success body for POST /api/events
#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub message: String,
}

/// Error response wrapper
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Publish error HTTP response
#[derive(Debug)]
pub struct PublishHttpError {
    pub status: StatusCode,
    pub message: String,
}

impl IntoResponse for PublishHttpError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Map publish errors to HTTP status codes
fn map_error(error: PublishError) -> PublishHttpError {
    let status = match error {
        PublishError::Delivery(_) => StatusCode::BAD_GATEWAY,
        PublishError::Config(_) | PublishError::Serialization(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    PublishHttpError {
        status,
        message: error.to_string(),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health))
        .route("/api/events", post(publish_event))
        .route("/api/trigger", post(trigger))
        .with_state(state)
}

async fn home() -> Json<Value> {
    Json(json!({ "message": "Welcome to the shortener gateway" }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "module": "shortener",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Handler for POST /api/events
async fn publish_event(
    State(state): State<AppState>,
    Json(request): Json<PublishRequest>,
) -> Result<Json<PublishResponse>, PublishHttpError> {
    let message = handle_publish(&state.publisher, request)
        .await
        .map_err(map_error)?;

    Ok(Json(PublishResponse { message }))
}

/// Handler for POST /api/trigger
async fn trigger(Json(event): Json<Value>) -> Json<TriggerResponse> {
    Json(handle_trigger(&event))
}
