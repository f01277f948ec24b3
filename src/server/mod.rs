use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

use crate::turn::{TurnError, TurnHandler};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Deserialize)]
pub struct SupportRequest {
    /// Opaque caller-supplied session identifier, persisted client-side.
    #[serde(rename = "sessionId")]
    pub session_id: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SupportResponse {
    pub reply: String,
    pub escalate: bool,
    #[serde(rename = "ticketId", skip_serializing_if = "Option::is_none")]
    pub ticket_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub faq_entries: usize,
}

pub fn router(handler: TurnHandler) -> Router {
    Router::new()
        .route("/api/support", post(support_handler))
        .route("/api/health", get(health_handler))
        .with_state(Arc::new(handler))
}

pub async fn serve(bind_addr: &str, handler: TurnHandler) -> Result<(), ServerError> {
    let listener = TcpListener::bind(bind_addr).await?;
    info!(bind_addr, "helpline gateway listening");
    axum::serve(listener, router(handler).into_make_service()).await?;
    Ok(())
}

pub async fn support_handler(
    State(handler): State<Arc<TurnHandler>>,
    Json(payload): Json<SupportRequest>,
) -> Result<Json<SupportResponse>, (StatusCode, Json<ErrorResponse>)> {
    let session_id = payload.session_id.unwrap_or_default();
    let message = payload.message.unwrap_or_default();

    match handler.handle(&session_id, &message).await {
        Ok(outcome) => Ok(Json(SupportResponse {
            reply: outcome.reply,
            escalate: outcome.escalate,
            ticket_id: outcome.ticket_id,
        })),
        Err(e @ TurnError::MissingFields) => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )),
    }
}

pub async fn health_handler(State(handler): State<Arc<TurnHandler>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        faq_entries: handler.catalog().len(),
    })
}
