//! HTTP API server for the browser extension and other clients.
//!
//! Every endpoint takes a JSON body with the video `link` and runs one
//! orchestrator operation.

use crate::cli::Output;
use crate::config::Settings;
use crate::error::VidsumError;
use crate::export::EXPORT_FILENAME;
use crate::orchestrator::Orchestrator;
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

/// Shared application state.
struct AppState {
    orchestrator: Orchestrator,
}

/// Run the HTTP API server.
pub async fn run_serve(host: &str, port: u16, settings: Settings) -> anyhow::Result<()> {
    let orchestrator = Orchestrator::new(&settings)?;
    let app = router(orchestrator);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("vidsum API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Transcript", "POST /transcript");
    Output::kv("Summarize", "POST /summarize");
    Output::kv("Ask", "POST /ask");
    Output::kv("Mind map", "POST /mindmap");
    Output::kv("Export PDF", "POST /export-pdf");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {}", e);
            }
        })
        .await?;

    Ok(())
}

/// Build the API router around an orchestrator.
pub fn router(orchestrator: Orchestrator) -> Router {
    let state = Arc::new(AppState { orchestrator });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/transcript", post(transcript))
        .route("/summarize", post(summarize))
        .route("/ask", post(ask))
        .route("/mindmap", post(mindmap))
        .route("/export-pdf", post(export_pdf))
        .route("/export", post(export_pdf))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

// === Request/Response Types ===

#[derive(Deserialize)]
struct LinkRequest {
    /// YouTube video URL
    #[serde(default)]
    link: String,
}

#[derive(Deserialize)]
struct AskRequest {
    #[serde(default)]
    link: String,
    #[serde(default)]
    question: String,
}

#[derive(Deserialize)]
struct ExportRequest {
    #[serde(default)]
    link: String,
    /// Optional question; the Q&A section says none was asked when absent.
    #[serde(default)]
    question: Option<String>,
    #[serde(default)]
    include_transcript: bool,
}

#[derive(Serialize)]
struct TranscriptResponse {
    transcript: String,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Maps library errors onto status codes with a JSON `{error}` body.
struct ApiError(VidsumError);

impl From<VidsumError> for ApiError {
    fn from(e: VidsumError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            e if e.is_client_error() => StatusCode::BAD_REQUEST,
            VidsumError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Rejected request: {}", self.0);
        }

        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// `Json` extractor whose rejections use the `{error}` body.
struct ApiJson<T>(T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError(VidsumError::InvalidInput(rejection.body_text())))?;
        Ok(Self(value))
    }
}

// === Handlers ===

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn transcript(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LinkRequest>,
) -> Result<Json<TranscriptResponse>, ApiError> {
    let transcript = state.orchestrator.transcript(&req.link).await?;
    Ok(Json(TranscriptResponse {
        transcript: transcript.text(),
    }))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LinkRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.orchestrator.summarize(&req.link).await?))
}

async fn ask(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AskRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.orchestrator.ask(&req.link, &req.question).await?))
}

async fn mindmap(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<LinkRequest>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.orchestrator.mindmap(&req.link).await?))
}

async fn export_pdf(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ExportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = state
        .orchestrator
        .export(&req.link, req.question.as_deref(), req.include_transcript)
        .await?;

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        bytes,
    ))
}
