//! Axum route handlers for the quizbank HTTP API.

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use quizbank_core::{Question, QuestionId, QuestionRepository, QuestionService};
use serde::Deserialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::error::GatewayError;

/// Sample size used by `GET /questions/random` when `n` is absent.
pub const DEFAULT_RANDOM_COUNT: i64 = 5;

// ── Request types ─────────────────────────────────────────────────────────────

/// Query string accepted by `GET /questions`.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub tag: Option<String>,
    pub n: Option<String>,
}

/// Query string accepted by `GET /questions/random`.
#[derive(Debug, Default, Deserialize)]
pub struct RandomParams {
    pub n: Option<String>,
}

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router over the given question service.
pub fn create_router<R>(service: QuestionService<R>) -> Router
where
    R: QuestionRepository + 'static,
{
    Router::new()
        .route("/questions", get(list_questions::<R>).post(create_question::<R>))
        .route("/questions/random", get(random_questions::<R>))
        .route(
            "/questions/{id}",
            get(get_question::<R>)
                .put(replace_question::<R>)
                .delete(delete_question::<R>),
        )
        .route("/health", get(health))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /health`: liveness probe.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({"status": "ok"})))
}

/// `GET /questions?tag=&n=`: list questions, optionally filtered and capped.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `n` is not an integer.
pub async fn list_questions<R: QuestionRepository>(
    State(service): State<QuestionService<R>>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let limit = parse_count(params.n.as_deref(), 0)?;
    let tag = params.tag.unwrap_or_default();
    Ok(Json(service.list(&tag, limit)))
}

/// `GET /questions/random?n=`: sample up to `n` questions (default 5).
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if `n` is not an integer.
pub async fn random_questions<R: QuestionRepository>(
    State(service): State<QuestionService<R>>,
    Query(params): Query<RandomParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let n = parse_count(params.n.as_deref(), DEFAULT_RANDOM_COUNT)?;
    Ok(Json(service.random(n)))
}

/// `GET /questions/{id}`: fetch a single question.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for a malformed id and a
/// not-found error if no question has that id.
pub async fn get_question<R: QuestionRepository>(
    State(service): State<QuestionService<R>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(service.get(id)?))
}

/// `POST /questions`: validate and store a new question.
///
/// Responds `201 Created` with an empty body and a `Location` header.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for an undecodable body, or the
/// validation error if the question is malformed.
pub async fn create_question<R: QuestionRepository>(
    State(service): State<QuestionService<R>>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let question = decode_question(&body)?;
    let id = service.create(question)?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/questions/{id}"))]))
}

/// `PUT /questions/{id}`: replace a stored question wholesale.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for a malformed id or body, the
/// validation error if the question is malformed, or a not-found error if
/// no question has that id.
pub async fn replace_question<R: QuestionRepository>(
    State(service): State<QuestionService<R>>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, GatewayError> {
    let id = parse_id(&raw_id)?;
    let question = decode_question(&body)?;
    service.update(id, question)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /questions/{id}`: remove a question.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] for a malformed id, or a
/// not-found error if no question has that id.
pub async fn delete_question<R: QuestionRepository>(
    State(service): State<QuestionService<R>>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, GatewayError> {
    let id = parse_id(&raw_id)?;
    service.delete(id)?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Decoding helpers ──────────────────────────────────────────────────────────

/// Parses a path segment into a [`QuestionId`].
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] unless `raw` is a non-negative integer.
pub fn parse_id(raw: &str) -> Result<QuestionId, GatewayError> {
    raw.parse()
        .map_err(|_| GatewayError::InvalidRequest("invalid question id".to_owned()))
}

/// Parses an optional integer query parameter, using `default` when it is
/// absent or empty.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the value is not an integer.
pub fn parse_count(raw: Option<&str>, default: i64) -> Result<i64, GatewayError> {
    match raw {
        None | Some("") => Ok(default),
        Some(s) => s
            .parse()
            .map_err(|_| GatewayError::InvalidRequest("invalid limit number".to_owned())),
    }
}

/// Decodes a JSON question body.
///
/// # Errors
/// Returns [`GatewayError::InvalidRequest`] if the body is not a JSON question.
pub fn decode_question(body: &[u8]) -> Result<Question, GatewayError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "rejected question body");
        GatewayError::InvalidRequest("invalid JSON".to_owned())
    })
}
