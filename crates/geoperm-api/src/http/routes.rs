//! HTTP route definitions and handlers.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::{FromRequest, Query, Request, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::limit::RequestBodyLimitLayer;
use tracing::error;

use geoperm_domain::{evaluate, Decision, Distributor};
use geoperm_storage::{Registry, StorageError};

use super::state::AppState;

/// Custom JSON extractor that returns 400 Bad Request instead of 422
/// Unprocessable Entity for deserialization errors. Malformed and
/// mistyped bodies are both plain client input errors here.
pub struct JsonBadRequest<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBadRequest<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ApiError>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBadRequest(value)),
            Err(rejection) => {
                let error = ApiError::validation_error(rejection.body_text());
                Err((StatusCode::BAD_REQUEST, Json(error)))
            }
        }
    }
}

/// Default request body size limit (1MB).
/// This prevents memory exhaustion from oversized payloads.
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Creates the HTTP router with the default body size limit.
pub fn create_router<R: Registry>(state: AppState<R>) -> Router {
    create_router_with_body_limit(state, DEFAULT_BODY_LIMIT)
}

/// Creates the HTTP router with a custom body size limit.
///
/// Wrong HTTP methods on known paths get 405 from the method routers;
/// no hand-rolled method dispatch is needed.
pub fn create_router_with_body_limit<R: Registry>(
    state: AppState<R>,
    body_limit: usize,
) -> Router {
    let shared_state = Arc::new(state);
    Router::new()
        .route("/add-distributor", post(add_distributor::<R>))
        .route("/set-permission", post(set_permission::<R>))
        .route("/check-permission", get(check_permission::<R>))
        .route("/health", get(health_check))
        .with_state(shared_state)
        .layer(RequestBodyLimitLayer::new(body_limit))
}

// ============================================================
// Error Handling
// ============================================================

/// Error codes used in API error responses.
///
/// Each code maps to an HTTP status via [`ApiError::into_response`]:
///
/// - [`DISTRIBUTOR_NOT_FOUND`] → 404 — the named distributor does not
///   exist. Never used for a rule-based denial, which is a normal
///   200/NO answer.
/// - [`VALIDATION_ERROR`] → 400 — malformed or mistyped request input.
/// - [`INTERNAL_ERROR`] → 500 — unexpected server-side failure.
pub mod error_codes {
    /// Distributor with the given name does not exist.
    pub const DISTRIBUTOR_NOT_FOUND: &str = "distributor_not_found";
    /// Generic input validation error (invalid JSON, missing fields).
    pub const VALIDATION_ERROR: &str = "validation_error";
    /// Unexpected internal server error.
    pub const INTERNAL_ERROR: &str = "internal_error";
}

/// API error response format.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a distributor not found error (404).
    pub fn distributor_not_found(message: impl Into<String>) -> Self {
        Self::new(error_codes::DISTRIBUTOR_NOT_FOUND, message)
    }

    /// Creates a validation error (400).
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::VALIDATION_ERROR, message)
    }

    /// Creates an internal error (500).
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(error_codes::INTERNAL_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        use error_codes::*;

        let status = match self.code.as_str() {
            DISTRIBUTOR_NOT_FOUND => StatusCode::NOT_FOUND,
            VALIDATION_ERROR => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match &err {
            StorageError::DistributorNotFound { .. } => {
                ApiError::distributor_not_found("Distributor not found")
            }
            StorageError::Internal { .. } => {
                error!("Storage error: {}", err);
                ApiError::internal_error("internal error in distributor registry")
            }
        }
    }
}

type ApiResult<T> = Result<T, ApiError>;

// ============================================================
// Health Check
// ============================================================

/// Basic health check - returns 200 if the server is running.
async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Distributor Operations
// ============================================================

/// Response body for mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Request body for replacing a distributor's rules.
#[derive(Debug, Deserialize)]
pub struct SetPermissionRequest {
    pub name: String,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
}

/// Query parameters for a permission check.
///
/// Both parameters default to empty strings when absent, so a missing
/// `name` behaves like any other unknown distributor (404) rather than
/// a deserialization failure.
#[derive(Debug, Deserialize)]
pub struct CheckPermissionQuery {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub region: String,
}

/// Response body for a permission check.
#[derive(Debug, Serialize)]
pub struct CheckPermissionResponse {
    pub permission: Decision,
}

/// `POST /add-distributor`
///
/// Registers a distributor. Re-adding an existing name silently
/// replaces the whole entry; there is no prior-existence check.
async fn add_distributor<R: Registry>(
    State(state): State<Arc<AppState<R>>>,
    JsonBadRequest(body): JsonBadRequest<Distributor>,
) -> ApiResult<impl IntoResponse> {
    state.registry.add_distributor(body).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Distributor added",
        }),
    ))
}

/// `POST /set-permission`
///
/// Replaces both rule lists of an existing distributor. 404 when the
/// distributor has never been added.
async fn set_permission<R: Registry>(
    State(state): State<Arc<AppState<R>>>,
    JsonBadRequest(body): JsonBadRequest<SetPermissionRequest>,
) -> ApiResult<impl IntoResponse> {
    state
        .registry
        .set_permissions(&body.name, body.includes, body.excludes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Permissions updated",
        }),
    ))
}

/// `GET /check-permission?name=...&region=...`
///
/// Evaluates the distributor's rules for the requested region. An
/// unknown distributor is 404; a known distributor with no matching
/// rule is a normal 200 with `"permission": "NO"`.
async fn check_permission<R: Registry>(
    State(state): State<Arc<AppState<R>>>,
    Query(query): Query<CheckPermissionQuery>,
) -> ApiResult<impl IntoResponse> {
    let distributor = state.registry.get_distributor(&query.name).await?;
    let decision = evaluate(&distributor, &query.region);

    Ok(Json(CheckPermissionResponse {
        permission: decision,
    }))
}
