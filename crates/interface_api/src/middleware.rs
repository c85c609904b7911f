//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::{verify_admin_secret, ADMIN_SECRET_HEADER};
use crate::AppState;

/// Administrative gate middleware
///
/// Compares the shared secret header against the configured value and
/// refuses the request before any handler runs.
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    let presented = request
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|h| h.to_str().ok());

    match verify_admin_secret(presented, &state.config.admin_secret) {
        Ok(()) => Ok(next.run(request).await),
        Err(e) => {
            warn!(uri = %request.uri(), "Administrative access refused: {e}");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}

/// Request logging middleware
///
/// Logs every API request with its outcome and duration.
pub async fn request_log_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms = duration.num_milliseconds(),
        "API request"
    );

    response
}
