use auth::AuthorizationError;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const UNAUTHORIZED: &str = "Unauthorized";

/// Middleware that verifies the bearer token and stores its claims in the
/// request extensions.
///
/// Every rejection answers 401 with the same body; only the log line tells the
/// reasons apart. The handler never runs for a rejected request.
pub async fn authorize(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = match req.headers().get(AUTHORIZATION) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| reject(AuthorizationError::MalformedCredential))?,
        ),
        None => None,
    };

    let claims = auth::authorize(state.token_codec.as_ref(), header).map_err(reject)?;

    tracing::debug!(user_id = %claims.user_id, role = %claims.role, "Request authorized");

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}

fn reject(reason: AuthorizationError) -> Response {
    tracing::warn!(reason = %reason, "Request rejected");
    ApiError::Unauthorized(UNAUTHORIZED.to_string()).into_response()
}
