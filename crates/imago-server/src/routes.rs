use axum::extract::Request;
use imago_error::ErrorKind;

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

/// Answer requests that match no route
pub async fn not_found(request: Request) -> ErrorKind {
    tracing::debug!(method = %request.method(), path = request.uri().path(), "no route matched");
    ErrorKind::NotFound
}

/// Answer requests whose path matches but whose method does not
pub async fn method_not_allowed(request: Request) -> ErrorKind {
    tracing::debug!(method = %request.method(), path = request.uri().path(), "method not allowed");
    ErrorKind::MethodNotAllowed
}
