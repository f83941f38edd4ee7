//! Correlation id propagation middleware.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// Header carrying the correlation id on requests and responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Correlation id of the current request, available to handlers as an
/// [`axum::Extension`].
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Threads a correlation id through the request.
///
/// A caller-supplied `x-request-id` header is honored as-is; otherwise a
/// fresh UUID is generated. The id is stored in request extensions for
/// handlers (the listing response echoes it as `correlationId`) and written
/// back on the response so every reply is traceable.
pub async fn layer(mut request: Request, next: Next) -> Response {
    let id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
