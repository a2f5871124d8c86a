use axum::extract::Request;
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use kinship_core_types::RequestId;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Attach a `RequestId` to the request and echo it on the response
///
/// An inbound `x-request-id` is kept; otherwise a fresh id is minted.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .map(|v| RequestId::from_string(v.to_string()))
        .unwrap_or_default();

    req.extensions_mut().insert(request_id.clone());

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(request_id.as_str()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}
