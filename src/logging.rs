//! Middleware for logging requests and responses.

use axum::{
    body::{Body, Bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// The max number of bytes of a request or response body to log at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
/// Bodies that are not text, e.g. spreadsheet downloads, are logged by size only.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    tracing::info!(
        "Received request: {parts:#?}\nbody: {}",
        describe_body(&parts.headers, &body_bytes)
    );
    log_full_body("request", &parts.headers, &body_bytes);

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };
    tracing::info!(
        "Sending response: {parts:#?}\nbody: {}",
        describe_body(&parts.headers, &body_bytes)
    );
    log_full_body("response", &parts.headers, &body_bytes);

    Response::from_parts(parts, Body::from(body_bytes))
}

fn is_text(headers: &HeaderMap) -> bool {
    match headers.get(CONTENT_TYPE).and_then(|value| value.to_str().ok()) {
        Some(content_type) => {
            content_type.starts_with("text/")
                || content_type.starts_with("application/x-www-form-urlencoded")
                || content_type.starts_with("application/json")
        }
        // Bodies without a content type are usually empty or plain text.
        None => true,
    }
}

fn describe_body(headers: &HeaderMap, body: &Bytes) -> String {
    if !is_text(headers) {
        return format!("<{} bytes of binary data>", body.len());
    }

    let text = String::from_utf8_lossy(body);

    if text.len() > LOG_BODY_LENGTH_LIMIT {
        format!("{:?}...", truncate(&text, LOG_BODY_LENGTH_LIMIT))
    } else {
        format!("{text:?}")
    }
}

fn log_full_body(direction: &str, headers: &HeaderMap, body: &Bytes) {
    if is_text(headers) && body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::debug!(
            "Full {direction} body: {:?}",
            String::from_utf8_lossy(body)
        );
    }
}

/// Cut `text` to at most `max_bytes` bytes without splitting a character.
fn truncate(text: &str, max_bytes: usize) -> &str {
    let mut end = max_bytes.min(text.len());

    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
