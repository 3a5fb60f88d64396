// translate-relay-server/src/cors.rs
// ============================================================================
// Module: Cross-Origin Policy
// Description: CORS headers and preflight handling for all relay routes.
// Purpose: Reproduce the original service's open cross-origin contract.
// Dependencies: axum
// ============================================================================

//! ## Overview
//! Every route accepts any origin, restricts methods to GET/PUT/DELETE, and
//! exposes the `ETag` and `x-amz-meta-custom-header` headers. Preflight
//! `OPTIONS` requests are answered locally with 204 and never reach a
//! handler or the backend.

use axum::extract::Request;
use axum::http::HeaderMap;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::StatusCode;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

/// Origins accepted by every route.
const ALLOWED_ORIGINS: HeaderValue = HeaderValue::from_static("*");
/// Headers accepted on inbound requests.
const ALLOWED_HEADERS: HeaderValue = HeaderValue::from_static("*");
/// Methods accepted by the relay surface.
const ALLOWED_METHODS: HeaderValue = HeaderValue::from_static("GET, PUT, DELETE");
/// Response headers exposed to cross-origin callers.
const EXPOSED_HEADERS: HeaderValue = HeaderValue::from_static("ETag, x-amz-meta-custom-header");

/// Middleware applying the cross-origin policy to every routed request.
pub async fn apply(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return preflight();
    }
    let mut response = next.run(request).await;
    insert_cors_headers(response.headers_mut());
    response
}

/// Builds the local preflight response.
fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    insert_cors_headers(response.headers_mut());
    response
}

/// Inserts the cross-origin headers into a response.
fn insert_cors_headers(headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOWED_ORIGINS);
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS);
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS);
    headers.insert(header::ACCESS_CONTROL_EXPOSE_HEADERS, EXPOSED_HEADERS);
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only assertions are permitted."
    )]

    use axum::http::HeaderMap;
    use axum::http::header;

    use super::insert_cors_headers;
    use super::preflight;

    #[test]
    fn cors_headers_match_original_contract() {
        let mut headers = HeaderMap::new();
        insert_cors_headers(&mut headers);
        assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(), "*");
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(),
            "GET, PUT, DELETE"
        );
        assert_eq!(
            headers.get(header::ACCESS_CONTROL_EXPOSE_HEADERS).unwrap(),
            "ETag, x-amz-meta-custom-header"
        );
    }

    #[test]
    fn preflight_is_answered_locally() {
        let response = preflight();
        assert_eq!(response.status(), axum::http::StatusCode::NO_CONTENT);
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
