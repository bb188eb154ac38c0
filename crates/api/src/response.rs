//! JSON response writer with CORS handling.

use axum::body::Body;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use common::StatusResponse;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type, Authorization";
pub const MAX_AGE: &str = "86400";

/// Writes `payload` as JSON with `status`.
///
/// An `OPTIONS` request is answered as a CORS pre-flight instead: 200, no
/// body, and the allow-* headers. Every other response carries
/// `Access-Control-Allow-Origin: *`.
pub fn write_json(method: &Method, status: StatusCode, payload: &StatusResponse) -> Response {
    if method == Method::OPTIONS {
        return preflight();
    }

    let mut response = match serde_json::to_vec(payload) {
        Ok(body) => (status, [(CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "error encoding JSON response");
            (status, [(CONTENT_TYPE, "application/json")], Body::empty()).into_response()
        }
    };
    response.headers_mut().insert(
        ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    );
    response
}

/// Bare 200 with the pre-flight permission headers.
pub fn preflight() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS),
            (ACCESS_CONTROL_MAX_AGE, MAX_AGE),
        ],
    )
        .into_response()
}
