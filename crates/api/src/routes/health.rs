//! Health check endpoint.

use axum::http::{Method, StatusCode};
use axum::response::Response;
use common::StatusResponse;

use crate::response::write_json;

/// /health — always `{"status":"ok"}`.
pub async fn check(method: Method) -> Response {
    write_json(&method, StatusCode::OK, &StatusResponse::ok())
}
