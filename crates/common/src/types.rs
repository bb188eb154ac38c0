use serde::Serialize;

/// The single response shape of the service, serialized as `{"status": "..."}`.
///
/// Built per request from one of the fixed constructors and serialized
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    status: &'static str,
}

impl StatusResponse {
    /// `{"status":"ok"}`, returned by the health check.
    pub const fn ok() -> Self {
        Self { status: "ok" }
    }

    /// `{"status":"secured"}`, returned when the token matches.
    pub const fn secured() -> Self {
        Self { status: "secured" }
    }

    /// `{"status":"unauthorized"}`, returned when the token is wrong or missing.
    pub const fn unauthorized() -> Self {
        Self {
            status: "unauthorized",
        }
    }
}
