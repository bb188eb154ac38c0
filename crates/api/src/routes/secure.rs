//! Token-gated endpoint.

use axum::extract::State;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::response::Response;
use common::StatusResponse;

use crate::config::AuthToken;
use crate::response::write_json;

/// State captured at startup for the secure handler.
#[derive(Debug, Clone)]
pub struct SecureState {
    pub auth_token: AuthToken,
}

impl SecureState {
    pub fn new(auth_token: AuthToken) -> Self {
        Self { auth_token }
    }
}

/// /secure — compares the `Authorization` header bytes verbatim against the token.
pub async fn check(
    State(state): State<SecureState>,
    method: Method,
    headers: HeaderMap,
) -> Response {
    let presented = headers
        .get(AUTHORIZATION)
        .map(HeaderValue::as_bytes)
        .unwrap_or_default();
    let authorized = state.auth_token.matches(presented);

    if method != Method::OPTIONS {
        if authorized {
            tracing::debug!("authorization granted");
        } else {
            tracing::warn!(header_present = !presented.is_empty(), "authorization denied");
        }
    }

    if authorized {
        write_json(&method, StatusCode::OK, &StatusResponse::secured())
    } else {
        write_json(&method, StatusCode::UNAUTHORIZED, &StatusResponse::unauthorized())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    async fn check_with_logs(method: Method, authorization: Option<&str>) -> (Response, String) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut headers = HeaderMap::new();
        if let Some(value) = authorization {
            headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        }
        let state = SecureState::new(AuthToken::new("s3cret").unwrap());
        let response = check(State(state), method, headers).await;
        (response, logs.contents())
    }

    #[tokio::test]
    async fn test_get_with_token_logs_grant() {
        let (response, logs) = check_with_logs(Method::GET, Some("s3cret")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(logs.contains("authorization granted"));
    }

    #[tokio::test]
    async fn test_get_without_token_logs_denial() {
        let (response, logs) = check_with_logs(Method::GET, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert!(logs.contains("authorization denied"));
        assert!(!logs.contains("s3cret"));
    }

    #[tokio::test]
    async fn test_preflight_with_token_logs_no_decision() {
        let (response, logs) = check_with_logs(Method::OPTIONS, Some("s3cret")).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!logs.contains("authorization"));
    }

    #[tokio::test]
    async fn test_preflight_without_token_logs_no_decision() {
        let (response, logs) = check_with_logs(Method::OPTIONS, None).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!logs.contains("authorization"));
    }
}
