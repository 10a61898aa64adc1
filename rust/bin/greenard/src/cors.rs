//! Cross-origin middleware.
//!
//! Browsers on the configured origins may call the API with any method and
//! any header. Other origins get no CORS headers, and their preflights are
//! rejected.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::debug;

const ALLOW_METHODS: &str = "DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT";
const PREFLIGHT_MAX_AGE: &str = "600";

/// Allowed browser origins.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origins: Vec<String>,
}

impl CorsPolicy {
    pub fn new(origins: Vec<String>) -> Self {
        Self { origins }
    }

    pub fn allows(&self, origin: &str) -> bool {
        self.origins.iter().any(|o| o == origin)
    }
}

/// Middleware answering preflights and tagging responses for allowed origins.
pub async fn cors_middleware(
    State(policy): State<Arc<CorsPolicy>>,
    request: Request,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let Some(origin) = origin else {
        return next.run(request).await;
    };

    if is_preflight(&request) {
        return preflight_response(&policy, &origin, request.headers());
    }

    let mut response = next.run(request).await;
    if policy.allows(&origin) {
        if let Ok(value) = HeaderValue::from_str(&origin) {
            let headers = response.headers_mut();
            headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            headers.append(header::VARY, HeaderValue::from_static("Origin"));
        }
    }
    response
}

fn is_preflight(request: &Request) -> bool {
    request.method() == Method::OPTIONS
        && request
            .headers()
            .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}

fn preflight_response(policy: &CorsPolicy, origin: &str, req_headers: &HeaderMap) -> Response {
    let origin_value = match HeaderValue::from_str(origin) {
        Ok(v) if policy.allows(origin) => v,
        _ => {
            debug!("Rejected CORS preflight from {}", origin);
            return (StatusCode::BAD_REQUEST, "Disallowed CORS origin").into_response();
        }
    };

    let mut response = StatusCode::OK.into_response();
    let headers = response.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin_value);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    if let Some(requested) = req_headers.get(header::ACCESS_CONTROL_REQUEST_HEADERS) {
        headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
    }
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static(PREFLIGHT_MAX_AGE),
    );
    headers.insert(header::VARY, HeaderValue::from_static("Origin"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_exact_match() {
        let policy = CorsPolicy::new(vec!["http://localhost:3000".to_string()]);
        assert!(policy.allows("http://localhost:3000"));
        assert!(!policy.allows("http://localhost:3001"));
        assert!(!policy.allows("http://localhost:3000/"));
    }

    #[test]
    fn test_preflight_allowed() {
        let policy = CorsPolicy::new(vec!["http://localhost:3000".to_string()]);
        let mut req_headers = HeaderMap::new();
        req_headers.insert(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("x-requested-with"),
        );
        let resp = preflight_response(&policy, "http://localhost:3000", &req_headers);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
        assert_eq!(resp.headers()[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOW_METHODS);
        assert_eq!(
            resp.headers()[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "x-requested-with"
        );
    }

    #[test]
    fn test_preflight_rejected() {
        let policy = CorsPolicy::new(vec!["http://localhost:3000".to_string()]);
        let resp = preflight_response(&policy, "http://evil.test", &HeaderMap::new());
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(resp.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }
}
