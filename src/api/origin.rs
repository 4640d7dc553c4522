use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::api::response;
use crate::AppState;

/// Rejects cross-site callers. Requests without an `Origin` header (curl,
/// same-origin navigation) always pass.
pub async fn check_origin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let headers = request.headers();
    let origin = headers.get(header::ORIGIN).map(|v| v.to_str().unwrap_or(""));
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    let referer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

    if origin_allowed(&state.config.allowed_origins, origin, host, referer) {
        return next.run(request).await;
    }

    warn!(origin = origin.unwrap_or(""), "blocked request from origin");
    response::error(StatusCode::FORBIDDEN, "Unauthorized request origin".to_string()).into_response()
}

pub fn origin_allowed(
    allowed: &[String],
    origin: Option<&str>,
    host: Option<&str>,
    referer: Option<&str>,
) -> bool {
    let Some(origin) = origin else {
        return true;
    };

    let origin = origin.trim_end_matches('/');
    if allowed.iter().any(|o| o == origin) {
        return true;
    }

    let Some(host) = host else {
        return false;
    };

    let same_host = [format!("http://{}", host), format!("https://{}", host)];
    if same_host.iter().any(|o| o == origin) {
        return true;
    }

    referer.is_some_and(|r| same_host.iter().any(|o| r.starts_with(o.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["http://localhost:3000".to_string(), "https://clips.example".to_string()]
    }

    #[test]
    fn no_origin_passes() {
        assert!(origin_allowed(&allowed(), None, Some("localhost:3000"), None));
    }

    #[test]
    fn listed_origin_passes_with_or_without_trailing_slash() {
        assert!(origin_allowed(&allowed(), Some("https://clips.example"), None, None));
        assert!(origin_allowed(&allowed(), Some("https://clips.example/"), None, None));
    }

    #[test]
    fn same_host_origin_passes() {
        assert!(origin_allowed(&allowed(), Some("https://relay.internal:8443"), Some("relay.internal:8443"), None));
    }

    #[test]
    fn same_host_referer_passes() {
        assert!(origin_allowed(
            &allowed(),
            Some("null"),
            Some("relay.internal"),
            Some("http://relay.internal/index.html"),
        ));
    }

    #[test]
    fn foreign_origin_is_rejected() {
        assert!(!origin_allowed(
            &allowed(),
            Some("https://evil.example"),
            Some("relay.internal"),
            Some("https://evil.example/page"),
        ));
        assert!(!origin_allowed(&allowed(), Some("https://evil.example"), None, None));
    }
}
