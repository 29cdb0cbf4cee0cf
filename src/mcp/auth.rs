use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Optional bearer token guarding the `/mcp` endpoint.
#[derive(Clone, Debug)]
pub struct AuthState {
    token: Option<String>,
}

impl AuthState {
    pub fn new(token: Option<String>) -> Self {
        Self { token }
    }

    pub fn enabled(&self) -> bool {
        self.token.is_some()
    }

    pub fn authorize(&self, headers: &HeaderMap) -> bool {
        let Some(expected) = &self.token else {
            return true;
        };
        bearer_token(headers).is_some_and(|token| token == expected)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
}

pub async fn auth_middleware(
    State(state): State<Arc<AuthState>>,
    headers: HeaderMap,
    request: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    if state.authorize(&headers) {
        Ok(next.run(request).await)
    } else {
        debug!("rejecting request with missing or invalid bearer token");
        Err(StatusCode::UNAUTHORIZED)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: Option<&'static str>) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Some(value) = value {
            headers.insert(AUTHORIZATION, HeaderValue::from_static(value));
        }
        headers
    }

    #[test]
    fn disabled_auth_allows_everything() {
        let state = AuthState::new(None);

        assert!(!state.enabled());
        assert!(state.authorize(&headers(None)));
    }

    #[test]
    fn requires_matching_bearer_token() {
        let state = AuthState::new(Some("secret".to_string()));

        assert!(state.enabled());
        assert!(state.authorize(&headers(Some("Bearer secret"))));
        assert!(!state.authorize(&headers(Some("Bearer wrong"))));
        assert!(!state.authorize(&headers(Some("secret"))));
        assert!(!state.authorize(&headers(None)));
    }
}
