//! Forwarding of `/api/user/*` requests to the chat backend
//!
//! The auth forms post to relative URLs. When the app is served by this binary,
//! the requests are relayed to `CHAT_API_URL` with status, body and cookies
//! passed through unchanged. Failures produced here use the same `{ error }`
//! body the backend uses, so the forms report them the same way.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};

use super::config::Config;
use super::credentials::AuthAction;
use super::submit::ApiErrorBody;

/// Shared state for the proxy routes
#[derive(Clone)]
pub struct ProxyState {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl ProxyState {
    pub fn new(config: Config) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: Config, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client,
        }
    }
}

/// Create the auth proxy router
///
/// Routes:
/// - `POST /api/user/login`
/// - `POST /api/user/signup`
pub fn proxy_router(config: Config) -> Router {
    proxy_router_with_state(ProxyState::new(config))
}

pub fn proxy_router_with_state(state: ProxyState) -> Router {
    Router::new()
        .route("/api/user/{action}", post(forward))
        .with_state(state)
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ApiErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// POST /api/user/{action}
async fn forward(
    State(state): State<ProxyState>,
    Path(action): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let Some(action) = AuthAction::from_path_segment(&action) else {
        return error_response(StatusCode::NOT_FOUND, format!("Unknown action '{}'", action));
    };

    let Some(url) = state.config.upstream_url(action) else {
        tracing::error!("CHAT_API_URL is not set, cannot forward {}", action.endpoint());
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "Chat API is not configured");
    };

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/json")
        .to_string();

    let upstream = match state
        .client
        .post(&url)
        .header(header::CONTENT_TYPE, content_type)
        .body(body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::warn!("Chat API request to {} failed: {}", url, e);
            return error_response(StatusCode::BAD_GATEWAY, "Chat API is unreachable");
        }
    };

    let status = upstream.status();
    tracing::info!("{} -> {}", action.endpoint(), status);

    let mut relayed = HeaderMap::new();
    for name in [header::CONTENT_TYPE, header::SET_COOKIE] {
        for value in upstream.headers().get_all(&name) {
            relayed.append(name.clone(), value.clone());
        }
    }

    match upstream.bytes().await {
        Ok(bytes) => (status, relayed, bytes).into_response(),
        Err(e) => {
            tracing::warn!("Failed to read Chat API response: {}", e);
            error_response(StatusCode::BAD_GATEWAY, "Chat API returned an unreadable response")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, HeaderMap, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, headers, json)
    }

    /// Spawn a fake chat backend on an ephemeral port
    async fn spawn_backend() -> String {
        async fn login(Json(body): Json<Value>) -> Response {
            if body["password"] == "pw" {
                (
                    [(header::SET_COOKIE, "jwt=abc; HttpOnly")],
                    Json(json!({"token": "t1", "user": body["email"]})),
                )
                    .into_response()
            } else {
                (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"error": "Invalid user credential"})),
                )
                    .into_response()
            }
        }

        let backend = Router::new().route("/api/user/login", post(login));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, backend).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn direct_router(base: String) -> Router {
        let client = reqwest::Client::builder().no_proxy().build().unwrap();
        proxy_router_with_state(ProxyState::with_client(
            Config::from_api_url(Some(base)),
            client,
        ))
    }

    #[tokio::test]
    async fn test_unknown_action() {
        let app = proxy_router(Config::from_api_url(Some("http://localhost:1".into())));

        let (status, _, body) = post_json(app, "/api/user/logout", json!({})).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Unknown action 'logout'");
    }

    #[tokio::test]
    async fn test_unconfigured_backend() {
        let app = proxy_router(Config::default());

        let (status, _, body) =
            post_json(app, "/api/user/login", json!({"email": "a", "password": "b"})).await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body, json!({"error": "Chat API is not configured"}));
    }

    #[tokio::test]
    async fn test_relays_success_and_cookie() {
        let base = spawn_backend().await;
        let app = direct_router(base);

        let (status, headers, body) = post_json(
            app,
            "/api/user/login",
            json!({"email": "ada@example.com", "password": "pw"}),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"token": "t1", "user": "ada@example.com"}));
        assert_eq!(
            headers.get(header::SET_COOKIE).and_then(|v| v.to_str().ok()),
            Some("jwt=abc; HttpOnly")
        );
    }

    #[tokio::test]
    async fn test_relays_structured_error() {
        let base = spawn_backend().await;
        let app = direct_router(base);

        let (status, _, body) = post_json(
            app,
            "/api/user/login",
            json!({"email": "ada@example.com", "password": "wrong"}),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid user credential");
    }
}
