use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::ChatService;

#[derive(Debug, Deserialize)]
pub(crate) struct ChatRequest {
    #[serde(default)]
    query: Option<String>,
}

/// Router builder exposing the chat endpoint.
pub fn chat_router(service: Arc<ChatService>) -> Router {
    Router::new()
        .route("/api/v1/chat", post(chat_handler))
        .with_state(service)
}

pub(crate) async fn chat_handler(
    State(service): State<Arc<ChatService>>,
    axum::Json(request): axum::Json<ChatRequest>,
) -> Response {
    let query = request.query.unwrap_or_default();
    if query.trim().is_empty() {
        let payload = json!({ "reply": "No query received." });
        return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
    }

    info!(chars = query.len(), "received chat query");
    let reply = service.respond(&query);
    (StatusCode::OK, axum::Json(json!({ "reply": reply }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::DATA_SOURCE_MISSING;
    use axum::body::Body;
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn service() -> Arc<ChatService> {
        Arc::new(ChatService::new("./does-not-exist.json"))
    }

    async fn read_json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("body is json")
    }

    #[tokio::test]
    async fn blank_queries_are_rejected() {
        let response = chat_handler(
            State(service()),
            axum::Json(ChatRequest {
                query: Some("   ".to_string()),
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let payload = read_json_body(response).await;
        assert_eq!(payload["reply"], "No query received.");
    }

    #[tokio::test]
    async fn missing_query_field_is_rejected() {
        let response = chat_handler(State(service()), axum::Json(ChatRequest { query: None })).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn chat_route_answers_posted_queries() {
        let router = chat_router(service());

        let response = router
            .oneshot(
                Request::post("/api/v1/chat")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"query": "highest package in 2025"}"#))
                    .expect("request builds"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = read_json_body(response).await;
        assert_eq!(payload["reply"], DATA_SOURCE_MISSING);
    }
}
