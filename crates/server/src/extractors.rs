// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Custom Axum extractors that return JSON error responses.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

/// A wrapper around [`Json<T>`] that returns JSON error responses on rejection.
///
/// Axum's default `Json<T>` rejects malformed bodies with plain-text errors
/// (e.g., bad hex in a field or an unknown field with `deny_unknown_fields`).
/// This extractor keeps the rejection's status code and converts its message
/// to `{"error": "..."}`.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    fn from_request<'life0, 'async_trait>(
        req: Request,
        state: &'life0 S,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self, Self::Rejection>> + Send + 'async_trait>,
    >
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        Box::pin(async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(json_body_error(rejection)),
            }
        })
    }
}

fn json_body_error(rejection: JsonRejection) -> Response {
    (
        rejection.status(),
        Json(json!({ "error": rejection.body_text() })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::routing::post;
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase", deny_unknown_fields)]
    struct TestBody {
        #[allow(dead_code)]
        pub value_schema: String,
    }

    async fn test_handler(JsonBody(_body): JsonBody<TestBody>) -> &'static str {
        "ok"
    }

    async fn send_request(app: Router, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .method("POST")
                    .uri("/test")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8_lossy(&body).to_string();
        (status, text)
    }

    #[tokio::test]
    async fn valid_body_returns_200() {
        let app = Router::new().route("/test", post(test_handler));
        let (status, _) = send_request(app, r#"{"valueSchema": "0x00"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_field_returns_json_error() {
        let app = Router::new().route("/test", post(test_handler));
        let (status, body) = send_request(app, r#"{"valueSchema": "0x", "bad": 1}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response should be valid JSON");
        let error_msg = parsed["error"].as_str().unwrap();
        assert!(
            error_msg.contains("unknown field"),
            "Error message should mention the unknown field, got: {error_msg}"
        );
    }

    #[tokio::test]
    async fn malformed_json_returns_json_400() {
        let app = Router::new().route("/test", post(test_handler));
        let (status, body) = send_request(app, "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let parsed: serde_json::Value =
            serde_json::from_str(&body).expect("Response must be valid JSON, not plain text");
        assert!(parsed.get("error").is_some());
    }
}
