pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;
use crate::structuring::handlers;

async fn not_found() -> AppError {
    AppError::NotFound("No such route".to_string())
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // CV structuring API
        .route("/api/v1/cv/structure", post(handlers::handle_structure))
        .route("/api/v1/cv/upload", post(handlers::handle_upload))
        .fallback(not_found)
        .layer(body_limit)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::structuring::structurer::HeuristicStructurer;

    const BOUNDARY: &str = "resume-api-test-boundary";

    fn app() -> Router {
        build_router(AppState {
            config: Config::default(),
            structurer: Arc::new(HeuristicStructurer::default()),
        })
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart(field: &str, filename: &str, content_type: &str, data: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {data}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/api/v1/cv/upload")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "resume-api");
    }

    #[tokio::test]
    async fn test_structure_returns_camel_case_record() {
        let request = post_json(
            "/api/v1/cv/structure",
            json!({ "raw_text": "Jane Doe\njane@x.com\nEXPERIENCE\nSoftware Engineer\nAcme Corp 2020 - Present\n- Built X" }),
        );
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["backend"], "heuristic");
        assert!(body["request_id"].is_string());
        assert!(body["structured_at"].is_string());
        assert_eq!(body["cv"]["personalInfo"]["fullName"], "Jane Doe");
        assert_eq!(body["cv"]["experiences"][0]["company"], "Acme Corp");
        assert_eq!(body["cv"]["experiences"][0]["current"], true);
        assert_eq!(body["cv"]["experiences"][0]["id"], "exp-1");
    }

    #[tokio::test]
    async fn test_structure_rejects_blank_text() {
        let request = post_json("/api/v1/cv/structure", json!({ "raw_text": "  \n " }));
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_upload_plain_text() {
        let request = multipart("file", "cv.txt", "text/plain", "Jane Doe\njane@x.com\nSKILLS\nRust, Go");
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["cv"]["personalInfo"]["email"], "jane@x.com");
        assert_eq!(body["cv"]["skills"][1]["name"], "Go");
    }

    #[tokio::test]
    async fn test_upload_unsupported_type() {
        let request = multipart("file", "cv.docx", "application/octet-stream", "PK");
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_upload_without_file_field() {
        let request = multipart("resume", "cv.txt", "text/plain", "Jane Doe");
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
