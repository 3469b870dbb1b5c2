pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::seating::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/seating/config", get(handlers::handle_get_config))
        .route("/api/v1/seating/example", get(handlers::handle_example))
        .route("/api/v1/seating/preview", post(handlers::handle_preview))
        .route("/api/v1/seating/arrange", post(handlers::handle_arrange))
        .route("/api/v1/seating/validate", post(handlers::handle_validate))
        .route("/api/v1/seating/export", post(handlers::handle_export))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::seating::example::EXAMPLE_ROSTER;
    use crate::seating::models::SeatingOptions;

    fn app() -> Router {
        build_router(AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                seating: SeatingOptions::default(),
            },
        })
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::get("/api/v1/nope").body(Body::empty()).unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_arrange_example_roster() {
        let (status, body) = post_json(
            "/api/v1/seating/arrange",
            json!({ "raw_text": EXAMPLE_ROSTER, "options": { "min_spacing": 1 } }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let body: Value = serde_json::from_slice(&body).unwrap();
        let seats = body["seats"].as_array().unwrap();
        assert_eq!(seats.len(), 15);
        assert_eq!(seats[0]["seat_number"], 1);
        assert_eq!(seats[0]["record"]["Organization"], "Company A");
        assert_eq!(seats[1]["record"]["Organization"], "Company B");
        assert_eq!(body["statistics"]["organizations"], 6);
        assert_eq!(body["spacing"]["passed"], true);
        assert_eq!(body["table"]["columns"][0], "Seat #");
    }

    #[tokio::test]
    async fn test_arrange_with_seed_is_reproducible() {
        let request = json!({
            "raw_text": EXAMPLE_ROSTER,
            "options": { "randomize_order": true, "shuffle_seed": 99 }
        });
        let (_, first) = post_json("/api/v1/seating/arrange", request.clone()).await;
        let (_, second) = post_json("/api/v1/seating/arrange", request).await;
        let first: Value = serde_json::from_slice(&first).unwrap();
        let second: Value = serde_json::from_slice(&second).unwrap();
        assert_eq!(first["seats"], second["seats"]);
    }

    #[tokio::test]
    async fn test_arrange_missing_column() {
        let (status, body) = post_json(
            "/api/v1/seating/arrange",
            json!({ "raw_text": "Company,Name\nA,Ann" }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("\"Organization\""));
    }

    #[tokio::test]
    async fn test_arrange_empty_input() {
        let (status, _) = post_json("/api/v1/seating/arrange", json!({ "raw_text": "  " })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_preview_counts_rows() {
        let (status, body) = post_json(
            "/api/v1/seating/preview",
            json!({ "raw_text": EXAMPLE_ROSTER }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["row_count"], 15);
        assert_eq!(body["headers"][4], "Email");
    }

    #[tokio::test]
    async fn test_validate_reports_violations() {
        let (status, body) = post_json(
            "/api/v1/seating/validate",
            json!({
                "records": [
                    { "Organization": "A", "Name": "Ann" },
                    { "Organization": "A", "Name": "Amy" },
                    { "Organization": "B", "Name": "Bob" }
                ],
                "options": { "min_spacing": 1 }
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["passed"], false);
        assert_eq!(body["violations"][0]["position_a"], 1);
        assert_eq!(body["violations"][0]["observed_spacing"], 1);
    }

    #[tokio::test]
    async fn test_validate_non_string_value_uses_error_envelope() {
        let (status, body) = post_json(
            "/api/v1/seating/validate",
            json!({ "records": [{ "ID": 1, "Organization": "A" }] }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(!body["error"]["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_validate_requires_records() {
        let (status, _) = post_json("/api/v1/seating/validate", json!({ "records": [] })).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_export_csv_attachment() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/v1/seating/export")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                json!({
                    "headers": ["Organization", "Name"],
                    "records": [{ "Organization": "Acme, Inc", "Name": "Ann" }],
                    "format": "csv"
                })
                .to_string(),
            ))
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let disposition = response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.starts_with("attachment; filename=\"seating_arrangement_"));
        assert!(disposition.ends_with(".csv\""));

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(
            String::from_utf8(bytes.to_vec()).unwrap(),
            "Seat_Number,Organization,Name\n1,\"Acme, Inc\",Ann\n"
        );
    }
}
