//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression,
//! tracing), and creates the axum router ready for serving.

use axum::{
    routing::get,
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::liveness))
        .route(
            "/kundali",
            get(handlers::kundali_query).post(handlers::kundali),
        )
        .route(
            "/kundali-pdf",
            get(handlers::kundali_pdf_query).post(handlers::kundali_pdf),
        )
        // Legacy path kept for older clients.
        .route(
            "/generate_kundali_pdf",
            get(handlers::kundali_pdf_query).post(handlers::kundali_pdf),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::AstroEphemeris;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    fn app() -> Router {
        create_router(AppState::new(Arc::new(AstroEphemeris)))
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_router_creation() {
        let _router = app();
        // If we got here, router was created successfully
    }

    #[tokio::test]
    async fn test_liveness_route() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["status"], "ok");
    }

    #[tokio::test]
    async fn test_kundali_get_with_query_params() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/kundali?date=2025-01-01&time=00:00&lat=0&lon=0")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["graha_positions"].as_object().unwrap().len(), 9);
        assert_eq!(value["houses"].as_object().unwrap().len(), 12);
        assert_eq!(value["lang"], "hi");

        let asc = value["ascendant"]["longitude"].as_f64().unwrap();
        assert!((0.0..360.0).contains(&asc));
    }

    #[tokio::test]
    async fn test_kundali_post_with_json_body() {
        let body = serde_json::json!({
            "name": "Meera",
            "date": "1995-08-20",
            "time": "06:45",
            "lat": 19.07,
            "lon": 72.87,
            "lang": "en",
            "style": "south"
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kundali")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let value = body_json(response).await;
        assert_eq!(value["name"], "Meera");
        assert_eq!(value["style"], "south");
        assert!(value["graha_positions"].get("Sun").is_some());
        assert_eq!(value["dasha"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_malformed_date_yields_error_object() {
        let body = serde_json::json!({
            "date": "not-a-date",
            "time": "00:00",
            "lat": 0.0,
            "lon": 0.0
        });
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/kundali")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let value = body_json(response).await;
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1, "body must contain only the error key");
        assert!(object.contains_key("error"));
    }

    #[tokio::test]
    async fn test_pdf_route_and_alias_both_serve_pdf() {
        for path in ["/kundali-pdf", "/generate_kundali_pdf"] {
            let body = serde_json::json!({
                "name": "Ravi",
                "date": "2025-01-01",
                "time": "00:00",
                "lat": 0.0,
                "lon": 0.0
            });
            let response = app()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri(path)
                        .header(header::CONTENT_TYPE, "application/json")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path {}", path);
            assert_eq!(
                response.headers().get(header::CONTENT_TYPE).unwrap(),
                "application/pdf"
            );
        }
    }
}
