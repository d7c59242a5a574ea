//! HTTP handlers for the REST API.
//!
//! Each handler validates the incoming birth data, runs the chart
//! computation on the blocking pool, and shapes the response. The same
//! handlers back both the query-parameter (GET) and JSON-body (POST)
//! routes.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::ephemeris::Ephemeris;
use crate::models::BirthInfo;
use crate::services::{compute_kundali, pdf, KundaliChart};

use super::dto::{BirthRequest, KundaliResponse, LivenessResponse};
use super::error::AppError;
use super::state::AppState;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// GET /
///
/// Liveness check.
pub async fn liveness() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        service: "VedhVaani Kundali Engine".to_string(),
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET|POST /kundali
///
/// Full kundali result as JSON.
pub async fn kundali(
    State(state): State<AppState>,
    Json(request): Json<BirthRequest>,
) -> HandlerResult<KundaliResponse> {
    let chart = build_chart(state.ephemeris.clone(), request).await?;
    Ok(Json(KundaliResponse::from(&chart)))
}

/// Query-parameter variant of [`kundali`].
pub async fn kundali_query(
    State(state): State<AppState>,
    Query(request): Query<BirthRequest>,
) -> HandlerResult<KundaliResponse> {
    let chart = build_chart(state.ephemeris.clone(), request).await?;
    Ok(Json(KundaliResponse::from(&chart)))
}

/// GET|POST /kundali-pdf (alias /generate_kundali_pdf)
///
/// Render the report and return it as a PDF file download.
pub async fn kundali_pdf(
    State(state): State<AppState>,
    Json(request): Json<BirthRequest>,
) -> Result<Response, AppError> {
    render_pdf_response(state.ephemeris.clone(), request).await
}

/// Query-parameter variant of [`kundali_pdf`].
pub async fn kundali_pdf_query(
    State(state): State<AppState>,
    Query(request): Query<BirthRequest>,
) -> Result<Response, AppError> {
    render_pdf_response(state.ephemeris.clone(), request).await
}

/// Validate the request and compute the chart on the blocking pool.
async fn build_chart(
    ephemeris: Arc<dyn Ephemeris>,
    request: BirthRequest,
) -> Result<KundaliChart, AppError> {
    let info = request.into_birth_info()?;
    spawn_compute(ephemeris, info).await
}

async fn spawn_compute(
    ephemeris: Arc<dyn Ephemeris>,
    info: BirthInfo,
) -> Result<KundaliChart, AppError> {
    tokio::task::spawn_blocking(move || compute_kundali(ephemeris.as_ref(), info))
        .await
        .map_err(|e| AppError::Internal(format!("task join error: {}", e)))
}

async fn render_pdf_response(
    ephemeris: Arc<dyn Ephemeris>,
    request: BirthRequest,
) -> Result<Response, AppError> {
    let info = request.into_birth_info()?;

    let (bytes, filename) = tokio::task::spawn_blocking(
        move || -> Result<(Vec<u8>, String), AppError> {
            let chart = compute_kundali(ephemeris.as_ref(), info);
            let file = pdf::render_report(&chart)?;
            let bytes = std::fs::read(file.path())?;
            Ok((bytes, pdf::report_filename(&chart.info)))
        },
    )
    .await
    .map_err(|e| AppError::Internal(format!("task join error: {}", e)))??;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/pdf"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{}\"", filename))
            .map_err(|e| AppError::Internal(format!("invalid download filename: {}", e)))?,
    );

    Ok((StatusCode::OK, headers, bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::AstroEphemeris;

    fn state() -> AppState {
        AppState::new(Arc::new(AstroEphemeris))
    }

    fn request() -> BirthRequest {
        BirthRequest {
            name: "Ravi".to_string(),
            date: "2025-01-01".to_string(),
            time: "00:00".to_string(),
            lat: 0.0,
            lon: 0.0,
            lang: crate::models::Language::Hi,
            style: crate::models::ChartStyle::North,
            hsys: crate::models::HouseSystem::Placidus,
        }
    }

    #[tokio::test]
    async fn test_liveness() {
        let response = liveness().await;
        assert_eq!(response.0.status, "ok");
    }

    #[tokio::test]
    async fn test_kundali_handler_returns_nine_positions() {
        let result = kundali(State(state()), Json(request())).await.unwrap();
        assert_eq!(result.0.graha_positions.len(), 9);
        assert!((0.0..360.0).contains(&result.0.ascendant.longitude));
    }

    #[tokio::test]
    async fn test_kundali_handler_rejects_bad_date() {
        let mut req = request();
        req.date = "not-a-date".to_string();
        let err = kundali(State(state()), Json(req)).await.err().unwrap();
        assert!(matches!(err, AppError::InvalidDate(_)));
    }

    #[tokio::test]
    async fn test_pdf_handler_returns_pdf_attachment() {
        let response = kundali_pdf(State(state()), Json(request())).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/pdf"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("kundali_Ravi_2025-01-01.pdf"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
