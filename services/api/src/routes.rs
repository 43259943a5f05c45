use crate::infra::AppState;
use aura_meter::aura_router;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;

/// Scoring routes plus the operational endpoints. Expects [`AppState`] as an extension.
pub(crate) fn with_aura_routes() -> Router {
    aura_router()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, Json(json!({ "status": "ready" })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "status": "initializing" })),
        )
    }
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use tower::ServiceExt;

    fn state() -> AppState {
        let handle = PrometheusBuilder::new().build_recorder().handle();
        AppState::new(handle)
    }

    async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = with_aura_routes()
            .layer(Extension(state.clone()))
            .oneshot(request)
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, bytes.to_vec())
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = send(&state(), get_request("/health")).await;
        let body: Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_flips_once_marked() {
        let state = state();
        let (status, body) = send(&state, get_request("/ready")).await;
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        state.mark_ready();
        let (status, _) = send(&state, get_request("/ready")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let (status, _) = send(&state(), get_request("/metrics")).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn scoring_routes_are_mounted() {
        let payload = json!({
            "visual_tone": "neutral",
            "aesthetic_vibe": [],
            "confidence_indicators": "medium",
            "notable_elements": [],
        });
        let request = Request::post("/api/v1/aura/score")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request");

        let (status, body) = send(&state(), request).await;
        let body: Value = serde_json::from_slice(&body).expect("json body");

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["breakdown"]["aura_label"], "Neutral");
    }
}
