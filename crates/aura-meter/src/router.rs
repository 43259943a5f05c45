use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};

use crate::assessment::AuraAssessment;
use crate::roast::{tips, AuraResult};
use crate::scoring::{AuraLabel, VisualAnalysis};
use crate::vision::{parse_vision_output, VisionReport};

/// Raw vision collaborator output posted for parsing and scoring.
#[derive(Debug, Clone, Deserialize)]
pub struct VisionContent {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct VisionAssessmentView {
    pub vision: VisionReport,
    #[serde(flatten)]
    pub assessment: AuraAssessment,
}

#[derive(Debug, Serialize)]
pub struct TipsView {
    pub label: &'static str,
    pub free_tip: &'static str,
    pub paid_tip: String,
}

/// Stateless router exposing scoring, vision parsing and tips.
pub fn aura_router() -> Router {
    Router::new()
        .route("/api/v1/aura/score", post(score_handler))
        .route("/api/v1/aura/vision", post(vision_handler))
        .route("/api/v1/aura/tips", post(tips_handler))
}

pub(crate) async fn score_handler(Json(analysis): Json<VisualAnalysis>) -> Response {
    let assessment = AuraAssessment::from_analysis(&analysis);
    debug!(
        final_score = assessment.breakdown.final_score,
        label = %assessment.breakdown.aura_label,
        "scored visual analysis"
    );
    (StatusCode::OK, Json(assessment)).into_response()
}

pub(crate) async fn vision_handler(Json(payload): Json<VisionContent>) -> Response {
    match parse_vision_output(&payload.content) {
        Ok(vision) => {
            let assessment = AuraAssessment::from_analysis(vision.analysis());
            debug!(
                image_type = ?vision.image_type,
                final_score = assessment.breakdown.final_score,
                "scored vision document"
            );
            let view = VisionAssessmentView { vision, assessment };
            (StatusCode::OK, Json(view)).into_response()
        }
        Err(error) => {
            warn!(%error, "rejected vision output");
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn tips_handler(Json(result): Json<AuraResult>) -> Response {
    let view = TipsView {
        label: AuraLabel::for_score(result.aura_score).label(),
        free_tip: tips::free_tip(result.aura_score),
        paid_tip: tips::paid_tip(&result),
    };
    (StatusCode::OK, Json(view)).into_response()
}
