use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::{extract_keywords, keyword_coverage, section_checklist};
use crate::models::{ChecklistRequest, KeywordAnalysisRequest};
use crate::routes::{engine_error_response, validation_error_response, AppState};

/// Configure resume review routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/ats/keywords", web::post().to(analyze_keywords))
        .route("/ats/checklist", web::post().to(checklist));
}

/// Job-description keyword coverage
///
/// POST /api/v1/ats/keywords
async fn analyze_keywords(
    state: web::Data<AppState>,
    req: web::Json<KeywordAnalysisRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors.to_string());
    }

    let keywords = extract_keywords(&req.job_description);

    match keyword_coverage(&req.resume_text, &keywords, state.min_document_chars) {
        Ok(report) => {
            tracing::info!(
                "Keyword coverage {}% ({} of {} keywords)",
                report.score,
                report.matched_keywords.len(),
                report.used_keywords.len()
            );
            HttpResponse::Ok().json(report)
        }
        Err(e) => engine_error_response(&e),
    }
}

/// Section checklist
///
/// POST /api/v1/ats/checklist
async fn checklist(req: web::Json<ChecklistRequest>) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error_response(errors.to_string());
    }

    let report = section_checklist(&req.resume_text);
    tracing::info!("Checklist score {}", report.ats_score);

    HttpResponse::Ok().json(report)
}
