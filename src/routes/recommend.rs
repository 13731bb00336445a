use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::config::Settings;
use crate::core::{ensure_readable, ProfileParser, Recommender};
use crate::models::{HealthResponse, ParsedProfile, RecommendRequest, RecommendResponse};
use crate::routes::{engine_error_response, validation_error_response};
use crate::services::{CatalogClient, CatalogError, CatalogSource, PlainTextExtractor, TextExtractor};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogClient>,
    pub parser: ProfileParser,
    pub recommender: Recommender,
    pub extractor: Arc<dyn TextExtractor>,
    pub min_document_chars: usize,
}

impl AppState {
    /// Build the state described by `settings`
    pub fn from_settings(settings: &Settings) -> Result<Self, CatalogError> {
        let source = CatalogSource::from_settings(
            settings.catalog.source_url.as_deref(),
            settings.catalog.snapshot_path.as_deref(),
        );
        let catalog = CatalogClient::new(
            source,
            settings.catalog.timeout_secs,
            settings.catalog.cache_ttl_secs,
        )?;

        Ok(Self {
            catalog: Arc::new(catalog),
            parser: ProfileParser::new(settings.vocabulary()),
            recommender: Recommender::new(settings.ranking_policy()),
            extractor: Arc::new(PlainTextExtractor),
            min_document_chars: settings.parsing.min_document_chars,
        })
    }
}

/// Configure health, profile and recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profile/parse", web::post().to(parse_profile))
        .route("/recommend", web::post().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Parse a resume
///
/// POST /api/v1/profile/parse
///
/// The body is the raw document; the response is the parsed profile.
async fn parse_profile(state: web::Data<AppState>, body: web::Bytes) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();

    let parsed = state
        .extractor
        .extract(&body)
        .and_then(|text| {
            ensure_readable(&text, state.min_document_chars)?;
            Ok(state.parser.parse_profile(&text))
        });

    match parsed {
        Ok(profile) => {
            tracing::info!(
                %request_id,
                "Parsed profile with {} skills from {} bytes",
                profile.skills.len(),
                body.len()
            );
            HttpResponse::Ok().json(profile)
        }
        Err(e) => {
            tracing::info!(%request_id, "Rejected profile document: {}", e);
            engine_error_response(&e)
        }
    }
}

/// Recommend opportunities
///
/// POST /api/v1/recommend
///
/// Request body:
/// ```json
/// {
///   "resumeText": "string",
///   "skills": ["string"] | "comma, separated"
/// }
/// ```
async fn recommend(state: web::Data<AppState>, req: web::Json<RecommendRequest>) -> impl Responder {
    let request_id = uuid::Uuid::new_v4();

    if let Err(errors) = req.validate() {
        return validation_error_response(errors.to_string());
    }
    if !req.has_input() {
        return validation_error_response("Please provide either resumeText or skills");
    }

    let RecommendRequest { resume_text, skills } = req.into_inner();
    let supplied_skills = skills.map(|s| s.into_skills()).unwrap_or_default();

    let profile = match resume_text.as_deref().filter(|t| !t.trim().is_empty()) {
        Some(text) => {
            if let Err(e) = ensure_readable(text, state.min_document_chars) {
                tracing::info!(%request_id, "Rejected resume: {}", e);
                return engine_error_response(&e);
            }
            state.parser.parse_profile(text)
        }
        None => ParsedProfile::default(),
    };

    let catalog = state.catalog.snapshot_or_empty().await;

    tracing::debug!(
        %request_id,
        "Ranking {} opportunities for {} parsed and {} supplied skills",
        catalog.len(),
        profile.skills.len(),
        supplied_skills.len()
    );

    let ranked = state
        .recommender
        .recommend(&profile, supplied_skills.as_slice(), catalog.as_slice());
    let result = match ranked {
        Ok(result) => result,
        Err(e) => {
            tracing::info!(%request_id, "Recommendation rejected: {}", e);
            return engine_error_response(&e);
        }
    };

    tracing::info!(
        %request_id,
        "Returning {} recommendations (from {} opportunities)",
        result.recommendations.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(RecommendResponse {
        success: true,
        recommendations: result.recommendations,
        parsed_info: profile,
        match_score: result.match_score,
        missing_skills: result.missing_skills,
    })
}
