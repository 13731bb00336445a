use serde::{Deserialize, Serialize};

use crate::core::filters::CatalogPage;
use crate::models::domain::{MatchResult, OpportunityRecord, ParsedProfile};

/// Response for the recommend endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub success: bool,
    pub recommendations: Vec<MatchResult>,
    pub parsed_info: ParsedProfile,
    pub match_score: u32,
    pub missing_skills: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// One page of the opportunity listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityListResponse {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub internships: Vec<OpportunityRecord>,
}

impl From<CatalogPage> for OpportunityListResponse {
    fn from(page: CatalogPage) -> Self {
        Self {
            total: page.total,
            page: page.page,
            total_pages: page.total_pages,
            internships: page.items,
        }
    }
}

/// Job-description keyword coverage of a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    /// Share of keywords found, 0-100
    pub score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub used_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Section checklist result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistReport {
    pub ats_score: u32,
    pub recommendations: Vec<String>,
}
