// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ExperienceEntry, MatchResult, OpportunityQuery, OpportunityRecord, ParsedProfile, ProjectEntry,
    RankingPolicy, SkillSet,
};
pub use requests::{
    ChecklistRequest, KeywordAnalysisRequest, ListOpportunitiesQuery, RecommendRequest, SkillsInput,
};
pub use responses::{
    ChecklistReport, ErrorResponse, HealthResponse, KeywordReport, OpportunityListResponse,
    RecommendResponse,
};
