//! InternMate engine - resume parsing and internship recommendation service
//!
//! This library turns plain resume text into a structured profile and ranks
//! an opportunity catalog against it by lexical similarity.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{ensure_readable, ProfileParser, Recommendation, Recommender, Vocabulary};
pub use error::EngineError;
pub use models::{MatchResult, OpportunityRecord, ParsedProfile, RankingPolicy, SkillSet};
