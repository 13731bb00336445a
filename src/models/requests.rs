use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::OpportunityQuery;

static SKILL_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").unwrap());

/// Candidate skills as sent by clients: a JSON list or one comma-delimited string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    List(Vec<String>),
    Delimited(String),
}

impl SkillsInput {
    /// Trimmed, non-empty skill names
    pub fn into_skills(self) -> Vec<String> {
        let raw = match self {
            SkillsInput::List(items) => items,
            SkillsInput::Delimited(text) => SKILL_SEPARATOR
                .split(&text)
                .map(str::to_string)
                .collect(),
        };
        raw.into_iter()
            .map(|skill| skill.trim().to_string())
            .filter(|skill| !skill.is_empty())
            .collect()
    }
}

/// Request to rank opportunities for a resume and/or a skill list
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[serde(default, alias = "resume_text", rename = "resumeText")]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub skills: Option<SkillsInput>,
}

impl RecommendRequest {
    pub fn has_input(&self) -> bool {
        let has_text = self
            .resume_text
            .as_deref()
            .map(|t| !t.trim().is_empty())
            .unwrap_or(false);
        has_text || self.skills.is_some()
    }
}

/// Request to compare a resume against a job description
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct KeywordAnalysisRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "resume_text", rename = "resumeText")]
    pub resume_text: String,
    #[serde(default, alias = "job_description", rename = "jobDescription")]
    pub job_description: String,
}

/// Request to run the section checklist over a resume
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChecklistRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "resume_text", rename = "resumeText")]
    pub resume_text: String,
}

/// Query string of the opportunity listing
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListOpportunitiesQuery {
    pub location: Option<String>,
    pub company: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default = "default_page")]
    pub page: usize,
    #[validate(range(min = 1, max = 100))]
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl From<ListOpportunitiesQuery> for OpportunityQuery {
    fn from(query: ListOpportunitiesQuery) -> Self {
        Self {
            location: query.location,
            company: query.company,
            page: query.page,
            limit: query.limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_as_list() {
        let req: RecommendRequest = serde_json::from_str(r#"{"skills": ["Rust", " ", "Go "]}"#).unwrap();
        assert_eq!(req.skills.unwrap().into_skills(), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_skills_as_delimited_string() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"resumeText": "x", "skills": "python , react,, node.js"}"#).unwrap();
        assert_eq!(req.resume_text.as_deref(), Some("x"));
        assert_eq!(req.skills.unwrap().into_skills(), vec!["python", "react", "node.js"]);
    }

    #[test]
    fn test_has_input() {
        assert!(!RecommendRequest::default().has_input());
        let blank = RecommendRequest {
            resume_text: Some("   ".to_string()),
            skills: None,
        };
        assert!(!blank.has_input());
    }

    #[test]
    fn test_list_query_validation() {
        let query: ListOpportunitiesQuery = serde_json::from_str(r#"{"limit": 500}"#).unwrap();
        assert_eq!(query.page, 1);
        assert!(query.validate().is_err());
    }
}
