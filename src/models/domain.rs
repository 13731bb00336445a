use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Insertion-ordered set of skill names with case-insensitive membership.
///
/// The first spelling inserted for a skill is the one kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillSet {
    items: Vec<String>,
    keys: HashSet<String>,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a skill; returns false if it was already present (ignoring case)
    /// or is blank.
    pub fn insert(&mut self, skill: impl Into<String>) -> bool {
        let skill = skill.into();
        let key = skill.trim().to_lowercase();
        if key.is_empty() || !self.keys.insert(key) {
            return false;
        }
        self.items.push(skill);
        true
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.keys.contains(&skill.trim().to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}

impl Extend<String> for SkillSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for skill in iter {
            self.insert(skill);
        }
    }
}

impl FromIterator<String> for SkillSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = SkillSet::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<String>> for SkillSet {
    fn from(items: Vec<String>) -> Self {
        items.into_iter().collect()
    }
}

impl From<SkillSet> for Vec<String> {
    fn from(set: SkillSet) -> Self {
        set.items
    }
}

impl<'a> IntoIterator for &'a SkillSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// One job held by the candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    #[serde(default)]
    pub details: Vec<String>,
}

/// One project listed by the candidate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub technologies: SkillSet,
}

/// Structured view of a resume, built once per request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub education: Vec<String>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: SkillSet,
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
}

impl ParsedProfile {
    /// Copy of this profile with `extra` skills merged into its skill set
    pub fn with_merged_skills<S: AsRef<str>>(&self, extra: &[S]) -> ParsedProfile {
        let mut merged = self.clone();
        merged
            .skills
            .extend(extra.iter().map(|s| s.as_ref().trim().to_string()));
        merged
    }
}

/// An internship or job listing from the external catalog.
///
/// Read-only to the engine; every field defaults when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpportunityRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub stipend: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub apply_link: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Scored opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    #[serde(flatten)]
    pub opportunity: OpportunityRecord,
    /// Lexical overlap score; 0 when nothing is shared, above 1 when repeated
    /// candidate stems outnumber the distinct stems of both documents
    pub raw_score: f64,
    /// Raw score relative to the best result in the same request, 0-100
    pub normalized_score: u32,
}

/// Thresholds applied when ranking scored opportunities
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingPolicy {
    /// Results must score strictly above this
    pub min_score: f64,
    pub max_results: usize,
    pub max_missing_skills: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            min_score: 0.1,
            max_results: 10,
            max_missing_skills: 5,
        }
    }
}

/// Query over the opportunity catalog snapshot
#[derive(Debug, Clone, Default)]
pub struct OpportunityQuery {
    pub location: Option<String>,
    pub company: Option<String>,
    pub page: usize,
    pub limit: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_set_case_insensitive() {
        let mut skills = SkillSet::new();
        assert!(skills.insert("Python"));
        assert!(!skills.insert("python"));
        assert!(!skills.insert("  "));
        assert!(skills.contains("PYTHON"));
        assert_eq!(skills.as_slice(), &["Python".to_string()]);
    }

    #[test]
    fn test_skill_set_serializes_as_list() {
        let skills: SkillSet = vec!["Rust".to_string(), "rust".to_string(), "Go".to_string()].into();
        let json = serde_json::to_string(&skills).unwrap();
        assert_eq!(json, r#"["Rust","Go"]"#);
        let back: SkillSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, skills);
    }

    #[test]
    fn test_merged_skills() {
        let profile = ParsedProfile {
            skills: vec!["React".to_string()].into(),
            ..Default::default()
        };
        let merged = profile.with_merged_skills(&["react", " Node.js "]);
        assert_eq!(merged.skills.as_slice(), &["React".to_string(), "Node.js".to_string()]);
        assert_eq!(profile.skills.len(), 1);
    }

    #[test]
    fn test_opportunity_defaults_missing_fields() {
        let record: OpportunityRecord = serde_json::from_str(r#"{"_id": "abc", "title": "Intern"}"#).unwrap();
        assert_eq!(record.id.as_deref(), Some("abc"));
        assert_eq!(record.title, "Intern");
        assert!(record.skills.is_empty());
        assert!(record.requirements.is_none());
    }
}
