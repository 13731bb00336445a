use std::sync::Arc;

use crate::core::contact::extract_contact;
use crate::core::extractor::{extract_education, extract_experience, extract_projects};
use crate::core::normalizer::collapse_whitespace;
use crate::core::skills::extract_skills;
use crate::core::vocabulary::Vocabulary;
use crate::error::EngineError;
use crate::models::ParsedProfile;

/// Minimum characters of readable text before a resume is worth parsing
pub const DEFAULT_MIN_DOCUMENT_CHARS: usize = 30;

/// Reject text that is empty or too short once whitespace is collapsed.
///
/// Returns the collapsed text on success.
pub fn ensure_readable(text: &str, minimum: usize) -> Result<String, EngineError> {
    let collapsed = collapse_whitespace(text);
    let length = collapsed.chars().count();
    if length < minimum {
        return Err(EngineError::EmptyOrTooShortDocument { length, minimum });
    }
    Ok(collapsed)
}

/// Turns raw resume text into a `ParsedProfile`
#[derive(Debug, Clone, Default)]
pub struct ProfileParser {
    vocabulary: Arc<Vocabulary>,
}

impl ProfileParser {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary: Arc::new(vocabulary),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Parse every section of the resume. Sections that cannot be found come
    /// back empty; this never fails.
    pub fn parse_profile(&self, text: &str) -> ParsedProfile {
        let contact = extract_contact(text);

        let profile = ParsedProfile {
            name: contact.name,
            email: contact.email,
            phone: contact.phone,
            education: extract_education(text),
            experience: extract_experience(text),
            skills: extract_skills(text, &self.vocabulary),
            projects: extract_projects(text, &self.vocabulary),
        };

        tracing::debug!(
            education = profile.education.len(),
            experience = profile.experience.len(),
            skills = profile.skills.len(),
            projects = profile.projects.len(),
            "Parsed profile"
        );

        profile
    }
}
