use thiserror::Error;

/// Errors surfaced by the resume-matching pipeline.
///
/// All variants are terminal for the current request; nothing in the core
/// performs I/O, so there is no transient failure class to retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    #[error("Resume content is too short ({length} characters, need at least {minimum})")]
    EmptyOrTooShortDocument { length: usize, minimum: usize },

    #[error("No skills detected in resume or input")]
    NoSkillsDetected,
}

impl EngineError {
    /// Stable machine-readable code used in error responses
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::UnreadableDocument(_) => "unreadable_document",
            EngineError::EmptyOrTooShortDocument { .. } => "document_too_short",
            EngineError::NoSkillsDetected => "no_skills_detected",
        }
    }
}
