use std::collections::HashSet;

use crate::core::tokenizer::tokenize_and_stem;
use crate::models::{OpportunityRecord, ParsedProfile};

/// Text scored on the candidate side: skills, experience details, project
/// descriptions
pub fn candidate_document(profile: &ParsedProfile) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(1 + profile.experience.len() + profile.projects.len());

    parts.push(profile.skills.as_slice().join(" "));
    parts.extend(profile.experience.iter().map(|entry| entry.details.join(" ")));
    parts.extend(profile.projects.iter().map(|project| project.description.clone()));

    parts.join(" ")
}

/// Text scored on the opportunity side: title, skills, description, requirements
pub fn opportunity_document(opportunity: &OpportunityRecord) -> String {
    let skills = opportunity.skills.join(" ");
    [
        opportunity.title.as_str(),
        skills.as_str(),
        opportunity.description.as_str(),
        opportunity.requirements.as_deref().unwrap_or_default(),
    ]
    .join(" ")
}

/// Lexical overlap between a profile and an opportunity.
///
/// Every candidate stem (repeats included) found among the opportunity stems
/// counts towards the intersection; the union is the distinct stems of both
/// documents. Zero when either side has no stems. Repeated candidate stems can
/// push the ratio above 1.
pub fn similarity(profile: &ParsedProfile, opportunity: &OpportunityRecord) -> f64 {
    let candidate = tokenize_and_stem(&candidate_document(profile));
    let opportunity = tokenize_and_stem(&opportunity_document(opportunity));
    overlap_score(&candidate, &opportunity)
}

/// Score two already-stemmed token sequences
pub fn overlap_score(candidate: &[String], opportunity: &[String]) -> f64 {
    if candidate.is_empty() || opportunity.is_empty() {
        return 0.0;
    }

    let opportunity_set: HashSet<&str> = opportunity.iter().map(String::as_str).collect();

    let intersection = candidate
        .iter()
        .filter(|token| opportunity_set.contains(token.as_str()))
        .count();

    let union: HashSet<&str> = candidate
        .iter()
        .map(String::as_str)
        .chain(opportunity_set.iter().copied())
        .collect();

    let score = intersection as f64 / union.len() as f64;

    tracing::trace!(intersection, union = union.len(), score, "Scored opportunity");

    score
}
