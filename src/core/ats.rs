use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::normalizer::collapse_whitespace;
use crate::error::EngineError;
use crate::models::{ChecklistReport, KeywordReport};

static NON_KEYWORD_CHAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s.+#]").unwrap());

const STOP_WORDS: &[&str] = &[
    "and", "or", "the", "to", "a", "of", "in", "on", "for", "with", "is", "are", "you", "your",
    "this", "that", "we", "as", "an", "be", "will", "should", "have", "has", "it", "at", "our",
    "us", "by", "from", "their", "they", "but", "if", "about", "into", "more", "can", "also",
];

/// Keywords kept from a job description
pub const MAX_KEYWORDS: usize = 15;

/// Sections a reviewer expects to see mentioned, each worth `SECTION_POINTS`
pub const CHECKLIST_SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "certifications",
    "leadership",
];
const SECTION_POINTS: u32 = 15;
const MAX_CHECKLIST_SCORE: u32 = 100;

/// Most frequent meaningful words of a job description, ties in order of
/// first appearance.
pub fn extract_keywords(job_description: &str) -> Vec<String> {
    let lowered = job_description.to_lowercase();
    let cleaned = NON_KEYWORD_CHAR.replace_all(&lowered, "");

    // word -> (count, first position)
    let mut frequency: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, word) in cleaned.split_whitespace().enumerate() {
        if word.chars().count() <= 2 || STOP_WORDS.contains(&word) {
            continue;
        }
        frequency.entry(word).or_insert((0, position)).0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = frequency.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    ranked
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// How many `keywords` occur (as substrings) in the resume.
///
/// Fails with `EmptyOrTooShortDocument` when the whitespace-collapsed resume
/// is shorter than `min_chars`.
pub fn keyword_coverage(
    resume_text: &str,
    keywords: &[String],
    min_chars: usize,
) -> Result<KeywordReport, EngineError> {
    let resume = collapse_whitespace(resume_text);
    let length = resume.chars().count();
    if length < min_chars {
        return Err(EngineError::EmptyOrTooShortDocument {
            length,
            minimum: min_chars,
        });
    }
    let resume = resume.to_lowercase();

    let (matched, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|keyword| resume.contains(keyword.as_str()));

    let score = if keywords.is_empty() {
        0
    } else {
        (matched.len() as f64 / keywords.len() as f64 * 100.0).round() as u32
    };

    let suggestions = missing
        .iter()
        .map(|keyword| format!("Consider adding \"{}\" to your resume.", keyword))
        .collect();

    Ok(KeywordReport {
        score,
        matched_keywords: matched,
        missing_keywords: missing,
        used_keywords: keywords.to_vec(),
        suggestions,
    })
}

/// Check a resume for the usual sections and profile links
pub fn section_checklist(resume_text: &str) -> ChecklistReport {
    let text = resume_text.to_lowercase();
    let mut score = 0;
    let mut recommendations = Vec::new();

    for section in CHECKLIST_SECTIONS {
        if text.contains(section) {
            score += SECTION_POINTS;
        } else {
            recommendations.push(format!(
                "Consider adding a section or mention of \"{}\".",
                section
            ));
        }
    }

    if !text.contains("linkedin") {
        recommendations.push("Add your LinkedIn profile.".to_string());
    }
    if !text.contains("github") {
        recommendations.push("Add your GitHub or portfolio link.".to_string());
    }

    ChecklistReport {
        ats_score: score.min(MAX_CHECKLIST_SCORE),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_frequency_then_position() {
        let jd = "We need Rust. Rust and Kafka; experience with Kafka, Docker & C++ is a plus!";
        assert_eq!(
            extract_keywords(jd),
            vec!["kafka", "need", "rust.", "rust", "experience", "docker", "c++", "plus"]
        );
    }

    #[test]
    fn test_extract_keywords_caps_at_fifteen() {
        let jd = (0..30).map(|i| format!("word{:02}", i)).collect::<Vec<_>>().join(" ");
        let keywords = extract_keywords(&jd);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word00");
    }

    #[test]
    fn test_extract_keywords_empty() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("to be or an is it").is_empty());
    }

    #[test]
    fn test_keyword_coverage() {
        let keywords = vec!["rust".to_string(), "kafka".to_string(), "docker".to_string()];
        let report = keyword_coverage("Built   services in Rust\nusing Docker containers", &keywords, 30).unwrap();
        assert_eq!(report.score, 67);
        assert_eq!(report.matched_keywords, vec!["rust", "docker"]);
        assert_eq!(report.missing_keywords, vec!["kafka"]);
        assert_eq!(report.suggestions, vec!["Consider adding \"kafka\" to your resume."]);
        assert_eq!(report.used_keywords, keywords);
    }

    #[test]
    fn test_keyword_coverage_without_keywords() {
        let report = keyword_coverage("a resume that is long enough to pass the check", &[], 30).unwrap();
        assert_eq!(report.score, 0);
        assert!(report.suggestions.is_empty());
    }

    #[test]
    fn test_keyword_coverage_short_resume() {
        let err = keyword_coverage("   tiny   ", &[], 30).unwrap_err();
        assert_eq!(err, EngineError::EmptyOrTooShortDocument { length: 4, minimum: 30 });
    }

    #[test]
    fn test_checklist_all_sections() {
        let text = "Experience Education Skills Projects Certifications Leadership linkedin.com/in/x github.com/x";
        let report = section_checklist(text);
        assert_eq!(report.ats_score, 90);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn test_checklist_recommendations() {
        let report = section_checklist("EXPERIENCE at Acme. SKILLS: Rust");
        assert_eq!(report.ats_score, 30);
        assert_eq!(
            report.recommendations,
            vec![
                "Consider adding a section or mention of \"education\".",
                "Consider adding a section or mention of \"projects\".",
                "Consider adding a section or mention of \"certifications\".",
                "Consider adding a section or mention of \"leadership\".",
                "Add your LinkedIn profile.",
                "Add your GitHub or portfolio link.",
            ]
        );
    }
}
