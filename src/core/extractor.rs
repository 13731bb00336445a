use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::sections::{find_section, EDUCATION_HEADERS, EXPERIENCE_HEADERS, PROJECT_HEADERS};
use crate::core::skills::{strip_bullet, BULLET_GLYPHS};
use crate::core::vocabulary::Vocabulary;
use crate::models::{ExperienceEntry, ProjectEntry, SkillSet};

static DATE_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}\s*[-–]\s*\d{4}$").unwrap());
static BLOCK_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:\n\s*){2,}").unwrap());
static TECH_CLAUSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:technologies|tools|tech stack|stack)\s*:\s*([^.\n]*)").unwrap()
});
static TECH_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;]").unwrap());

const BOLD_MARKER: &str = "**";

/// Education lines, with bare "YYYY-YYYY" date-range lines dropped
pub fn extract_education(text: &str) -> Vec<String> {
    let Some(section) = find_section(text, EDUCATION_HEADERS) else {
        return Vec::new();
    };

    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !DATE_RANGE.is_match(line))
        .map(str::to_string)
        .collect()
}

/// Work-experience entries.
///
/// The section is split into blocks on blank-line runs. In each block the
/// first line is the company, the second the position, and later bullet
/// lines the details. Blocks without a company are dropped.
pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    let Some(section) = find_section(text, EXPERIENCE_HEADERS) else {
        return Vec::new();
    };

    BLOCK_SEPARATOR
        .split(&section)
        .filter_map(parse_experience_block)
        .collect()
}

fn parse_experience_block(block: &str) -> Option<ExperienceEntry> {
    let lines: Vec<&str> = block.lines().collect();

    let company = lines.first().map(|l| l.trim()).unwrap_or_default();
    if company.is_empty() {
        return None;
    }
    let position = lines.get(1).map(|l| l.trim()).unwrap_or_default();

    let details = lines
        .iter()
        .skip(2)
        .map(|line| line.trim_start())
        .filter(|line| line.starts_with(BULLET_GLYPHS))
        .map(|line| strip_bullet(line).to_string())
        .filter(|detail| !detail.is_empty())
        .collect();

    Some(ExperienceEntry {
        company: company.to_string(),
        position: position.to_string(),
        details,
    })
}

/// Project entries, read as alternating name/description segments.
///
/// Segments are the pieces between `**` bold markers when the section uses
/// them, otherwise its non-empty lines. Formats that do not alternate
/// (numbered lists, plain headings with multi-line bodies) pair up wrongly;
/// this is best effort.
pub fn extract_projects(text: &str, vocabulary: &Vocabulary) -> Vec<ProjectEntry> {
    let Some(section) = find_section(text, PROJECT_HEADERS) else {
        return Vec::new();
    };

    let segments: Vec<&str> = if section.contains(BOLD_MARKER) {
        section
            .split(BOLD_MARKER)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    } else {
        section
            .lines()
            .map(strip_bullet)
            .filter(|s| !s.is_empty())
            .collect()
    };

    segments
        .chunks(2)
        .map(|pair| {
            let name = pair[0].to_string();
            let description = pair.get(1).map(|d| d.to_string()).unwrap_or_default();
            let technologies = extract_technologies(&description, vocabulary);
            ProjectEntry {
                name,
                description,
                technologies,
            }
        })
        .collect()
}

/// Technologies named in a description: an explicit `Technologies:` /
/// `Tools:` / `Stack:` list plus every vocabulary match.
pub fn extract_technologies(description: &str, vocabulary: &Vocabulary) -> SkillSet {
    let mut techs = SkillSet::new();

    if let Some(caps) = TECH_CLAUSE.captures(description) {
        techs.extend(
            TECH_DELIMITER
                .split(&caps[1])
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string),
        );
    }

    techs.extend(vocabulary.scan(description));
    techs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_education_drops_date_ranges() {
        let text = "Education\n2019-2023\nB.Tech Computer Science";
        assert_eq!(extract_education(text), vec!["B.Tech Computer Science"]);
    }

    #[test]
    fn test_education_missing_section() {
        assert!(extract_education("nothing to see").is_empty());
    }

    #[test]
    fn test_experience_block() {
        let text = "EXPERIENCE\nAcme Corp\nBackend Intern\n- Built REST services\n• Wrote tests\nnot a bullet\n\nEDUCATION";
        let entries = extract_experience(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Acme Corp");
        assert_eq!(entries[0].position, "Backend Intern");
        assert_eq!(entries[0].details, vec!["Built REST services", "Wrote tests"]);
    }

    #[test]
    fn test_experience_company_only() {
        let entries = extract_experience("Work Experience: Globex");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].company, "Globex");
        assert_eq!(entries[0].position, "");
        assert!(entries[0].details.is_empty());
    }

    #[test]
    fn test_experience_header_without_body() {
        assert!(extract_experience("Jane\nEXPERIENCE").is_empty());
    }

    #[test]
    fn test_projects_with_bold_markers() {
        let text = "PROJECTS\n**Chat App** Realtime chat with React and Node.js **Blog** Django site";
        let projects = extract_projects(text, &Vocabulary::default());
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Chat App");
        assert_eq!(projects[0].description, "Realtime chat with React and Node.js");
        assert!(projects[0].technologies.contains("react"));
        assert!(projects[0].technologies.contains("node.js"));
        assert_eq!(projects[1].name, "Blog");
        assert!(projects[1].technologies.contains("django"));
    }

    #[test]
    fn test_projects_line_pairs() {
        let text = "Projects\nTracker\nExpense tracker. Tech Stack: Flutter, Firebase\nOrphan";
        let projects = extract_projects(text, &Vocabulary::default());
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].name, "Tracker");
        assert!(projects[0].technologies.contains("Flutter"));
        assert!(projects[0].technologies.contains("firebase"));
        assert_eq!(projects[1].name, "Orphan");
        assert_eq!(projects[1].description, "");
    }

    #[test]
    fn test_explicit_technologies_clause() {
        let techs = extract_technologies("Built a bot. Tools: Rust; Tokio, Serde", &Vocabulary::default());
        let mut names: Vec<String> = techs.iter().map(|t| t.to_lowercase()).collect();
        names.sort();
        assert_eq!(names, vec!["rust", "serde", "tokio"]);
    }
}
