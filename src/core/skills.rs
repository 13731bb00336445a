use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::normalizer::normalize_skill_line;
use crate::core::sections::{find_section, SKILLS_HEADERS};
use crate::core::vocabulary::Vocabulary;
use crate::models::SkillSet;

static SKILL_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;•\-–·/]|\s+/\s+").unwrap());
static FILLER_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^(and|or|etc)$").unwrap());

/// Glyphs that open a bullet-point line
pub const BULLET_GLYPHS: &[char] = &['•', '-', '*'];

/// Build the candidate's skill set from resume text.
///
/// Union of three passes, deduplicated case-insensitively:
/// 1. the skills section (table rows or delimited free text),
/// 2. a vocabulary scan of the whole document,
/// 3. a vocabulary scan of every bullet-point line.
pub fn extract_skills(text: &str, vocabulary: &Vocabulary) -> SkillSet {
    let mut skills = SkillSet::new();

    if let Some(section) = find_section(text, SKILLS_HEADERS) {
        skills.extend(section_skills(&section));
    }
    let from_section = skills.len();

    skills.extend(vocabulary.scan(text));

    for line in bullet_lines(text) {
        skills.extend(vocabulary.scan(line));
    }

    tracing::debug!(
        "Extracted {} skills ({} from skills section)",
        skills.len(),
        from_section
    );

    skills
}

/// Skills listed inside a skills section body.
///
/// A body containing `|` is read as a table: the second non-empty cell of
/// each row, cut at the first colon. Anything else is read line by line as
/// delimited free text.
pub fn section_skills(section: &str) -> Vec<String> {
    if section.contains('|') {
        table_skills(section)
    } else {
        free_text_skills(section)
    }
}

fn table_skills(section: &str) -> Vec<String> {
    section
        .lines()
        .filter(|line| line.contains('|'))
        .filter_map(|row| {
            let cells: Vec<&str> = row
                .split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .collect();
            if cells.len() < 2 {
                return None;
            }
            let skill = cells[1].split(':').next().unwrap_or_default().trim();
            (!skill.is_empty()).then(|| skill.to_string())
        })
        .collect()
}

fn free_text_skills(section: &str) -> Vec<String> {
    section
        .lines()
        .flat_map(|line| {
            let cleaned = normalize_skill_line(line);
            SKILL_DELIMITER
                .split(&cleaned)
                .map(str::trim)
                .filter(|skill| !skill.is_empty() && !FILLER_WORD.is_match(skill))
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Lines that open with a bullet glyph (`•`, `-` or `*`), leading indentation ignored.
pub fn bullet_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with(BULLET_GLYPHS))
        .collect()
}

/// Strip the bullet glyph and surrounding whitespace from a bullet line
pub fn strip_bullet(line: &str) -> &str {
    line.trim_start()
        .trim_start_matches(BULLET_GLYPHS)
        .trim()
}
