use once_cell::sync::Lazy;
use regex::Regex;

static PARENTHESIZED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").unwrap());
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").unwrap());
static BRACED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{[^}]*\}").unwrap());
static DASH_QUALIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*[-–].*$").unwrap());
static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+%\s*").unwrap());
static YEARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\d+\+?\s*years?").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Clean one line of a skills section before it is split into skills.
///
/// Lower-cases, then strips parenthesised/bracketed/braced asides, everything
/// from the first hyphen or en-dash onwards, percentages and "N+ years"
/// qualifiers. Each removal is a no-op when its pattern is absent.
pub fn normalize_skill_line(line: &str) -> String {
    let lowered = line.to_lowercase();
    let cleaned = PARENTHESIZED.replace_all(&lowered, "");
    let cleaned = BRACKETED.replace_all(&cleaned, "");
    let cleaned = BRACED.replace_all(&cleaned, "");
    let cleaned = DASH_QUALIFIER.replace(&cleaned, "");
    let cleaned = PERCENTAGE.replace_all(&cleaned, "");
    let cleaned = YEARS.replace_all(&cleaned, "");
    cleaned.into_owned()
}

/// Collapse whitespace runs into single spaces and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}
