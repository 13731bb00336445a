use once_cell::sync::Lazy;
use regex::Regex;

static DOCUMENT_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(resume|curriculum vitae|cv)$").unwrap());
static NAME_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+$").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());
static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[- ]?)?\(?\d{3}\)?[- ]?\d{3}[- ]?\d{4}\b").unwrap()
});

/// Names longer than this many words are not treated as a name line
const MAX_NAME_WORDS: usize = 4;

/// Contact details pulled from the top of a resume
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Extract name, email and phone; absent fields are empty strings.
pub fn extract_contact(text: &str) -> ContactInfo {
    ContactInfo {
        name: extract_name(text),
        email: first_match(&EMAIL, text),
        phone: first_match(&PHONE, text),
    }
}

/// First non-title line made of at most four capitalised words, falling back
/// to the first non-empty line.
pub fn extract_name(text: &str) -> String {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    lines
        .iter()
        .filter(|line| !DOCUMENT_TITLE.is_match(line))
        .find(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            words.len() <= MAX_NAME_WORDS && words.iter().all(|w| NAME_WORD.is_match(w))
        })
        .or_else(|| lines.first())
        .map(|line| line.to_string())
        .unwrap_or_default()
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
