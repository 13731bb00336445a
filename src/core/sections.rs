/// Header synonyms that open the education section
pub const EDUCATION_HEADERS: &[&str] = &["EDUCATION", "ACADEMIC BACKGROUND", "QUALIFICATIONS"];

/// Header synonyms that open the work-experience section
pub const EXPERIENCE_HEADERS: &[&str] = &[
    "WORK EXPERIENCE",
    "EXPERIENCE",
    "EMPLOYMENT HISTORY",
    "PROFESSIONAL EXPERIENCE",
];

/// Header synonyms that open the skills section
pub const SKILLS_HEADERS: &[&str] = &[
    "SKILLS",
    "TECHNICAL SKILLS",
    "TECHNOLOGIES",
    "COMPETENCIES",
    "EXPERTISE",
];

/// Header synonyms that open the projects section
pub const PROJECT_HEADERS: &[&str] = &["PROJECTS", "PERSONAL PROJECTS", "PORTFOLIO"];

/// A line opening with this many uppercase letters is taken as the next header
const NEXT_HEADER_CAPS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SegmentState {
    SeekingHeader,
    InSection,
}

/// Locate the first section introduced by any of `headers` and return its body.
///
/// The header match is case-insensitive and may sit anywhere in a line; the
/// rest of that line (minus `:`/`*` decoration) is the first body line. Blank
/// lines straight after the header are skipped. The body then ends at the
/// first blank line, at the next line opening with three or more uppercase
/// letters, or at the end of the text.
///
/// Returns `None` when no header synonym occurs in the text.
pub fn find_section(text: &str, headers: &[&str]) -> Option<String> {
    let needles: Vec<String> = headers.iter().map(|h| h.to_ascii_lowercase()).collect();

    let mut state = SegmentState::SeekingHeader;
    let mut body: Vec<&str> = Vec::new();
    let mut found = false;

    for line in text.lines() {
        match state {
            SegmentState::SeekingHeader => {
                if found {
                    break;
                }
                let Some(header_end) = header_end_in_line(line, &needles) else {
                    continue;
                };
                found = true;
                state = SegmentState::InSection;

                let rest = line[header_end..]
                    .trim_start_matches(|c: char| c == ':' || c == '*' || c.is_whitespace())
                    .trim_end();
                if !rest.is_empty() {
                    body.push(rest);
                }
            }
            SegmentState::InSection => {
                if line.trim().is_empty() {
                    if body.is_empty() {
                        continue;
                    }
                    state = SegmentState::SeekingHeader;
                } else if !body.is_empty() && opens_with_caps(line) {
                    state = SegmentState::SeekingHeader;
                } else {
                    body.push(line);
                }
            }
        }
    }

    if !found {
        return None;
    }

    tracing::trace!("Section {:?} captured {} line(s)", headers.first(), body.len());
    Some(body.join("\n"))
}

/// Byte offset just past the leftmost header synonym in `line`, if any.
/// Earlier synonyms win ties.
fn header_end_in_line(line: &str, needles: &[String]) -> Option<usize> {
    let haystack = line.to_ascii_lowercase();
    needles
        .iter()
        .filter_map(|needle| haystack.find(needle.as_str()).map(|start| (start, start + needle.len())))
        .min_by_key(|(start, _)| *start)
        .map(|(_, end)| end)
}

fn opens_with_caps(line: &str) -> bool {
    line.chars().take_while(|c| c.is_ascii_uppercase()).count() >= NEXT_HEADER_CAPS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_ends_at_blank_line() {
        let text = "Jane Doe\nEDUCATION\nB.Tech Computer Science\nState University\n\nSomething else";
        assert_eq!(
            find_section(text, EDUCATION_HEADERS).as_deref(),
            Some("B.Tech Computer Science\nState University")
        );
    }

    #[test]
    fn test_section_ends_at_next_caps_header() {
        let text = "Skills\nPython, Rust\nDocker\nEXPERIENCE\nAcme Corp";
        assert_eq!(
            find_section(text, SKILLS_HEADERS).as_deref(),
            Some("Python, Rust\nDocker")
        );
    }

    #[test]
    fn test_first_body_line_may_be_caps() {
        let text = "Experience:\nACME CORP\nBackend Intern\n\nEDUCATION";
        assert_eq!(
            find_section(text, EXPERIENCE_HEADERS).as_deref(),
            Some("ACME CORP\nBackend Intern")
        );
    }

    #[test]
    fn test_header_line_remainder_is_body() {
        let text = "Technical Skills: Java, Go\nPostgreSQL";
        assert_eq!(
            find_section(text, SKILLS_HEADERS).as_deref(),
            Some("Java, Go\nPostgreSQL")
        );
    }

    #[test]
    fn test_blank_lines_after_header_skipped() {
        let text = "PROJECTS\n\n\nChat App\nRealtime chat";
        assert_eq!(
            find_section(text, PROJECT_HEADERS).as_deref(),
            Some("Chat App\nRealtime chat")
        );
    }

    #[test]
    fn test_leftmost_synonym_wins() {
        let text = "WORK EXPERIENCE\nGlobex\nIntern";
        assert_eq!(
            find_section(text, EXPERIENCE_HEADERS).as_deref(),
            Some("Globex\nIntern")
        );
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(find_section("just some words\nmore words", EDUCATION_HEADERS), None);
    }

    #[test]
    fn test_header_without_body() {
        assert_eq!(find_section("Jane\nEDUCATION", EDUCATION_HEADERS).as_deref(), Some(""));
    }
}
