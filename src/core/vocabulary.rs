use regex::{Regex, RegexBuilder};

/// Curated technical terms matched against resume text, in match priority order.
pub const DEFAULT_TERMS: &[&str] = &[
    // Programming languages
    "javascript", "python", "java", "c++", "c#", "php", "ruby", "go", "swift",
    "kotlin", "typescript", "rust", "scala", "perl", "r", "dart",
    // Web technologies
    "html", "css", "sass", "less", "react", "angular", "vue", "next.js", "nuxt.js",
    "node.js", "express.js", "django", "flask", "spring", "laravel", "rails",
    "asp.net", "jquery", "redux", "graphql", "rest api", "webpack", "babel",
    // Databases
    "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "firebase",
    "dynamodb", "cassandra", "neo4j",
    // DevOps & cloud
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
    "ci/cd", "github actions", "gitlab ci", "nginx", "apache",
    // Data science
    "machine learning", "ai", "data science", "big data", "hadoop", "spark",
    "tensorflow", "pytorch", "keras", "pandas", "numpy", "scikit-learn",
    // Mobile
    "android", "ios", "react native", "flutter", "xamarin",
    // Other
    "git", "linux", "bash", "shell scripting", "agile", "scrum",
];

/// Ordered set of technical terms with a compiled word-boundary matcher.
///
/// Terms are literals; earlier terms win when two could match at the same
/// position. Matching is case-insensitive and results are lower-cased.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    terms: Vec<String>,
    matcher: Option<Regex>,
}

impl Vocabulary {
    /// Build a vocabulary from literal terms. Duplicates and blanks are dropped.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !unique.contains(&term) {
                unique.push(term);
            }
        }

        let matcher = compile_matcher(&unique, MATCHER_SIZE_LIMIT);

        Self {
            terms: unique,
            matcher,
        }
    }

    /// Default terms followed by `extra` terms
    pub fn with_extra_terms<S: AsRef<str>>(extra: &[S]) -> Self {
        Self::new(
            DEFAULT_TERMS
                .iter()
                .map(|t| t.to_string())
                .chain(extra.iter().map(|t| t.as_ref().to_string())),
        )
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Every vocabulary match in `text`, lower-cased, in order of appearance.
    /// Repeated mentions are returned repeatedly.
    pub fn scan(&self, text: &str) -> Vec<String> {
        let Some(matcher) = &self.matcher else {
            return Vec::new();
        };
        let lowered = text.to_lowercase();
        matcher
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Compiled size allowed for the term alternation
const MATCHER_SIZE_LIMIT: usize = 10 * (1 << 20);

/// One case-insensitive word-boundary alternation over `terms`.
///
/// `None` for an empty list or when the pattern cannot be compiled within
/// `size_limit`; the latter is logged, and the vocabulary scan then finds
/// nothing.
fn compile_matcher(terms: &[String], size_limit: usize) -> Option<Regex> {
    if terms.is_empty() {
        return None;
    }

    let alternation = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
        .case_insensitive(true)
        .size_limit(size_limit)
        .build()
    {
        Ok(matcher) => Some(matcher),
        Err(e) => {
            tracing::warn!(
                "Vocabulary of {} terms could not be compiled, skill scan disabled: {}",
                terms.len(),
                e
            );
            None
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_terms_on_word_boundaries() {
        let vocab = Vocabulary::default();
        let found = vocab.scan("Built APIs with Python, Django and PostgreSQL on AWS.");
        assert_eq!(found, vec!["python", "django", "postgresql", "aws"]);
    }

    #[test]
    fn test_scan_ignores_partial_words() {
        let vocab = Vocabulary::default();
        assert!(vocab.scan("Googled a gopher").is_empty());
    }

    #[test]
    fn test_scan_dotted_and_multiword_terms() {
        let vocab = Vocabulary::default();
        let found = vocab.scan("Node.js services, machine learning, CI/CD pipelines");
        assert_eq!(found, vec!["node.js", "machine learning", "ci/cd"]);
    }

    #[test]
    fn test_extra_terms_and_dedup() {
        let vocab = Vocabulary::with_extra_terms(&["Svelte", "python", "  "]);
        assert_eq!(vocab.len(), DEFAULT_TERMS.len() + 1);
        assert_eq!(vocab.scan("svelte and SVELTE"), vec!["svelte", "svelte"]);
    }

    #[test]
    fn test_oversized_matcher_is_rejected() {
        let terms: Vec<String> = DEFAULT_TERMS.iter().map(|t| t.to_string()).collect();
        assert!(compile_matcher(&terms, 64).is_none());
        assert!(compile_matcher(&terms, MATCHER_SIZE_LIMIT).is_some());
    }

    #[test]
    fn test_empty_vocabulary_matches_nothing() {
        let vocab = Vocabulary::new(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert!(vocab.scan("python").is_empty());
    }
}
