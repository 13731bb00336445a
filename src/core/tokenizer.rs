/// Stems shorter than this many characters carry no matching signal
const MIN_STEM_CHARS: usize = 3;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("logi", "log"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Split text into lower-cased word tokens.
///
/// Anything that is not alphanumeric or an underscore separates words, so
/// `node.js` yields `node` and `js`.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_lowercase())
        .collect()
}

/// Tokenize, stem every token, and drop stems of two characters or fewer.
pub fn tokenize_and_stem(text: &str) -> Vec<String> {
    tokenize(text)
        .iter()
        .map(|token| stem(token))
        .filter(|stem| stem.chars().count() >= MIN_STEM_CHARS)
        .collect()
}

/// Reduce a word to its stem.
///
/// Porter suffix stripping applied until the word stops changing, which makes
/// the result idempotent: `stem(stem(w)) == stem(w)`.
pub fn stem(word: &str) -> String {
    let mut current = word.to_lowercase();
    // Each pass either shortens the word or rewrites a terminal y/i, so this settles.
    loop {
        let next = porter_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn porter_pass(word: &str) -> String {
    if word.len() <= 2
        || !word
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    {
        return word.to_string();
    }

    let mut porter = Porter {
        b: word.as_bytes().to_vec(),
        j: 0,
    };
    porter.step1ab();
    if porter.b.len() > 1 {
        porter.step1c();
        porter.step2();
        porter.step3();
        porter.step4();
        porter.step5();
    }

    // Only ASCII bytes ever enter or leave the buffer
    String::from_utf8(porter.b).unwrap_or_else(|_| word.to_string())
}

/// Working buffer for one Porter pass. `j` marks the end of the stem that
/// precedes the suffix most recently matched by `ends`.
struct Porter {
    b: Vec<u8>,
    j: isize,
}

impl Porter {
    fn k(&self) -> isize {
        self.b.len() as isize - 1
    }

    fn is_consonant(&self, i: isize) -> bool {
        match self.b[i as usize] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `b[0..=j]`
    fn measure(&self) -> usize {
        let j = self.j;
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > j {
                return n;
            }
            if !self.is_consonant(i) {
                break;
            }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > j {
                    return n;
                }
                if self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > j {
                    return n;
                }
                if !self.is_consonant(i) {
                    break;
                }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..=self.j).any(|i| !self.is_consonant(i))
    }

    fn double_consonant(&self, i: isize) -> bool {
        i >= 1 && self.b[i as usize] == self.b[(i - 1) as usize] && self.is_consonant(i)
    }

    /// consonant-vowel-consonant ending at `i`, where the last consonant is not w, x or y
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.is_consonant(i) || self.is_consonant(i - 1) || !self.is_consonant(i - 2) {
            return false;
        }
        !matches!(self.b[i as usize], b'w' | b'x' | b'y')
    }

    fn ends(&mut self, suffix: &str) -> bool {
        if !self.b.ends_with(suffix.as_bytes()) {
            return false;
        }
        self.j = self.k() - suffix.len() as isize;
        true
    }

    fn set_to(&mut self, replacement: &str) {
        self.b.truncate((self.j + 1) as usize);
        self.b.extend_from_slice(replacement.as_bytes());
    }

    fn apply_first(&mut self, rules: &[(&str, &str)]) {
        for (suffix, replacement) in rules {
            if self.ends(suffix) {
                if self.measure() > 0 {
                    self.set_to(replacement);
                }
                return;
            }
        }
    }

    /// Plurals and -ed / -ing
    fn step1ab(&mut self) {
        if self.b.last() == Some(&b's') {
            if self.ends("sses") {
                self.b.truncate(self.b.len() - 2);
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.b.len() >= 2 && self.b[self.b.len() - 2] != b's' {
                self.b.pop();
            }
        }

        if self.ends("eed") {
            if self.measure() > 0 {
                self.b.pop();
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.b.truncate((self.j + 1) as usize);
            self.j = self.k();
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_consonant(self.k()) {
                if !matches!(self.b.last(), Some(b'l' | b's' | b'z')) {
                    self.b.pop();
                }
            } else if self.measure() == 1 && self.cvc(self.k()) {
                self.set_to("e");
            }
        }
    }

    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            if let Some(last) = self.b.last_mut() {
                *last = b'i';
            }
        }
    }

    fn step2(&mut self) {
        self.apply_first(STEP2_RULES);
    }

    fn step3(&mut self) {
        self.apply_first(STEP3_RULES);
    }

    fn step4(&mut self) {
        for suffix in STEP4_SUFFIXES {
            if self.ends(suffix) {
                if *suffix == "ion"
                    && !(self.j >= 0 && matches!(self.b[self.j as usize], b's' | b't'))
                {
                    return;
                }
                if self.measure() > 1 {
                    self.b.truncate((self.j + 1) as usize);
                }
                return;
            }
        }
    }

    fn step5(&mut self) {
        self.j = self.k();
        if self.b.last() == Some(&b'e') {
            let m = self.measure();
            if m > 1 || (m == 1 && !self.cvc(self.k() - 1)) {
                self.b.pop();
            }
        }
        if self.b.last() == Some(&b'l') {
            self.j = self.k();
            if self.double_consonant(self.k()) && self.measure() > 1 {
                self.b.pop();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        assert_eq!(
            tokenize("Node.js, React/Redux and C#"),
            vec!["node", "js", "react", "redux", "and", "c"]
        );
    }

    #[test]
    fn test_tokenize_keeps_underscores() {
        assert_eq!(tokenize("snake_case words"), vec!["snake_case", "words"]);
    }

    #[test]
    fn test_stem_common_suffixes() {
        assert_eq!(stem("developing"), "develop");
        assert_eq!(stem("developed"), "develop");
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("hopping"), "hop");
        assert_eq!(stem("internship"), "internship");
    }

    #[test]
    fn test_stem_is_idempotent() {
        let words = [
            "developing", "agreed", "generalization", "happiness", "databases", "engineering",
            "analytics", "relational", "controller", "running", "abilities", "sensational",
        ];
        for word in words {
            let once = stem(word);
            assert_eq!(stem(&once), once, "stem not idempotent for {}", word);
        }
    }

    #[test]
    fn test_stem_leaves_short_and_non_ascii_words() {
        assert_eq!(stem("go"), "go");
        assert_eq!(stem("café"), "café");
    }

    #[test]
    fn test_tokenize_and_stem_drops_short_stems() {
        let stems = tokenize_and_stem("Intern python react node.js internship for python and react");
        assert_eq!(
            stems,
            vec!["intern", "python", "react", "node", "internship", "for", "python", "and", "react"]
        );
    }

    #[test]
    fn test_tokenize_and_stem_empty() {
        assert!(tokenize_and_stem("").is_empty());
        assert!(tokenize_and_stem("a b c -- !!").is_empty());
    }
}
