use once_cell::sync::Lazy;
use regex::Regex;

/// Words stripped from generated titles and flagged on conversion pages.
pub const ABSTRACT_WORDS: [&str; 6] = [
    "framework",
    "methodology",
    "approach",
    "strategy",
    "paradigm",
    "philosophy",
];

pub static ABSTRACT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:framework|methodology|approach|strategy|paradigm|philosophy)\b",
    )
    .expect("abstract regex")
});

pub static ACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:get|hire|book|start|grow|boost|improve|increase|call|request|services?|agency|consult(?:ing|ants?)?|experts?|help|near me)\b",
    )
    .expect("action regex")
});

pub static LEARNING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:learn(?:ing)?|guides?|how|what|why|understand(?:ing)?|explain(?:s|ed)?|insights?|lessons?|case stud(?:y|ies)|research|tutorials?|introduction|overview|examples?|checklist)\b",
    )
    .expect("learning regex")
});

pub static COMMERCIAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:buy(?: now)?|hire us|book (?:a call|now|today)|call (?:now|us|today)|pricing|get a quote|free quote|get started|contact us|free consultation|sign up|order now|discount)\b",
    )
    .expect("commercial regex")
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+([:,])").expect("punctuation regex"));

/// Collapse whitespace runs, drop spaces before `:`/`,` and trim dangling separators.
pub fn normalize_whitespace(text: &str) -> String {
    let collapsed = WHITESPACE_RE.replace_all(text, " ");
    let tightened = SPACE_BEFORE_PUNCT_RE.replace_all(&collapsed, "$1");
    tightened
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | ',' | '|' | '-'))
        .to_string()
}

/// Remove every abstract word, then normalize whitespace.
pub fn strip_abstract_words(text: &str) -> String {
    normalize_whitespace(&ABSTRACT_RE.replace_all(text, ""))
}

/// First match of `re` in `text`, lowercased.
pub fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().to_lowercase())
}
