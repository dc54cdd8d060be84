use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

lazy_static::lazy_static! {
    static ref TRADEMARK_MARKS: Regex = Regex::new(r"\s*[™®©]\s*").unwrap();
    static ref DIGIT_RUN: Regex = Regex::new(r"\d+").unwrap();
}

/// Name and publisher data resolved for a numeric application id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationIdentity {
    pub app_id: u32,
    pub display_name: String,
    pub normalized_name: String,
    pub publishers: Vec<String>,
}

impl ApplicationIdentity {
    /// Builds an identity from catalog data. A name that normalizes to
    /// nothing is replaced by the synthesized `AppID {id}` name.
    pub fn new(app_id: u32, display_name: &str, publishers: Vec<String>) -> Self {
        let display_name = clean_display_name(display_name);
        let normalized_name = normalize_name(&display_name);
        if normalized_name.is_empty() {
            return Self {
                publishers,
                ..Self::fallback(app_id)
            };
        }
        Self {
            app_id,
            display_name,
            normalized_name,
            publishers,
        }
    }

    /// Identity used when the catalog lookup fails.
    pub fn fallback(app_id: u32) -> Self {
        let display_name = fallback_name(app_id);
        Self {
            app_id,
            normalized_name: normalize_name(&display_name),
            display_name,
            publishers: Vec::new(),
        }
    }

    /// The name as matched against lowercased paths. The classifier takes
    /// its first word and first number from this same form, so punctuation
    /// such as `baldur's` or `nier:automata` is kept consistently.
    pub fn match_name(&self) -> String {
        self.display_name.to_lowercase()
    }

    pub fn is_fallback(&self) -> bool {
        self.display_name == fallback_name(self.app_id)
    }
}

pub fn fallback_name(app_id: u32) -> String {
    format!("AppID {}", app_id)
}

/// Canonical comparable form of a name: compatibility-decomposed, lowercase,
/// only letters, digits, `_`, whitespace and `-` kept, trimmed.
///
/// Combining marks are dropped by the filter, so diacritics disappear
/// (`"Pokémon"` becomes `"pokemon"`). Idempotent.
pub fn normalize_name(raw: &str) -> String {
    let lowered: String = raw.nfkd().collect::<String>().to_lowercase();
    let kept: String = lowered
        .nfkd()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '_' || *c == '-')
        .collect();
    kept.trim().to_string()
}

/// Removes trademark marks (and the whitespace around them) from catalog names.
/// A mark becomes a word break, so `Portal® 2` reads `Portal 2` rather than
/// `Portal2`.
pub fn clean_display_name(raw: &str) -> String {
    let replaced = TRADEMARK_MARKS.replace_all(raw, " ");
    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn first_word(name: &str) -> Option<&str> {
    name.split_whitespace().next()
}

/// First run of decimal digits in `text`.
pub fn first_digit_run(text: &str) -> Option<&str> {
    DIGIT_RUN.find(text).map(|m| m.as_str())
}
