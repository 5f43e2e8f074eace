//! Text normalization used by pattern extraction and definition vectors.
//!
//! Stopword and digit stripping, tokenization, compound splitting and a small
//! rule-based English noun lemmatizer.

use regex::Regex;
use std::sync::LazyLock;

/// Words removed from definition fragments before tokenization.
pub const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "etc", "for", "if", "in", "into",
    "is", "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
    "these", "they", "this", "to", "was", "will", "with",
];

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("static regex"));
static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("static regex"));

/// Irregular plural forms and their singular.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("lice", "louse"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("aircraft", "aircraft"),
    ("series", "series"),
    ("species", "species"),
];

/// Plural endings that keep their `s` (singular nouns ending in `s`).
const SINGULAR_S_ENDINGS: &[&str] = &["ss", "us", "is", "ous"];

/// Singular nouns ending in a single `s` whose plural adds `es`.
///
/// Any other `-ses` plural is a `-se` noun ("houses", "cases").
const ES_AFTER_S: &[&str] = &[
    "alias", "atlas", "bonus", "bus", "cactus", "campus", "canvas", "census", "chorus", "circus",
    "corpus", "focus", "fungus", "gas", "genius", "iris", "lens", "nucleus", "octopus", "plus",
    "radius", "status", "stimulus", "syllabus", "virus", "walrus",
];

/// Check whether a word is a stopword (case-insensitive)
#[must_use]
pub fn is_stopword(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOPWORDS.contains(&lower.as_str())
}

/// Remove stopwords and digits, then collapse whitespace.
///
/// Words are split on single spaces and compared case-insensitively; a word
/// carrying punctuation (`"and,"`) is not a stopword at this stage.
#[must_use]
pub fn remove_stopwords_and_digits(input: &str) -> String {
    let kept: Vec<&str> = input.split(' ').filter(|w| !is_stopword(w)).collect();
    let joined = kept.join(" ");
    let without_digits = DIGITS.replace_all(&joined, "");
    MULTI_SPACE
        .replace_all(&without_digits, " ")
        .trim()
        .to_string()
}

/// Split text into lower-cased alphanumeric tokens.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Reduce an English noun to its singular base form.
///
/// Input is expected lower-cased. Words of three letters or fewer are kept
/// as they are.
#[must_use]
pub fn lemmatize(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }
    if word.chars().count() <= 3 || !word.ends_with('s') {
        return word.to_string();
    }
    if SINGULAR_S_ENDINGS
        .iter()
        .chain(ES_AFTER_S)
        .any(|e| word.ends_with(e))
    {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if let Some(stem) = word.strip_suffix("es") {
        if stem.ends_with("ss")
            || stem.ends_with('x')
            || stem.ends_with('z')
            || stem.ends_with("ch")
            || stem.ends_with("sh")
        {
            return stem.to_string();
        }
        if ES_AFTER_S.iter().any(|singular| stem.ends_with(singular)) {
            return stem.to_string();
        }
    }
    word[..word.len() - 1].to_string()
}

/// Tokenize and lemmatize, dropping stopwords.
#[must_use]
pub fn tokenize_and_lemmatize(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_stopword(t))
        .map(|t| lemmatize(&t))
        .collect()
}

/// Normalized lookup form of a term: lower-cased, lemmatized word by word.
#[must_use]
pub fn normalize_term(term: &str) -> String {
    tokenize(term)
        .iter()
        .map(|t| lemmatize(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a compound label into lower-cased parts.
///
/// Handles camelCase, whitespace, `_` and `-`: `"MotorVehicle"` and
/// `"motor_vehicle"` both yield `["motor", "vehicle"]`.
#[must_use]
pub fn split_compound(label: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in label.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            parts.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_numeric();
        current.extend(c.to_lowercase());
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_stopwords_and_digits() {
        assert_eq!(
            remove_stopwords_and_digits(" cars, trucks and the 4 buses"),
            "cars, trucks buses"
        );
        assert_eq!(remove_stopwords_and_digits("The A380 Is"), "A");
    }

    #[test]
    fn test_stopwords_case_insensitive() {
        assert!(is_stopword("The"));
        assert!(is_stopword("SUCH"));
        assert!(!is_stopword("car"));
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(tokenize("cars, trucks; Buses"), vec!["cars", "trucks", "buses"]);
        assert!(tokenize("  ,.; ").is_empty());
    }

    #[test]
    fn test_lemmatize_regular() {
        assert_eq!(lemmatize("cars"), "car");
        assert_eq!(lemmatize("trucks"), "truck");
        assert_eq!(lemmatize("buses"), "bus");
        assert_eq!(lemmatize("boxes"), "box");
        assert_eq!(lemmatize("churches"), "church");
        assert_eq!(lemmatize("cities"), "city");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("gases"), "gas");
        assert_eq!(lemmatize("minibuses"), "minibus");
        assert_eq!(lemmatize("viruses"), "virus");
    }

    #[test]
    fn test_lemmatize_se_nouns() {
        assert_eq!(lemmatize("houses"), "house");
        assert_eq!(lemmatize("courses"), "course");
        assert_eq!(lemmatize("cases"), "case");
        assert_eq!(lemmatize("databases"), "database");
        assert_eq!(lemmatize("horses"), "horse");
    }

    #[test]
    fn test_lemmatize_keeps_singulars() {
        assert_eq!(lemmatize("bus"), "bus");
        assert_eq!(lemmatize("glass"), "glass");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("atlas"), "atlas");
        assert_eq!(lemmatize("lens"), "lens");
        assert_eq!(lemmatize("car"), "car");
    }

    #[test]
    fn test_lemmatize_irregular() {
        assert_eq!(lemmatize("children"), "child");
        assert_eq!(lemmatize("people"), "person");
        assert_eq!(lemmatize("leaves"), "leaf");
    }

    #[test]
    fn test_tokenize_and_lemmatize_drops_stopwords() {
        assert_eq!(
            tokenize_and_lemmatize("cars, trucks and, buses"),
            vec!["car", "truck", "bus"]
        );
    }

    #[test]
    fn test_split_compound() {
        assert_eq!(split_compound("MotorVehicle"), vec!["motor", "vehicle"]);
        assert_eq!(split_compound("motor_vehicle"), vec!["motor", "vehicle"]);
        assert_eq!(split_compound("Car"), vec!["car"]);
        assert_eq!(split_compound("GPSDevice"), vec!["gpsdevice"]);
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("Cars"), "car");
        assert_eq!(normalize_term("Motor Buses"), "motor bus");
    }
}
