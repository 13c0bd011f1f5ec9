//! Keyword-based intent matching.
//!
//! The table is an ordered list of `(intent, keywords)` pairs. Matching walks
//! it in order and returns the first intent with any keyword occurring as a
//! plain substring of the normalized message, so declaration order is the
//! only tie-break. Keywords are not word-boundary aware: "map" matches
//! inside "mapping".

use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::Intent;
use crate::services::normalize::normalize;

const DEFAULT_TABLE: &[(Intent, &[&str])] = &[
    (
        Intent::Timings,
        &[
            "timing", "open", "hours", "working", "ساعات", "وقت", "متى", "تفتح", "الدوام",
        ],
    ),
    (
        Intent::Location,
        &[
            "location",
            "where",
            "address",
            "map",
            "reach",
            "directions",
            "come",
            "get to",
            "how to reach",
            "how can i come",
            "where is the clinic",
            "pin",
            "google maps",
            "gps",
            "send location",
            "nearby",
            "الموقع",
            "عنوان",
            "وين",
            "فين",
            "مكان",
            "وينك",
            "وين العيادة",
            "كيف أجيكم",
            "كيف أوصل",
            "وين تكونون",
            "ارسلي اللوكيشن",
            "الخريطة",
            "قوقل",
            "ألقاكم",
        ],
    ),
    (
        Intent::Price,
        &[
            "price", "cost", "consultation", "how much", "فلوس", "بكم", "السعر", "تكلفة", "استشارة",
        ],
    ),
    (
        Intent::Booking,
        &["book", "appointment", "reserve", "احجز", "موعد", "ميعاد", "حجز", "أحجز"],
    ),
];

#[derive(Debug, Deserialize)]
struct KeywordEntry {
    intent: Intent,
    keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordTable {
    entries: Vec<(Intent, Vec<String>)>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        let entries = DEFAULT_TABLE
            .iter()
            .map(|(intent, keywords)| (*intent, keywords.iter().map(|k| normalize(k)).collect()))
            .collect();
        Self { entries }
    }
}

impl KeywordTable {
    /// Build a table from raw keywords, normalizing each one.
    pub fn new(entries: Vec<(Intent, Vec<String>)>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        let mut table = Vec::with_capacity(entries.len());

        for (intent, keywords) in entries {
            if !seen.insert(intent) {
                return Err(AppError::Config(format!(
                    "intent '{}' listed more than once",
                    intent.as_str()
                )));
            }

            let mut normalized = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                let keyword = normalize(keyword.trim());
                if keyword.is_empty() {
                    return Err(AppError::Config(format!(
                        "empty keyword for intent '{}'",
                        intent.as_str()
                    )));
                }
                normalized.push(keyword);
            }
            table.push((intent, normalized));
        }

        Ok(Self { entries: table })
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, AppError> {
        let entries: Vec<KeywordEntry> =
            serde_yaml::from_str(yaml).map_err(|e| AppError::Config(e.to_string()))?;
        Self::new(entries.into_iter().map(|e| (e.intent, e.keywords)).collect())
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read keyword table: {}", path.display()))?;
        Self::from_yaml_str(&yaml)
            .with_context(|| format!("invalid keyword table: {}", path.display()))
    }

    /// Match already-normalized text. `None` means the fallback path.
    pub fn match_intent(&self, normalized: &str) -> Option<Intent> {
        self.entries
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| normalized.contains(k.as_str())))
            .map(|(intent, _)| *intent)
    }

    pub fn intents(&self) -> impl Iterator<Item = Intent> + '_ {
        self.entries.iter().map(|(intent, _)| *intent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(text: &str) -> Option<Intent> {
        KeywordTable::default().match_intent(&normalize(text))
    }

    #[test]
    fn test_default_order() {
        let table = KeywordTable::default();
        let order: Vec<Intent> = table.intents().collect();
        assert_eq!(
            order,
            vec![Intent::Timings, Intent::Location, Intent::Price, Intent::Booking]
        );
    }

    #[test]
    fn test_each_intent_matches() {
        assert_eq!(matches("What are your timings?"), Some(Intent::Timings));
        assert_eq!(matches("وين العيادة"), Some(Intent::Location));
        assert_eq!(matches("How much is a cleaning?"), Some(Intent::Price));
        assert_eq!(matches("I need an appointment"), Some(Intent::Booking));
    }

    #[test]
    fn test_first_declared_wins() {
        assert_eq!(matches("where and what price"), Some(Intent::Location));
        assert_eq!(matches("are you open for booking"), Some(Intent::Timings));
    }

    #[test]
    fn test_substring_without_word_boundary() {
        // "map" inside "mapping", "come" inside "welcome"
        assert_eq!(matches("mapping"), Some(Intent::Location));
        assert_eq!(matches("welcome"), Some(Intent::Location));
    }

    #[test]
    fn test_case_and_diacritics_insensitive() {
        assert_eq!(matches("OPENING HOURS"), Some(Intent::Timings));
        assert_eq!(matches("أريد مَوْعِدًا"), Some(Intent::Booking));
    }

    #[test]
    fn test_hamza_keyword_matches_after_decomposition() {
        assert_eq!(matches("ألقاكم"), Some(Intent::Location));
        assert_eq!(matches("كيف أوصل"), Some(Intent::Location));
    }

    #[test]
    fn test_no_match() {
        assert_eq!(matches("tell me a joke"), None);
        assert_eq!(matches(""), None);
    }

    #[test]
    fn test_yaml_order_is_match_order() {
        let yaml = r#"
- intent: price
  keywords: ["where"]
- intent: location
  keywords: ["where"]
"#;
        let table = KeywordTable::from_yaml_str(yaml).unwrap();
        assert_eq!(table.match_intent("where"), Some(Intent::Price));
        assert_eq!(table.match_intent("open"), None);
    }

    #[test]
    fn test_yaml_rejects_duplicate_intent() {
        let yaml = r#"
- intent: price
  keywords: ["cost"]
- intent: price
  keywords: ["price"]
"#;
        assert!(matches!(
            KeywordTable::from_yaml_str(yaml),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_yaml_rejects_unknown_intent_and_empty_keyword() {
        let unknown = "- intent: weather\n  keywords: [\"rain\"]\n";
        assert!(KeywordTable::from_yaml_str(unknown).is_err());

        let empty = "- intent: price\n  keywords: [\"  \"]\n";
        assert!(KeywordTable::from_yaml_str(empty).is_err());
    }

    #[test]
    fn test_shipped_yaml_matches_builtin_table() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/keywords.yaml");
        let table = KeywordTable::from_yaml_file(path).unwrap();
        assert_eq!(table, KeywordTable::default());
    }
}
