use crate::models::Language;

/// True when `text` contains at least one character from the Arabic block
/// (U+0600..=U+06FF).
pub fn is_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

pub fn detect_language(text: &str) -> Language {
    if is_arabic(text) {
        Language::Arabic
    } else {
        Language::English
    }
}
