use unicode_normalization::UnicodeNormalization;

/// Canonical matching form: NFKD-decomposed, Arabic harakat (U+064B..=U+0652)
/// removed, lowercased. Never shown to users.
pub fn normalize(text: &str) -> String {
    let stripped: String = text
        .nfkd()
        .filter(|c| !('\u{064B}'..='\u{0652}').contains(c))
        .collect();
    stripped.to_lowercase()
}
