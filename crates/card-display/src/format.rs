//! Display string helpers.

/// Pluralize a word with its count, e.g. "1 Color" / "2 Colors".
///
/// Simple suffix pluralization, not locale-aware. A count of zero takes
/// the plural form.
pub fn pluralize(word: &str, count: u32) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

/// Label for a card's colorway count.
pub fn color_count_label(count: u32) -> String {
    pluralize("Color", count)
}
