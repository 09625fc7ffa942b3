//! Small text helpers for embed values.

/// Replace hyphens with spaces and capitalise the first letter of each word
/// and each letter following an apostrophe.
///
/// Other letters are left untouched, so `The MOTHERLODE!!` survives as-is,
/// `liberation-of-undermine` becomes `Liberation Of Undermine` and
/// `mal'ganis` becomes `Mal'Ganis`.
pub fn title_case(value: &str) -> String {
    value
        .replace('-', " ")
        .split_whitespace()
        .map(|word| {
            word.split('\'')
                .map(capitalize)
                .collect::<Vec<_>>()
                .join("'")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first character, keep the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Uppercase the first character and lowercase the rest (`HORDE` -> `Horde`).
pub fn capitalize_lower(word: &str) -> String {
    capitalize(&word.to_lowercase())
}

/// Format an integer with `,` thousands separators.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Truncate to at most `max_chars` characters, marking the cut with `…`.
pub fn truncate_chars(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}
