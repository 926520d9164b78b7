//! String utilities for deriving display names from identifiers.

/// Convert a lowerCamelCase identifier to a display title
/// (e.g., "userProfile" -> "User Profile").
///
/// Every ASCII uppercase letter gets its own preceding space, so runs of
/// capitals are split letter by letter ("ABTest" -> "A B Test").
pub fn to_title_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    capitalize(&spaced).trim().to_string()
}

/// Uppercase the first character of a string (e.g., "bar" -> "Bar")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
