//! Shared string helpers for name derivation.

/// Split a string into words on every non-alphanumeric character.
///
/// Empty words (from leading, trailing or repeated separators) are dropped.
pub fn split_words(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
///
/// Only the first character of each word is touched, so input that is
/// already PascalCase comes back unchanged.
pub fn to_pascal_case(s: &str) -> String {
    split_words(s).into_iter().map(capitalize).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}
