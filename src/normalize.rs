use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

const KEY_PREFIX: &str = "paraiba-";

// Deleted from names before the alphanumeric filter.
const SEPARATORS: [char; 5] = [' ', '-', '/', '\\', '\''];

/// Collapse a display name into a key fragment: lowercase, accents stripped
/// via canonical decomposition, separators and anything else non-alphanumeric
/// dropped.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !SEPARATORS.contains(c))
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

pub fn key(name: &str) -> String {
    format!("{KEY_PREFIX}{}", normalize(name))
}
