//! URL/file-name slugs.

/// Transliterate `text` to lowercase ASCII and join its words with
/// `separator`. Apostrophes split words, so "Don't panic" becomes
/// `don-t-panic`.
pub fn slugify(text: &str, separator: char) -> String {
    let slug = ::slug::slugify(text);
    if separator == '-' {
        slug
    } else {
        slug.replace('-', &separator.to_string())
    }
}
