// Locale codes come as "nl", "nl_BE" or "nl-BE"; tables are keyed by language.

/// Lowercase language part of a locale code.
pub fn language(code: &str) -> String {
    code.split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_lowercase()
}

/// Picks the entry for `code`'s language out of `supported`, falling back to
/// `default_locale`'s language and then to the first entry.
pub fn pick<'a, T>(supported: &'a [(&'a str, T)], code: &str, default_locale: &str) -> Option<&'a T> {
    let find = |lang: &str| supported.iter().find(|(l, _)| *l == lang).map(|(_, v)| v);

    find(&language(code))
        .or_else(|| find(&language(default_locale)))
        .or_else(|| supported.first().map(|(_, v)| v))
}
