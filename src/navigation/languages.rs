use serde::Serialize;

use crate::models::newsroom::LanguageSettings;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LanguageOption {
    pub code: String,
    pub title: String,
    pub href: String,
    pub selected: bool,
}

/// Language switcher entries, sorted by title. Languages without public
/// stories are left out unless they are the default one.
pub fn language_options(languages: &[LanguageSettings], selected: &str) -> Vec<LanguageOption> {
    let mut options: Vec<LanguageOption> = languages
        .iter()
        .filter(|l| l.is_default || l.public_stories_count > 0)
        .map(|l| LanguageOption {
            code: l.code.clone(),
            title: if l.title.trim().is_empty() { l.code.clone() } else { l.title.clone() },
            href: format!("/{}", l.code),
            selected: l.code == selected,
        })
        .collect();

    options.sort_by_cached_key(|o| o.title.to_lowercase());
    options
}
