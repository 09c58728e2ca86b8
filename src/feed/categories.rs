use serde::Serialize;

use crate::models::category::{Category, TranslatedCategory};

// Uppercased names a section category may carry, per language.
const NEWS_NAMES: &[(&str, &[&str])] = &[
    ("en", &["NEWS"]),
    ("fr", &["NOUVELLES", "ACTUALITÉS", "ACTUALITES"]),
    ("nl", &["NIEUWS"]),
];

const PRESS_RELEASE_NAMES: &[(&str, &[&str])] = &[
    ("en", &["PRESS RELEASES", "PRESS RELEASE"]),
    ("fr", &["COMMUNIQUÉS DE PRESSE", "COMMUNIQUES DE PRESSE"]),
    ("nl", &["PERSBERICHTEN"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    News,
    PressReleases,
}

impl SectionKind {
    fn names(self) -> &'static [(&'static str, &'static [&'static str])] {
        match self {
            SectionKind::News => NEWS_NAMES,
            SectionKind::PressReleases => PRESS_RELEASE_NAMES,
        }
    }

    /// True when `name` is one of this section's names in any language.
    pub fn matches(self, name: &str) -> bool {
        let upper = name.trim().to_uppercase();
        self.names()
            .iter()
            .flat_map(|(_, names)| names.iter())
            .any(|candidate| *candidate == upper)
    }

    /// Anchor the section heading is rendered under.
    pub fn anchor_id(self) -> &'static str {
        match self {
            SectionKind::News => "heading-news",
            SectionKind::PressReleases => "heading-press-releases",
        }
    }
}

pub fn featured_categories<'a>(catalog: &'a [Category], locale: &str) -> Vec<&'a Category> {
    catalog
        .iter()
        .filter(|c| c.is_featured && c.is_active_in(locale))
        .collect()
}

/// First category, in catalog order, named like `kind` in any of its
/// translations and with public stories in `locale`.
pub fn find_section_category<'a>(
    catalog: &'a [Category],
    kind: SectionKind,
    locale: &str,
) -> Option<&'a Category> {
    catalog.iter().find(|category| {
        category.i18n.values().any(|t| kind.matches(&t.name)) && category.is_active_in(locale)
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedCategories {
    pub featured: Vec<Category>,
    pub news: Option<Category>,
    pub press_releases: Option<Category>,
}

impl ResolvedCategories {
    pub fn resolve(catalog: &[Category], locale: &str) -> Self {
        ResolvedCategories {
            featured: featured_categories(catalog, locale).into_iter().cloned().collect(),
            news: find_section_category(catalog, SectionKind::News, locale).cloned(),
            press_releases: find_section_category(catalog, SectionKind::PressReleases, locale).cloned(),
        }
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Category> {
        match kind {
            SectionKind::News => self.news.as_ref(),
            SectionKind::PressReleases => self.press_releases.as_ref(),
        }
    }

    /// Translated view for the front end, used for headings and layout links.
    pub fn translated(&self, locale: &str) -> CategoriesView {
        CategoriesView {
            featured: self.featured.iter().filter_map(|c| c.translated(locale)).collect(),
            news: self.news.as_ref().and_then(|c| c.translated(locale)),
            press_releases: self.press_releases.as_ref().and_then(|c| c.translated(locale)),
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoriesView {
    pub featured: Vec<TranslatedCategory>,
    pub news: Option<TranslatedCategory>,
    pub press_releases: Option<TranslatedCategory>,
}
