use serde::Serialize;

use crate::utils::locale;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterItem {
    pub href: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'static str>,
}

struct FilterLabels {
    news: &'static str,
    press_releases: &'static str,
    media_library: &'static str,
    contacts: &'static str,
}

const LABELS: &[(&str, FilterLabels)] = &[
    (
        "nl",
        FilterLabels {
            news: "Nieuws",
            press_releases: "Persberichten",
            media_library: "Beeldbank",
            contacts: "Contacteer ons",
        },
    ),
    (
        "fr",
        FilterLabels {
            news: "Actualités",
            press_releases: "Communiqués de presse",
            media_library: "Media Library",
            contacts: "Contactez-nous",
        },
    ),
    (
        "en",
        FilterLabels {
            news: "News",
            press_releases: "Press Releases",
            media_library: "Media Library",
            contacts: "Contact us",
        },
    ),
];

// Slugs of the section categories in the current locale, when they exist
#[derive(Debug, Clone, Default)]
pub struct SectionSlugs<'a> {
    pub news: Option<&'a str>,
    pub press_releases: Option<&'a str>,
}

/// Content hub filter bar. On the home page sections are reached through
/// anchors; elsewhere through their category pages.
pub fn hub_filters(locale_code: &str, default_locale: &str, path: &str, slugs: &SectionSlugs<'_>) -> Vec<FilterItem> {
    let Some(labels) = locale::pick(LABELS, locale_code, default_locale) else {
        return Vec::new();
    };
    let is_root_page = !path.contains("/category/");

    let section_href = |slug: Option<&str>, anchor: &str| match slug {
        Some(slug) if !is_root_page => format!("/{locale_code}/category/{slug}"),
        _ => format!("#{anchor}"),
    };

    vec![
        FilterItem {
            href: section_href(slugs.news, "heading-news"),
            title: labels.news.to_string(),
            id: None,
        },
        FilterItem {
            href: section_href(slugs.press_releases, "heading-press-releases"),
            title: labels.press_releases.to_string(),
            id: None,
        },
        FilterItem {
            href: "#heading-media-library".to_string(),
            title: labels.media_library.to_string(),
            id: Some("beeldbankAnchorlink"),
        },
        FilterItem {
            href: "#heading-contacts".to_string(),
            title: labels.contacts.to_string(),
            id: Some("title_contactslink"),
        },
    ]
}
