pub mod boilerplate;
pub mod footer;
pub mod hub_filters;
pub mod languages;

use serde::Serialize;

use crate::models::newsroom::{non_blank, ThemeSettings};

pub use self::{
    boilerplate::{boilerplate, Boilerplate},
    footer::{social_links, FooterContent, FooterLinks, SocialLink},
    hub_filters::{hub_filters, FilterItem, SectionSlugs},
    languages::{language_options, LanguageOption},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MainSiteLink {
    pub url: String,
    pub label: Option<String>,
}

/// Header link back to the company website, only for valid http(s) URLs.
pub fn main_site_link(theme: &ThemeSettings) -> Option<MainSiteLink> {
    let url = boilerplate::validate_url(non_blank(&theme.main_site_url)?)?;
    Some(MainSiteLink {
        url,
        label: non_blank(&theme.main_site_label).map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_site_link_needs_a_valid_url() {
        let mut theme = ThemeSettings::default();
        assert_eq!(main_site_link(&theme), None);

        theme.main_site_url = Some("not a url".to_string());
        assert_eq!(main_site_link(&theme), None);

        theme.main_site_url = Some("https://acme.be/".to_string());
        theme.main_site_label = Some("acme.be".to_string());
        assert_eq!(
            main_site_link(&theme),
            Some(MainSiteLink {
                url: "https://acme.be/".to_string(),
                label: Some("acme.be".to_string()),
            })
        );
    }
}
