use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigError,
    models::newsroom::{non_blank, CompanyInformation},
    utils::locale,
};

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FooterLink {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct FooterColumn {
    pub title: String,
    #[serde(default)]
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct FooterContent {
    #[serde(default)]
    pub columns: Vec<FooterColumn>,
    /// Heading above the social links.
    #[serde(default)]
    pub follow_title: Option<String>,
}

/// Footer link columns per language, e.g. `{"nl": {...}, "fr": {...}}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FooterLinks(BTreeMap<String, FooterContent>);

impl FooterLinks {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::FooterLinksIo {
            path: path.to_path_buf(),
            source,
        })?;
        let links: FooterLinks = serde_json::from_str(&raw).map_err(|source| ConfigError::FooterLinksJson {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), languages = links.0.len(), "footer links loaded");
        Ok(links)
    }

    pub fn for_locale(&self, code: &str, default_locale: &str) -> FooterContent {
        let by_language = |lang: String| {
            self.0
                .iter()
                .find(|(key, _)| locale::language(key) == lang)
                .map(|(_, content)| content)
        };

        by_language(locale::language(code))
            .or_else(|| by_language(locale::language(default_locale)))
            .cloned()
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SocialLink {
    pub network: &'static str,
    pub url: String,
}

const SOCIAL_NETWORKS: &[(&str, &str)] = &[
    ("facebook", "https://www.facebook.com/"),
    ("instagram", "https://www.instagram.com/"),
    ("linkedin", "https://www.linkedin.com/"),
    ("pinterest", "https://www.pinterest.com/"),
    ("tiktok", "https://www.tiktok.com/@"),
    ("twitter", "https://twitter.com/"),
    ("youtube", "https://www.youtube.com/"),
];

/// Social profile links from the company handles. Handles may already be URLs.
pub fn social_links(company: &CompanyInformation) -> Vec<SocialLink> {
    let handles = [
        &company.facebook,
        &company.instagram,
        &company.linkedin,
        &company.pinterest,
        &company.tiktok,
        &company.twitter,
        &company.youtube,
    ];

    SOCIAL_NETWORKS
        .iter()
        .zip(handles)
        .filter_map(|(&(network, prefix), handle)| {
            let handle = non_blank(handle)?;
            let url = if handle.starts_with("http://") || handle.starts_with("https://") {
                handle.to_string()
            } else {
                format!("{prefix}{}", handle.trim_start_matches('@'))
            };
            Some(SocialLink { network, url })
        })
        .collect()
}
