use std::{path::PathBuf, str::FromStr, time::Duration};

use uuid::Uuid;

const DEFAULT_CONTENT_API_URL: &str = "https://api.prezly.com";
const DEFAULT_CDN_BASE_URL: &str = "https://cdn.uc.assets.prezly.com";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },

    #[error("cannot read footer links from {path}: {source}")]
    FooterLinksIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("footer links file {path} is not valid JSON: {source}")]
    FooterLinksJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub content_api_url: String,
    pub content_api_token: String,
    pub newsroom_uuid: Uuid,
    pub theme_uuid: Option<Uuid>,
    pub cdn_base_url: String,
    pub default_locale: String,
    pub feed_page_size: u32,
    pub footer_links_path: Option<PathBuf>,
    pub brand_font: Option<String>,
    pub request_timeout: Duration,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        Ok(Config {
            content_api_url: var("CONTENT_API_URL").unwrap_or_else(|| DEFAULT_CONTENT_API_URL.into()),
            content_api_token: var("CONTENT_API_TOKEN").ok_or(ConfigError::Missing("CONTENT_API_TOKEN"))?,
            newsroom_uuid: parse("NEWSROOM_UUID", var("NEWSROOM_UUID"))?
                .ok_or(ConfigError::Missing("NEWSROOM_UUID"))?,
            theme_uuid: parse("THEME_UUID", var("THEME_UUID"))?,
            cdn_base_url: var("CDN_BASE_URL").unwrap_or_else(|| DEFAULT_CDN_BASE_URL.into()),
            default_locale: var("DEFAULT_LOCALE").unwrap_or_else(|| "en".into()),
            feed_page_size: match parse("FEED_PAGE_SIZE", var("FEED_PAGE_SIZE"))? {
                Some(0) => {
                    return Err(ConfigError::Invalid {
                        name: "FEED_PAGE_SIZE",
                        value: "0".into(),
                    })
                }
                Some(size) => size,
                None => 12,
            },
            footer_links_path: var("FOOTER_LINKS_PATH").map(PathBuf::from),
            brand_font: var("BRAND_FONT"),
            request_timeout: Duration::from_secs(
                parse("CONTENT_API_TIMEOUT_SECS", var("CONTENT_API_TIMEOUT_SECS"))?.unwrap_or(10),
            ),
            port: parse("PORT", var("PORT"))?.unwrap_or(3000),
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| v.parse::<T>().map_err(|_| ConfigError::Invalid { name, value: v }))
        .transpose()
}

#[cfg(test)]
pub fn test_config() -> Config {
    Config {
        content_api_url: DEFAULT_CONTENT_API_URL.to_string(),
        content_api_token: "test-token".to_string(),
        newsroom_uuid: crate::models::story::fixtures::HOME_NEWSROOM,
        theme_uuid: None,
        cdn_base_url: "https://cdn.example.com".to_string(),
        default_locale: "en".to_string(),
        feed_page_size: 6,
        footer_links_path: None,
        brand_font: Some("Etelka Medium".to_string()),
        request_timeout: Duration::from_secs(1),
        port: 0,
    }
}
