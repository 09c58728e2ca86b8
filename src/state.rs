use std::sync::Arc;

use crate::{
    config::{Config, ConfigError},
    content::{self, SharedContent},
    models::{
        newsroom::{CompanyInformation, Newsroom},
        story::CardContext,
    },
    navigation::FooterLinks,
};

#[derive(Clone)]
pub struct AppState {
    pub content: SharedContent,
    pub config: Arc<Config>,
    pub footer: Arc<FooterLinks>,
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Content(#[from] content::ContentError),
}

impl AppState {
    pub fn new(content: SharedContent, config: Config, footer: FooterLinks) -> Self {
        AppState {
            content,
            config: Arc::new(config),
            footer: Arc::new(footer),
        }
    }

    /// Reads the footer link file (if configured) and connects the content API.
    pub fn from_config(config: Config) -> Result<Self, StartupError> {
        let footer = match &config.footer_links_path {
            Some(path) => FooterLinks::load(path)?,
            None => {
                tracing::warn!("FOOTER_LINKS_PATH not set, footer renders without link columns");
                FooterLinks::default()
            }
        };
        let content = content::init_content_source(&config)?;
        Ok(AppState::new(content, config, footer))
    }

    /// Locale requested by the client, or the configured default.
    pub fn locale_or_default(&self, requested: Option<&str>) -> String {
        crate::utils::params::non_empty(requested)
            .unwrap_or(&self.config.default_locale)
            .to_string()
    }

    pub fn card_context<'a>(&'a self, newsroom: &'a Newsroom, company: &'a CompanyInformation) -> CardContext<'a> {
        CardContext {
            cdn_base_url: &self.config.cdn_base_url,
            newsroom_uuid: self.config.newsroom_uuid,
            fallback_logo: newsroom.newsroom_logo.as_ref(),
            fallback_text: newsroom.brand_name(company),
            aspect_ratio: Some(16.0 / 9.0),
        }
    }
}
