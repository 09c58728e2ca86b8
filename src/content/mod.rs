pub mod http;
#[cfg(test)]
pub mod memory;

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::Config,
    models::{
        category::Category,
        newsroom::{LanguageSettings, Newsroom, ThemeSettings},
        story::Story,
    },
    utils::locale,
};

pub use self::http::HttpContentSource;

// Shared handle to whatever serves newsroom content
pub type SharedContent = Arc<dyn ContentSource>;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content API request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("content API answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("content source unavailable: {0}")]
    Unavailable(String),
}

/// Remote newsroom platform: categories, stories and newsroom-wide settings.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ContentError>;

    async fn stories(&self, query: &StoriesQuery) -> Result<StoriesPage, ContentError>;

    async fn newsroom(&self) -> Result<Newsroom, ContentError>;

    async fn languages(&self) -> Result<Vec<LanguageSettings>, ContentError>;

    async fn theme_settings(&self) -> Result<ThemeSettings, ContentError>;

    /// Settings for `code`, falling back to the same language, then to the
    /// newsroom's default language.
    async fn language_or_default(&self, code: &str) -> Result<LanguageSettings, ContentError> {
        let mut languages = self.languages().await?;

        let position = languages
            .iter()
            .position(|l| l.code == code)
            .or_else(|| {
                let wanted = locale::language(code);
                languages
                    .iter()
                    .position(|l| locale::language(&l.code) == wanted)
            })
            .or_else(|| languages.iter().position(|l| l.is_default));

        match position {
            Some(index) => Ok(languages.swap_remove(index)),
            None if !languages.is_empty() => Ok(languages.swap_remove(0)),
            None => Err(ContentError::Unavailable(format!(
                "no language settings available for {code}"
            ))),
        }
    }
}

// One page request against the stories listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoriesQuery {
    pub offset: Option<u32>,
    pub limit: u32,
    pub category_ids: Vec<i64>,
    pub locale: Option<String>,
    pub tags: Vec<String>,
    pub filter: Option<StoryFilter>,
}

impl StoriesQuery {
    pub fn new(limit: u32) -> Self {
        StoriesQuery {
            limit,
            ..Default::default()
        }
    }

    pub fn locale(mut self, locale: &str) -> Self {
        self.locale = Some(locale.to_string());
        self
    }

    pub fn category(mut self, category_id: Option<i64>) -> Self {
        self.category_ids = category_id.into_iter().collect();
        self
    }

    #[cfg(test)]
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn excluding(mut self, uuids: &[Uuid]) -> Self {
        self.filter = StoryFilter::excluding(uuids);
        self
    }

    pub fn excluded_uuids(&self) -> &[Uuid] {
        self.filter
            .as_ref()
            .and_then(|f| f.uuid.as_ref())
            .map(|u| u.not_in.as_slice())
            .unwrap_or(&[])
    }
}

// JSON filter understood by the content API: {"uuid": {"$nin": [...]}}
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct StoryFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<UuidFilter>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UuidFilter {
    #[serde(rename = "$nin", default)]
    pub not_in: Vec<Uuid>,
}

impl StoryFilter {
    /// `None` when there is nothing to exclude.
    pub fn excluding(uuids: &[Uuid]) -> Option<Self> {
        (!uuids.is_empty()).then(|| StoryFilter {
            uuid: Some(UuidFilter {
                not_in: uuids.to_vec(),
            }),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoriesPage {
    pub stories: Vec<Story>,
    /// Matches on the remote side, not just this page.
    pub total: u64,
}

pub fn init_content_source(config: &Config) -> Result<SharedContent, ContentError> {
    let client = HttpContentSource::new(config)?;
    tracing::info!(api = %config.content_api_url, newsroom = %config.newsroom_uuid, "content API client ready");
    Ok(Arc::new(client))
}
