use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::{json, Value};
use uuid::Uuid;

use super::{ContentError, ContentSource, StoriesPage, StoriesQuery};
use crate::{
    config::Config,
    models::{
        category::Category,
        newsroom::{LanguageSettings, Newsroom, ThemeSettings},
        story::Story,
    },
};

// Content API client over HTTPS with a bearer token
pub struct HttpContentSource {
    client: Client,
    base_url: String,
    token: String,
    newsroom_uuid: Uuid,
    theme_uuid: Option<Uuid>,
}

#[derive(Deserialize)]
struct CategoriesResponse {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct StoriesResponse {
    stories: Vec<Story>,
    pagination: Pagination,
}

#[derive(Deserialize)]
struct Pagination {
    matched_records_number: u64,
}

#[derive(Deserialize)]
struct NewsroomResponse {
    newsroom: Newsroom,
}

#[derive(Deserialize)]
struct LanguagesResponse {
    languages: Vec<LanguageSettings>,
}

#[derive(Deserialize)]
struct ThemeResponse {
    #[serde(default)]
    settings: ThemeSettings,
}

impl HttpContentSource {
    pub fn new(config: &Config) -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            base_url: config.content_api_url.trim_end_matches('/').to_string(),
            token: config.content_api_token.clone(),
            newsroom_uuid: config.newsroom_uuid,
            theme_uuid: config.theme_uuid,
        })
    }

    fn newsroom_path(&self, rest: &str) -> String {
        format!("{}/v2/newsrooms/{}{}", self.base_url, self.newsroom_uuid, rest)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ContentError> {
        let response = request.bearer_auth(&self.token).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            tracing::warn!(status = status.as_u16(), "content API returned an error");
            return Err(ContentError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

/// Search body for `POST /v2/stories/search`.
fn search_body(newsroom: Uuid, query: &StoriesQuery) -> Value {
    let mut clauses = vec![
        json!({ "newsroom.uuid": { "$in": [newsroom] } }),
        json!({ "status": { "$in": ["published"] } }),
        json!({ "visibility": { "$in": ["public"] } }),
    ];

    if !query.category_ids.is_empty() {
        clauses.push(json!({ "category.id": { "$any": query.category_ids } }));
    }
    if let Some(locale) = &query.locale {
        clauses.push(json!({ "locale": { "$in": [locale] } }));
    }
    if !query.tags.is_empty() {
        clauses.push(json!({ "tag": { "$any": query.tags } }));
    }
    if let Some(filter) = &query.filter {
        if let Ok(value) = serde_json::to_value(filter) {
            clauses.push(value);
        }
    }

    json!({
        "limit": query.limit,
        "offset": query.offset.unwrap_or(0),
        "sort": "-published_at",
        "query": { "$and": clauses },
    })
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn categories(&self) -> Result<Vec<Category>, ContentError> {
        let request = self.client.get(self.newsroom_path("/categories"));
        let response: CategoriesResponse = self.send(request).await?;
        Ok(response.categories)
    }

    async fn stories(&self, query: &StoriesQuery) -> Result<StoriesPage, ContentError> {
        tracing::debug!(
            offset = query.offset.unwrap_or(0),
            limit = query.limit,
            locale = query.locale.as_deref().unwrap_or("*"),
            excluded = query.excluded_uuids().len(),
            "searching stories"
        );

        let request = self
            .client
            .post(format!("{}/v2/stories/search", self.base_url))
            .json(&search_body(self.newsroom_uuid, query));
        let response: StoriesResponse = self.send(request).await?;

        Ok(StoriesPage {
            stories: response.stories,
            total: response.pagination.matched_records_number,
        })
    }

    async fn newsroom(&self) -> Result<Newsroom, ContentError> {
        let response: NewsroomResponse = self.send(self.client.get(self.newsroom_path(""))).await?;
        Ok(response.newsroom)
    }

    async fn languages(&self) -> Result<Vec<LanguageSettings>, ContentError> {
        let request = self.client.get(self.newsroom_path("/languages"));
        let response: LanguagesResponse = self.send(request).await?;
        Ok(response.languages)
    }

    async fn theme_settings(&self) -> Result<ThemeSettings, ContentError> {
        let Some(theme) = self.theme_uuid else {
            return Ok(ThemeSettings::default());
        };

        let request = self.client.get(self.newsroom_path(&format!("/themes/{theme}")));
        let response: ThemeResponse = self.send(request).await?;
        Ok(response.settings)
    }
}
