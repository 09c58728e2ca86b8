use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::{
    content::{StoriesQuery, StoryFilter},
    error::Result,
    models::story::Story,
    state::AppState,
    utils::params::{non_empty, parse_json, parse_number},
};

const DEFAULT_LIMIT: u32 = 20;

// Everything arrives as text so that bad values can be ignored instead of rejected
#[derive(Debug, Default, Deserialize)]
pub struct StoriesParams {
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub locale: Option<String>,
    pub category: Option<String>,
    pub tag: Option<String>,
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StoriesResponse {
    pub data: Vec<Story>,
    pub total: u64,
}

impl StoriesParams {
    pub fn to_query(&self) -> StoriesQuery {
        StoriesQuery {
            offset: parse_number(self.offset.as_deref()),
            limit: parse_number(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
            // category 0 means "no category"
            category_ids: parse_number::<i64>(self.category.as_deref())
                .filter(|id| *id != 0)
                .into_iter()
                .collect(),
            locale: non_empty(self.locale.as_deref()).map(str::to_string),
            tags: non_empty(self.tag.as_deref()).map(str::to_string).into_iter().collect(),
            filter: parse_json::<StoryFilter>("query", self.query.as_deref()),
        }
    }
}

// GET /api/stories?offset=&limit=&locale=&category=&tag=&query=
pub async fn list_stories_handler(
    State(state): State<AppState>,
    Query(params): Query<StoriesParams>,
) -> Result<Json<StoriesResponse>> {
    let query = params.to_query();
    tracing::debug!(?query, "listing stories");

    let page = state.content.stories(&query).await?;
    Ok(Json(StoriesResponse {
        data: page.stories,
        total: page.total,
    }))
}
