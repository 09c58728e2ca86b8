use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    content::{ContentError, ContentSource},
    error::Result,
    feed::{build_home_feed, CategorySection, FeedRequest, SectionSnapshot},
    models::{
        category::TranslatedCategory,
        newsroom::CompanyInformation,
        story::{CardContext, CardSize, Story, StoryCard},
    },
    state::AppState,
    utils::params::parse_number,
};

#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub locale: Option<String>,
    pub category: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FeedView {
    pub locale: String,
    pub main_story: Option<StoryCard>,
    /// Featured categories offered as filter chips, `null` when filtering is pointless.
    pub filter_categories: Option<Vec<TranslatedCategory>>,
    pub excluded: Vec<Uuid>,
    pub stories: SectionSnapshot<StoryCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub news: Option<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub press_releases: Option<SectionView>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub anchor_id: &'static str,
    pub category: TranslatedCategory,
    pub feed: SectionSnapshot<StoryCard>,
}

// GET /api/feed?locale=&category=&page_size=
pub async fn home_feed_handler(
    State(state): State<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedView>> {
    let locale = state.locale_or_default(params.locale.as_deref());
    let request = FeedRequest {
        locale: locale.clone(),
        category_id: parse_number::<i64>(params.category.as_deref()).filter(|id| *id != 0),
        page_size: parse_number::<u32>(params.page_size.as_deref())
            .filter(|size| *size > 0)
            .unwrap_or(state.config.feed_page_size),
    };

    let source = state.content.as_ref();
    let feed = build_home_feed(source, &request).await?;

    let newsroom = source.newsroom().await?;
    let company = company_information(source, &locale).await?;
    let ctx = state.card_context(&newsroom, &company);

    let main_uuid = feed.main_story.as_ref().map(|s| s.uuid);
    let card = |story: &Story| {
        let size = if Some(story.uuid) == main_uuid { CardSize::Hero } else { CardSize::Regular };
        StoryCard::build(story, size, &ctx)
    };

    let filter_categories = feed
        .show_filters
        .then(|| feed.categories.translated(&locale).featured);

    Ok(Json(FeedView {
        main_story: feed.main_story.as_ref().map(|s| StoryCard::build(s, CardSize::Hero, &ctx)),
        filter_categories,
        excluded: feed.excluded.clone(),
        stories: feed.stories.snapshot(card),
        news: feed.news.as_ref().map(|s| section_view(s, &ctx)),
        press_releases: feed.press_releases.as_ref().map(|s| section_view(s, &ctx)),
        locale,
    }))
}

fn section_view(section: &CategorySection, ctx: &CardContext<'_>) -> SectionView {
    SectionView {
        anchor_id: section.kind.anchor_id(),
        category: section.category.clone(),
        feed: section
            .feed
            .snapshot(|story| StoryCard::build(story, CardSize::Regular, ctx)),
    }
}

/// Company details for `locale`; a newsroom without language settings still renders.
pub(crate) async fn company_information(
    source: &dyn ContentSource,
    locale: &str,
) -> std::result::Result<CompanyInformation, ContentError> {
    match source.language_or_default(locale).await {
        Ok(language) => Ok(language.company_information),
        Err(ContentError::Unavailable(reason)) => {
            tracing::warn!(locale, %reason, "no language settings, using empty company information");
            Ok(CompanyInformation::default())
        }
        Err(e) => Err(e),
    }
}
